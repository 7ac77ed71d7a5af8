//! The fonts active for a single resolution.

use std::collections::HashMap;
use std::sync::Arc;

use super::typeface::Typeface;

/// Fonts keyed by prefix, as seen by the markup resolver.
///
/// A `FontSet` is an immutable snapshot: registering more fonts in a
/// [`FontRegistry`](crate::FontRegistry) after taking a snapshot does not
/// change the set. When two fonts share a prefix, the later one wins.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    fonts: HashMap<String, Arc<dyn Typeface>>,
}

impl FontSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from fonts, keyed by each font's prefix.
    pub fn from_fonts<I>(fonts: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Typeface>>,
    {
        let fonts = fonts
            .into_iter()
            .map(|font| (font.prefix_key().to_string(), font))
            .collect();
        Self { fonts }
    }

    /// Adds a font, replacing any font with the same prefix.
    pub fn insert(&mut self, font: Arc<dyn Typeface>) {
        self.fonts.insert(font.prefix_key().to_string(), font);
    }

    /// Returns the font for `prefix`, if active.
    pub fn get(&self, prefix: &str) -> Option<&Arc<dyn Typeface>> {
        self.fonts.get(prefix)
    }

    /// Returns true if `prefix` names an active font.
    pub fn contains(&self, prefix: &str) -> bool {
        self.fonts.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Iterates over the active fonts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Typeface>> {
        self.fonts.values()
    }
}
