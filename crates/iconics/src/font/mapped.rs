//! Table-backed icon fonts.

use console::Style;
use std::collections::HashMap;

use super::lookup_with_separator;
use super::typeface::Typeface;

/// An icon font backed by an in-memory name-to-glyph table.
///
/// `MappedFont` covers the common case of an icon font that is nothing more
/// than a list of codepoints. It is built with a fluent API, or loaded from
/// a [`FontDefinition`](super::FontDefinition).
///
/// # Example
///
/// ```rust
/// use iconics::{MappedFont, Typeface};
/// use console::Style;
///
/// let font = MappedFont::new("wth", "Weather Icons")
///     .add("day_sunny", '\u{f00d}')
///     .add("rain", '\u{f019}')
///     .with_style(Style::new().yellow());
///
/// assert_eq!(font.glyph("rain"), Some('\u{f019}'));
/// assert_eq!(font.glyph("snow"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MappedFont {
    prefix: String,
    name: String,
    glyphs: HashMap<String, char>,
    style: Style,
}

impl MappedFont {
    /// Creates an empty font with the given prefix key and display name.
    ///
    /// The prefix is validated when the font is registered, not here.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            glyphs: HashMap::new(),
            style: Style::new(),
        }
    }

    /// Adds an icon, returning the updated font for chaining.
    ///
    /// Adding a name twice keeps the last glyph.
    pub fn add(mut self, name: impl Into<String>, glyph: char) -> Self {
        self.insert(name, glyph);
        self
    }

    /// Adds an icon in place.
    pub fn insert(&mut self, name: impl Into<String>, glyph: char) {
        self.glyphs.insert(name.into(), glyph);
    }

    /// Sets the terminal style for this font's glyphs.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Number of icons in the font.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the font has no icons.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Typeface for MappedFont {
    fn prefix_key(&self) -> &str {
        &self.prefix
    }

    fn font_name(&self) -> &str {
        &self.name
    }

    fn glyph(&self, name: &str) -> Option<char> {
        lookup_with_separator(name, |name| self.glyphs.get(name).copied())
    }

    fn icons(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.glyphs.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn style(&self) -> Style {
        self.style.clone()
    }
}
