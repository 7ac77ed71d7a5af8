//! Font registry mapping prefix keys to icon fonts.
//!
//! [`FontRegistry`] is an owned, thread-safe map from three-character prefix
//! keys to [`Typeface`]s. Applications typically build one at startup and
//! pass it by reference wherever markup is resolved. For convenience a
//! process-wide instance is available through [`FontRegistry::global`] and
//! the free functions [`register_font`], [`registered_fonts`] and
//! [`find_font`].
//!
//! # Registration Rules
//!
//! - Registering a font whose prefix is already taken replaces the previous
//!   font (last writer wins).
//! - Prefixes must be exactly three characters and may not contain `{` or
//!   `}`. [`FontRegistry::register`] does not register such a font: it logs
//!   a warning and returns, leaving the registry (including any font already
//!   under a similar key) untouched. Use [`FontRegistry::try_register`] to
//!   get the [`RegistryError`] instead.
//! - [`FontRegistry::new`] starts with [`FontAwesome`] under `faw`;
//!   [`FontRegistry::empty`] starts with nothing.
//!
//! # Thread Safety
//!
//! Entries are stored behind a read-write lock. Lookups only take the read
//! side, so they never wait on each other. A font is fully built before it is
//! inserted, so readers never observe a partial entry.
//!
//! # Example
//!
//! ```rust
//! use iconics::{FontRegistry, MappedFont};
//!
//! let registry = FontRegistry::new();
//! registry.register(MappedFont::new("wth", "Weather Icons").add("rain", '\u{f019}'));
//!
//! assert!(registry.find("faw").is_some());
//! assert_eq!(registry.find("wth").unwrap().glyph("rain"), Some('\u{f019}'));
//! ```

use log::{debug, warn};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::font::{validate_prefix, FontAwesome, FontSet, Typeface, PREFIX_KEY_LEN};

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The font's prefix cannot appear in markup tokens.
    #[error("invalid prefix key '{prefix}': expected exactly {} characters without braces", PREFIX_KEY_LEN)]
    InvalidPrefix { prefix: String },
}

static GLOBAL: Lazy<FontRegistry> = Lazy::new(FontRegistry::new);

/// Thread-safe registry of icon fonts keyed by prefix.
pub struct FontRegistry {
    fonts: RwLock<HashMap<String, Arc<dyn Typeface>>>,
}

impl FontRegistry {
    /// Creates a registry with the default [`FontAwesome`] font registered.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register(FontAwesome::new());
        registry
    }

    /// Creates a registry with no fonts.
    pub fn empty() -> Self {
        Self {
            fonts: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry, created on first use with the default font.
    pub fn global() -> &'static FontRegistry {
        &GLOBAL
    }

    /// Registers a font under its prefix key, replacing any previous font.
    ///
    /// If the prefix is invalid nothing is registered; a warning is logged
    /// and the call returns. See [`FontRegistry::try_register`] to detect
    /// this.
    pub fn register<F: Typeface + 'static>(&self, font: F) {
        self.register_arc(Arc::new(font));
    }

    /// Registers a shared font under its prefix key.
    ///
    /// Same rules as [`FontRegistry::register`]: an invalid prefix registers
    /// nothing.
    pub fn register_arc(&self, font: Arc<dyn Typeface>) {
        if let Err(err) = self.try_register(font) {
            warn!("skipping font registration: {}", err);
        }
    }

    /// Registers a font, reporting invalid prefixes.
    ///
    /// Returns the font previously registered under the same prefix, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPrefix`] if the prefix is not exactly
    /// three characters or contains a brace.
    pub fn try_register(
        &self,
        font: Arc<dyn Typeface>,
    ) -> Result<Option<Arc<dyn Typeface>>, RegistryError> {
        let prefix = font.prefix_key().to_string();
        validate_prefix(&prefix)?;

        debug!("registering icon font '{}' as '{}'", font.font_name(), prefix);
        let previous = self.fonts.write().insert(prefix, font);
        if let Some(previous) = &previous {
            debug!(
                "replaced icon font '{}' under '{}'",
                previous.font_name(),
                previous.prefix_key()
            );
        }
        Ok(previous)
    }

    /// Looks up a font by prefix key.
    pub fn find(&self, prefix: &str) -> Option<Arc<dyn Typeface>> {
        self.fonts.read().get(prefix).cloned()
    }

    /// Returns true if a font is registered under `prefix`.
    pub fn contains(&self, prefix: &str) -> bool {
        self.fonts.read().contains_key(prefix)
    }

    /// Returns every registered font, in no particular order.
    pub fn fonts(&self) -> Vec<Arc<dyn Typeface>> {
        self.fonts.read().values().cloned().collect()
    }

    /// Returns the registered prefix keys, sorted.
    pub fn prefixes(&self) -> Vec<String> {
        let mut prefixes: Vec<String> = self.fonts.read().keys().cloned().collect();
        prefixes.sort_unstable();
        prefixes
    }

    pub fn len(&self) -> usize {
        self.fonts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.read().is_empty()
    }

    /// Takes a snapshot of every registered font as a [`FontSet`].
    pub fn snapshot(&self) -> FontSet {
        FontSet::from_fonts(self.fonts())
    }

    /// Builds the active font set for one resolution call.
    ///
    /// An explicit, non-empty list of fonts is used as given. An empty list
    /// falls back to every font in this registry.
    pub fn active_set(&self, fonts: &[Arc<dyn Typeface>]) -> FontSet {
        if fonts.is_empty() {
            self.snapshot()
        } else {
            FontSet::from_fonts(fonts.iter().cloned())
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("prefixes", &self.prefixes())
            .finish()
    }
}

/// Registers a font in the global registry.
pub fn register_font<F: Typeface + 'static>(font: F) {
    FontRegistry::global().register(font);
}

/// Returns every font in the global registry.
pub fn registered_fonts() -> Vec<Arc<dyn Typeface>> {
    FontRegistry::global().fonts()
}

/// Looks up a font in the global registry.
pub fn find_font(prefix: &str) -> Option<Arc<dyn Typeface>> {
    FontRegistry::global().find(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MappedFont;
    use serial_test::serial;
    use std::thread;

    #[test]
    fn test_new_registers_default_font() {
        let registry = FontRegistry::new();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.prefixes(), vec!["faw".to_string()]);
        assert_eq!(registry.find("faw").unwrap().font_name(), "FontAwesome");
    }

    #[test]
    fn test_empty_has_no_fonts() {
        let registry = FontRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.find("faw").is_none());
    }

    #[test]
    fn test_register_and_find() {
        let registry = FontRegistry::empty();
        registry.register(MappedFont::new("tst", "Test").add("home", 'h'));

        assert!(registry.contains("tst"));
        let font = registry.find("tst").unwrap();
        assert_eq!(font.glyph("home"), Some('h'));
        assert!(registry.find("xyz").is_none());
    }

    #[test]
    fn test_register_last_writer_wins() {
        let registry = FontRegistry::empty();
        registry.register(MappedFont::new("tst", "First").add("home", 'a'));
        registry.register(MappedFont::new("tst", "Second").add("home", 'b'));

        assert_eq!(registry.len(), 1);
        let font = registry.find("tst").unwrap();
        assert_eq!(font.font_name(), "Second");
        assert_eq!(font.glyph("home"), Some('b'));
    }

    #[test]
    fn test_try_register_returns_previous() {
        let registry = FontRegistry::empty();
        let first = registry
            .try_register(Arc::new(MappedFont::new("tst", "First")))
            .unwrap();
        assert!(first.is_none());

        let replaced = registry
            .try_register(Arc::new(MappedFont::new("tst", "Second")))
            .unwrap();
        assert_eq!(replaced.unwrap().font_name(), "First");
    }

    #[test]
    fn test_try_register_rejects_invalid_prefix() {
        let registry = FontRegistry::empty();
        let result = registry.try_register(Arc::new(MappedFont::new("toolong", "Bad")));

        assert_eq!(
            result.unwrap_err(),
            RegistryError::InvalidPrefix {
                prefix: "toolong".to_string()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_skips_invalid_prefix() {
        let registry = FontRegistry::empty();
        registry.register(MappedFont::new("ab", "Short"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_invalid_prefix_leaves_registry_untouched() {
        let registry = FontRegistry::new();
        registry.register(MappedFont::new("fawx", "Too Long").add("home", 'H'));
        registry.register_arc(Arc::new(MappedFont::new("f{w", "Brace").add("home", 'B')));

        assert_eq!(registry.prefixes(), vec!["faw".to_string()]);
        assert!(registry.find("fawx").is_none());
        assert_eq!(registry.find("faw").unwrap().font_name(), "FontAwesome");
    }

    #[test]
    fn test_fonts_snapshot() {
        let registry = FontRegistry::new();
        registry.register(MappedFont::new("tst", "Test"));

        let mut names: Vec<String> = registry
            .fonts()
            .iter()
            .map(|f| f.font_name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["FontAwesome", "Test"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = FontRegistry::new();
        let set = registry.snapshot();
        registry.register(MappedFont::new("tst", "Test"));

        assert_eq!(set.len(), 1);
        assert!(!set.contains("tst"));
    }

    #[test]
    fn test_active_set_empty_falls_back_to_registry() {
        let registry = FontRegistry::new();
        registry.register(MappedFont::new("tst", "Test"));

        let set = registry.active_set(&[]);
        assert!(set.contains("faw"));
        assert!(set.contains("tst"));
    }

    #[test]
    fn test_active_set_explicit_fonts_only() {
        let registry = FontRegistry::new();
        let explicit: Vec<Arc<dyn Typeface>> = vec![Arc::new(MappedFont::new("tst", "Test"))];

        let set = registry.active_set(&explicit);
        assert_eq!(set.len(), 1);
        assert!(set.contains("tst"));
        assert!(!set.contains("faw"));
    }

    #[test]
    fn test_concurrent_lookups_and_registration() {
        let registry = Arc::new(FontRegistry::new());

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let font = registry.find("faw").unwrap();
                        assert_eq!(font.glyph("home"), Some('\u{f015}'));
                    }
                })
            })
            .collect();

        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50u32 {
                    let glyph = char::from_u32(0xE000 + i).unwrap();
                    registry.register(MappedFont::new("tst", "Test").add("icon", glyph));
                }
            })
        };

        for reader in readers {
            reader.join().unwrap();
        }
        writer.join().unwrap();

        assert_eq!(
            registry.find("tst").unwrap().glyph("icon"),
            Some('\u{E031}')
        );
    }

    #[test]
    fn test_error_display_invalid_prefix() {
        let err = RegistryError::InvalidPrefix {
            prefix: "ab".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'ab'"));
        assert!(msg.contains("3 characters"));
    }

    #[test]
    #[serial]
    fn test_global_registry_functions() {
        assert!(find_font("faw").is_some());

        register_font(MappedFont::new("glb", "Global Test").add("dot", '•'));
        let font = find_font("glb").unwrap();
        assert_eq!(font.glyph("dot"), Some('•'));
        assert!(registered_fonts()
            .iter()
            .any(|f| f.prefix_key() == "glb"));
    }
}
