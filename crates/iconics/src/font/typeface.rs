//! The icon font abstraction.

use console::Style;
use std::fmt;

/// An icon font: a namespace of icon names mapped to glyph characters.
///
/// Implementations are shared between threads once registered, so they must
/// be immutable after construction.
///
/// # Example
///
/// ```rust
/// use iconics::Typeface;
///
/// #[derive(Debug)]
/// struct Arrows;
///
/// impl Typeface for Arrows {
///     fn prefix_key(&self) -> &str {
///         "arr"
///     }
///
///     fn font_name(&self) -> &str {
///         "Arrows"
///     }
///
///     fn glyph(&self, name: &str) -> Option<char> {
///         match name {
///             "left" => Some('←'),
///             "right" => Some('→'),
///             _ => None,
///         }
///     }
///
///     fn icons(&self) -> Vec<&str> {
///         vec!["left", "right"]
///     }
/// }
///
/// assert_eq!(Arrows.glyph("left"), Some('←'));
/// ```
pub trait Typeface: Send + Sync + fmt::Debug {
    /// The three-character key used after `icon-` in markup tokens.
    fn prefix_key(&self) -> &str;

    /// Human-readable font name.
    fn font_name(&self) -> &str;

    /// Resolves a normalized icon name (words separated by `_`) to its glyph.
    ///
    /// The name is exactly what followed the prefix in the token, with `-`
    /// turned into `_`; `{icon-faw-home}` arrives as `_home`. Returns `None`
    /// when the font has no icon with that name.
    fn glyph(&self, name: &str) -> Option<char>;

    /// Names of every icon this font provides.
    fn icons(&self) -> Vec<&str>;

    /// Terminal style used for this font's glyphs.
    ///
    /// Terminals cannot switch typefaces mid-line, so fonts express their
    /// look through colors and attributes instead. Unstyled by default.
    fn style(&self) -> Style {
        Style::new()
    }
}
