//! The bundled Font Awesome icon table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::lookup_with_separator;
use super::typeface::Typeface;

/// Prefix key of the bundled default font.
pub(crate) const FONT_AWESOME_PREFIX: &str = "faw";

/// Codepoints from the Font Awesome 4 private use area.
///
/// Names follow the upstream icon names with `-` replaced by `_`.
const ICONS: &[(&str, char)] = &[
    ("glass", '\u{f000}'),
    ("music", '\u{f001}'),
    ("search", '\u{f002}'),
    ("envelope_o", '\u{f003}'),
    ("heart", '\u{f004}'),
    ("star", '\u{f005}'),
    ("star_o", '\u{f006}'),
    ("user", '\u{f007}'),
    ("film", '\u{f008}'),
    ("th_large", '\u{f009}'),
    ("th", '\u{f00a}'),
    ("th_list", '\u{f00b}'),
    ("check", '\u{f00c}'),
    ("times", '\u{f00d}'),
    ("search_plus", '\u{f00e}'),
    ("search_minus", '\u{f010}'),
    ("power_off", '\u{f011}'),
    ("signal", '\u{f012}'),
    ("cog", '\u{f013}'),
    ("trash_o", '\u{f014}'),
    ("home", '\u{f015}'),
    ("file_o", '\u{f016}'),
    ("clock_o", '\u{f017}'),
    ("road", '\u{f018}'),
    ("download", '\u{f019}'),
    ("inbox", '\u{f01c}'),
    ("refresh", '\u{f021}'),
    ("lock", '\u{f023}'),
    ("flag", '\u{f024}'),
    ("headphones", '\u{f025}'),
    ("volume_up", '\u{f028}'),
    ("tag", '\u{f02b}'),
    ("book", '\u{f02d}'),
    ("bookmark", '\u{f02e}'),
    ("print", '\u{f02f}'),
    ("camera", '\u{f030}'),
    ("pencil", '\u{f040}'),
    ("map_marker", '\u{f041}'),
    ("info_circle", '\u{f05a}'),
    ("plus", '\u{f067}'),
    ("minus", '\u{f068}'),
    ("exclamation_triangle", '\u{f071}'),
    ("calendar", '\u{f073}'),
    ("comment", '\u{f075}'),
    ("twitter", '\u{f099}'),
    ("facebook", '\u{f09a}'),
    ("github", '\u{f09b}'),
    ("apple", '\u{f179}'),
    ("android", '\u{f17b}'),
    ("linux", '\u{f17c}'),
    ("bug", '\u{f188}'),
];

static GLYPHS: Lazy<HashMap<&'static str, char>> = Lazy::new(|| ICONS.iter().copied().collect());

/// Font Awesome, registered by default under the `faw` prefix.
///
/// ```rust
/// use iconics::{FontAwesome, Typeface};
///
/// assert_eq!(FontAwesome::new().glyph("home"), Some('\u{f015}'));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FontAwesome;

impl FontAwesome {
    pub fn new() -> Self {
        Self
    }
}

impl Typeface for FontAwesome {
    fn prefix_key(&self) -> &str {
        FONT_AWESOME_PREFIX
    }

    fn font_name(&self) -> &str {
        "FontAwesome"
    }

    fn glyph(&self, name: &str) -> Option<char> {
        lookup_with_separator(name, |name| GLYPHS.get(name).copied())
    }

    fn icons(&self) -> Vec<&str> {
        ICONS.iter().map(|(name, _)| *name).collect()
    }
}
