//! Icon fonts and their glyph tables.
//!
//! This module provides:
//!
//! - [`Typeface`]: the trait every icon font implements
//! - [`MappedFont`]: a table-backed typeface built in code or from a definition file
//! - [`FontAwesome`]: the bundled default font, prefix `faw`
//! - [`FontDefinition`]: serde model for YAML/JSON font definitions
//! - [`FontSet`]: the fonts active for one resolution call, keyed by prefix

mod awesome;
mod definition;
mod mapped;
mod set;
mod typeface;

pub use awesome::FontAwesome;
pub use definition::{FontDefinition, FontDefinitionError};
pub use mapped::MappedFont;
pub use set::FontSet;
pub use typeface::Typeface;

use crate::registry::RegistryError;

/// Number of characters in a font's prefix key.
pub const PREFIX_KEY_LEN: usize = 3;

/// Looks up `name`, then retries once without a leading `_`.
///
/// Markup written as `{icon-faw-home}` reaches the font as `_home`; table
/// fonts accept it as `home` unless the table has an exact `_home` entry.
pub(crate) fn lookup_with_separator<F>(name: &str, lookup: F) -> Option<char>
where
    F: Fn(&str) -> Option<char>,
{
    lookup(name).or_else(|| name.strip_prefix('_').and_then(|stripped| lookup(stripped)))
}

/// Checks that `prefix` can identify a font inside markup tokens.
///
/// A prefix must be exactly [`PREFIX_KEY_LEN`] characters and may not contain
/// the token delimiters `{` or `}`.
pub(crate) fn validate_prefix(prefix: &str) -> Result<(), RegistryError> {
    let valid = prefix.chars().count() == PREFIX_KEY_LEN && !prefix.contains(&['{', '}'][..]);
    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidPrefix {
            prefix: prefix.to_string(),
        })
    }
}
