//! Font definitions loaded from YAML or JSON.
//!
//! A definition describes a [`MappedFont`] as data, so applications can ship
//! icon tables next to their font files instead of compiling them in.
//!
//! ```yaml
//! prefix: wth
//! name: Weather Icons
//! style: yellow.bold
//! icons:
//!   day_sunny: f00d
//!   rain: U+F019
//!   umbrella: "☂"
//! ```
//!
//! Icon values are hexadecimal codepoints, optionally written with a `U+`,
//! `0x` or `\u` prefix. A value that is exactly one character is taken
//! literally. The optional `style` uses `console`'s dotted notation
//! (`red.bold`, `cyan.on_black`).

use console::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::mapped::MappedFont;
use super::validate_prefix;
use crate::registry::RegistryError;

/// Error returned when a font definition cannot be loaded.
#[derive(Debug, Error)]
pub enum FontDefinitionError {
    #[error("failed to read font definition {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML font definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON font definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported font definition extension for {}: expected .yaml, .yml or .json", .path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("icon '{name}' has invalid codepoint '{value}'")]
    InvalidCodepoint { name: String, value: String },

    #[error(transparent)]
    InvalidPrefix(#[from] RegistryError),
}

/// Serializable description of a table-backed icon font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDefinition {
    /// Three-character prefix key.
    pub prefix: String,
    /// Display name; defaults to the prefix.
    #[serde(default)]
    pub name: Option<String>,
    /// Dotted `console` style for the font's glyphs.
    #[serde(default)]
    pub style: Option<String>,
    /// Icon name to codepoint.
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
}

impl FontDefinition {
    /// Parses a YAML definition.
    pub fn from_yaml(source: &str) -> Result<Self, FontDefinitionError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON definition.
    pub fn from_json(source: &str) -> Result<Self, FontDefinitionError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a definition file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontDefinitionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, FontDefinitionError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(FontDefinitionError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| FontDefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Validates the definition and builds the font it describes.
    pub fn into_font(self) -> Result<MappedFont, FontDefinitionError> {
        validate_prefix(&self.prefix)?;

        let name = self.name.unwrap_or_else(|| self.prefix.clone());
        let mut font = MappedFont::new(self.prefix, name);
        if let Some(style) = self.style {
            font = font.with_style(Style::from_dotted_str(&style));
        }

        for (icon, value) in self.icons {
            let glyph =
                parse_codepoint(&value).ok_or_else(|| FontDefinitionError::InvalidCodepoint {
                    name: icon.clone(),
                    value: value.clone(),
                })?;
            font.insert(icon, glyph);
        }

        Ok(font)
    }
}

impl MappedFont {
    /// Parses a YAML font definition into a font.
    pub fn from_yaml(source: &str) -> Result<Self, FontDefinitionError> {
        FontDefinition::from_yaml(source)?.into_font()
    }

    /// Parses a JSON font definition into a font.
    pub fn from_json(source: &str) -> Result<Self, FontDefinitionError> {
        FontDefinition::from_json(source)?.into_font()
    }

    /// Loads a font definition file (`.yaml`, `.yml` or `.json`) into a font.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontDefinitionError> {
        FontDefinition::load(path)?.into_font()
    }
}

/// Parses a codepoint written as hex (`f015`, `U+F015`, `0xf015`) or as a
/// single literal character.
fn parse_codepoint(value: &str) -> Option<char> {
    let value = value.trim();

    let mut chars = value.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return Some(only);
    }

    let hex = ["U+", "u+", "0x", "0X", "\\u"]
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
        .unwrap_or(value);
    if hex.is_empty() {
        return None;
    }

    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
