//! # Iconics - icon font markup for plain text
//!
//! `iconics` replaces inline markup tokens such as `{icon-fawhome}` with the
//! glyph an icon font maps the name to, and records which characters of the
//! resulting text need that font's styling.
//!
//! ## Concepts
//!
//! - **Typefaces**: icon fonts implementing [`Typeface`]. Each one owns a
//!   three-character prefix key (`faw` for the bundled [`FontAwesome`]).
//! - **Registry**: [`FontRegistry`] maps prefix keys to typefaces. A
//!   process-wide instance is available through [`FontRegistry::global`],
//!   but any number of owned registries can be created.
//! - **Markup**: tokens have the form `{icon-<prefix><name>}`. Dashes in the
//!   name are read as underscores, so `{icon-faw-map-marker}` asks the `faw`
//!   font for `_map_marker`, which the bundled fonts also accept as
//!   `map_marker`.
//! - **Styled text**: resolution produces a [`StyledText`], the final string
//!   plus one [`StyleRange`] per substituted glyph.
//! - **Application**: a [`StyleApplicator`] turns styled text into output,
//!   for example ANSI-coloured terminal text.
//!
//! ## Quick start
//!
//! ```rust
//! use iconics::{FontRegistry, MappedFont, resolve};
//!
//! let registry = FontRegistry::empty();
//! registry.register(MappedFont::new("faw", "Test Icons").add("home", '\u{E100}'));
//!
//! let styled = resolve("Go {icon-fawhome} now", &registry.snapshot());
//! assert_eq!(styled.text(), "Go \u{E100} now");
//! assert_eq!(styled.ranges()[0].start(), 3);
//! assert_eq!(styled.ranges()[0].end(), 4);
//! ```
//!
//! ## Builder
//!
//! ```rust
//! use iconics::{Iconics, OutputMode};
//! use console::Style;
//!
//! let styled = Iconics::new()
//!     .style(Style::new().cyan())
//!     .on("Saved {icon-faw-check}")
//!     .build();
//!
//! assert_eq!(styled.render(OutputMode::Text), "Saved \u{f00c}");
//! ```
//!
//! Unknown icon names are never fatal: the token stays in the text verbatim
//! and a warning goes to the [`log`] facade. Use
//! [`resolve_with_diagnostics`] to collect those warnings instead.

pub mod apply;
mod builder;
pub mod font;
pub mod markup;
mod output;
mod registry;
mod styled;

pub use apply::{AnsiApplicator, DebugApplicator, StyleApplicator};
pub use builder::{Iconics, IconicsRequest, RequestConfig, TargetRequest, TextTarget};
pub use font::{
    FontAwesome, FontDefinition, FontDefinitionError, FontSet, MappedFont, Typeface,
    PREFIX_KEY_LEN,
};
pub use markup::{resolve, resolve_with_diagnostics, Diagnostic};
pub use output::OutputMode;
pub use registry::{find_font, register_font, registered_fonts, FontRegistry, RegistryError};
pub use styled::{Segment, StyleRange, StyledText};

// Re-export console::Style for overlay styles
pub use console::Style;
