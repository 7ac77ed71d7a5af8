//! Icon markup resolution.
//!
//! Markup tokens look like `{icon-<prefix><name>}`:
//!
//! - `<prefix>` is the three-character key of an active font
//! - `<name>` is the icon name, with `-` or `_` between words
//!
//! Tokens whose prefix is not active are ordinary text. Tokens naming an icon
//! the font does not have are left in place and reported as a [`Diagnostic`].

mod diagnostic;
mod resolve;

pub use diagnostic::Diagnostic;
pub use resolve::{resolve, resolve_with_diagnostics};
