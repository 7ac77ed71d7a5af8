//! Non-fatal problems found while resolving markup.

/// A token that could not be resolved.
///
/// Diagnostics never stop resolution; the offending markup is kept in the
/// output as literal text. Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The font has no icon with this name.
    UnknownIconName {
        prefix: String,
        name: String,
        position: usize,
    },
    /// A token opened with `{icon-` was never closed with `}`.
    UnterminatedToken { prefix: String, position: usize },
}

impl Diagnostic {
    /// Byte offset of the token's opening brace in the input.
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::UnknownIconName { position, .. }
            | Diagnostic::UnterminatedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownIconName {
                prefix,
                name,
                position,
            } => {
                write!(
                    f,
                    "unknown icon name '{}' for font '{}' at byte {}",
                    name, prefix, position
                )
            }
            Diagnostic::UnterminatedToken { prefix, position } => {
                write!(
                    f,
                    "unterminated icon token for font '{}' at byte {}",
                    prefix, position
                )
            }
        }
    }
}

impl std::error::Error for Diagnostic {}
