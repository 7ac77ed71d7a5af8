//! Output modes for rendering styled text.

use console::Term;

use crate::apply::{AnsiApplicator, DebugApplicator, StyleApplicator};

/// Controls how resolved glyphs are styled when rendered.
///
/// - `Auto`: colors when stdout supports them, plain text otherwise
/// - `Term`: always emit ANSI escape codes
/// - `Text`: never emit escape codes
/// - `TermDebug`: wrap glyphs in `[prefix]...[/prefix]` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
}

impl OutputMode {
    /// Returns true if rendering in this mode should emit ANSI codes.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    /// Returns true for the bracket-tag debug mode.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Returns the applicator that renders in this mode.
    pub fn applicator(&self) -> Box<dyn StyleApplicator> {
        if self.is_debug() {
            Box::new(DebugApplicator)
        } else {
            Box::new(AnsiApplicator::with_color(self.should_use_color()))
        }
    }
}
