//! Style applicators: turning [`StyledText`] into output.
//!
//! An applicator walks the plain runs and glyphs of a [`StyledText`] and
//! decides how each glyph is presented. Two are provided:
//!
//! - [`AnsiApplicator`]: wraps each glyph in the font's `console::Style`,
//!   then in every overlay style, emitting ANSI escape codes
//! - [`DebugApplicator`]: wraps each glyph in `[prefix]...[/prefix]` tags,
//!   handy for tests and for terminals without the icon font installed
//!
//! Custom applicators (for a GUI toolkit, HTML, ...) implement
//! [`StyleApplicator`] and read [`StyledText::segments`].

use console::Style;

use crate::styled::{Segment, StyledText};

/// Renders styled text into a string.
pub trait StyleApplicator {
    fn apply(&self, styled: &StyledText) -> String;
}

/// Applies font and overlay styles as ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use iconics::{AnsiApplicator, FontRegistry, Iconics, MappedFont, StyleApplicator};
/// use console::Style;
///
/// let registry = FontRegistry::empty();
/// registry.register(MappedFont::new("tst", "Test").add("dot", '•'));
///
/// let styled = Iconics::with_registry(&registry)
///     .style(Style::new().red())
///     .on("{icon-tst-dot} ok")
///     .build();
///
/// let output = AnsiApplicator::new().apply(&styled);
/// assert!(output.contains("\x1b[31m•"));
/// assert!(output.ends_with(" ok"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnsiApplicator {
    use_color: bool,
}

impl AnsiApplicator {
    /// Creates an applicator that always emits escape codes.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates an applicator; with `use_color` false the text is left plain.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Default for AnsiApplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleApplicator for AnsiApplicator {
    fn apply(&self, styled: &StyledText) -> String {
        if !self.use_color {
            return styled.text().to_string();
        }

        let mut output = String::with_capacity(styled.text().len());
        for segment in styled.segments() {
            match segment {
                Segment::Plain(text) => output.push_str(text),
                Segment::Glyph(glyph, range) => {
                    let mut painted = paint(&range.font().style(), glyph);
                    for overlay in styled.styles() {
                        painted = paint(overlay, &painted);
                    }
                    output.push_str(&painted);
                }
            }
        }
        output
    }
}

fn paint(style: &Style, text: &str) -> String {
    style.clone().force_styling(true).apply_to(text).to_string()
}

/// Marks glyphs with `[prefix]...[/prefix]` tags instead of styling them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugApplicator;

impl StyleApplicator for DebugApplicator {
    fn apply(&self, styled: &StyledText) -> String {
        let mut output = String::with_capacity(styled.text().len());
        for segment in styled.segments() {
            match segment {
                Segment::Plain(text) => output.push_str(text),
                Segment::Glyph(glyph, range) => {
                    let prefix = range.prefix_key();
                    output.push_str(&format!("[{}]{}[/{}]", prefix, glyph, prefix));
                }
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontSet, MappedFont, Typeface};
    use crate::markup::resolve;
    use crate::output::OutputMode;
    use std::sync::Arc;

    fn styled(input: &str) -> StyledText {
        let fonts = FontSet::from_fonts([Arc::new(
            MappedFont::new("tst", "Test")
                .add("dot", '•')
                .with_style(Style::new().green()),
        ) as Arc<dyn Typeface>]);
        resolve(input, &fonts)
    }

    #[test]
    fn test_ansi_applies_font_style() {
        let output = AnsiApplicator::new().apply(&styled("a {icon-tstdot} b"));
        assert!(output.starts_with("a "));
        assert!(output.contains("\x1b[32m•\x1b[0m"));
        assert!(output.ends_with(" b"));
    }

    #[test]
    fn test_ansi_layers_overlay_styles() {
        let text = styled("{icon-tstdot}").with_styles(vec![Style::new().bold()]);
        let output = AnsiApplicator::new().apply(&text);
        assert!(output.contains("\x1b[32m"));
        assert!(output.contains("\x1b[1m"));
        assert!(output.contains('•'));
    }

    #[test]
    fn test_ansi_plain_text_untouched() {
        let output = AnsiApplicator::new().apply(&styled("nothing here"));
        assert_eq!(output, "nothing here");
    }

    #[test]
    fn test_ansi_without_color() {
        let text = styled("a {icon-tstdot}").with_styles(vec![Style::new().red()]);
        let output = AnsiApplicator::with_color(false).apply(&text);
        assert_eq!(output, "a •");
    }

    #[test]
    fn test_debug_tags() {
        let output = DebugApplicator.apply(&styled("{icon-tstdot} and {icon-tstdot}"));
        assert_eq!(output, "[tst]•[/tst] and [tst]•[/tst]");
    }

    #[test]
    fn test_debug_leaves_unresolved_markup() {
        let output = DebugApplicator.apply(&styled("{icon-tstnope}"));
        assert_eq!(output, "{icon-tstnope}");
    }

    #[test]
    fn test_render_modes() {
        let text = styled("x {icon-tstdot}");
        assert_eq!(text.render(OutputMode::Text), "x •");
        assert_eq!(text.render(OutputMode::TermDebug), "x [tst]•[/tst]");
        assert!(text.render(OutputMode::Term).contains("\x1b[32m"));
        assert_eq!(text.apply(&DebugApplicator), "x [tst]•[/tst]");
    }
}
