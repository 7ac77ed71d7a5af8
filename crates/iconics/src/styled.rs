//! Resolved text and the glyph ranges that need styling.

use console::Style;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::apply::StyleApplicator;
use crate::font::Typeface;
use crate::output::OutputMode;

/// One resolved glyph in the output text, tagged with the font it came from.
///
/// Offsets are in characters (`char`s) of the output text and cover exactly
/// one character: `end == start + 1`. The byte span of the same character is
/// kept alongside so the text can be sliced directly.
#[derive(Clone)]
pub struct StyleRange {
    start: usize,
    end: usize,
    bytes: Range<usize>,
    font: Arc<dyn Typeface>,
}

impl StyleRange {
    pub(crate) fn new(start: usize, bytes: Range<usize>, font: Arc<dyn Typeface>) -> Self {
        Self {
            start,
            end: start + 1,
            bytes,
            font,
        }
    }

    /// Character offset of the glyph.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Character offset one past the glyph.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Character range of the glyph.
    pub fn chars(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Byte range of the glyph in the output text.
    pub fn bytes(&self) -> Range<usize> {
        self.bytes.clone()
    }

    /// The font that resolved the glyph.
    pub fn font(&self) -> &Arc<dyn Typeface> {
        &self.font
    }

    /// Shorthand for `self.font().prefix_key()`.
    pub fn prefix_key(&self) -> &str {
        self.font.prefix_key()
    }
}

impl fmt::Debug for StyleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("bytes", &self.bytes)
            .field("font", &self.font.prefix_key())
            .finish()
    }
}

impl PartialEq for StyleRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.bytes == other.bytes
            && self.font.prefix_key() == other.font.prefix_key()
    }
}

impl Eq for StyleRange {}

/// A contiguous piece of [`StyledText`]: either plain text or one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Glyph(&'a str, &'a StyleRange),
}

/// The result of resolving icon markup.
///
/// Holds the final text, the glyph ranges in ascending order, and any overlay
/// styles requested through the [`Iconics`](crate::Iconics) builder. Overlay
/// styles are applied to every glyph on top of the font's own style.
///
/// `Display` writes the plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    ranges: Vec<StyleRange>,
    styles: Vec<Style>,
}

impl StyledText {
    pub(crate) fn new(text: String, ranges: Vec<StyleRange>) -> Self {
        Self {
            text,
            ranges,
            styles: Vec::new(),
        }
    }

    /// Creates styled text with no glyph ranges.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text.into(), Vec::new())
    }

    /// Replaces the overlay styles, returning the updated value.
    pub fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.styles = styles;
        self
    }

    /// The resolved text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Glyph ranges, ordered by start offset.
    pub fn ranges(&self) -> &[StyleRange] {
        &self.ranges
    }

    /// Overlay styles applied to every glyph.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Returns true if no markup was resolved.
    pub fn is_plain(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Consumes the value, returning the resolved text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Splits the text into plain runs and glyphs, in order.
    ///
    /// Empty plain runs are skipped.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::with_capacity(self.ranges.len() * 2 + 1);
        let mut cursor = 0;

        for range in &self.ranges {
            let bytes = range.bytes();
            if bytes.start > cursor {
                segments.push(Segment::Plain(&self.text[cursor..bytes.start]));
            }
            segments.push(Segment::Glyph(&self.text[bytes.clone()], range));
            cursor = bytes.end;
        }
        if cursor < self.text.len() {
            segments.push(Segment::Plain(&self.text[cursor..]));
        }

        segments
    }

    /// Renders through the given applicator.
    pub fn apply(&self, applicator: &dyn StyleApplicator) -> String {
        applicator.apply(self)
    }

    /// Renders with the applicator matching `mode`.
    pub fn render(&self, mode: OutputMode) -> String {
        mode.applicator().apply(self)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<StyledText> for String {
    fn from(styled: StyledText) -> Self {
        styled.text
    }
}
