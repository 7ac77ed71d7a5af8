//! Single-pass markup resolver.
//!
//! The resolver scans the input left to right for `{icon-`, and builds the
//! output by copying unmatched spans and appending resolved glyphs. Glyph
//! positions are tracked in output coordinates as the output grows, so the
//! input is never modified while it is being scanned.
//!
//! # Scanning Rules
//!
//! 1. Find the next `{icon-` at or after the cursor.
//! 2. The three characters after it are the candidate prefix. If no active
//!    font has that prefix, move the cursor one byte past the `{` and retry.
//! 3. Find the next `}`. If there is none, the rest of the input is literal
//!    text and scanning stops.
//! 4. The name is everything between the prefix and the `}`, with `-`
//!    replaced by `_`. It is passed to the font as is.
//! 5. If the font knows the name, the whole token becomes the glyph and the
//!    cursor moves past the `}`. Otherwise the token stays and the cursor
//!    moves one byte past the `{`, so tokens nested inside it are still found.

use log::warn;

use super::diagnostic::Diagnostic;
use crate::font::{FontSet, PREFIX_KEY_LEN};
use crate::styled::{StyleRange, StyledText};

const TOKEN_OPEN: &str = "{icon-";
const TOKEN_CLOSE: char = '}';

/// Resolves icon markup in `text` against the active `fonts`.
///
/// Unresolvable tokens are kept verbatim and logged as warnings.
///
/// # Example
///
/// ```rust
/// use iconics::{resolve, FontSet, FontAwesome, Typeface};
/// use std::sync::Arc;
///
/// let fonts = FontSet::from_fonts([Arc::new(FontAwesome::new()) as Arc<dyn Typeface>]);
/// let styled = resolve("{icon-faw-github} repo", &fonts);
///
/// assert_eq!(styled.text(), "\u{f09b} repo");
/// assert_eq!(styled.ranges()[0].prefix_key(), "faw");
/// ```
pub fn resolve(text: &str, fonts: &FontSet) -> StyledText {
    resolve_with_diagnostics(text, fonts).0
}

/// Resolves icon markup and also returns the problems found along the way.
///
/// Each diagnostic is logged as a warning as well.
pub fn resolve_with_diagnostics(text: &str, fonts: &FontSet) -> (StyledText, Vec<Diagnostic>) {
    let mut output = String::with_capacity(text.len());
    let mut ranges = Vec::new();
    let mut diagnostics = Vec::new();

    // Characters already written to `output`
    let mut output_chars = 0;
    // Bytes of `text` already copied to `output`
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(TOKEN_OPEN) {
        let start = cursor + found;
        let prefix_start = start + TOKEN_OPEN.len();

        let Some((prefix, font)) = prefix_at(&text[prefix_start..])
            .and_then(|prefix| fonts.get(prefix).map(|font| (prefix, font)))
        else {
            cursor = start + 1;
            continue;
        };

        let name_start = prefix_start + prefix.len();
        let Some(close) = text[name_start..].find(TOKEN_CLOSE).map(|i| name_start + i) else {
            let diagnostic = Diagnostic::UnterminatedToken {
                prefix: prefix.to_string(),
                position: start,
            };
            warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
            break;
        };

        let name = normalize_name(&text[name_start..close]);
        match font.glyph(&name) {
            Some(glyph) => {
                let before = &text[copied..start];
                output.push_str(before);
                output_chars += before.chars().count();

                let glyph_start = output.len();
                output.push(glyph);
                ranges.push(StyleRange::new(
                    output_chars,
                    glyph_start..output.len(),
                    font.clone(),
                ));
                output_chars += 1;

                copied = close + TOKEN_CLOSE.len_utf8();
                cursor = copied;
            }
            None => {
                let diagnostic = Diagnostic::UnknownIconName {
                    prefix: prefix.to_string(),
                    name,
                    position: start,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                cursor = start + 1;
            }
        }
    }

    output.push_str(&text[copied..]);
    (StyledText::new(output, ranges), diagnostics)
}

/// Returns the first [`PREFIX_KEY_LEN`] characters of `rest`, if there are
/// that many.
fn prefix_at(rest: &str) -> Option<&str> {
    let mut indices = rest.char_indices().map(|(i, _)| i).chain(Some(rest.len()));
    let end = indices.nth(PREFIX_KEY_LEN)?;
    Some(&rest[..end])
}

/// Normalizes a raw icon name: every `-` becomes `_`.
fn normalize_name(raw: &str) -> String {
    raw.replace('-', "_")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::font::{MappedFont, Typeface};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn fonts() -> FontSet {
        FontSet::from_fonts([Arc::new(
            MappedFont::new("tst", "Test")
                .add("a", '\u{E000}')
                .add("b", '\u{E001}'),
        ) as Arc<dyn Typeface>])
    }

    fn piece() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z {}é]{0,8}",
            Just("{icon-tsta}".to_string()),
            Just("{icon-tst-b}".to_string()),
            Just("{icon-tstzz}".to_string()),
            Just("{icon-xyza}".to_string()),
            Just("{icon-".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn text_without_markup_is_unchanged(text in "[^{]*") {
            let (styled, diagnostics) = resolve_with_diagnostics(&text, &fonts());
            prop_assert_eq!(styled.text(), text.as_str());
            prop_assert!(styled.ranges().is_empty());
            prop_assert!(diagnostics.is_empty());
        }

        #[test]
        fn ranges_are_ordered_in_bounds_and_point_at_glyphs(
            pieces in prop::collection::vec(piece(), 0..12)
        ) {
            let input = pieces.concat();
            let styled = resolve(&input, &fonts());
            let chars: Vec<char> = styled.text().chars().collect();

            for range in styled.ranges() {
                prop_assert_eq!(range.end(), range.start() + 1);
                prop_assert!(range.end() <= chars.len());
                let glyph = chars[range.start()];
                prop_assert!(
                    matches!(glyph, '\u{E000}' | '\u{E001}'),
                    "unexpected glyph {:?}",
                    glyph
                );
                let expected = glyph.to_string();
                prop_assert_eq!(&styled.text()[range.bytes()], expected.as_str());
            }
            for pair in styled.ranges().windows(2) {
                prop_assert!(pair[0].end() <= pair[1].start());
            }
        }

        #[test]
        fn resolving_twice_changes_nothing_more(
            pieces in prop::collection::vec(piece(), 0..12)
        ) {
            let input = pieces.concat();
            let once = resolve(&input, &fonts());
            let twice = resolve(once.text(), &fonts());
            if !once.text().contains("{icon-") {
                prop_assert_eq!(twice.text(), once.text());
                prop_assert!(twice.ranges().is_empty());
            }
        }
    }
}
