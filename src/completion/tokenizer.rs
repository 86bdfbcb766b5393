//! Word tokenization over arbitrary Unicode text.
//!
//! This module defines what counts as a word, iterates word boundaries
//! across a document, and extracts the partially-typed word immediately
//! preceding a cursor position. All offsets are byte indices into the
//! text and always land on codepoint boundaries.

use std::ops::Range;

/// A codepoint is a word constituent iff it is printable and either
/// alphanumeric or the underscore. Everything else separates words.
pub fn is_word_char(c: char) -> bool {
    !c.is_control() && (c.is_alphanumeric() || c == '_')
}

/// Inverse of [`is_word_char`]: punctuation, whitespace and control
/// characters all delimit word boundaries.
pub fn is_separator(c: char) -> bool {
    !is_word_char(c)
}

/// Iterator over the maximal runs of word-constituent codepoints in a
/// text, yielding each word together with its byte span.
///
/// The iterator is lazy and restartable; constructing it performs no
/// work. Yielded words are never empty and never contain a separator.
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (Range<usize>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos
            + rest
                .char_indices()
                .find(|&(_, c)| is_word_char(c))
                .map(|(i, _)| i)?;

        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| is_separator(c))
            .map(|(i, _)| start + i)
            .unwrap_or(self.text.len());

        self.pos = end;
        Some((start..end, &self.text[start..end]))
    }
}

/// Clamp a cursor position into the text: out-of-range positions snap to
/// the end, positions inside a multi-byte codepoint snap back to the
/// codepoint's start.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// Locate the word fragment immediately preceding `cursor`.
///
/// Walks backward codepoint-by-codepoint until the first separator or
/// the document start, whichever comes first. Returns the fragment's
/// start byte index and the fragment itself; the fragment is empty when
/// the codepoint before the cursor is a separator or the cursor sits at
/// the document start.
pub fn word_fragment_before(text: &str, cursor: usize) -> (usize, &str) {
    let cursor = clamp_cursor(text, cursor);

    let mut start = cursor;
    for (idx, ch) in text[..cursor].char_indices().rev() {
        if is_separator(ch) {
            break;
        }
        start = idx;
    }

    (start, &text[start..cursor])
}

/// Strip any leading run of separators from a raw fragment, returning
/// `None` when nothing remains. Fragment extraction cannot produce a
/// leading separator on its own; this is a normalization pass for
/// fragments handed in by the host.
pub fn clean_fragment(fragment: &str) -> Option<&str> {
    let cleaned = fragment.trim_start_matches(is_separator);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_char_classification() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('9'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(is_word_char('名'));

        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('\n'));
        assert!(is_separator('.'));
        assert!(is_separator('-'));
        assert!(is_separator('('));
        assert!(is_separator('\u{0007}')); // control characters separate
    }

    #[test]
    fn test_words_iterates_maximal_runs() {
        let words: Vec<_> = Words::new("hello, world_2!").collect();
        assert_eq!(
            words,
            vec![(0..5, "hello"), (7..14, "world_2")]
        );
    }

    #[test]
    fn test_words_empty_and_separator_only_text() {
        assert_eq!(Words::new("").count(), 0);
        assert_eq!(Words::new(" \t\n.,;").count(), 0);
    }

    #[test]
    fn test_words_at_text_edges() {
        let words: Vec<_> = Words::new("edge case").map(|(_, w)| w).collect();
        assert_eq!(words, vec!["edge", "case"]);

        let words: Vec<_> = Words::new(" padded ").map(|(_, w)| w).collect();
        assert_eq!(words, vec!["padded"]);
    }

    #[test]
    fn test_words_multibyte_spans() {
        // "é" is two bytes; spans must stay on codepoint boundaries
        let words: Vec<_> = Words::new("café au lait").collect();
        assert_eq!(words[0], (0..5, "café"));
        assert_eq!(words[1].1, "au");
        assert_eq!(words[2].1, "lait");
    }

    #[test]
    fn test_words_restartable() {
        let text = "one two three";
        let first: Vec<_> = Words::new(text).collect();
        let second: Vec<_> = Words::new(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fragment_at_end_of_word() {
        let (start, fragment) = word_fragment_before("hello wor", 9);
        assert_eq!(start, 6);
        assert_eq!(fragment, "wor");
    }

    #[test]
    fn test_fragment_mid_word() {
        // Cursor after "fun" inside "func": only the typed part counts
        let (start, fragment) = word_fragment_before("func function", 3);
        assert_eq!(start, 0);
        assert_eq!(fragment, "fun");
    }

    #[test]
    fn test_fragment_after_separator_is_empty() {
        let (start, fragment) = word_fragment_before("hello ", 6);
        assert_eq!(start, 6);
        assert_eq!(fragment, "");
    }

    #[test]
    fn test_fragment_at_document_start() {
        let (start, fragment) = word_fragment_before("word", 0);
        assert_eq!(start, 0);
        assert_eq!(fragment, "");

        // No separator between start and cursor: fragment spans from 0
        let (start, fragment) = word_fragment_before("word", 4);
        assert_eq!(start, 0);
        assert_eq!(fragment, "word");
    }

    #[test]
    fn test_fragment_multibyte() {
        let text = "voilà naïv";
        let (start, fragment) = word_fragment_before(text, text.len());
        assert_eq!(fragment, "naïv");
        assert_eq!(&text[start..], "naïv");
    }

    #[test]
    fn test_fragment_cursor_clamping() {
        // Past the end snaps to the end
        let (_, fragment) = word_fragment_before("abc", 99);
        assert_eq!(fragment, "abc");

        // Inside a multi-byte codepoint snaps back to its start
        let text = "née";
        assert_eq!(clamp_cursor(text, 2), 1);
        let (_, fragment) = word_fragment_before(text, 2);
        assert_eq!(fragment, "n");
    }

    #[test]
    fn test_fragment_is_separator_free_with_separator_before() {
        let texts = ["a b_c d", "  x", "Ω≈ç√", "tab\tend", "π r2"];
        for text in texts {
            for cursor in 0..=text.len() {
                let cursor = clamp_cursor(text, cursor);
                let (start, fragment) = word_fragment_before(text, cursor);
                assert!(
                    fragment.chars().all(is_word_char),
                    "separator inside fragment {fragment:?} of {text:?}"
                );
                if let Some(before) = text[..start].chars().next_back() {
                    assert!(is_separator(before), "char before fragment in {text:?}");
                }
            }
        }
    }

    #[test]
    fn test_clean_fragment() {
        assert_eq!(clean_fragment("word"), Some("word"));
        assert_eq!(clean_fragment("  word"), Some("word"));
        assert_eq!(clean_fragment(".,word"), Some("word"));
        assert_eq!(clean_fragment(""), None);
        assert_eq!(clean_fragment(" .,"), None);
        // Trailing separators are not this function's business
        assert_eq!(clean_fragment(" a b"), Some("a b"));
    }
}
