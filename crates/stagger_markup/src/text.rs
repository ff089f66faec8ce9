//! Text segmentation
//!
//! Splits flushed text into alternating whitespace and word runs, and words
//! into glyphs (the units that each receive their own delay).

use html_escape::decode_html_entities;

/// Longest character reference considered when keeping entities whole
const MAX_ENTITY_BYTES: usize = 32;

/// Whitespace as titles split it: the Unicode `White_Space` set, minus
/// U+0085 NEXT LINE, plus U+FEFF ZERO WIDTH NO-BREAK SPACE. This is the set
/// browser scripts use for `\s` and `trim()`.
pub fn is_title_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// A run of flushed text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal run of whitespace, passed through unchanged
    Space(&'a str),
    /// Maximal run of non-whitespace
    Word(&'a str),
}

/// Iterator over the [`Segment`]s of a text run
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Split `text` into whitespace and word runs
pub fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let first = self.rest.chars().next()?;
        let space = is_title_whitespace(first);
        let end = self
            .rest
            .find(|c: char| is_title_whitespace(c) != space)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if space {
            Segment::Space(run)
        } else {
            Segment::Word(run)
        })
    }
}

/// Iterator over the glyphs of a word
///
/// A glyph is one Unicode scalar value, or, with `keep_entities`, a whole
/// character reference such as `&amp;` or `&#8217;`.
#[derive(Clone, Debug)]
pub struct Glyphs<'a> {
    rest: &'a str,
    keep_entities: bool,
}

pub fn glyphs(word: &str, keep_entities: bool) -> Glyphs<'_> {
    Glyphs {
        rest: word,
        keep_entities,
    }
}

impl<'a> Iterator for Glyphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let mut len = first.len_utf8();

        if self.keep_entities && first == '&' {
            if let Some(entity_len) = entity_len(self.rest) {
                len = entity_len;
            }
        }

        let (glyph, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(glyph)
    }
}

/// Byte length of a character reference at the start of `s`, if it is one
/// that decodes to something else.
fn entity_len(s: &str) -> Option<usize> {
    let end = s[1..].find(['&', ';'])? + 1;
    if end == 1 || end > MAX_ENTITY_BYTES || !s[end..].starts_with(';') {
        return None;
    }

    let candidate = &s[..=end];
    if decode_html_entities(candidate) != candidate {
        Some(candidate.len())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Segment<'_>> {
        segments(text).collect()
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            split("Hi there"),
            vec![
                Segment::Word("Hi"),
                Segment::Space(" "),
                Segment::Word("there"),
            ]
        );
    }

    #[test]
    fn test_segments_keep_whitespace_runs() {
        assert_eq!(
            split("\n  a\t b  "),
            vec![
                Segment::Space("\n  "),
                Segment::Word("a"),
                Segment::Space("\t "),
                Segment::Word("b"),
                Segment::Space("  "),
            ]
        );
        assert_eq!(split("   "), vec![Segment::Space("   ")]);
        assert!(split("").is_empty());
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        assert_eq!(
            split("a\u{a0}b"),
            vec![
                Segment::Word("a"),
                Segment::Space("\u{a0}"),
                Segment::Word("b"),
            ]
        );
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(
            split("a\u{feff}b"),
            vec![
                Segment::Word("a"),
                Segment::Space("\u{feff}"),
                Segment::Word("b"),
            ]
        );
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(split("a\u{85}b"), vec![Segment::Word("a\u{85}b")]);
    }

    #[test]
    fn test_glyphs_are_scalar_values() {
        let out: Vec<&str> = glyphs("né😀", false).collect();
        assert_eq!(out, vec!["n", "é", "😀"]);
    }

    #[test]
    fn test_entities_split_by_default() {
        let out: Vec<&str> = glyphs("a&amp;", false).collect();
        assert_eq!(out, vec!["a", "&", "a", "m", "p", ";"]);
    }

    #[test]
    fn test_entities_kept_whole() {
        let out: Vec<&str> = glyphs("R&amp;D&#8217;s", true).collect();
        assert_eq!(out, vec!["R", "&amp;", "D", "&#8217;", "s"]);
    }

    #[test]
    fn test_unknown_entity_is_split() {
        let out: Vec<&str> = glyphs("&nope;", true).collect();
        assert_eq!(out.len(), 6);
        let out: Vec<&str> = glyphs("&;", true).collect();
        assert_eq!(out, vec!["&", ";"]);
        let out: Vec<&str> = glyphs("&&amp;", true).collect();
        assert_eq!(out, vec!["&", "&amp;"]);
    }
}
