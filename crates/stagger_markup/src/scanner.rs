//! Markup scanner
//!
//! Splits a markup fragment into text runs and tag runs in a single forward
//! pass. The scanner is a two-state machine: in text it consumes up to the
//! next `<`; in a tag it consumes up to and including the next `>`.
//!
//! No validation is performed. A `<` that is not closed before the next `<`
//! or before the end of input yields a [`Token::Malformed`] run so callers can
//! pass it through untouched. Tokens borrow from the input and concatenate
//! back to it exactly.

/// A borrowed run of markup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text between tags (never empty)
    Text(&'a str),
    /// A complete `<...>` run, including both brackets
    Tag(&'a str),
    /// A `<...` run with no closing `>` before the next `<` or end of input
    Malformed(&'a str),
}

impl<'a> Token<'a> {
    /// The source text of this token
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(s) | Token::Tag(s) | Token::Malformed(s) => s,
        }
    }
}

/// Iterator over the [`Token`]s of a markup fragment
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn take(&mut self, len: usize) -> &'a str {
        let run = &self.input[self.pos..self.pos + len];
        self.pos += len;
        run
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with('<') {
            let len = rest.find('<').unwrap_or(rest.len());
            return Some(Token::Text(self.take(len)));
        }

        // '<' and '>' are ASCII, so byte offsets from `find` are char boundaries
        match rest[1..].find(['<', '>']) {
            Some(i) if rest.as_bytes()[1 + i] == b'>' => Some(Token::Tag(self.take(i + 2))),
            Some(i) => Some(Token::Malformed(self.take(i + 1))),
            None => Some(Token::Malformed(self.take(rest.len()))),
        }
    }
}
