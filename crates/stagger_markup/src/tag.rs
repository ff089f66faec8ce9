//! Tag classification
//!
//! Reads what the title animator needs from a raw `<...>` run: whether it
//! closes an element and its name. The tag text itself is never rewritten.

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A borrowed view over a complete tag run such as `<div class="x">`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagInfo<'a> {
    name: &'a str,
    closing: bool,
}

impl<'a> TagInfo<'a> {
    /// Classify a tag run. `raw` is expected to start with `<`; anything else
    /// yields a nameless, non-closing tag.
    pub fn parse(raw: &'a str) -> Self {
        let body = raw.strip_prefix('<').unwrap_or("");
        let (closing, body) = match body.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let end = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());

        Self {
            name: &body[..end],
            closing,
        }
    }

    /// Tag name as written in the source. Empty for comments, doctypes and
    /// other runs without a leading word.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        !self.name.is_empty() && self.name.eq_ignore_ascii_case(name)
    }

    /// True for `</name>` runs
    pub fn is_closing(&self) -> bool {
        self.closing
    }
}
