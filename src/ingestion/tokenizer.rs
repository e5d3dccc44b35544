//! Character-by-character line tokenizer.
//!
//! Tokens are maximal runs of characters that are neither a comma nor whitespace.

/// Returns `true` for characters that end a token.
fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Lazy iterator over the tokens of one line. Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;
        for (idx, c) in self.rest.char_indices() {
            match (start, is_separator(c)) {
                (None, true) => {}
                (None, false) => start = Some(idx),
                (Some(s), true) => {
                    let token = &self.rest[s..idx];
                    self.rest = &self.rest[idx + c.len_utf8()..];
                    return Some(token);
                }
                (Some(_), false) => {}
            }
        }

        // Trailing token (or nothing left).
        let token = start.map(|s| &self.rest[s..]);
        self.rest = "";
        token
    }
}

/// Split `line` on commas and whitespace. Consecutive separators never yield empty tokens.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}
