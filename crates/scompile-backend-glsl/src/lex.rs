//! Minimal HLSL token scanner for the generator.
//!
//! Splits source text into identifiers and opaque spans. Only identifiers
//! participate in token mapping; numeric literals, string literals, and
//! comments are passed through verbatim, so a mapped token embedded in a
//! longer identifier, a comment, or a string is never rewritten.

/// Classification of a scanned span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident,
    /// Anything else (whitespace, punctuation, literals, comments),
    /// copied to the output unchanged.
    Opaque,
}

/// A contiguous span of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Scans `source` into a token stream. Concatenating the token texts in
/// order reproduces `source` exactly.
pub fn tokens(source: &str) -> Tokens<'_> {
    Tokens { source, pos: 0 }
}

/// Iterator over the spans of one source text.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.source[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = if is_ident_start(first) {
            let len = rest
                .find(|c: char| !is_ident_continue(c))
                .unwrap_or(rest.len());
            (TokenKind::Ident, len)
        } else if first.is_ascii_digit() {
            // Numeric literal. Letters, digits, dots, and underscores are
            // glued so suffixed forms like `1.5f` and `0x1F` stay opaque.
            let len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_'))
                .unwrap_or(rest.len());
            (TokenKind::Opaque, len)
        } else if rest.starts_with("//") {
            let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
            (TokenKind::Opaque, len)
        } else if rest.starts_with("/*") {
            // Unterminated block comments swallow the rest of the input.
            let len = rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
            (TokenKind::Opaque, len)
        } else if first == '"' {
            (TokenKind::Opaque, string_len(rest))
        } else {
            // A run of characters that cannot begin an identifier,
            // number, comment, or string.
            let skip = first.len_utf8();
            let len = rest[skip..]
                .find(|c: char| {
                    is_ident_start(c) || c.is_ascii_digit() || c == '/' || c == '"'
                })
                .map_or(rest.len(), |i| i + skip);
            (TokenKind::Opaque, len)
        };

        let text = &rest[..len];
        self.pos += len;
        Some(Token { kind, text })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Length of a double-quoted string literal at the start of `rest`,
/// honoring backslash escapes. Unterminated strings run to end of input.
fn string_len(rest: &str) -> usize {
    let mut escaped = false;
    for (i, c) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return i + 1,
            _ => {}
        }
    }
    rest.len()
}
