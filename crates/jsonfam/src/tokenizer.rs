//! The lenient tokenizer.
//!
//! A [`Tokenizer`] walks borrowed source text with a byte-offset cursor and
//! a single level of pushback. It lexes quoted strings (double or single
//! quoted, with the usual escapes), bare tokens, and whole values; compound
//! values are delegated to the grammar rules in [`crate::parser`] with the
//! requesting family's builders.

use crate::{
    error::Result,
    family::{ArrayBuilder, Family, ObjectBuilder},
    parser::{populate_array_builder, populate_object_builder},
    scratch::ScratchBuffer,
    value::Value,
};

/// Characters that terminate a bare (unquoted) token.
fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ',' | ':' | ']' | '}' | '/' | '\\' | '"' | '[' | '{' | ';' | '=' | '#'
    )
}

/// A cursor over source text, producing strings, tokens, and values.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    index: usize,
    last_width: usize,
    scratch: ScratchBuffer,
}

impl<'a> Tokenizer<'a> {
    /// Starts tokenizing at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            last_width: 0,
            scratch: ScratchBuffer::new(),
        }
    }

    /// Current byte offset into the source.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.index
    }

    pub(crate) fn syntax_error(&self, message: &'static str) -> crate::error::Error {
        crate::error::Error::Syntax {
            message,
            offset: self.index,
        }
    }

    /// Consumes and returns the next character, or `'\0'` at end of input.
    pub(crate) fn next(&mut self) -> char {
        match self.source[self.index..].chars().next() {
            Some(c) => {
                self.last_width = c.len_utf8();
                self.index += self.last_width;
                c
            }
            None => {
                self.last_width = 0;
                '\0'
            }
        }
    }

    /// Un-consumes the last character returned by [`next`](Self::next).
    /// Only one level of pushback is supported; at end of input, and after a
    /// pushback, this is a no-op.
    pub(crate) fn back(&mut self) {
        self.index -= self.last_width;
        self.last_width = 0;
    }

    /// Consumes characters up to the next one above the space character,
    /// treating everything at or below `' '` as whitespace.
    pub(crate) fn next_clean(&mut self) -> char {
        loop {
            let c = self.next();
            if c == '\0' || c > ' ' {
                return c;
            }
        }
    }

    /// Lexes an object key: a quoted string, or a bare token.
    pub fn next_key(&mut self) -> Result<String> {
        let c = self.next_clean();
        match c {
            '"' | '\'' => self.next_string(c),
            _ => self.unquoted_token(c),
        }
    }

    /// Lexes the remainder of a string whose opening `quote` has already
    /// been consumed. The fast path borrows straight from the source; only
    /// when an escape appears does the tokenizer rewind and re-lex through
    /// the scratch buffer.
    pub fn next_string(&mut self, quote: char) -> Result<String> {
        let start = self.index;
        loop {
            let c = self.next();
            match c {
                '\0' | '\n' | '\r' => return Err(self.syntax_error("unterminated string")),
                '\\' => {
                    self.index = start;
                    self.last_width = 0;
                    return self.decode_string(quote);
                }
                _ if c == quote => {
                    return Ok(self.source[start..self.index - self.last_width].to_owned());
                }
                _ => {}
            }
        }
    }

    fn decode_string(&mut self, quote: char) -> Result<String> {
        let mut buffer = self.scratch.claim();
        let decoded = self.decode_string_into(quote, &mut buffer);
        self.scratch.release(buffer);
        decoded
    }

    fn decode_string_into(&mut self, quote: char, buffer: &mut String) -> Result<String> {
        loop {
            let c = self.next();
            match c {
                '\0' | '\n' | '\r' => return Err(self.syntax_error("unterminated string")),
                '\\' => match self.next() {
                    'b' => buffer.push('\u{8}'),
                    't' => buffer.push('\t'),
                    'n' => buffer.push('\n'),
                    'f' => buffer.push('\u{c}'),
                    'r' => buffer.push('\r'),
                    'u' => buffer.push(self.unicode_escape()?),
                    e @ ('"' | '\'' | '\\' | '/') => buffer.push(e),
                    _ => return Err(self.syntax_error("illegal escape")),
                },
                _ if c == quote => return Ok(buffer.clone()),
                _ => buffer.push(c),
            }
        }
    }

    /// Decodes the four hex digits of a `\uXXXX` escape. Values that are
    /// not Unicode scalar values (the surrogate range) are rejected.
    fn unicode_escape(&mut self) -> Result<char> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let digit = self
                .next()
                .to_digit(16)
                .ok_or_else(|| self.syntax_error("invalid unicode escape"))?;
            code = code << 4 | digit;
        }
        char::from_u32(code).ok_or_else(|| self.syntax_error("invalid unicode escape"))
    }

    /// Lexes a bare token starting at `c`: everything up to a delimiter or
    /// control character, with trailing whitespace trimmed.
    fn unquoted_token(&mut self, mut c: char) -> Result<String> {
        while c != '\0' && c <= ' ' {
            c = self.next();
        }
        let start = self.index - self.last_width;
        loop {
            if c == '\0' || c < ' ' || is_delimiter(c) {
                break;
            }
            c = self.next();
        }
        self.back();
        let token = self.source[start..self.index].trim_end_matches(|ch: char| ch <= ' ');
        if token.is_empty() {
            return Err(self.syntax_error("missing value"));
        }
        Ok(token.to_owned())
    }

    /// Lexes the next value of any kind: a quoted string, a compound value
    /// built with `F`'s builders, or a bare token put through
    /// [`coerce_token`].
    pub fn next_value<F: Family>(&mut self) -> Result<Value<F>> {
        let c = self.next_clean();
        match c {
            '"' | '\'' => Ok(Value::String(self.next_string(c)?)),
            '{' => {
                self.back();
                let mut builder = F::object_builder();
                populate_object_builder(self, &mut builder)?;
                Ok(Value::Object(builder.build()))
            }
            '[' => {
                self.back();
                let mut builder = F::array_builder();
                populate_array_builder(self, &mut builder)?;
                Ok(Value::Array(builder.build()))
            }
            _ => {
                let token = self.unquoted_token(c)?;
                Ok(coerce_token(&token))
            }
        }
    }
}

/// Maps a bare token to a value.
///
/// `true`/`false`/`null` match case-insensitively. Tokens that look numeric
/// (first character a digit, `.`, `-`, or `+`) try `0x`/`0X` hex as i32,
/// then f64 when a `.`, `e`, or `E` is present, then i64 narrowed to i32
/// when exact. Anything that fails to parse is kept as a plain string, as
/// is a non-finite f64 result.
pub fn coerce_token<F: Family>(token: &str) -> Value<F> {
    if token.is_empty() {
        return Value::String(String::new());
    }
    if token.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if token.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    let first = token.as_bytes()[0];
    if first.is_ascii_digit() || matches!(first, b'.' | b'-' | b'+') {
        if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            if let Ok(n) = i32::from_str_radix(hex, 16) {
                return Value::Int(n);
            }
        }
        if token.contains(['.', 'e', 'E']) {
            if let Ok(d) = token.parse::<f64>() {
                if d.is_finite() {
                    return Value::Double(d);
                }
            }
        } else if let Ok(n) = token.parse::<i64>() {
            return match i32::try_from(n) {
                Ok(small) => Value::Int(small),
                Err(_) => Value::Long(n),
            };
        }
    }
    Value::String(token.to_owned())
}
