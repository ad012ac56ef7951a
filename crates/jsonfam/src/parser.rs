//! The lenient grammar rules for objects and arrays.
//!
//! These functions consume tokens from a [`Tokenizer`] and feed a builder,
//! so one set of rules populates every family. The grammar is deliberately
//! forgiving, matching the tokenizer's heritage:
//!
//! - `=` and `=>` are accepted in place of `:` after a key
//! - `;` is accepted in place of `,` between entries or elements
//! - a trailing separator before `}` or `]` is allowed
//! - an elided array element (`[1,,3]`) becomes an explicit null
//!
//! Duplicate object keys are a hard error; the builder's `put_once` path
//! enforces it.

use crate::{
    error::Result,
    family::{ArrayBuilder, ObjectBuilder},
    tokenizer::Tokenizer,
    value::Value,
};

/// Consumes one object, `{` through `}`, feeding entries to `builder`.
pub fn populate_object_builder<B: ObjectBuilder>(
    tokenizer: &mut Tokenizer<'_>,
    builder: &mut B,
) -> Result<()> {
    if tokenizer.next_clean() != '{' {
        return Err(tokenizer.syntax_error("a JSON object text must begin with '{'"));
    }
    loop {
        let key = match tokenizer.next_clean() {
            '\0' => return Err(tokenizer.syntax_error("a JSON object text must end with '}'")),
            '}' => return Ok(()),
            _ => {
                tokenizer.back();
                tokenizer.next_key()?
            }
        };

        match tokenizer.next_clean() {
            ':' => {}
            '=' => {
                // Accept both = and =>.
                if tokenizer.next() != '>' {
                    tokenizer.back();
                }
            }
            _ => return Err(tokenizer.syntax_error("expected a ':' after a key")),
        }
        builder.put_once(&key, tokenizer.next_value()?)?;

        match tokenizer.next_clean() {
            ';' | ',' => {
                if tokenizer.next_clean() == '}' {
                    return Ok(());
                }
                tokenizer.back();
            }
            '}' => return Ok(()),
            _ => return Err(tokenizer.syntax_error("expected a ',' or '}'")),
        }
    }
}

/// Consumes one array, `[` through `]`, feeding elements to `builder`.
pub fn populate_array_builder<B: ArrayBuilder>(
    tokenizer: &mut Tokenizer<'_>,
    builder: &mut B,
) -> Result<()> {
    if tokenizer.next_clean() != '[' {
        return Err(tokenizer.syntax_error("a JSON array text must begin with '['"));
    }
    if tokenizer.next_clean() == ']' {
        return Ok(());
    }
    tokenizer.back();
    loop {
        if tokenizer.next_clean() == ',' {
            // Elided element.
            tokenizer.back();
            builder.push(Value::Null)?;
        } else {
            tokenizer.back();
            builder.push(tokenizer.next_value()?)?;
        }

        match tokenizer.next_clean() {
            ';' | ',' => {
                if tokenizer.next_clean() == ']' {
                    return Ok(());
                }
                tokenizer.back();
            }
            ']' => return Ok(()),
            _ => return Err(tokenizer.syntax_error("expected a ',' or ']'")),
        }
    }
}
