//! Compact and pretty JSON writers.
//!
//! Both writers take [`ValueRef`], so they serve every family (and the
//! read-only views) through one code path. The compact form adds no
//! whitespace and emits object entries in insertion order; the pretty form
//! indents, sorts object keys, and special-cases zero- and one-entry
//! containers onto a single line.

use std::fmt::{self, Write};

use crate::{
    read::{JsonArray, JsonObject},
    value::ValueRef,
    view::{ArrayView, ObjectView},
};

/// Writes a string literal, quotes included, with the full escaping rules:
/// `"` and `\` always; `/` only when it follows `<` (so inline HTML cannot
/// close a script tag); the short escapes for backspace, tab, newline, form
/// feed, and carriage return; `\uXXXX` for other control characters, for
/// U+0080 through U+009F, and for U+2000 through U+20FF.
pub fn write_quoted<W: Write>(text: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    let mut previous = '\0';
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            '/' => {
                if previous == '<' {
                    out.write_char('\\')?;
                }
                out.write_char('/')?;
            }
            '\u{8}' => out.write_str("\\b")?,
            '\t' => out.write_str("\\t")?,
            '\n' => out.write_str("\\n")?,
            '\u{c}' => out.write_str("\\f")?,
            '\r' => out.write_str("\\r")?,
            c if c < ' ' || ('\u{80}'..='\u{9f}').contains(&c) || ('\u{2000}'..='\u{20ff}').contains(&c) => {
                write!(out, "\\u{:04x}", c as u32)?;
            }
            c => out.write_char(c)?,
        }
        previous = c;
    }
    out.write_char('"')
}

/// Renders a finite double: shortest round-trippable text, then trailing
/// zeros and a trailing point stripped unless the text carries an exponent.
fn write_f64<W: Write>(value: f64, out: &mut W) -> fmt::Result {
    let mut text = format!("{value:?}");
    if text.contains('.') && !text.contains(['e', 'E']) {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    out.write_str(&text)
}

/// Writes the compact form: no whitespace, object entries in insertion
/// order.
pub fn write_compact<W: Write>(value: ValueRef<'_>, out: &mut W) -> fmt::Result {
    match value {
        ValueRef::Null => out.write_str("null"),
        ValueRef::Bool(b) => out.write_str(if b { "true" } else { "false" }),
        ValueRef::Int(n) => write!(out, "{n}"),
        ValueRef::Long(n) => write!(out, "{n}"),
        ValueRef::Double(d) => write_f64(d, out),
        ValueRef::Str(s) => write_quoted(s, out),
        ValueRef::Object(object) => {
            out.write_char('{')?;
            let mut first = true;
            for key in object.keys() {
                if !first {
                    out.write_char(',')?;
                }
                first = false;
                write_quoted(key, out)?;
                out.write_char(':')?;
                write_compact(object.opt(key).unwrap_or(ValueRef::Null), out)?;
            }
            out.write_char('}')
        }
        ValueRef::Array(array) => {
            out.write_char('[')?;
            let mut first = true;
            for element in array.iter() {
                if !first {
                    out.write_char(',')?;
                }
                first = false;
                write_compact(element, out)?;
            }
            out.write_char(']')
        }
    }
}

/// The compact form as a string.
#[must_use]
pub fn to_compact_string(value: ValueRef<'_>) -> String {
    let mut out = String::new();
    write_compact(value, &mut out).expect("writing to a String cannot fail");
    out
}

/// Writes the pretty form. `indent_factor` is the number of spaces added
/// per nesting level and `indent` the indentation of the top level.
pub fn write_pretty<W: Write>(
    value: ValueRef<'_>,
    out: &mut W,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    match value {
        ValueRef::Object(object) => write_pretty_object(object, out, indent_factor, indent),
        ValueRef::Array(array) => write_pretty_array(array, out, indent_factor, indent),
        scalar => write_compact(scalar, out),
    }
}

/// The pretty form as a string, starting at indentation zero.
#[must_use]
pub fn to_pretty_string(value: ValueRef<'_>, indent_factor: usize) -> String {
    let mut out = String::new();
    write_pretty(value, &mut out, indent_factor, 0).expect("writing to a String cannot fail");
    out
}

fn write_indent<W: Write>(out: &mut W, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(' ')?;
    }
    Ok(())
}

fn write_pretty_object<W: Write>(
    object: ObjectView<'_>,
    out: &mut W,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    out.write_char('{')?;
    let keys = object.sorted_keys();
    match keys.len() {
        0 => {}
        1 => {
            let key = keys[0];
            write_quoted(key, out)?;
            out.write_str(": ")?;
            write_pretty(
                object.opt(key).unwrap_or(ValueRef::Null),
                out,
                indent_factor,
                indent,
            )?;
        }
        _ => {
            let deeper = indent + indent_factor;
            out.write_char('\n')?;
            let mut first = true;
            for key in keys {
                if !first {
                    out.write_str(",\n")?;
                }
                first = false;
                write_indent(out, deeper)?;
                write_quoted(key, out)?;
                out.write_str(": ")?;
                write_pretty(
                    object.opt(key).unwrap_or(ValueRef::Null),
                    out,
                    indent_factor,
                    deeper,
                )?;
            }
            out.write_char('\n')?;
            write_indent(out, indent)?;
        }
    }
    out.write_char('}')
}

fn write_pretty_array<W: Write>(
    array: ArrayView<'_>,
    out: &mut W,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    out.write_char('[')?;
    match array.len() {
        0 => {}
        1 => {
            write_pretty(
                array.opt(0).unwrap_or(ValueRef::Null),
                out,
                indent_factor,
                indent,
            )?;
        }
        len => {
            let deeper = indent + indent_factor;
            out.write_char('\n')?;
            for i in 0..len {
                if i > 0 {
                    out.write_str(",\n")?;
                }
                write_indent(out, deeper)?;
                write_pretty(
                    array.opt(i).unwrap_or(ValueRef::Null),
                    out,
                    indent_factor,
                    deeper,
                )?;
            }
            out.write_char('\n')?;
            write_indent(out, indent)?;
        }
    }
    out.write_char(']')
}
