//! Deterministic logfmt rendering.
//!
//! One record becomes one line:
//!
//! ```text
//! level=info ts="2015/12/15 00:00:00" epoch=1450137600 name=foo msg="test log" hello=world
//! ```
//!
//! Values are quoted only when they would otherwise break tokenisation.
//! `ts` and `error` are always quoted. Escapes keep every record on a single
//! physical line.

use std::error::Error;
use std::fmt::Write as _;

use crate::logger::Record;

/// `strftime` layout of the `ts` field.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Separator between messages of an error's cause chain.
pub const CAUSE_SEPARATOR: &str = ": ";

/// Render `record` as a newline-terminated logfmt line.
pub fn render(record: &Record<'_>) -> String {
    let mut line = String::with_capacity(128);
    write_record(&mut line, record);
    line
}

/// Append the rendered line for `record` to `out`.
pub fn write_record(out: &mut String, record: &Record<'_>) {
    let ts = record.timestamp.format(TIMESTAMP_FORMAT).to_string();

    out.push_str("level=");
    out.push_str(record.level.as_str());
    out.push_str(" ts=");
    write_quoted(out, &ts);
    let _ = write!(out, " epoch={}", record.timestamp.timestamp());
    write_field(out, "name", record.name);
    write_field(out, "msg", record.message);

    for (key, value) in record.fields.iter() {
        write_field(out, key, &value.to_string());
    }

    if let Some(err) = record.error {
        out.push_str(" error=");
        write_quoted(out, &error_chain(err));
    }
    out.push('\n');
}

/// The message of `err` followed by the message of every `source()`,
/// outermost first.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut chain = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        chain.push_str(CAUSE_SEPARATOR);
        chain.push_str(&inner.to_string());
        cause = inner.source();
    }
    chain
}

/// Whether `value` must be quoted to stay a single logfmt token.
pub fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control())
}

/// Placeholder written for an empty key.
pub const EMPTY_KEY: &str = "_";

fn write_field(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    write_key(out, key);
    out.push('=');
    if needs_quoting(value) {
        write_quoted(out, value);
    } else {
        out.push_str(value);
    }
}

// Keys are never quoted; token-breaking characters become `_`.
fn write_key(out: &mut String, key: &str) {
    if key.is_empty() {
        out.push_str(EMPTY_KEY);
        return;
    }
    for c in key.chars() {
        if c.is_whitespace() || c == '"' || c == '=' || c.is_control() {
            out.push('_');
        } else {
            out.push(c);
        }
    }
}

fn write_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:04x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
