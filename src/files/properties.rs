//! Reading and writing the line-oriented `key=value` properties format.
//!
//! Parsing follows the usual properties grammar: `#`/`!` comment lines,
//! backslash line continuations, `=`, `:` or whitespace as the key/value
//! separator, and `\t \n \r \f \uXXXX` escapes. Written files escape every
//! character outside printable ASCII, so they read back the same under any
//! ASCII-compatible decoder.

use crate::error::{CraftboxError, Result};
use crate::files::text::{decode_file, split_lines};
use chrono::Local;
use encoding_rs::UTF_8;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key/value mapping; keys are unique and iterate in sorted order
pub type Properties = BTreeMap<String, String>;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Parse properties text. Later duplicates of a key win.
pub fn parse_properties(input: &str) -> Result<Properties> {
    let mut props = Properties::new();
    let mut lines = split_lines(input).enumerate();

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        let trimmed = line.trim_start_matches(WHITESPACE);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                None => break,
            }
        }

        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key, line_no)?;
        let value = unescape(raw_value, line_no)?;
        props.insert(key, value);
    }

    Ok(props)
}

/// Serialize to properties text: optional comment, a date comment, then one
/// `key=value` line per entry in key order.
pub fn to_properties_string(props: &Properties, comment: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(comment) = comment {
        write_comment(&mut out, comment);
    }
    write_comment(
        &mut out,
        &Local::now().format("%a %b %d %H:%M:%S %Z %Y").to_string(),
    );

    for (key, value) in props {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }

    out
}

/// Read a properties file (UTF-8; plain ASCII files included).
pub fn read_properties(path: impl AsRef<Path>) -> Result<Properties> {
    let path = path.as_ref();
    let text = decode_file(path, UTF_8)?;
    let props = parse_properties(&text)?;
    debug!(path = %path.display(), entries = props.len(), "Read properties file");
    Ok(props)
}

/// Write `props` to `path`. The parent directory must already exist.
pub fn write_properties(props: &Properties, path: impl AsRef<Path>) -> Result<()> {
    write_properties_with_comment(props, path, None)
}

/// Write `props` to `path` with a leading comment block.
pub fn write_properties_with_comment(
    props: &Properties,
    path: impl AsRef<Path>,
    comment: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_properties_string(props, comment)).map_err(|e| CraftboxError::io(path, e))?;
    debug!(path = %path.display(), entries = props.len(), "Wrote properties file");
    Ok(())
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut preceding_backslash = false;

    for (i, c) in line.char_indices() {
        if !preceding_backslash {
            if c == '=' || c == ':' {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            if WHITESPACE.contains(&c) {
                key_end = i;
                value_start = i + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    let mut rest = &line[value_start..];
    loop {
        match rest.chars().next() {
            Some(c) if WHITESPACE.contains(&c) => rest = &rest[1..],
            Some(c) if !has_separator && (c == '=' || c == ':') => {
                has_separator = true;
                rest = &rest[1..];
            }
            _ => break,
        }
    }

    (&line[..key_end], rest)
}

fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut buf = [0u16; 2];

    while let Some(c) = chars.next() {
        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        let decoded = match escaped {
            'u' => {
                let digits: String = chars.by_ref().take(4).collect();
                let unit = (digits.len() == 4 && digits.chars().all(|d| d.is_ascii_hexdigit()))
                    .then(|| u16::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .ok_or_else(|| CraftboxError::Properties {
                        line,
                        message: format!("malformed \\uxxxx escape: \\u{}", digits),
                    })?;
                units.push(unit);
                continue;
            }
            't' => '\t',
            'r' => '\r',
            'n' => '\n',
            'f' => '\x0c',
            other => other,
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    String::from_utf16(&units).map_err(|_| CraftboxError::Properties {
        line,
        message: "unpaired surrogate in \\u escape".to_string(),
    })
}

fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut buf = [0u16; 2];

    for (i, c) in s.chars().enumerate() {
        match c {
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '\\' | '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => push_unicode_escapes(&mut out, c, &mut buf),
        }
    }

    out
}

fn push_unicode_escapes(out: &mut String, c: char, buf: &mut [u16; 2]) {
    for unit in c.encode_utf16(buf) {
        let _ = write!(out, "\\u{:04X}", unit);
    }
}

/// The first comment line always gets a leading `#`; later lines get one
/// unless they already start with `#` or `!`. A trailing line break yields a
/// final lone `#` line.
fn write_comment(out: &mut String, comment: &str) {
    let mut buf = [0u16; 2];
    let mut chars = comment.chars().peekable();
    out.push('#');
    while let Some(c) = chars.next() {
        match c {
            '\n' | '\r' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                if !matches!(chars.peek(), Some('#') | Some('!')) {
                    out.push('#');
                }
            }
            c if c.is_ascii() && c != '\x7f' => out.push(c),
            _ => push_unicode_escapes(out, c, &mut buf),
        }
    }
    out.push('\n');
}
