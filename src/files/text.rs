//! Small text file reading and writing.
//!
//! These helpers materialize the whole file in memory; they are meant for
//! configuration-sized inputs, not large data.

use crate::error::{CraftboxError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Look up an encoding by its WHATWG label ("utf-8", "latin1", "windows-1252", ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CraftboxError::UnsupportedEncoding(label.to_string()))
}

/// Read all lines of a UTF-8 file.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    read_lines_encoded(path, UTF_8)
}

/// Read all lines of a file in the encoding named by `label`.
pub fn read_lines_with_encoding(path: impl AsRef<Path>, label: &str) -> Result<Vec<String>> {
    let encoding = resolve_encoding(label)?;
    read_lines_encoded(path, encoding)
}

/// Read all lines of a file in `encoding`.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`; a final terminator does not
/// produce an empty last line. Malformed input is an error, never replaced.
pub fn read_lines_encoded(path: impl AsRef<Path>, encoding: &'static Encoding) -> Result<Vec<String>> {
    let text = decode_file(path.as_ref(), encoding)?;
    Ok(split_lines(&text).map(str::to_string).collect())
}

/// Read a UTF-8 file into one string, each line trimmed and ended by `\n`.
///
/// Trimming strips ASCII control characters and spaces only; Unicode
/// whitespace such as U+00A0 is kept.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    read_text_with_encoding(path, UTF_8.name())
}

/// Read a file into one string, each line trimmed and ended by `\n`.
pub fn read_text_with_encoding(path: impl AsRef<Path>, label: &str) -> Result<String> {
    let lines = read_lines_with_encoding(path, label)?;
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        text.push_str(line.trim_matches(|c: char| c <= ' '));
        text.push('\n');
    }
    Ok(text)
}

/// Write `contents` to `path`, creating missing parent directories first.
///
/// An existing file is truncated.
pub fn save_text(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CraftboxError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| CraftboxError::io(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Saved text file");
    Ok(())
}

pub(crate) fn decode_file(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CraftboxError::io(path, e))?;
    debug!(path = %path.display(), encoding = encoding.name(), bytes = bytes.len(), "Read text file");
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| CraftboxError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

/// Split on `\n`, `\r\n`, and lone `\r`, without a trailing empty line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
