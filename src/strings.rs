//! String helpers: zero padding and separator-based word extraction

use crate::error::{CraftboxError, Result};
use regex::Regex;

/// Pads an integer with leading zeros to at least three characters.
///
/// The sign counts toward the width: `-5` becomes `"-05"`.
pub fn zero_pad(value: i64) -> String {
    format!("{:03}", value)
}

/// Parses `value` as an integer, then pads it like [`zero_pad`].
pub fn zero_pad_str(value: &str) -> Result<String> {
    let parsed = value
        .parse::<i64>()
        .map_err(|source| CraftboxError::InvalidNumber {
            input: value.to_string(),
            source,
        })?;
    Ok(zero_pad(parsed))
}

/// Splits `what` around matches of the `separator` regular expression.
///
/// Trailing empty words are dropped, and so is the leading empty word produced
/// by a zero-width match at the very start. Input without any match (the empty
/// string included) yields a single word.
pub fn split_words<'a>(what: &'a str, separator: &str) -> Result<Vec<&'a str>> {
    let pattern = Regex::new(separator)?;

    if what.is_empty() {
        return Ok(vec![what]);
    }

    let leading_zero_width = pattern
        .find(what)
        .is_some_and(|m| m.start() == 0 && m.end() == 0);

    let mut words: Vec<&str> = pattern.split(what).collect();
    if leading_zero_width && words.first() == Some(&"") {
        words.remove(0);
    }
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }

    Ok(words)
}

/// Number of words in `what` as produced by [`split_words`].
pub fn word_count(what: &str, separator: &str) -> Result<usize> {
    Ok(split_words(what, separator)?.len())
}

/// Returns the word at the 1-based `index`, or `""` when out of range.
pub fn word_at<'a>(what: &'a str, index: usize, separator: &str) -> Result<&'a str> {
    let words = split_words(what, separator)?;
    Ok(index
        .checked_sub(1)
        .and_then(|i| words.get(i).copied())
        .unwrap_or(""))
}
