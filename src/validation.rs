//! Input validation helpers

/// Returns true if `s` is a decimal integer that fits in an `i32`.
///
/// A single leading `+` or `-` is allowed; whitespace is not.
pub fn is_numeric(s: &str) -> bool {
    s.parse::<i32>().is_ok()
}
