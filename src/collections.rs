//! Membership checks over a fixed list of candidates

/// Returns true if `what` equals any of `candidates`.
///
/// Floats use IEEE equality: `NaN` never matches and `0.0` matches `-0.0`.
pub fn contains<T: PartialEq>(what: &T, candidates: &[T]) -> bool {
    candidates.iter().any(|candidate| candidate == what)
}

/// String flavour of [`contains`] for borrowed candidate lists.
pub fn contains_str(what: &str, candidates: &[&str]) -> bool {
    candidates.contains(&what)
}
