//! Collection size and membership checks.

use std::fmt::Display;

use crate::error::{Check, Failure, Param};
use crate::rule::Rule;

/// Checks that `val` has at least one element.
pub fn not_empty<T>(key: &str, val: &[T]) -> Check {
    if val.is_empty() {
        Some(Failure::from_rule(key, Rule::NotEmpty, Vec::new()))
    } else {
        None
    }
}

/// Checks that `val` has exactly `n` elements.
///
/// ```rust
/// use vouch::checks;
///
/// assert!(checks::size("authors", &["A. Nonymous"], 1).is_none());
/// assert_eq!(
///     checks::size("authors", &["A", "B"], 1).unwrap().to_string(),
///     "authors size must be 1"
/// );
/// ```
pub fn size<T>(key: &str, val: &[T], n: usize) -> Check {
    if val.len() != n {
        Some(Failure::from_rule(key, Rule::Size, vec![Param::from(n)]))
    } else {
        None
    }
}

/// Checks that `val` has between `min` and `max` elements, inclusive.
pub fn size_between<T>(key: &str, val: &[T], min: usize, max: usize) -> Check {
    if val.len() < min || val.len() > max {
        Some(Failure::from_rule(
            key,
            Rule::SizeBetween,
            vec![Param::from(min), Param::from(max)],
        ))
    } else {
        None
    }
}

/// Checks that `val` is one of `allowed`.
///
/// The allowed values are recorded as a single [`Param::List`] of their
/// display form.
pub fn one_of<T>(key: &str, val: &T, allowed: &[T]) -> Check
where
    T: PartialEq + Display,
{
    if allowed.contains(val) {
        None
    } else {
        let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
        Some(Failure::from_rule(key, Rule::OneOf, vec![Param::List(allowed)]))
    }
}
