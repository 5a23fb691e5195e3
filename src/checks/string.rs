//! String shape checks.
//!
//! Lengths are counted in UTF-8 bytes.

use regex::Regex;

use crate::error::{Check, Failure, Param};
use crate::rule::Rule;

/// Checks that `val` is not the empty string.
///
/// Whitespace counts as content.
pub fn not_blank(key: &str, val: &str) -> Check {
    if val.is_empty() {
        Some(Failure::from_rule(key, Rule::NotBlank, Vec::new()))
    } else {
        None
    }
}

/// Checks that `val` is exactly `n` bytes long.
///
/// ```rust
/// use vouch::checks;
///
/// assert!(checks::length("postal_code", "ABAB", 4).is_none());
/// assert!(checks::length("postal_code", "ABA", 4).is_some());
/// ```
pub fn length(key: &str, val: &str, n: usize) -> Check {
    if val.len() != n {
        Some(Failure::from_rule(key, Rule::Length, vec![Param::from(n)]))
    } else {
        None
    }
}

/// Checks that `val` is between `min` and `max` bytes long, inclusive.
pub fn length_between(key: &str, val: &str, min: usize, max: usize) -> Check {
    let len = val.len();
    if len < min || len > max {
        Some(Failure::from_rule(
            key,
            Rule::LengthBetween,
            vec![Param::from(min), Param::from(max)],
        ))
    } else {
        None
    }
}

/// Checks that `val` matches `re`.
///
/// The rule is reported as `match`, with the pattern source as its parameter.
///
/// ```rust
/// use regex::Regex;
/// use vouch::checks;
///
/// let issn = Regex::new(r"^[0-9]{4}-[0-9]{3}[0-9X]$").unwrap();
/// assert!(checks::matches("issn", "1940-5758", &issn).is_none());
///
/// let failure = checks::matches("issn", "1940", &issn).unwrap();
/// assert_eq!(failure.rule, "match");
/// assert_eq!(failure.to_string(), r"issn must match ^[0-9]{4}-[0-9]{3}[0-9X]$");
/// ```
pub fn matches(key: &str, val: &str, re: &Regex) -> Check {
    if re.is_match(val) {
        None
    } else {
        Some(Failure::from_rule(key, Rule::Match, vec![Param::from(re.as_str())]))
    }
}

/// Checks that `val` is non-empty and only holds ASCII letters and digits.
pub fn alphanumeric(key: &str, val: &str) -> Check {
    if !val.is_empty() && val.chars().all(|c| c.is_ascii_alphanumeric()) {
        None
    } else {
        Some(Failure::from_rule(key, Rule::Alphanumeric, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("title", "A title").is_none());
        assert!(not_blank("title", " ").is_none());

        let failure = not_blank("title", "").unwrap();
        assert_eq!(failure.rule, "not_blank");
        assert!(failure.params.is_empty());
        assert_eq!(failure.to_string(), "title cannot be blank");
    }

    #[test]
    fn test_length() {
        let failure = length("code", "abc", 4).unwrap();
        assert_eq!(failure.params, vec![Param::Int(4)]);
        assert_eq!(failure.to_string(), "code length must be 4");
    }

    #[test]
    fn test_length_counts_bytes() {
        assert!(length("word", "日本語", 9).is_none());

        let failure = length("word", "日本語", 3).unwrap();
        assert_eq!(failure.to_string(), "word length must be 3");

        assert!(length_between("word", "🎉🎊", 1, 2).is_some());
        assert!(length_between("word", "🎉🎊", 8, 8).is_none());
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("tag", "childcare", 1, 25).is_none());
        assert!(length_between("tag", "a", 1, 25).is_none());

        let failure = length_between("tag", "", 1, 25).unwrap();
        assert_eq!(failure.rule, "length_between");
        assert_eq!(failure.params, vec![Param::Int(1), Param::Int(25)]);
        assert_eq!(failure.to_string(), "tag length must be between 1 and 25");

        assert!(length_between("tag", "abcdef", 1, 5).is_some());
    }

    #[test]
    fn test_matches() {
        let re = Regex::new(r"^\d+$").unwrap();
        assert!(matches("zip", "12345", &re).is_none());

        let failure = matches("zip", "12a45", &re).unwrap();
        assert_eq!(failure.params, vec![Param::Str(r"^\d+$".to_string())]);
        assert_eq!(failure.message.as_deref(), Some(r"must match ^\d+$"));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric("handle", "abcXYZ019").is_none());

        for bad in ["", "a-b", "with space", "é"] {
            let failure = alphanumeric("handle", bad).unwrap();
            assert_eq!(failure.rule, "alphanumeric");
            assert_eq!(
                failure.to_string(),
                "handle must only contain letters a to z and digits"
            );
        }
    }
}
