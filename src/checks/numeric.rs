//! Numeric bound checks.

use crate::error::{Check, Failure, Param};
use crate::rule::Rule;

/// Checks that `val` is greater than or equal to `min`.
///
/// ```rust
/// use vouch::checks;
///
/// assert!(checks::min("count", 2, 1).is_none());
/// assert_eq!(checks::min("count", 0, 1).unwrap().to_string(), "count must be 1 or more");
/// ```
pub fn min<T>(key: &str, val: T, min: T) -> Check
where
    T: PartialOrd + Into<Param>,
{
    if val < min {
        Some(Failure::from_rule(key, Rule::Min, vec![min.into()]))
    } else {
        None
    }
}

/// Checks that `val` is less than or equal to `max`.
///
/// ```rust
/// use vouch::checks;
///
/// assert!(checks::max("count", 1, 2).is_none());
/// assert_eq!(checks::max("ratio", 0.9, 0.5).unwrap().to_string(), "ratio must be 0.5 or less");
/// ```
pub fn max<T>(key: &str, val: T, max: T) -> Check
where
    T: PartialOrd + Into<Param>,
{
    if val > max {
        Some(Failure::from_rule(key, Rule::Max, vec![max.into()]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_boundary_passes() {
        assert!(min("n", 1, 1).is_none());
        assert!(min("n", 1.0, 1.0).is_none());
    }

    #[test]
    fn test_min_failure() {
        let failure = min("n", -1i64, 0).unwrap();
        assert_eq!(failure.rule, "min");
        assert_eq!(failure.params, vec![Param::Int(0)]);
        assert_eq!(failure.message.as_deref(), Some("must be 0 or more"));
    }

    #[test]
    fn test_max_boundary_passes() {
        assert!(max("n", 10u8, 10).is_none());
    }

    #[test]
    fn test_max_failure_with_float() {
        let failure = max("ratio", 1.5, 1.25).unwrap();
        assert_eq!(failure.rule, "max");
        assert_eq!(failure.params, vec![Param::Float(1.25)]);
        assert_eq!(failure.to_string(), "ratio must be 1.25 or less");
    }

    #[test]
    fn test_nan_never_fails() {
        assert!(min("x", f64::NAN, 0.0).is_none());
        assert!(max("x", f64::NAN, 0.0).is_none());
    }
}
