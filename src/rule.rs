//! Catalogue of built-in rules and their message templates.
//!
//! Every check in [`checks`](crate::checks) reports one of the rules below.
//! A failure's `rule` and `params` are enough to regenerate its default
//! message, which is how [`Failure::default_message`](crate::Failure::default_message)
//! works.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::Param;

/// A built-in validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `[min]`: value must be `min` or more.
    Min,
    /// `[max]`: value must be `max` or less.
    Max,
    /// `[]`: collection must have at least one element.
    NotEmpty,
    /// `[n]`: collection must have exactly `n` elements.
    Size,
    /// `[min, max]`: collection size must be within bounds.
    SizeBetween,
    /// `[allowed]`: value must be one of the allowed values.
    OneOf,
    /// `[]`: string must not be empty.
    NotBlank,
    /// `[n]`: string must be exactly `n` bytes long.
    Length,
    /// `[min, max]`: string length must be within bounds.
    LengthBetween,
    /// `[pattern]`: string must match a regular expression.
    Match,
    /// `[]`: string must only hold ASCII letters and digits.
    Alphanumeric,
}

impl Rule {
    /// All built-in rules.
    pub const ALL: [Rule; 11] = [
        Rule::Min,
        Rule::Max,
        Rule::NotEmpty,
        Rule::Size,
        Rule::SizeBetween,
        Rule::OneOf,
        Rule::NotBlank,
        Rule::Length,
        Rule::LengthBetween,
        Rule::Match,
        Rule::Alphanumeric,
    ];

    /// Returns the machine name stored in [`Failure::rule`](crate::Failure::rule).
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::NotEmpty => "not_empty",
            Rule::Size => "size",
            Rule::SizeBetween => "size_between",
            Rule::OneOf => "one_of",
            Rule::NotBlank => "not_blank",
            Rule::Length => "length",
            Rule::LengthBetween => "length_between",
            Rule::Match => "match",
            Rule::Alphanumeric => "alphanumeric",
        }
    }

    /// Returns how many parameters the rule's template expects.
    pub fn arity(&self) -> usize {
        match self {
            Rule::NotEmpty | Rule::NotBlank | Rule::Alphanumeric => 0,
            Rule::Min | Rule::Max | Rule::Size | Rule::OneOf | Rule::Length | Rule::Match => 1,
            Rule::SizeBetween | Rule::LengthBetween => 2,
        }
    }

    /// Renders the default message for this rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Arity`] if `params` does not hold exactly the
    /// number of parameters the template expects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::{Param, Rule};
    ///
    /// let message = Rule::LengthBetween.message(&[Param::Int(1), Param::Int(25)]).unwrap();
    /// assert_eq!(message, "length must be between 1 and 25");
    ///
    /// let allowed = Param::List(vec!["draft".into(), "live".into(), "gone".into()]);
    /// let message = Rule::OneOf.message(&[allowed]).unwrap();
    /// assert_eq!(message, "must be one of: draft, live or gone");
    /// ```
    pub fn message(&self, params: &[Param]) -> Result<String, RuleError> {
        let message = match (self, params) {
            (Rule::Min, [min]) => format!("must be {} or more", min),
            (Rule::Max, [max]) => format!("must be {} or less", max),
            (Rule::NotEmpty, []) => "cannot be empty".to_string(),
            (Rule::Size, [n]) => format!("size must be {}", n),
            (Rule::SizeBetween, [min, max]) => {
                format!("size must be between {} and {}", min, max)
            }
            (Rule::OneOf, [allowed]) => match allowed {
                Param::List(items) => format!("must be one of: {}", format_list(items)),
                other => format!("must be one of: {}", other),
            },
            (Rule::NotBlank, []) => "cannot be blank".to_string(),
            (Rule::Length, [n]) => format!("length must be {}", n),
            (Rule::LengthBetween, [min, max]) => {
                format!("length must be between {} and {}", min, max)
            }
            (Rule::Match, [pattern]) => format!("must match {}", pattern),
            (Rule::Alphanumeric, []) => "must only contain letters a to z and digits".to_string(),
            _ => {
                return Err(RuleError::Arity {
                    rule: self.as_str(),
                    expected: self.arity(),
                    got: params.len(),
                })
            }
        };
        Ok(message)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| RuleError::Unknown(s.to_string()))
    }
}

/// Errors that can occur when looking up or rendering a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The name does not belong to any built-in rule.
    #[error("unknown rule '{0}'")]
    Unknown(String),

    /// The parameters do not fit the rule's template.
    #[error("rule '{rule}' expects {expected} param(s), got {got}")]
    Arity {
        /// The rule being rendered.
        rule: &'static str,
        /// Number of parameters the template expects.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },
}

/// Lists values the way `one_of` messages do: commas between all but the
/// last pair, `" or "` before the last.
///
/// ```rust
/// use vouch::rule::format_list;
///
/// assert_eq!(format_list(&["a"]), "a");
/// assert_eq!(format_list(&["a", "b"]), "a or b");
/// assert_eq!(format_list(&[1, 2, 3]), "1, 2 or 3");
/// ```
pub fn format_list<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    let last = items.len().saturating_sub(1);
    for (i, item) in items.iter().enumerate() {
        if i > 0 && i == last {
            out.push_str(" or ");
        } else if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out
}
