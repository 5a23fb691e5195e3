//! Validation failure types.
//!
//! This module provides [`Failure`] for a single failed check, [`Check`] for
//! the result of running one, and [`Failures`] for the ordered collection a
//! validation pass produces.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stillwater::prelude::*;

use super::param::Param;
use crate::rule::Rule;

/// The outcome of a single check: `None` when the value passed, `Some` with
/// the failure otherwise.
///
/// `None` is the only "no failure" state. It is never stored by a
/// [`Validator`](crate::Validator) and never rendered.
pub type Check = Option<Failure>;

/// A single failed check.
///
/// A `Failure` records:
/// - **namespace**: a machine-stable dotted identifier, empty unless scoped
/// - **path**: the dotted/bracketed identifier of the offending field
/// - **rule**: the short machine name of the violated rule (e.g. `min`)
/// - **params**: the rule's parameters, in order
/// - **message**: optional human-readable text
///
/// # Example
///
/// ```rust
/// use vouch::Failure;
///
/// let failure = Failure::new("age", "min").with_param(18);
/// assert_eq!(failure.to_string(), "age min[18]");
///
/// let failure = failure.with_message("must be an adult");
/// assert_eq!(failure.to_string(), "age must be an adult");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Machine-stable identifier of the scope the failure was recorded in.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Human-facing identifier of the offending field.
    pub path: String,
    /// Machine name of the violated rule.
    pub rule: String,
    /// Rule-specific parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    /// Precomputed message; rendering falls back to `rule[params]` without it.
    ///
    /// Always serialized, as `""` when absent.
    #[serde(
        default,
        serialize_with = "serialize_message",
        deserialize_with = "deserialize_message"
    )]
    pub message: Option<String>,
}

impl Failure {
    /// Creates a failure for `path` violating `rule`, with no parameters,
    /// namespace or message.
    ///
    /// The path is taken as-is; it can be a field name, a JSON pointer or a
    /// nested form key.
    pub fn new(path: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            path: path.into(),
            rule: rule.into(),
            params: Vec::new(),
            message: None,
        }
    }

    /// Creates a failure for one of the built-in rules.
    ///
    /// The message is filled in from the rule's template. If `params` do not
    /// fit the template the message is left empty and rendering falls back to
    /// `rule[params]`.
    ///
    /// ```rust
    /// use vouch::{Failure, Param, Rule};
    ///
    /// let failure = Failure::from_rule("age", Rule::Min, vec![Param::Int(0)]);
    /// assert_eq!(failure.to_string(), "age must be 0 or more");
    /// ```
    pub fn from_rule(path: impl Into<String>, rule: Rule, params: Vec<Param>) -> Self {
        let message = rule.message(&params).ok();
        Self {
            namespace: String::new(),
            path: path.into(),
            rule: rule.as_str().to_string(),
            params,
            message,
        }
    }

    /// Appends a parameter and returns self for chaining.
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Appends several parameters and returns self for chaining.
    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Sets (or overwrites) the message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the namespace and returns self for chaining.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Regenerates the default message of a built-in rule from `rule` and
    /// `params`.
    ///
    /// Returns `None` for custom rules or when the parameters do not fit the
    /// rule's template.
    pub fn default_message(&self) -> Option<String> {
        self.rule
            .parse::<Rule>()
            .ok()
            .and_then(|rule| rule.message(&self.params).ok())
    }

    /// Renders everything after the path: the message, else `rule[params]`,
    /// else nothing.
    pub fn detail(&self) -> String {
        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => message.to_string(),
            None if self.rule.is_empty() => String::new(),
            None if self.params.is_empty() => self.rule.clone(),
            None => {
                let params: Vec<String> = self.params.iter().map(Param::to_string).collect();
                format!("{}[{}]", self.rule, params.join(", "))
            }
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.detail())
    }
}

impl std::error::Error for Failure {}

/// A single failure can be added wherever checks are accepted.
impl IntoIterator for Failure {
    type Item = Failure;
    type IntoIter = std::iter::Once<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self)
    }
}

fn serialize_message<S: Serializer>(message: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(message.as_deref().unwrap_or(""))
}

// `null` and `""` both mean no message.
fn deserialize_message<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let message: Option<String> = Option::deserialize(d)?;
    Ok(message.filter(|m| !m.is_empty()))
}

/// Absence-safe builder methods for [`Check`] results.
///
/// Check functions return `Option<Failure>`; these methods let call sites
/// keep chaining whether or not the check failed.
///
/// ```rust
/// use vouch::{checks, CheckExt};
///
/// let passed = checks::not_blank("title", "A title").with_message("title is required");
/// assert!(passed.is_absent());
///
/// let failed = checks::not_blank("title", "").with_message("title is required");
/// assert_eq!(failed.unwrap().to_string(), "title title is required");
/// ```
pub trait CheckExt {
    /// Sets the message of a present failure; leaves `None` untouched.
    fn with_message(self, message: impl Into<String>) -> Self;

    /// Returns true only for the "no failure" state.
    fn is_absent(&self) -> bool;
}

impl CheckExt for Check {
    fn with_message(self, message: impl Into<String>) -> Self {
        self.map(|failure| failure.with_message(message))
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

// Failures may be collected on rayon workers and handed across threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Failure>();
    assert_sync::<Failure>();
};

/// The ordered failures of one validation pass.
///
/// Order is discovery order. Nothing is deduplicated: the same path appears
/// once per rule it violated. An empty collection means the input was valid;
/// use [`Failures::into_error`] or [`Failures::into_result`] to turn it into
/// an error signal.
///
/// # Example
///
/// ```rust
/// use vouch::{checks, Validator};
///
/// let validator = Validator::new();
/// validator.add([checks::not_blank("name", ""), checks::min("age", -1, 0)]);
///
/// let failures = validator.into_failures();
/// assert_eq!(failures.len(), 2);
/// assert_eq!(failures.to_string(), "name cannot be blank; age must be 0 or more");
/// assert!(failures.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Failures(Vec<Failure>);

impl Failures {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the failures in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.0.iter()
    }

    /// Returns the first failure, if any.
    pub fn first(&self) -> Option<&Failure> {
        self.0.first()
    }

    /// Returns all failures recorded at exactly `path`.
    pub fn at_path(&self, path: &str) -> Vec<&Failure> {
        self.0.iter().filter(|f| f.path == path).collect()
    }

    /// Returns all failures of the given rule.
    pub fn with_rule(&self, rule: &str) -> Vec<&Failure> {
        self.0.iter().filter(|f| f.rule == rule).collect()
    }

    /// Groups the rendered details by path, in the order each path was first
    /// seen.
    ///
    /// ```rust
    /// use vouch::{checks, Validator};
    ///
    /// let validator = Validator::new();
    /// validator.add([
    ///     checks::length("code", "abc", 4),
    ///     checks::alphanumeric("code", "a-c"),
    /// ]);
    ///
    /// let grouped = validator.result().by_path();
    /// assert_eq!(
    ///     grouped["code"],
    ///     vec!["length must be 4", "must only contain letters a to z and digits"]
    /// );
    /// ```
    pub fn by_path(&self) -> IndexMap<String, Vec<String>> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for failure in &self.0 {
            grouped
                .entry(failure.path.clone())
                .or_default()
                .push(failure.detail());
        }
        grouped
    }

    /// Returns the collection if it holds any failure, `None` otherwise.
    pub fn into_error(self) -> Option<Failures> {
        if self.0.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns `Err` with the collection if it holds any failure.
    pub fn into_result(self) -> Result<(), Failures> {
        match self.into_error() {
            Some(failures) => Err(failures),
            None => Ok(()),
        }
    }

    /// Converts this collection into a `Vec<Failure>`.
    pub fn into_vec(self) -> Vec<Failure> {
        self.0
    }

    /// Returns the failures as a slice.
    pub fn as_slice(&self) -> &[Failure] {
        &self.0
    }

    pub(crate) fn push(&mut self, failure: Failure) {
        self.0.push(failure);
    }
}

impl Semigroup for Failures {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failures {}

impl From<Vec<Failure>> for Failures {
    fn from(failures: Vec<Failure>) -> Self {
        Self(failures)
    }
}

impl FromIterator<Failure> for Failures {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Failure> for Failures {
    fn extend<I: IntoIterator<Item = Failure>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
