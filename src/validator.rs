//! Failure aggregation and scoped path building.
//!
//! This module provides the [`Validator`] that owns the failures of one
//! validation pass and the [`Builder`] cursors that scope failures into named
//! fields and array slots before forwarding them to it.

use parking_lot::Mutex;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::error::{Check, Failure, Failures};
use crate::path::{join, push_index};
use crate::ValidationResult;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the given checks through a fresh [`Validator`] and returns the
/// failures.
///
/// ```rust
/// use vouch::checks;
///
/// let failures = vouch::validate([
///     checks::not_blank("title", "Dune"),
///     checks::length_between("isbn", "123", 10, 13),
/// ]);
/// assert_eq!(failures.to_string(), "isbn length must be between 10 and 13");
/// ```
pub fn validate<I>(checks: I) -> Failures
where
    I: IntoIterator,
    I::Item: Into<Check>,
{
    Validator::with(checks).into_failures()
}

/// Accumulates the failures of one validation pass.
///
/// Checks that passed (`None`) are discarded; everything else is kept in
/// discovery order. Use [`Validator::field`] and [`Validator::index`] to get
/// a [`Builder`] that prefixes paths for nested data.
///
/// The collection sits behind a lock, so a validator can be shared across
/// threads. Failures from different threads land in lock-acquisition order;
/// [`Builder::par_each`] keeps index order instead.
///
/// # Example
///
/// ```rust
/// use vouch::{checks, Validator};
///
/// let validator = Validator::new();
/// validator
///     .field("user")
///     .add(checks::not_blank("name", ""))
///     .add(checks::min("age", -1, 0));
///
/// assert!(!validator.is_valid());
/// assert_eq!(
///     validator.result().to_string(),
///     "user.name cannot be blank; user.age must be 0 or more"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    failures: Mutex<Failures>,
}

impl Validator {
    /// Creates a validator with no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator and adds the given checks to it.
    pub fn with<I>(checks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Check>,
    {
        let validator = Self::new();
        validator.add(checks);
        validator
    }

    /// Records every present failure and returns self for chaining.
    ///
    /// Accepts a single [`Check`], an array of checks, or any iterator of
    /// failures.
    pub fn add<I>(&self, checks: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Check>,
    {
        for failure in checks.into_iter().filter_map(|check| -> Check { check.into() }) {
            self.record(failure);
        }
        self
    }

    /// Returns a builder scoped to the named field.
    ///
    /// Both the path and the namespace of failures added through it start
    /// with `key`.
    pub fn field(&self, key: impl Into<String>) -> Builder<'_> {
        let key = key.into();
        Builder {
            validator: self,
            namespace: key.clone(),
            path: key,
        }
    }

    /// Returns a builder scoped to array slot `i`.
    ///
    /// Only the path gets the `[i]` prefix; the namespace stays empty.
    pub fn index(&self, i: usize) -> Builder<'_> {
        Builder {
            validator: self,
            namespace: String::new(),
            path: push_index("", i),
        }
    }

    /// Calls `f` with a builder scoped to `[i]` for each item, in order.
    pub fn each<T, I, F>(&self, items: I, f: F) -> &Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(Builder<'_>, T),
    {
        self.root().each(items, f);
        self
    }

    /// Like [`Validator::each`], but validates items on the rayon pool.
    ///
    /// Failures are appended in index order.
    #[cfg(feature = "parallel")]
    pub fn par_each<T, F>(&self, items: &[T], f: F) -> &Self
    where
        T: Sync,
        F: Fn(Builder<'_>, &T) + Sync + Send,
    {
        self.root().par_each(items, f);
        self
    }

    /// Returns the first failure recorded at exactly `path`.
    pub fn get(&self, path: &str) -> Option<Failure> {
        self.failures.lock().iter().find(|f| f.path == path).cloned()
    }

    /// Returns true if no failure has been recorded.
    pub fn is_valid(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Returns the number of recorded failures.
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Returns true if no failure has been recorded.
    pub fn is_empty(&self) -> bool {
        self.is_valid()
    }

    /// Returns a snapshot of the failures recorded so far.
    pub fn result(&self) -> Failures {
        self.failures.lock().clone()
    }

    /// Ends the pass and returns the recorded failures.
    pub fn into_failures(self) -> Failures {
        let failures = self.failures.into_inner();
        debug!(failures = failures.len(), "validation pass finished");
        failures
    }

    /// Ends the pass, returning `value` if no failure was recorded.
    ///
    /// ```rust
    /// use vouch::{checks, Validator};
    ///
    /// let title = "Dune";
    /// let result = Validator::with([checks::not_blank("title", title)]).finish(title);
    /// assert!(result.is_success());
    /// ```
    pub fn finish<T>(self, value: T) -> ValidationResult<T> {
        match self.into_failures().into_error() {
            Some(failures) => Validation::Failure(failures),
            None => Validation::Success(value),
        }
    }

    fn root(&self) -> Builder<'_> {
        Builder {
            validator: self,
            namespace: String::new(),
            path: String::new(),
        }
    }

    fn record(&self, failure: Failure) {
        trace!(path = %failure.path, rule = %failure.rule, "validation failure recorded");
        self.failures.lock().push(failure);
    }

    #[cfg(feature = "parallel")]
    fn append(&self, batch: Failures) {
        let mut failures = self.failures.lock();
        for failure in batch {
            trace!(path = %failure.path, rule = %failure.rule, "validation failure recorded");
            failures.push(failure);
        }
    }
}

/// A view of a [`Validator`] from a nested path.
///
/// Builders are cheap values: [`Builder::field`] and [`Builder::index`] return
/// new builders with longer prefixes and never change the one they were called
/// on. [`Builder::add`] rewrites each failure's path and namespace relative to
/// the builder's prefix and forwards it to the validator.
///
/// # Example
///
/// ```rust
/// use vouch::{checks, Validator};
///
/// let emails = ["a@example.com", ""];
/// let validator = Validator::new();
/// let contacts = validator.field("author").field("contacts");
///
/// for (i, email) in emails.iter().enumerate() {
///     contacts.index(i).add(checks::not_blank("email", email));
/// }
///
/// let failure = validator.get("author.contacts[1].email").unwrap();
/// assert_eq!(failure.namespace, "author.contacts");
/// ```
#[derive(Debug, Clone)]
pub struct Builder<'a> {
    validator: &'a Validator,
    namespace: String,
    path: String,
}

impl<'a> Builder<'a> {
    /// Returns a builder scoped one field deeper.
    pub fn field(&self, key: &str) -> Builder<'a> {
        Builder {
            validator: self.validator,
            namespace: join(&self.namespace, key),
            path: join(&self.path, key),
        }
    }

    /// Returns a builder scoped to array slot `i` of the current path.
    ///
    /// The namespace is left as is.
    pub fn index(&self, i: usize) -> Builder<'a> {
        Builder {
            validator: self.validator,
            namespace: self.namespace.clone(),
            path: push_index(&self.path, i),
        }
    }

    /// Prefixes every present failure with this builder's scope and forwards
    /// it to the validator. Returns self for chaining at the same scope.
    pub fn add<I>(&self, checks: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Check>,
    {
        for failure in checks.into_iter().filter_map(|check| -> Check { check.into() }) {
            self.validator.record(self.scope(failure));
        }
        self
    }

    /// Calls `f` with a builder scoped to `[i]` for each item, in order.
    ///
    /// ```rust
    /// use vouch::{checks, Validator};
    ///
    /// let tags = ["rust", "", "go"];
    /// let validator = Validator::new();
    /// validator.field("tags").each(tags, |tag, value| {
    ///     tag.add(checks::not_blank("", value));
    /// });
    ///
    /// assert!(validator.get("tags[1]").is_some());
    /// ```
    pub fn each<T, I, F>(&self, items: I, mut f: F) -> &Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(Builder<'a>, T),
    {
        for (i, item) in items.into_iter().enumerate() {
            f(self.index(i), item);
        }
        self
    }

    /// Like [`Builder::each`], but validates items on the rayon pool.
    ///
    /// Each item is validated into its own scratch validator; the batches are
    /// then appended in index order, so the result matches [`Builder::each`].
    #[cfg(feature = "parallel")]
    pub fn par_each<T, F>(&self, items: &[T], f: F) -> &Self
    where
        T: Sync,
        F: Fn(Builder<'_>, &T) + Sync + Send,
    {
        let namespace = &self.namespace;
        let path = &self.path;

        let batches: Vec<Failures> = items
            .par_iter()
            .enumerate()
            .map(|(i, item)| {
                let scratch = Validator::new();
                f(
                    Builder {
                        validator: &scratch,
                        namespace: namespace.clone(),
                        path: push_index(path, i),
                    },
                    item,
                );
                scratch.failures.into_inner()
            })
            .collect();

        for batch in batches {
            self.validator.append(batch);
        }
        self
    }

    /// Returns the path prefix of this builder.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the namespace prefix of this builder.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    // Builds a new failure instead of touching the caller's value in place.
    fn scope(&self, failure: Failure) -> Failure {
        if self.path.is_empty() {
            return failure;
        }
        Failure {
            namespace: join(&self.namespace, &failure.namespace),
            path: join(&self.path, &failure.path),
            ..failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;

    #[test]
    fn test_new_validator_is_valid() {
        let validator = Validator::new();
        assert!(validator.is_valid());
        assert!(validator.result().is_empty());
    }

    #[test]
    fn test_add_discards_passing_checks() {
        let validator = Validator::new();
        validator.add([checks::min("a", 5, 1), checks::max("b", 1, 5)]);
        assert!(validator.is_valid());
        assert_eq!(validator.len(), 0);
    }

    #[test]
    fn test_add_keeps_failures_in_order() {
        let validator = Validator::new();
        validator
            .add(checks::min("a", 0, 1))
            .add(checks::max("b", 9, 5))
            .add(checks::min("a", 0, 1));

        let paths: Vec<String> = validator.result().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_add_accepts_single_failure() {
        let validator = Validator::new();
        validator.add(Failure::new("a", "custom")).add(Failure::new("b", "custom"));
        validator.field("c").add(Failure::new("d", "custom"));

        let paths: Vec<String> = validator.result().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["a", "b", "c.d"]);
    }

    #[test]
    fn test_add_accepts_plain_failures() {
        let validator = Validator::new();
        validator.add(vec![Failure::new("a", "custom"), Failure::new("b", "custom")]);
        assert_eq!(validator.len(), 2);
    }

    #[test]
    fn test_field_sets_path_and_namespace() {
        let validator = Validator::new();
        let builder = validator.field("user");
        assert_eq!(builder.path(), "user");
        assert_eq!(builder.namespace(), "user");
    }

    #[test]
    fn test_index_sets_path_only() {
        let validator = Validator::new();
        let builder = validator.index(3);
        assert_eq!(builder.path(), "[3]");
        assert_eq!(builder.namespace(), "");
    }

    #[test]
    fn test_builder_field_and_index() {
        let validator = Validator::new();
        let builder = validator.field("author").field("contacts").index(2);
        assert_eq!(builder.path(), "author.contacts[2]");
        assert_eq!(builder.namespace(), "author.contacts");

        let builder = builder.field("email");
        assert_eq!(builder.path(), "author.contacts[2].email");
        assert_eq!(builder.namespace(), "author.contacts.email");
    }

    #[test]
    fn test_scoping_leaves_original_builder_untouched() {
        let validator = Validator::new();
        let users = validator.field("users");
        let _first = users.index(0);
        let _name = users.field("name");
        assert_eq!(users.path(), "users");
    }

    #[test]
    fn test_builder_add_rewrites_path_and_namespace() {
        let validator = Validator::new();
        validator
            .field("user")
            .add(Failure::new("name", "not_blank").with_namespace("profile"));

        let failure = validator.get("user.name").unwrap();
        assert_eq!(failure.namespace, "user.profile");
    }

    #[test]
    fn test_root_builder_does_not_rewrite() {
        let validator = Validator::new();
        validator.root().add(Failure::new("name", "not_blank"));
        assert_eq!(validator.result().first().unwrap().path, "name");
    }

    #[test]
    fn test_index_then_field_with_empty_failure_path() {
        let validator = Validator::new();
        validator.index(2).field("x").add(Failure::new("", "not_blank"));
        assert_eq!(validator.result().first().unwrap().path, "[2].x");
    }

    #[test]
    fn test_get_returns_first_match() {
        let validator = Validator::new();
        validator.add([
            Some(Failure::new("a", "min")),
            Some(Failure::new("a", "max")),
        ]);
        assert_eq!(validator.get("a").unwrap().rule, "min");
        assert!(validator.get("b").is_none());
    }

    #[test]
    fn test_each_scopes_by_index() {
        let validator = Validator::new();
        validator.each([3, -1, -2], |slot, n| {
            slot.add(checks::min("", n, 0));
        });

        let paths: Vec<String> = validator.result().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["[1]", "[2]"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_each_matches_each() {
        let names: Vec<String> = (0..64)
            .map(|i| if i % 3 == 0 { String::new() } else { format!("n{}", i) })
            .collect();

        let sequential = Validator::new();
        sequential.field("names").each(&names, |slot, name| {
            slot.add(checks::not_blank("", name));
        });

        let parallel = Validator::new();
        parallel.field("names").par_each(&names, |slot, name| {
            slot.add(checks::not_blank("", name));
        });

        assert_eq!(sequential.into_failures(), parallel.into_failures());
    }

    #[test]
    fn test_finish() {
        let ok = Validator::new().finish(7);
        assert!(ok.is_success());

        let err = Validator::with([checks::min("n", 0, 1)]).finish(0);
        assert!(err.is_failure());
        assert_eq!(err.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_validate_helper() {
        let failures = validate([checks::min("n", 0, 1), checks::max("m", 0, 1)]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures.first().unwrap().path, "n");
    }
}
