//! # Vouch
//!
//! Field validation checks that accumulate ALL failures of a validation pass,
//! each tagged with the dotted/bracketed path of the offending field.
//!
//! ## Overview
//!
//! Checks are plain functions shaped `(key, value, params...) -> Check`. A
//! passing value yields `None`; a failing one yields a [`Failure`]. Results are
//! fed into a [`Validator`], directly for flat data or through a [`Builder`]
//! for nested data, and read out at the end as one [`Failures`] collection.
//!
//! ## Core Types
//!
//! - [`Failure`]: a single failed check (namespace, path, rule, params, message)
//! - [`Failures`]: the ordered failures of a pass, rendered joined by `"; "`
//! - [`Validator`]: owns the failures of one pass
//! - [`Builder`]: a scoped view of a validator that prefixes paths
//! - [`Rule`]: the catalogue of built-in rules and their message templates
//!
//! ## Example
//!
//! ```rust
//! use vouch::{checks, Validator};
//!
//! struct Contact {
//!     email: String,
//! }
//!
//! let contacts = vec![
//!     Contact { email: "ada@example.com".into() },
//!     Contact { email: "".into() },
//! ];
//!
//! let validator = Validator::new();
//! let author = validator.field("author");
//! author.add(checks::size_between("contacts", &contacts, 1, 5));
//! author.field("contacts").each(&contacts, |contact, c| {
//!     contact.add(checks::not_blank("email", &c.email));
//! });
//!
//! let failures = validator.into_failures();
//! assert_eq!(failures.to_string(), "author.contacts[1].email cannot be blank");
//! ```

pub mod checks;
pub mod error;
pub mod path;
pub mod rule;
pub mod validator;

pub use error::{Check, CheckExt, Failure, Failures, Param};
pub use rule::{Rule, RuleError};
pub use validator::{validate, Builder, Validator};

/// Type alias for validation results using [`Failures`].
pub type ValidationResult<T> = stillwater::Validation<T, Failures>;
