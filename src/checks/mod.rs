//! Built-in field checks.
//!
//! Every check takes the field key, the value and the rule's parameters, and
//! returns a [`Check`](crate::Check): `None` if the value passes, or a
//! [`Failure`](crate::Failure) whose rule, params and message follow the
//! [`Rule`](crate::Rule) catalogue.
//!
//! Checks are pure; their results are meant to be fed straight into a
//! [`Validator`](crate::Validator) or [`Builder`](crate::Builder).
//!
//! # Example
//!
//! ```rust
//! use vouch::{checks, Validator};
//!
//! let validator = Validator::new();
//! validator.add([
//!     checks::not_blank("title", "Dune"),
//!     checks::min("pages", 0, 1),
//!     checks::one_of("format", &"scroll", &["paperback", "hardcover", "ebook"]),
//! ]);
//!
//! assert_eq!(
//!     validator.result().to_string(),
//!     "pages must be 1 or more; format must be one of: paperback, hardcover or ebook"
//! );
//! ```

mod collection;
mod numeric;
mod string;

pub use collection::{not_empty, one_of, size, size_between};
pub use numeric::{max, min};
pub use string::{alphanumeric, length, length_between, matches, not_blank};
