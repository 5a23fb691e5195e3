//! Failure types for validation passes.
//!
//! This module provides the value a failed check produces ([`Failure`]), its
//! parameters ([`Param`]) and the ordered collection a pass ends with
//! ([`Failures`]).

mod failure;
mod param;

pub use failure::{Check, CheckExt, Failure, Failures};
pub use param::Param;
