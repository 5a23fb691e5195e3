//! Path composition for nested field identifiers.
//!
//! Paths are plain strings such as `author.contacts[2].email`. Named fields are
//! joined with `.`, array slots are appended as `[i]` with no separator. Every
//! scope in [`Validator`](crate::Validator) and [`Builder`](crate::Builder)
//! composes paths through [`join`] and [`push_index`], so separators never
//! double up or dangle no matter how deep the nesting goes.

/// Joins two path fragments with a `.`.
///
/// Empty fragments are dropped rather than producing a leading, trailing or
/// doubled separator.
///
/// # Example
///
/// ```rust
/// use vouch::path::join;
///
/// assert_eq!(join("author", "email"), "author.email");
/// assert_eq!(join("author", ""), "author");
/// assert_eq!(join("", "email"), "email");
/// assert_eq!(join("", ""), "");
/// ```
pub fn join(p1: &str, p2: &str) -> String {
    match (p1.is_empty(), p2.is_empty()) {
        (false, false) => format!("{}.{}", p1, p2),
        (false, true) => p1.to_string(),
        _ => p2.to_string(),
    }
}

/// Appends an array slot to a path.
///
/// The bracket is attached directly, so an index never gets a `.` before it.
///
/// ```rust
/// use vouch::path::push_index;
///
/// assert_eq!(push_index("contacts", 2), "contacts[2]");
/// assert_eq!(push_index("", 0), "[0]");
/// ```
pub fn push_index(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}
