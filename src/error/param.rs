//! Rule parameters.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single parameter of a violated rule, such as the bound of `min` or the
/// allowed values of `one_of`.
///
/// Parameters serialize untagged, so `[0]`, `[1.5]`, `["^a+$"]` and
/// `[["red", "green"]]` all appear in JSON exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    /// An integral bound or size.
    Int(i64),
    /// A floating point bound.
    Float(f64),
    /// Free text, such as a regex pattern.
    Str(String),
    /// A list of values, such as the allowed values of `one_of`.
    List(Vec<String>),
}

impl Param {
    /// Returns the integer value, if this is an [`Param::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Param::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is a [`Param::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list value, if this is a [`Param::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Param::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Int(n) => write!(f, "{}", n),
            Param::Float(x) => write!(f, "{}", x),
            Param::Str(s) => f.write_str(s),
            Param::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Param {
                fn from(n: $t) -> Self {
                    Param::Int(i64::from(n))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond i64 keep their digits as text.
macro_rules! wide_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Param {
                fn from(n: $t) -> Self {
                    i64::try_from(n).map_or_else(|_| Param::Str(n.to_string()), Param::Int)
                }
            }
        )*
    };
}

wide_param!(u64, usize, isize, i128, u128);

impl From<f32> for Param {
    fn from(x: f32) -> Self {
        Param::Float(f64::from(x))
    }
}

impl From<f64> for Param {
    fn from(x: f64) -> Self {
        Param::Float(x)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Str(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Str(s)
    }
}

impl From<char> for Param {
    fn from(c: char) -> Self {
        Param::Str(c.to_string())
    }
}

impl From<Vec<String>> for Param {
    fn from(items: Vec<String>) -> Self {
        Param::List(items)
    }
}

impl From<&[&str]> for Param {
    fn from(items: &[&str]) -> Self {
        Param::List(items.iter().map(|s| s.to_string()).collect())
    }
}
