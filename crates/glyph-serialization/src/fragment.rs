//! JSON-like document fragments
//!
//! Provides [`Fragment`], the nested value walked by the transformer and the
//! resolver. Fragments convert losslessly to and from [`serde_json::Value`]
//! and serialize as plain JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::{self, Display, Formatter};

/// Leaf value of a fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON `null`, also used as the missing-reference marker
    Null,
    /// Boolean
    Bool(bool),
    /// Integer or float
    Number(Number),
    /// String
    String(String),
}

impl Scalar {
    /// Name of the scalar kind, for diagnostics
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

/// Nested document value
///
/// Maps keep insertion order so a rebuilt fragment lists its keys the same
/// way the input did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    /// Leaf value
    Scalar(Scalar),
    /// Ordered sequence
    List(Vec<Fragment>),
    /// String-keyed mapping
    Map(IndexMap<String, Fragment>),
}

impl Fragment {
    /// The `null` fragment
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// String fragment
    #[inline]
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }

    /// Map fragment from key/value pairs
    #[must_use]
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Fragment)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Name of the fragment kind, for diagnostics
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Check if this is a leaf
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check if this is `null`
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Borrow as string, if this is a string scalar
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Borrow as list
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Fragment]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as map
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Fragment>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get a map entry by key (`None` for non-maps)
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Fragment> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Number of nested levels (a scalar has depth 0)
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
            Self::Map(map) => 1 + map.values().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::null()
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Scalar(Scalar::Null) => Value::Null,
            Fragment::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Fragment::Scalar(Scalar::Number(n)) => Value::Number(n),
            Fragment::Scalar(Scalar::String(s)) => Value::String(s),
            Fragment::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Fragment::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Scalar> for Fragment {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<bool> for Fragment {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Fragment {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Fragment {
    /// Non-finite floats have no JSON form and become `null`
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or_else(Self::null, |n| Self::Scalar(Scalar::Number(n)))
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(items: Vec<Fragment>) -> Self {
        Self::List(items)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}
