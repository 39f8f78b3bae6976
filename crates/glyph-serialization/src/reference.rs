//! Model reference records
//!
//! A reference is a small map `{"id": ..., "type": ...}` pointing at a model
//! held elsewhere. Extra fields are ignored.

use crate::error::ReferenceError;
use crate::fragment::Fragment;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Pointer to a model by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Model identifier, the lookup key
    pub id: String,
    /// Model type name, carried for diagnostics
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Reference {
    /// Create new reference
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
        }
    }

    /// Read a reference out of a map fragment
    ///
    /// # Errors
    ///
    /// - [`ReferenceError::NotAMap`] if `fragment` is not a map
    /// - [`ReferenceError::MissingField`] if `id` or `type` is absent
    /// - [`ReferenceError::InvalidField`] if either field is not a string
    pub fn from_fragment(fragment: &Fragment) -> Result<Self, ReferenceError> {
        let Some(map) = fragment.as_map() else {
            return Err(ReferenceError::NotAMap {
                found: fragment.kind(),
            });
        };

        let field = |name: &'static str| -> Result<String, ReferenceError> {
            let value = map
                .get(name)
                .ok_or(ReferenceError::MissingField { field: name })?;
            value
                .as_str()
                .map(str::to_owned)
                .ok_or(ReferenceError::InvalidField {
                    field: name,
                    found: value.kind(),
                })
        };

        Ok(Self {
            id: field("id")?,
            type_name: field("type")?,
        })
    }

    /// Check if a fragment has the shape of a reference
    #[must_use]
    pub fn is_reference(fragment: &Fragment) -> bool {
        fragment.get("id").and_then(Fragment::as_str).is_some()
            && fragment.get("type").and_then(Fragment::as_str).is_some()
    }

    /// Render as a map fragment
    #[must_use]
    pub fn to_fragment(&self) -> Fragment {
        Fragment::map([
            ("id", Fragment::string(&self.id)),
            ("type", Fragment::string(&self.type_name)),
        ])
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self.id)
    }
}

impl TryFrom<&Fragment> for Reference {
    type Error = ReferenceError;

    fn try_from(fragment: &Fragment) -> Result<Self, Self::Error> {
        Self::from_fragment(fragment)
    }
}

/// Read every record of a list fragment
///
/// # Errors
///
/// [`ReferenceError::NotAList`] for a non-list input; otherwise the first
/// malformed record, wrapped with its index.
pub fn references_from_fragment(fragment: &Fragment) -> Result<Vec<Reference>, ReferenceError> {
    let Some(items) = fragment.as_list() else {
        return Err(ReferenceError::NotAList {
            found: fragment.kind(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Reference::from_fragment(item).map_err(|e| e.at_index(index)))
        .collect()
}
