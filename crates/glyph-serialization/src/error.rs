//! Error types for the serialization helpers
//!
//! Each operation returns the error type of its own concern:
//! - Reference parsing (malformed `{id, type}` records)
//! - URL joining

/// Errors while reading reference records out of a fragment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Fragment handed to the resolver is not a list of records
    #[error("expected a list of reference records, got {found}")]
    NotAList {
        /// Kind of fragment that was found instead
        found: &'static str,
    },

    /// Record is not a map
    #[error("reference record must be a map, got {found}")]
    NotAMap {
        /// Kind of fragment that was found instead
        found: &'static str,
    },

    /// Required field absent
    #[error("reference record is missing field '{field}'")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// Field present but not a string
    #[error("reference field '{field}' must be a string, got {found}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Kind of fragment that was found instead
        found: &'static str,
    },

    /// Error in a specific record of a list
    #[error("record {index}: {source}")]
    AtIndex {
        /// Position of the record in the input list
        index: usize,
        /// Underlying record error
        #[source]
        source: Box<ReferenceError>,
    },
}

impl ReferenceError {
    /// Attach the position of the offending record
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(self),
        }
    }
}

/// Errors while joining URLs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Base or part could not be parsed or resolved
    #[error("invalid url '{input}': {source}")]
    InvalidUrl {
        /// Text that failed to parse
        input: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

impl UrlError {
    /// Create invalid url error
    pub fn invalid(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            source,
        }
    }
}
