//! Glyph Serialization
//!
//! Helpers used when turning a plotting document into JSON and back.
//!
//! # Core Operations
//!
//! - **Transform**: rebuild a [`Fragment`] with matching values replaced
//! - **Resolve**: turn `{id, type}` reference records into models from a
//!   caller-supplied [`ModelTable`], reporting dangling references to a
//!   [`DiagnosticSink`]
//!
//! Smaller helpers produce unique model ids ([`IdGenerator`]) and join URLs
//! ([`urljoin`]).
//!
//! # Example
//!
//! ```rust
//! use glyph_serialization::prelude::*;
//! use std::collections::HashMap;
//!
//! let doc: Fragment = serde_json::from_str(
//!     r#"[{"id": "foo", "type": "a"}, {"id": "bar", "type": "b"}]"#,
//! )
//! .unwrap();
//! let models = HashMap::from([("foo".to_string(), "S"), ("bar".to_string(), "T")]);
//!
//! let resolved = resolve_fragment(&doc, &models, &TracingSink).unwrap();
//! assert_eq!(resolved, vec![Some(&"S"), Some(&"T")]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod fragment;
pub mod ids;
pub mod reference;
pub mod resolve;
pub mod transform;
pub mod urls;

// Re-exports for convenience
pub use config::{SerializationSettings, SIMPLE_IDS_ENV};
pub use error::{ReferenceError, UrlError};
pub use fragment::{Fragment, Scalar};
pub use ids::{make_id, IdGenerator, IdStyle};
pub use reference::{references_from_fragment, Reference};
pub use resolve::{
    replace_references, resolve, resolve_fragment, DiagnosticSink, ModelTable, NullSink,
    TracingSink,
};
pub use transform::{transform, transform_nodes, try_transform};
pub use urls::urljoin;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with fragments
    pub use crate::fragment::{Fragment, Scalar};
    pub use crate::reference::Reference;
    pub use crate::resolve::{
        replace_references, resolve, resolve_fragment, DiagnosticSink, ModelTable, NullSink,
        TracingSink,
    };
    pub use crate::transform::{transform, transform_nodes, try_transform};
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn transform_then_resolve() {
        // Rename ids in a reference list, then resolve the renamed records.
        let doc = Fragment::from(json!([{"id": "old", "type": "Plot"}]));
        let renamed = transform(
            &doc,
            |s| matches!(s, Scalar::String(v) if v == "old"),
            |_| Fragment::from("new"),
        );
        let models = HashMap::from([("new".to_string(), 42)]);
        let out = resolve_fragment(&renamed, &models, &NullSink).unwrap();
        assert_eq!(out, vec![Some(&42)]);
    }

    #[test]
    fn reference_records_get_generated_ids() {
        let ids = IdGenerator::new(IdStyle::Simple);
        let reference = Reference::new(ids.next_id(), "Figure");
        assert_eq!(reference.to_fragment().get("id"), Some(&Fragment::from("1001")));
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
