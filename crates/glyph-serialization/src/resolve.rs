//! Reference resolver
//!
//! Looks up reference records in a caller-supplied model table. A missing
//! id is not an error: it becomes a missing marker in the output and one
//! report to the injected [`DiagnosticSink`].
//!
//! # Example
//!
//! ```
//! use glyph_serialization::{resolve, Reference, TracingSink};
//! use std::collections::HashMap;
//!
//! let models = HashMap::from([("foo".to_string(), "S")]);
//! let records = [Reference::new("foo", "a"), Reference::new("gone", "bad")];
//!
//! let resolved = resolve(&records, &models, &TracingSink);
//! assert_eq!(resolved, vec![Some(&"S"), None]);
//! ```

use crate::error::ReferenceError;
use crate::fragment::Fragment;
use crate::reference::{references_from_fragment, Reference};
use crate::transform::transform_nodes;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Lookup from model id to model
///
/// Borrowed for the duration of a resolve call; the resolver never stores
/// or mutates it.
pub trait ModelTable<V> {
    /// Get the model registered under `id`
    fn lookup(&self, id: &str) -> Option<&V>;
}

impl<V, S: BuildHasher> ModelTable<V> for HashMap<String, V, S> {
    #[inline]
    fn lookup(&self, id: &str) -> Option<&V> {
        self.get(id)
    }
}

impl<V> ModelTable<V> for BTreeMap<String, V> {
    #[inline]
    fn lookup(&self, id: &str) -> Option<&V> {
        self.get(id)
    }
}

impl<V, S: BuildHasher> ModelTable<V> for IndexMap<String, V, S> {
    #[inline]
    fn lookup(&self, id: &str) -> Option<&V> {
        self.get(id)
    }
}

/// Receiver of resolver diagnostics
pub trait DiagnosticSink {
    /// Called once per reference whose id is not in the model table
    fn missing_reference(&self, reference: &Reference);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn missing_reference(&self, reference: &Reference) {
        (**self).missing_reference(reference);
    }
}

/// Reports diagnostics as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn missing_reference(&self, reference: &Reference) {
        tracing::error!(
            id = %reference.id,
            model_type = %reference.type_name,
            "unknown reference to model of type '{}' (id '{}')",
            reference.type_name,
            reference.id
        );
    }
}

/// Discards diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline]
    fn missing_reference(&self, _reference: &Reference) {}
}

/// Resolve each record against `models`
///
/// The output has one entry per record, in input order: `Some(model)` when
/// the id is known, `None` otherwise. Each unknown record is reported to
/// `sink` exactly once. Duplicate records are looked up independently.
pub fn resolve<'m, V, T, S>(records: &[Reference], models: &'m T, sink: &S) -> Vec<Option<&'m V>>
where
    T: ModelTable<V> + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let resolved: Vec<_> = records
        .iter()
        .map(|reference| {
            let model = models.lookup(&reference.id);
            if model.is_none() {
                sink.missing_reference(reference);
            }
            model
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        missing = resolved.iter().filter(|m| m.is_none()).count(),
        "references resolved"
    );
    resolved
}

/// Resolve a raw list fragment of reference maps
///
/// All records are validated before any lookup, so a malformed input
/// produces no diagnostics.
///
/// # Errors
///
/// [`ReferenceError::NotAList`] for a non-list fragment, or the first
/// malformed record wrapped with its index.
pub fn resolve_fragment<'m, V, T, S>(
    fragment: &Fragment,
    models: &'m T,
    sink: &S,
) -> Result<Vec<Option<&'m V>>, ReferenceError>
where
    T: ModelTable<V> + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let records = references_from_fragment(fragment)?;
    Ok(resolve(&records, models, sink))
}

/// Replace every reference map inside `fragment` by its model
///
/// A map with string `id` and `type` fields is swapped for a clone of the
/// model fragment, or for `null` (plus one diagnostic) when the id is
/// unknown. Everything else is rebuilt unchanged. Models are not themselves
/// walked.
#[must_use]
pub fn replace_references<T, S>(fragment: &Fragment, models: &T, sink: &S) -> Fragment
where
    T: ModelTable<Fragment> + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    transform_nodes(fragment, Reference::is_reference, |node| {
        match Reference::from_fragment(node) {
            Ok(reference) => match models.lookup(&reference.id) {
                Some(model) => model.clone(),
                None => {
                    sink.missing_reference(&reference);
                    Fragment::null()
                }
            },
            // unreachable after the shape check, keep the node as is
            Err(_) => node.clone(),
        }
    })
}
