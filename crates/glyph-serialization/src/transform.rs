//! Structure transformer
//!
//! Rebuilds a [`Fragment`] with selected values replaced. The input is only
//! borrowed; every walk returns a freshly built fragment with the same shape.
//!
//! Three walks are provided:
//!
//! - [`transform`]: predicate tested on scalars only, containers always descended
//! - [`transform_nodes`]: predicate tested on every node before descending
//! - [`try_transform`]: like [`transform`] with a fallible mapper
//!
//! Recursion depth equals nesting depth. Fragments own their children, so a
//! cyclic input cannot be built.

use crate::fragment::{Fragment, Scalar};
use indexmap::IndexMap;

/// Replace matching scalars anywhere inside `fragment`
///
/// Lists and maps are rebuilt element by element (map keys and their order
/// are kept). A scalar for which `predicate` holds is replaced by
/// `mapper(scalar)`, which may return any fragment; other scalars are cloned.
///
/// # Example
///
/// ```
/// use glyph_serialization::{transform, Fragment, Scalar};
///
/// let doc = Fragment::from(serde_json::json!([["goal", "junk"], "junk"]));
/// let out = transform(
///     &doc,
///     |s| matches!(s, Scalar::String(v) if v == "goal"),
///     |_| Fragment::from("goaled"),
/// );
/// assert_eq!(out, Fragment::from(serde_json::json!([["goaled", "junk"], "junk"])));
/// ```
#[must_use]
pub fn transform<P, M>(fragment: &Fragment, predicate: P, mapper: M) -> Fragment
where
    P: Fn(&Scalar) -> bool,
    M: Fn(&Scalar) -> Fragment,
{
    let out = walk_scalars(fragment, &predicate, &mapper);
    tracing::trace!(kind = fragment.kind(), "fragment transformed");
    out
}

fn walk_scalars<P, M>(fragment: &Fragment, predicate: &P, mapper: &M) -> Fragment
where
    P: Fn(&Scalar) -> bool,
    M: Fn(&Scalar) -> Fragment,
{
    match fragment {
        Fragment::List(items) => Fragment::List(
            items
                .iter()
                .map(|item| walk_scalars(item, predicate, mapper))
                .collect(),
        ),
        Fragment::Map(map) => Fragment::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), walk_scalars(value, predicate, mapper)))
                .collect(),
        ),
        Fragment::Scalar(scalar) if predicate(scalar) => mapper(scalar),
        Fragment::Scalar(scalar) => Fragment::Scalar(scalar.clone()),
    }
}

/// Replace matching nodes, containers included
///
/// `predicate` is tested on each node before its children. A matching node
/// is replaced by `mapper(node)` and its children are not visited; a
/// non-matching container is rebuilt with the walk applied to its children.
#[must_use]
pub fn transform_nodes<P, M>(fragment: &Fragment, predicate: P, mapper: M) -> Fragment
where
    P: Fn(&Fragment) -> bool,
    M: Fn(&Fragment) -> Fragment,
{
    walk_nodes(fragment, &predicate, &mapper)
}

fn walk_nodes<P, M>(fragment: &Fragment, predicate: &P, mapper: &M) -> Fragment
where
    P: Fn(&Fragment) -> bool,
    M: Fn(&Fragment) -> Fragment,
{
    if predicate(fragment) {
        return mapper(fragment);
    }
    match fragment {
        Fragment::List(items) => Fragment::List(
            items
                .iter()
                .map(|item| walk_nodes(item, predicate, mapper))
                .collect(),
        ),
        Fragment::Map(map) => Fragment::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), walk_nodes(value, predicate, mapper)))
                .collect(),
        ),
        Fragment::Scalar(_) => fragment.clone(),
    }
}

/// Replace matching scalars with a fallible mapper
///
/// Walk order is depth first, list elements and map entries in order. The
/// first mapper error stops the walk and is returned.
///
/// # Errors
///
/// Returns the first error produced by `mapper`.
pub fn try_transform<P, M, E>(fragment: &Fragment, predicate: P, mapper: M) -> Result<Fragment, E>
where
    P: Fn(&Scalar) -> bool,
    M: Fn(&Scalar) -> Result<Fragment, E>,
{
    try_walk(fragment, &predicate, &mapper)
}

fn try_walk<P, M, E>(fragment: &Fragment, predicate: &P, mapper: &M) -> Result<Fragment, E>
where
    P: Fn(&Scalar) -> bool,
    M: Fn(&Scalar) -> Result<Fragment, E>,
{
    Ok(match fragment {
        Fragment::List(items) => Fragment::List(
            items
                .iter()
                .map(|item| try_walk(item, predicate, mapper))
                .collect::<Result<Vec<_>, E>>()?,
        ),
        Fragment::Map(map) => Fragment::Map(
            map.iter()
                .map(|(key, value)| -> Result<(String, Fragment), E> {
                    Ok((key.clone(), try_walk(value, predicate, mapper)?))
                })
                .collect::<Result<IndexMap<_, _>, E>>()?,
        ),
        Fragment::Scalar(scalar) if predicate(scalar) => mapper(scalar)?,
        Fragment::Scalar(scalar) => Fragment::Scalar(scalar.clone()),
    })
}
