//! Resolver Tests
//!
//! Resolution of reference records against model tables, and the
//! diagnostics emitted for dangling references.

use glyph_serialization::prelude::*;
use glyph_test_utils::{
    capture_logs, error_lines, fragment, reference, sample_models, sample_reference_fragment,
    sample_references, RecordingSink,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_resolve_known_references() {
    let models = sample_models();
    let sink = RecordingSink::new();

    let out = resolve(&sample_references(), &models, &sink);

    assert_eq!(out, vec![Some(&"success"), Some(&"success"), Some(&"othersuccess")]);
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_resolve_appended_missing_reference() {
    let models = sample_models();
    let sink = RecordingSink::new();
    let mut records = sample_references();
    records.push(reference("notfoo", "badtype"));

    let out = resolve(&records, &models, &sink);

    assert_eq!(
        out,
        vec![Some(&"success"), Some(&"success"), Some(&"othersuccess"), None]
    );
    assert_eq!(sink.missing(), vec![reference("notfoo", "badtype")]);
}

#[test]
fn test_tracing_sink_logs_one_error_with_type() {
    let models = sample_models();
    let mut records = sample_references();
    records.push(reference("notfoo", "badtype"));

    let (out, logs) = capture_logs(|| resolve(&records, &models, &TracingSink).len());

    assert_eq!(out, 4);
    let errors = error_lines(&logs);
    assert_eq!(errors.len(), 1, "logs were:\n{logs}");
    assert!(errors[0].contains("badtype"));
    assert!(errors[0].contains("notfoo"));
    assert!(errors[0].contains("model_type=badtype"), "{}", errors[0]);
    assert!(errors[0].contains("id=notfoo"), "{}", errors[0]);
}

#[test]
fn test_tracing_sink_silent_when_all_found() {
    let models = sample_models();
    let (_, logs) = capture_logs(|| resolve(&sample_references(), &models, &TracingSink).len());
    assert!(error_lines(&logs).is_empty());
}

#[test]
fn test_resolve_fragment_from_json_text() {
    let doc: Fragment = serde_json::from_str(
        r#"[{"id": "foo", "type": "atype"}, {"id": "missing", "type": "bad"}]"#,
    )
    .unwrap();
    let models = HashMap::from([("foo".to_string(), "S".to_string())]);
    let sink = RecordingSink::new();

    let out = resolve_fragment(&doc, &models, &sink).unwrap();

    assert_eq!(out, vec![Some(&"S".to_string()), None]);
    assert_eq!(sink.missing()[0].type_name, "bad");
}

#[test]
fn test_resolve_fragment_matches_resolve() {
    let models = sample_models();
    let from_fragment =
        resolve_fragment(&sample_reference_fragment(), &models, &NullSink).unwrap();
    let from_records = resolve(&sample_references(), &models, &NullSink);
    assert_eq!(from_fragment, from_records);
}

#[test]
fn test_resolve_fragment_rejects_malformed_record() {
    let models = sample_models();
    let doc = fragment(json!([{"id": "foo", "type": "atype"}, "foo"]));
    let err = resolve_fragment(&doc, &models, &NullSink).unwrap_err();
    assert_eq!(err.to_string(), "record 1: reference record must be a map, got string");
}

#[test]
fn test_replace_references_in_document() {
    let models = HashMap::from([
        ("r1".to_string(), fragment(json!({"kind": "range", "start": 0}))),
        ("g1".to_string(), fragment(json!({"kind": "glyph"}))),
    ]);
    let doc = fragment(json!({
        "x_range": {"id": "r1", "type": "Range1d"},
        "renderers": [{"id": "g1", "type": "Glyph"}, {"id": "gone", "type": "Axis"}],
        "width": 600
    }));
    let sink = RecordingSink::new();

    let out = replace_references(&doc, &models, &sink);

    assert_eq!(
        out,
        fragment(json!({
            "x_range": {"kind": "range", "start": 0},
            "renderers": [{"kind": "glyph"}, null],
            "width": 600
        }))
    );
    assert_eq!(sink.missing(), vec![reference("gone", "Axis")]);
}

fn records_strategy() -> impl Strategy<Value = Vec<Reference>> {
    prop::collection::vec(
        ("[a-e]", "[A-Z][a-z]{0,5}").prop_map(|(id, ty)| Reference::new(id, ty)),
        0..30,
    )
}

proptest! {
    #[test]
    fn prop_output_parallels_input(records in records_strategy()) {
        let models: HashMap<String, usize> =
            [("a", 1), ("b", 2), ("c", 3)].into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        let sink = RecordingSink::new();

        let out = resolve(&records, &models, &sink);

        prop_assert_eq!(out.len(), records.len());
        for (record, resolved) in records.iter().zip(&out) {
            prop_assert_eq!(*resolved, models.get(&record.id));
        }
        let expected_missing: Vec<_> = records
            .iter()
            .filter(|r| !models.contains_key(&r.id))
            .cloned()
            .collect();
        prop_assert_eq!(sink.missing(), expected_missing);
    }
}
