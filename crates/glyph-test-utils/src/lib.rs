//! Testing utilities for the glyph workspace
//!
//! Shared fixtures, a recording diagnostic sink, and log capture.

#![allow(missing_docs)]

use glyph_serialization::{DiagnosticSink, Fragment, Reference};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

pub fn reference(id: &str, type_name: &str) -> Reference {
    Reference::new(id, type_name)
}

/// Records used by the resolver tests: `foo` twice, then `otherfoo`
pub fn sample_references() -> Vec<Reference> {
    vec![
        reference("foo", "atype"),
        reference("foo", "atype"),
        reference("otherfoo", "othertype"),
    ]
}

pub fn sample_reference_fragment() -> Fragment {
    Fragment::List(sample_references().iter().map(Reference::to_fragment).collect())
}

pub fn sample_models() -> HashMap<String, &'static str> {
    HashMap::from([
        ("foo".to_string(), "success"),
        ("otherfoo".to_string(), "othersuccess"),
    ])
}

pub fn fragment(value: serde_json::Value) -> Fragment {
    Fragment::from(value)
}

/// Sink that keeps every reported reference
#[derive(Debug, Default)]
pub struct RecordingSink {
    missing: Mutex<Vec<Reference>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(&self) -> Vec<Reference> {
        self.missing.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.missing.lock().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn missing_reference(&self, reference: &Reference) {
        self.missing.lock().push(reference.clone());
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped fmt subscriber and return its output and the logs
///
/// Captures every level down to TRACE, without ANSI colors.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    (out, logs)
}

/// Lines of `logs` emitted at ERROR level
pub fn error_lines(logs: &str) -> Vec<&str> {
    logs.lines().filter(|line| line.contains("ERROR")).collect()
}
