//! Unique model ids
//!
//! Ids are either random v4 UUIDs or, for readable test output, sequential
//! decimal numbers starting at `1001`. Each [`IdGenerator`] owns its counter;
//! [`make_id`] draws from one counter shared by the whole process.

use crate::config::SerializationSettings;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// First sequential id handed out is `SIMPLE_ID_START + 1`
const SIMPLE_ID_START: u64 = 1000;

/// Counter behind [`make_id`]
static SHARED_COUNTER: AtomicU64 = AtomicU64::new(SIMPLE_ID_START);

/// Id format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStyle {
    /// Hyphenated random UUID, 36 characters
    #[default]
    Uuid,
    /// Sequential decimal number
    Simple,
}

/// Source of unique ids
#[derive(Debug)]
pub struct IdGenerator {
    style: IdStyle,
    counter: AtomicU64,
}

impl IdGenerator {
    /// Create generator with the given style
    #[inline]
    #[must_use]
    pub fn new(style: IdStyle) -> Self {
        Self {
            style,
            counter: AtomicU64::new(SIMPLE_ID_START),
        }
    }

    /// Create generator from settings
    #[must_use]
    pub fn from_settings(settings: &SerializationSettings) -> Self {
        Self::new(if settings.simple_ids {
            IdStyle::Simple
        } else {
            IdStyle::Uuid
        })
    }

    /// Id style in use
    #[inline]
    #[must_use]
    pub fn style(&self) -> IdStyle {
        self.style
    }

    /// Produce the next id
    pub fn next_id(&self) -> String {
        next_with(self.style, &self.counter)
    }
}

fn next_with(style: IdStyle, counter: &AtomicU64) -> String {
    match style {
        IdStyle::Uuid => Uuid::new_v4().to_string(),
        IdStyle::Simple => (counter.fetch_add(1, Ordering::Relaxed) + 1).to_string(),
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStyle::default())
    }
}

/// Produce an id using settings from the environment
///
/// The style is read on every call. Simple ids come from a process-wide
/// counter, so successive calls yield `1001`, `1002`, ...
#[must_use]
pub fn make_id() -> String {
    let style = if SerializationSettings::from_env().simple_ids {
        IdStyle::Simple
    } else {
        IdStyle::Uuid
    };
    next_with(style, &SHARED_COUNTER)
}
