//! The wire record produced by the extraction model.
//!
//! [`EventRecord`] mirrors the JSON shape the model is instructed to emit.
//! It exists only at this boundary: the record is deserialized, validated as
//! a whole, and converted into a core [`Event`] — or rejected. There is no
//! way to carry a half-valid record past this module.

use chrono::NaiveDateTime;
use serde::Deserialize;

use slotbook_core::Event;

use crate::error::{ExtractError, ExtractResult};

/// Timestamp formats accepted from the model, tried in order.
///
/// The prompt asks for `YYYY-MM-DD HH:MM`; the seconds and `T`-separated
/// variants cover the common ways models drift from that instruction.
/// Date-only or otherwise partial timestamps match none of these and are
/// rejected.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// The raw structured record extracted from free text.
///
/// All fields are required; a record missing any of them never deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    /// The event label.
    pub name: String,
    /// The start timestamp, still as text.
    pub start_time: String,
    /// Participant identifiers.
    pub participants: Vec<String>,
}

impl EventRecord {
    /// Parses a record from the model's JSON output.
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error for text that is not JSON at all,
    /// and a schema-violation error for JSON of the wrong shape.
    pub fn from_json(content: &str) -> ExtractResult<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| ExtractError::malformed_response("model output is not valid JSON").with_source(e))?;
        serde_json::from_value(value)
            .map_err(|e| ExtractError::schema("model output does not match the event record shape").with_source(e))
    }

    /// Validates this record into a core [`Event`].
    ///
    /// All-or-nothing: the name must be non-empty after trimming and the
    /// timestamp must parse fully against one of [`TIMESTAMP_FORMATS`].
    ///
    /// # Errors
    ///
    /// Returns a schema-violation error naming the offending field.
    pub fn into_event(self) -> ExtractResult<Event> {
        let start_time = parse_timestamp(&self.start_time)?;
        Event::new(self.name, start_time, self.participants)
            .map_err(|e| ExtractError::schema(e.to_string()))
    }
}

/// Parses a fully-specified timestamp, trying each accepted format.
fn parse_timestamp(text: &str) -> ExtractResult<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| {
            ExtractError::schema(format!(
                "start_time {:?} is not a fully-specified timestamp",
                text
            ))
        })
}
