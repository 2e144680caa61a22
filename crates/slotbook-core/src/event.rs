//! Event types for scheduled activities.
//!
//! This module provides [`Event`], the immutable value representing one
//! booked (or candidate) activity on the timeline. An `Event` can only be
//! obtained through [`Event::new`], which enforces the construction
//! invariants, so every instance in circulation is valid.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

/// Why an [`Event`] could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEvent {
    /// The name was empty or all whitespace.
    #[error("event name must not be empty")]
    EmptyName,
}

/// A named activity with a start time and a list of participants.
///
/// Events are immutable once constructed: fields are private and no mutating
/// accessors exist. The start time is a fully-specified naive local timestamp;
/// timezone semantics are deliberately undefined. Events carry no duration —
/// the scheduler applies one uniform slot duration to every event.
///
/// Serializes for JSON output but does not deserialize: text coming off the
/// wire must pass through the extraction boundary's validation instead of
/// materializing here directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    name: String,
    start_time: NaiveDateTime,
    participants: Vec<String>,
}

impl Event {
    /// Creates a new event.
    ///
    /// The name is trimmed; participants are passed through unvalidated
    /// (duplicates and empty entries are the extraction layer's concern).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEvent::EmptyName`] if the trimmed name is empty.
    pub fn new(
        name: impl Into<String>,
        start_time: NaiveDateTime,
        participants: Vec<String>,
    ) -> Result<Self, InvalidEvent> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(InvalidEvent::EmptyName);
        }
        Ok(Self {
            name,
            start_time,
            participants,
        })
    }

    /// The event's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the event starts (naive local time).
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// The participant identifiers, in extraction order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Returns a copy of this event shifted to a new start time.
    ///
    /// Name and participants are preserved; this is how alternative-slot
    /// candidates are built.
    pub fn with_start_time(&self, start_time: NaiveDateTime) -> Self {
        Self {
            name: self.name.clone(),
            start_time,
            participants: self.participants.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn basic_creation() {
        let event = Event::new(
            "science fair",
            at(2025, 9, 19, 17, 0),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .unwrap();

        assert_eq!(event.name(), "science fair");
        assert_eq!(event.start_time(), at(2025, 9, 19, 17, 0));
        assert_eq!(event.participants(), ["Alice", "Bob"]);
    }

    #[test]
    fn name_is_trimmed() {
        let event = Event::new("  standup  ", at(2025, 9, 19, 9, 0), vec![]).unwrap();
        assert_eq!(event.name(), "standup");
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            Event::new("", at(2025, 9, 19, 9, 0), vec![]),
            Err(InvalidEvent::EmptyName)
        );
        assert_eq!(
            Event::new("   ", at(2025, 9, 19, 9, 0), vec![]),
            Err(InvalidEvent::EmptyName)
        );
    }

    #[test]
    fn participants_pass_through() {
        // Duplicates and empty entries are not the core's concern.
        let event = Event::new(
            "sync",
            at(2025, 9, 19, 9, 0),
            vec!["Carol".to_string(), "Carol".to_string(), String::new()],
        )
        .unwrap();
        assert_eq!(event.participants().len(), 3);
    }

    #[test]
    fn shifted_copy_keeps_name_and_participants() {
        let event = Event::new(
            "dinner",
            at(2025, 9, 20, 20, 0),
            vec!["Emma".to_string()],
        )
        .unwrap();
        let shifted = event.with_start_time(at(2025, 9, 20, 21, 0));

        assert_eq!(shifted.name(), event.name());
        assert_eq!(shifted.participants(), event.participants());
        assert_eq!(shifted.start_time(), at(2025, 9, 20, 21, 0));
        // The original is untouched.
        assert_eq!(event.start_time(), at(2025, 9, 20, 20, 0));
    }

    #[test]
    fn serializes_to_json() {
        let event = Event::new("dinner", at(2025, 9, 20, 20, 0), vec!["Emma".to_string()])
            .unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "dinner");
        assert_eq!(json["participants"][0], "Emma");
    }
}
