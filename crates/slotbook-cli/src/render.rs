//! Terminal rendering of outcomes and the agenda.
//!
//! Pure string builders — no printing happens here, which keeps every
//! rendered line testable.

use slotbook_core::{Event, ScheduleOutcome};

/// Fixed timestamp format for all rendered times.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders one scheduling outcome as a single deterministic line.
pub fn outcome_line(outcome: &ScheduleOutcome) -> String {
    match outcome {
        ScheduleOutcome::Scheduled { event } => format!(
            "Event added: {} at {} with {}",
            event.name(),
            event.start_time().format(TIMESTAMP_DISPLAY_FORMAT),
            join_participants(event.participants()),
        ),
        ScheduleOutcome::ConflictedWithSuggestion {
            requested,
            suggested,
        } => format!(
            "Slot already booked around {}. Suggested alternative: {}",
            requested.format(TIMESTAMP_DISPLAY_FORMAT),
            suggested.format(TIMESTAMP_DISPLAY_FORMAT),
        ),
        ScheduleOutcome::ConflictedNoSuggestion { requested } => format!(
            "Could not add, slot taken at {}",
            requested.format(TIMESTAMP_DISPLAY_FORMAT),
        ),
        ScheduleOutcome::ParseFailure { reason } => {
            format!("Could not parse event: {}", reason)
        }
    }
}

/// Renders the sorted agenda, one line per event.
///
/// An empty agenda renders as the single configured placeholder line.
pub fn agenda_lines(events: &[&Event], empty_text: &str) -> Vec<String> {
    if events.is_empty() {
        return vec![empty_text.to_string()];
    }
    events
        .iter()
        .map(|event| {
            format!(
                "- {} at {} with {}",
                event.name(),
                event.start_time().format(TIMESTAMP_DISPLAY_FORMAT),
                join_participants(event.participants()),
            )
        })
        .collect()
}

fn join_participants(participants: &[String]) -> String {
    if participants.is_empty() {
        "no participants".to_string()
    } else {
        participants.join(", ")
    }
}
