//! The scheduling engine.
//!
//! [`Scheduler`] owns the [`CalendarStore`] and decides, per candidate event,
//! between insertion and conflict resolution. Conflict detection applies one
//! uniform slot duration to every event (stored events carry no duration of
//! their own), and the alternative-slot search is a bounded forward probe in
//! one-hour steps.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::event::Event;
use crate::slot::Slot;
use crate::store::CalendarStore;

/// How many hour-aligned alternative slots are probed after a conflict.
pub const SUGGESTION_ATTEMPTS: usize = 4;

/// The terminal outcome of one scheduling request.
///
/// Every request resolves to exactly one of these; failures never propagate
/// past the scheduling boundary as errors. `ParseFailure` is produced by the
/// extraction boundary, never by [`Scheduler::schedule`] itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScheduleOutcome {
    /// The event was free of conflicts and is now booked.
    Scheduled {
        /// The booked event.
        event: Event,
    },
    /// The requested slot collides with an existing booking, and a free
    /// alternative was found. The alternative is reported only — it is NOT
    /// booked; the caller must re-request to commit it.
    ConflictedWithSuggestion {
        /// The originally requested start time.
        requested: NaiveDateTime,
        /// The earliest free hour-aligned start within the probe bound.
        suggested: NaiveDateTime,
    },
    /// The requested slot collides and no alternative was found (or the
    /// caller disabled the search).
    ConflictedNoSuggestion {
        /// The originally requested start time.
        requested: NaiveDateTime,
    },
    /// The request never produced a valid event.
    ParseFailure {
        /// Human-readable description of what went wrong.
        reason: String,
    },
}

impl ScheduleOutcome {
    /// Returns true if the request ended with an event in the store.
    pub fn was_booked(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// The start time the caller originally asked for, when one was parsed.
    pub fn requested_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Scheduled { event } => Some(event.start_time()),
            Self::ConflictedWithSuggestion { requested, .. }
            | Self::ConflictedNoSuggestion { requested } => Some(*requested),
            Self::ParseFailure { .. } => None,
        }
    }
}

/// Schedules candidate events into an owned [`CalendarStore`].
///
/// The store is owned exclusively — never ambient shared state. Because
/// [`Scheduler::schedule`] takes `&mut self`, the conflict scan and the
/// conditional insert execute as a single critical section under the
/// exclusive borrow; a service handling concurrent requests must wrap the
/// whole `Scheduler` in a mutex and hold the guard across the entire call,
/// or two requests could both observe a free slot and both insert.
#[derive(Debug)]
pub struct Scheduler {
    store: CalendarStore,
    slot_duration: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Creates a scheduler with an empty store and the default one-hour slot.
    pub fn new() -> Self {
        Self {
            store: CalendarStore::new(),
            slot_duration: Duration::hours(1),
        }
    }

    /// Builder method to change the uniform slot duration.
    #[must_use]
    pub fn with_slot_duration(mut self, duration: Duration) -> Self {
        self.slot_duration = duration;
        self
    }

    /// The uniform slot duration applied to every event.
    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CalendarStore {
        &self.store
    }

    /// The slot a given start time would occupy.
    fn slot_at(&self, start: NaiveDateTime) -> Slot {
        Slot::from_start(start, self.slot_duration)
    }

    /// Finds the first stored event whose slot overlaps the candidate slot.
    ///
    /// Linear scan over the whole store; O(existing events) per check.
    pub fn conflicting_event(&self, candidate: Slot) -> Option<&Event> {
        self.store
            .all()
            .iter()
            .find(|existing| self.slot_at(existing.start_time()).overlaps(&candidate))
    }

    /// Attempts to book a candidate event.
    ///
    /// If the candidate's slot is free, the event is inserted and
    /// [`ScheduleOutcome::Scheduled`] returned. On a collision, the store is
    /// left untouched: with `allow_plan` the alternative-slot search runs and
    /// its result is reported (never inserted); without it the conflict is
    /// reported immediately.
    pub fn schedule(&mut self, event: Event, allow_plan: bool) -> ScheduleOutcome {
        let requested = event.start_time();
        let candidate = self.slot_at(requested);
        debug!(
            name = %event.name(),
            start = %requested,
            existing = self.store.len(),
            "checking candidate slot"
        );

        if let Some(existing) = self.conflicting_event(candidate) {
            warn!(
                name = %event.name(),
                requested = %requested,
                booked = %existing.name(),
                "slot already booked"
            );
            if !allow_plan {
                return ScheduleOutcome::ConflictedNoSuggestion { requested };
            }
            return match self.suggest_alternative(&event) {
                Some(suggested) => ScheduleOutcome::ConflictedWithSuggestion {
                    requested,
                    suggested,
                },
                None => ScheduleOutcome::ConflictedNoSuggestion { requested },
            };
        }

        info!(name = %event.name(), start = %requested, "event scheduled");
        self.store.insert(event.clone());
        ScheduleOutcome::Scheduled { event }
    }

    /// Searches forward for the earliest free alternative slot.
    ///
    /// Probes candidate starts at +1h, +2h, +3h and +4h from the event's
    /// requested start (a bounded linear probe, not an exhaustive free-slot
    /// search — free slots beyond the bound, or before the requested time,
    /// are never proposed). Each candidate keeps the event's name and
    /// participants and differs only in start time.
    pub fn suggest_alternative(&self, event: &Event) -> Option<NaiveDateTime> {
        for hour in 1..=SUGGESTION_ATTEMPTS as i64 {
            let candidate = event.with_start_time(event.start_time() + Duration::hours(hour));
            let slot = self.slot_at(candidate.start_time());
            if self.conflicting_event(slot).is_none() {
                debug!(
                    name = %candidate.name(),
                    suggested = %candidate.start_time(),
                    "found free alternative slot"
                );
                return Some(candidate.start_time());
            }
        }
        debug!(name = %event.name(), "no free slot within the probe bound");
        None
    }
}
