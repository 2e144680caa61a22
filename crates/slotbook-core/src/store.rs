//! The in-memory calendar store.
//!
//! [`CalendarStore`] is a deliberately dumb container: it appends whatever it
//! is given and never validates. Non-overlap is enforced one layer up by the
//! scheduler, which checks every candidate against [`CalendarStore::all`]
//! before calling [`CalendarStore::insert`].

use tracing::debug;

use crate::event::Event;

/// An ordered, in-memory collection of scheduled events.
///
/// Insertion order is not semantically meaningful; display ordering comes
/// from [`CalendarStore::list_sorted`]. The store lives exactly as long as
/// the scheduler that owns it — there is no persistence and no deletion.
#[derive(Debug, Default)]
pub struct CalendarStore {
    events: Vec<Event>,
}

impl CalendarStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event unconditionally.
    ///
    /// Callers must have already verified the event's slot against
    /// [`CalendarStore::all`]; the store performs no overlap checking itself.
    pub fn insert(&mut self, event: Event) {
        debug!(name = %event.name(), start = %event.start_time(), "storing event");
        self.events.push(event);
    }

    /// The raw, unordered collection, for conflict scans.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// All events ordered ascending by start time.
    ///
    /// The sort is stable, so events with equal start times keep their
    /// insertion order. Side-effect free: the store itself is not reordered.
    pub fn list_sorted(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|e| e.start_time());
        sorted
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
