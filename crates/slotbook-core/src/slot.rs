//! Slot intervals and the overlap rule.
//!
//! A [`Slot`] is the half-open interval `[start, end)` an event is considered
//! to occupy on the timeline. The overlap predicate here is the single source
//! of truth for conflict detection: two slots conflict iff they share any
//! instant other than a touching boundary.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// A half-open time interval `[start, end)` in naive local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Start of the slot (inclusive).
    pub start: NaiveDateTime,
    /// End of the slot (exclusive).
    pub end: NaiveDateTime,
}

impl Slot {
    /// Creates a new slot.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start <= end, "Slot start must be <= end");
        Self { start, end }
    }

    /// Creates a slot from a start time and a duration.
    pub fn from_start(start: NaiveDateTime, duration: Duration) -> Self {
        Self::new(start, start + duration)
    }

    /// Returns the duration of this slot.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if an instant falls within this slot.
    ///
    /// Uses half-open interval semantics: `[start, end)`.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }

    /// Checks whether two slots overlap.
    ///
    /// Pure and total. Slots that merely touch at a boundary
    /// (`self.end == other.start`) do not overlap, so back-to-back bookings
    /// are allowed.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 19)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn hour_slot(h: u32, min: u32) -> Slot {
        Slot::from_start(at(h, min), Duration::hours(1))
    }

    #[test]
    fn creation() {
        let slot = Slot::new(at(9, 0), at(17, 0));
        assert_eq!(slot.start, at(9, 0));
        assert_eq!(slot.end, at(17, 0));
        assert_eq!(slot.duration(), Duration::hours(8));
    }

    #[test]
    #[should_panic(expected = "start must be <= end")]
    fn invalid_slot() {
        Slot::new(at(17, 0), at(9, 0));
    }

    #[test]
    fn from_start() {
        let slot = Slot::from_start(at(10, 0), Duration::hours(1));
        assert_eq!(slot.end, at(11, 0));
    }

    #[test]
    fn contains_is_half_open() {
        let slot = Slot::new(at(9, 0), at(10, 0));

        assert!(slot.contains(at(9, 0))); // start inclusive
        assert!(slot.contains(at(9, 59)));
        assert!(!slot.contains(at(10, 0))); // end exclusive
        assert!(!slot.contains(at(8, 59)));
    }

    #[test]
    fn overlapping_slots() {
        // [17:00, 18:00) vs [17:30, 18:30)
        assert!(hour_slot(17, 0).overlaps(&hour_slot(17, 30)));
        assert!(hour_slot(17, 30).overlaps(&hour_slot(17, 0)));

        // One slot fully inside another.
        let outer = Slot::new(at(9, 0), at(17, 0));
        let inner = hour_slot(10, 0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));

        // Identical slots.
        assert!(hour_slot(9, 0).overlaps(&hour_slot(9, 0)));
    }

    #[test]
    fn touching_boundaries_do_not_overlap() {
        // [17:00, 18:00) vs [18:00, 19:00) — back-to-back is fine.
        assert!(!hour_slot(17, 0).overlaps(&hour_slot(18, 0)));
        assert!(!hour_slot(18, 0).overlaps(&hour_slot(17, 0)));
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        assert!(!hour_slot(9, 0).overlaps(&hour_slot(14, 0)));
        assert!(!hour_slot(14, 0).overlaps(&hour_slot(9, 0)));
    }
}
