//! Core types: events, slots, the calendar store, and the scheduler

pub mod event;
pub mod scheduler;
pub mod slot;
pub mod store;
pub mod tracing;

pub use event::{Event, InvalidEvent};
pub use scheduler::{ScheduleOutcome, Scheduler, SUGGESTION_ATTEMPTS};
pub use slot::Slot;
pub use store::CalendarStore;
pub use self::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
