//! Free-text to structured event extraction.
//!
//! This crate is the boundary between natural language and the scheduling
//! core: an [`EventExtractor`] turns a request like "Dinner with Emma on
//! 2025-09-20 20:00" into a validated [`slotbook_core::Event`], or reports a
//! typed failure. Validation is all-or-nothing — no partially-valid record
//! ever crosses into the core.

pub mod error;
pub mod gateway;
pub mod openai;
pub mod record;

pub use error::{ExtractError, ExtractErrorCode, ExtractResult};
pub use gateway::{BoxFuture, EventExtractor, FailingExtractor, ScriptedExtractor};
pub use openai::{OpenAiConfig, OpenAiExtractor};
pub use record::EventRecord;
