//! Core logic for the agenda calendar.
//!
//! This crate holds the pure parts of the event manager — the pieces with
//! real rules in them, shared by the UI and persistence layers:
//! - `event`: the `Event` value type and its recurrence rule
//! - `recurrence`: expanding a repeating event into dated occurrences
//! - `overlap`: finding schedule collisions between events
//! - `filter`: search and week/month view filtering
//! - `notification`: deciding which events are due for a reminder
//!
//! Everything here is synchronous and side-effect free; rendering,
//! persistence and notification delivery belong to the callers.

pub mod constants;
pub mod date_range;
pub mod error;
pub mod event;
pub mod filter;
pub mod notification;
pub mod overlap;
pub mod recurrence;

// Re-export all event types at crate root for convenience
pub use event::*;
