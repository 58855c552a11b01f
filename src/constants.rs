//! Shared constants.

/// Fallback end date for recurrence expansion when a rule carries no
/// explicit end date. Expansion never runs past this day.
pub const RECURRENCE_HORIZON: &str = "2025-10-30";
