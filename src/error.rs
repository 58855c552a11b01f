//! Error types for the agenda core.

use thiserror::Error;

/// Errors that can occur in agenda operations.
///
/// Malformed event data never shows up here: the overlap rules carry it as
/// an invalid range that simply never matches. This enum covers the
/// explicit parsing boundaries where the caller asked for a real answer.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
