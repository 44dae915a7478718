//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! Lunaris domain.

mod calendar_date;
mod errors;

pub use calendar_date::{CalendarDate, DISPLAY_DATE_FORMAT, DISPLAY_DATE_PLACEHOLDER};
pub use errors::{DomainError, ErrorCode, ValidationError};
