//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (calendar dates, errors)
//! - `profile` - The validated per-submission cycle and health record
//! - `forecast` - Pure services turning a model estimate into a report

pub mod forecast;
pub mod foundation;
pub mod profile;
