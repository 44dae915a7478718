//! Profile module - the per-submission cycle and health record.
//!
//! A [`CycleProfile`] is built fresh from each form submission, checked
//! against the form's field bounds, and dropped once the submission has
//! been answered. Nothing here is persisted.

mod attributes;
mod cycle_profile;

pub use attributes::{CycleRegularity, Symptoms, YesNo};
pub use cycle_profile::{
    CycleProfile, CycleProfileBuilder, DecimalBounds, IntegerBounds, AGE, AVG_CYCLE_LENGTH, BMI,
    PERIOD_LENGTH, STRESS_LEVEL,
};
