//! CycleProfile - the validated form submission.

use serde::Serialize;

use crate::domain::foundation::{CalendarDate, ValidationError};

use super::attributes::{CycleRegularity, Symptoms, YesNo};

/// Inclusive bounds and default for an integer form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegerBounds {
    pub field: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl IntegerBounds {
    /// Returns the value as `u8` if it lies within the bounds.
    fn check(&self, value: i32) -> Result<u8, ValidationError> {
        if value < self.min || value > self.max {
            return Err(ValidationError::out_of_range(
                self.field, self.min, self.max, value,
            ));
        }
        Ok(value as u8)
    }
}

/// Inclusive bounds and default for a decimal form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecimalBounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl DecimalBounds {
    fn check(&self, value: f64) -> Result<f64, ValidationError> {
        // NaN fails both comparisons, so test containment instead.
        if !(self.min..=self.max).contains(&value) {
            return Err(ValidationError::out_of_range_decimal(
                self.field, self.min, self.max, value,
            ));
        }
        Ok(value)
    }
}

pub const AVG_CYCLE_LENGTH: IntegerBounds = IntegerBounds {
    field: "avg_cycle_length",
    min: 20,
    max: 45,
    default: 28,
};

pub const PERIOD_LENGTH: IntegerBounds = IntegerBounds {
    field: "period_length",
    min: 2,
    max: 10,
    default: 5,
};

pub const AGE: IntegerBounds = IntegerBounds {
    field: "age",
    min: 10,
    max: 60,
    default: 25,
};

pub const STRESS_LEVEL: IntegerBounds = IntegerBounds {
    field: "stress_level",
    min: 1,
    max: 10,
    default: 5,
};

pub const BMI: DecimalBounds = DecimalBounds {
    field: "BMI",
    min: 10.0,
    max: 50.0,
    default: 22.0,
};

/// Self-reported cycle and health attributes for one submission.
///
/// Every numeric field is guaranteed to lie within its form bounds. The
/// last period date is *not* checked against today here; that is the
/// submission validator's job, since it is a user-visible blocking error
/// rather than an input-layer rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleProfile {
    last_period_date: CalendarDate,
    avg_cycle_length: u8,
    period_length: u8,
    age: u8,
    stress_level: u8,
    bmi: f64,
    cycle_regularity: CycleRegularity,
    symptoms: Symptoms,
    birth_control: YesNo,
    pcos: YesNo,
    expected_date: Option<String>,
}

impl CycleProfile {
    /// Starts a builder pre-filled with the form defaults.
    pub fn builder(last_period_date: CalendarDate) -> CycleProfileBuilder {
        CycleProfileBuilder::new(last_period_date)
    }

    pub fn last_period_date(&self) -> CalendarDate {
        self.last_period_date
    }

    pub fn avg_cycle_length(&self) -> u8 {
        self.avg_cycle_length
    }

    pub fn period_length(&self) -> u8 {
        self.period_length
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn stress_level(&self) -> u8 {
        self.stress_level
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn cycle_regularity(&self) -> CycleRegularity {
        self.cycle_regularity
    }

    pub fn symptoms(&self) -> Symptoms {
        self.symptoms
    }

    pub fn birth_control(&self) -> YesNo {
        self.birth_control
    }

    pub fn pcos(&self) -> YesNo {
        self.pcos
    }

    /// The optional free-text guess of the next period date, if non-blank.
    pub fn expected_date(&self) -> Option<&str> {
        self.expected_date.as_deref()
    }
}

/// Builder for [`CycleProfile`]; range checks happen in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CycleProfileBuilder {
    last_period_date: CalendarDate,
    avg_cycle_length: i32,
    period_length: i32,
    age: i32,
    stress_level: i32,
    bmi: f64,
    cycle_regularity: CycleRegularity,
    symptoms: Symptoms,
    birth_control: YesNo,
    pcos: YesNo,
    expected_date: Option<String>,
}

impl CycleProfileBuilder {
    fn new(last_period_date: CalendarDate) -> Self {
        Self {
            last_period_date,
            avg_cycle_length: AVG_CYCLE_LENGTH.default,
            period_length: PERIOD_LENGTH.default,
            age: AGE.default,
            stress_level: STRESS_LEVEL.default,
            bmi: BMI.default,
            cycle_regularity: CycleRegularity::default(),
            symptoms: Symptoms::default(),
            birth_control: YesNo::default(),
            pcos: YesNo::default(),
            expected_date: None,
        }
    }

    pub fn avg_cycle_length(mut self, days: i32) -> Self {
        self.avg_cycle_length = days;
        self
    }

    pub fn period_length(mut self, days: i32) -> Self {
        self.period_length = days;
        self
    }

    pub fn age(mut self, years: i32) -> Self {
        self.age = years;
        self
    }

    pub fn stress_level(mut self, level: i32) -> Self {
        self.stress_level = level;
        self
    }

    pub fn bmi(mut self, bmi: f64) -> Self {
        self.bmi = bmi;
        self
    }

    pub fn cycle_regularity(mut self, regularity: CycleRegularity) -> Self {
        self.cycle_regularity = regularity;
        self
    }

    pub fn symptoms(mut self, symptoms: Symptoms) -> Self {
        self.symptoms = symptoms;
        self
    }

    pub fn birth_control(mut self, answer: YesNo) -> Self {
        self.birth_control = answer;
        self
    }

    pub fn pcos(mut self, answer: YesNo) -> Self {
        self.pcos = answer;
        self
    }

    /// Sets the optional expected date text. Blank text counts as absent.
    pub fn expected_date(mut self, text: Option<impl Into<String>>) -> Self {
        self.expected_date = text
            .map(Into::into)
            .filter(|t: &String| !t.trim().is_empty());
        self
    }

    /// Validates every bounded field and produces the profile.
    ///
    /// # Errors
    ///
    /// Returns the first field found outside its bounds, checked in form order.
    pub fn build(self) -> Result<CycleProfile, ValidationError> {
        Ok(CycleProfile {
            last_period_date: self.last_period_date,
            avg_cycle_length: AVG_CYCLE_LENGTH.check(self.avg_cycle_length)?,
            period_length: PERIOD_LENGTH.check(self.period_length)?,
            age: AGE.check(self.age)?,
            stress_level: STRESS_LEVEL.check(self.stress_level)?,
            bmi: BMI.check(self.bmi)?,
            cycle_regularity: self.cycle_regularity,
            symptoms: self.symptoms,
            birth_control: self.birth_control,
            pcos: self.pcos,
            expected_date: self.expected_date,
        })
    }
}
