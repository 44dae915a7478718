//! Categorical health attributes selected on the form.
//!
//! Each enum serializes as the exact label the prediction model was trained
//! on, so the label doubles as the model's category value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported consistency of cycle timing across months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CycleRegularity {
    #[default]
    Regular,
    Irregular,
    #[serde(rename = "Mostly Regular")]
    MostlyRegular,
    #[serde(rename = "Post-menopausal")]
    PostMenopausal,
}

impl CycleRegularity {
    /// All options in form order.
    pub const ALL: [CycleRegularity; 4] = [
        CycleRegularity::Regular,
        CycleRegularity::Irregular,
        CycleRegularity::MostlyRegular,
        CycleRegularity::PostMenopausal,
    ];

    /// Returns the display label (also the model category value).
    pub fn label(&self) -> &'static str {
        match self {
            CycleRegularity::Regular => "Regular",
            CycleRegularity::Irregular => "Irregular",
            CycleRegularity::MostlyRegular => "Mostly Regular",
            CycleRegularity::PostMenopausal => "Post-menopausal",
        }
    }

    /// Returns true if no further cycles are expected.
    pub fn is_post_menopausal(&self) -> bool {
        matches!(self, CycleRegularity::PostMenopausal)
    }
}

impl fmt::Display for CycleRegularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Symptoms typically experienced before or during a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Symptoms {
    #[default]
    None,
    Cramps,
    Bloating,
    Multiple,
}

impl Symptoms {
    /// All options in form order.
    pub const ALL: [Symptoms; 4] = [
        Symptoms::None,
        Symptoms::Cramps,
        Symptoms::Bloating,
        Symptoms::Multiple,
    ];

    /// Returns the display label (also the model category value).
    pub fn label(&self) -> &'static str {
        match self {
            Symptoms::None => "None",
            Symptoms::Cramps => "Cramps",
            Symptoms::Bloating => "Bloating",
            Symptoms::Multiple => "Multiple",
        }
    }
}

impl fmt::Display for Symptoms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Answer to a yes/no health question (birth control, PCOS diagnosis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

impl YesNo {
    /// All options in form order.
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    /// Returns the display label (also the model category value).
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_regularity_serializes_to_model_labels() {
        let json = serde_json::to_string(&CycleRegularity::MostlyRegular).unwrap();
        assert_eq!(json, "\"Mostly Regular\"");

        let json = serde_json::to_string(&CycleRegularity::PostMenopausal).unwrap();
        assert_eq!(json, "\"Post-menopausal\"");
    }

    #[test]
    fn cycle_regularity_deserializes_from_labels() {
        let parsed: CycleRegularity = serde_json::from_str("\"Post-menopausal\"").unwrap();
        assert_eq!(parsed, CycleRegularity::PostMenopausal);
        assert!(parsed.is_post_menopausal());

        assert!(serde_json::from_str::<CycleRegularity>("\"MostlyRegular\"").is_err());
    }

    #[test]
    fn labels_match_serialized_form() {
        for option in CycleRegularity::ALL {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.label()));
        }
        for option in Symptoms::ALL {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.label()));
        }
        for option in YesNo::ALL {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.label()));
        }
    }

    #[test]
    fn defaults_are_first_form_option() {
        assert_eq!(CycleRegularity::default(), CycleRegularity::ALL[0]);
        assert_eq!(Symptoms::default(), Symptoms::ALL[0]);
        assert_eq!(YesNo::default(), YesNo::ALL[0]);
    }

    #[test]
    fn yes_no_is_yes() {
        assert!(YesNo::Yes.is_yes());
        assert!(!YesNo::No.is_yes());
    }
}
