//! Uncertainty window estimation.
//!
//! The window is the day-offset interval `[low, high]` added to the predicted
//! date. It is computed by folding an ordered list of [`WindowRule`]s over a
//! base window. Each rule either *overwrites* the window outright or *merges*
//! into it by widening, and the order is significant: a profile matching
//! several rules gets a different window if the rules are reordered.
//!
//! | # | Rule | Effect |
//! |---|------|--------|
//! | - | base | `(-2, 3)` |
//! | 1 | irregular cycle | overwrite `(-4, 8)` |
//! | 2 | PCOS | overwrite `(-5, 12)` |
//! | 3 | PCOS and stress >= 7 | overwrite `(-3, 15)` |
//! | 4 | birth control | merge `low <= -3`, `high >= 8` |

use serde::{Deserialize, Serialize};

use crate::domain::profile::{CycleProfile, CycleRegularity, YesNo};

/// Window applied before any rule.
pub const BASE_WINDOW: UncertaintyWindow = UncertaintyWindow { low: -2, high: 3 };

/// Stress level at which PCOS shifts to the high-stress window.
pub const PCOS_HIGH_STRESS_LEVEL: u8 = 7;

/// Day offsets around the predicted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UncertaintyWindow {
    pub low: i64,
    pub high: i64,
}

impl UncertaintyWindow {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }
}

/// The covariates the window depends on.
///
/// `predicted_days` and `age` do not influence the window; they travel with
/// it because the plausibility checks read the same inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowInputs {
    pub predicted_days: f64,
    pub pcos: YesNo,
    pub stress_level: u8,
    pub cycle_regularity: CycleRegularity,
    pub birth_control: YesNo,
    pub age: u8,
}

impl WindowInputs {
    /// Collects the window covariates from a profile and a model estimate.
    pub fn from_profile(profile: &CycleProfile, predicted_days: f64) -> Self {
        Self {
            predicted_days,
            pcos: profile.pcos(),
            stress_level: profile.stress_level(),
            cycle_regularity: profile.cycle_regularity(),
            birth_control: profile.birth_control(),
            age: profile.age(),
        }
    }
}

/// What a matching rule does to the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEffect {
    /// Replace the window.
    Overwrite(UncertaintyWindow),
    /// Widen: `low = min(low, low_at_most)`, `high = max(high, high_at_least)`.
    Merge { low_at_most: i64, high_at_least: i64 },
}

impl WindowEffect {
    pub fn apply(&self, current: UncertaintyWindow) -> UncertaintyWindow {
        match *self {
            WindowEffect::Overwrite(window) => window,
            WindowEffect::Merge {
                low_at_most,
                high_at_least,
            } => UncertaintyWindow {
                low: current.low.min(low_at_most),
                high: current.high.max(high_at_least),
            },
        }
    }
}

/// A predicate paired with the effect it has when it matches.
#[derive(Debug, Clone, Copy)]
pub struct WindowRule {
    pub name: &'static str,
    pub applies: fn(&WindowInputs) -> bool,
    pub effect: WindowEffect,
}

fn is_irregular(inputs: &WindowInputs) -> bool {
    inputs.cycle_regularity == CycleRegularity::Irregular
}

fn has_pcos(inputs: &WindowInputs) -> bool {
    inputs.pcos.is_yes()
}

fn has_pcos_with_high_stress(inputs: &WindowInputs) -> bool {
    inputs.pcos.is_yes() && inputs.stress_level >= PCOS_HIGH_STRESS_LEVEL
}

fn uses_birth_control(inputs: &WindowInputs) -> bool {
    inputs.birth_control.is_yes()
}

/// Rules in evaluation order.
pub const WINDOW_RULES: [WindowRule; 4] = [
    WindowRule {
        name: "irregular_cycle",
        applies: is_irregular,
        effect: WindowEffect::Overwrite(UncertaintyWindow::new(-4, 8)),
    },
    WindowRule {
        name: "pcos",
        applies: has_pcos,
        effect: WindowEffect::Overwrite(UncertaintyWindow::new(-5, 12)),
    },
    WindowRule {
        name: "pcos_high_stress",
        applies: has_pcos_with_high_stress,
        effect: WindowEffect::Overwrite(UncertaintyWindow::new(-3, 15)),
    },
    WindowRule {
        name: "birth_control",
        applies: uses_birth_control,
        effect: WindowEffect::Merge {
            low_at_most: -3,
            high_at_least: 8,
        },
    },
];

/// Computes the uncertainty window for the given covariates.
pub fn estimate_window(inputs: &WindowInputs) -> UncertaintyWindow {
    fold_rules(&WINDOW_RULES, inputs)
}

/// Folds an arbitrary rule list over [`BASE_WINDOW`].
pub fn fold_rules(rules: &[WindowRule], inputs: &WindowInputs) -> UncertaintyWindow {
    rules
        .iter()
        .filter(|rule| (rule.applies)(inputs))
        .fold(BASE_WINDOW, |window, rule| rule.effect.apply(window))
}

/// Names of the rules that match, in evaluation order.
pub fn matching_rules(inputs: &WindowInputs) -> Vec<&'static str> {
    WINDOW_RULES
        .iter()
        .filter(|rule| (rule.applies)(inputs))
        .map(|rule| rule.name)
        .collect()
}
