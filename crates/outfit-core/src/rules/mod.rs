//! Outfit rules.
//!
//! Hard rules invalidate an outfit and produce a message; soft rules only
//! cost points and produce a code. Each rule is a unit struct evaluated
//! independently against the same items and context.
//!
//! ## Rule Independence
//!
//! - No rule sees another rule's result
//! - No shared mutable state between rules
//! - Within a rule, items are scanned in input order and the first hit wins
//! - A rule whose input is absent from the context does not fire (fail-open)

mod budget;
mod dress_code;
mod fabric;
mod fit;
mod formality;
mod presentation;
mod slots;
mod style;
mod weather;

pub use budget::BudgetRule;
pub use dress_code::DressCodeRule;
pub use fabric::FabricClimateRule;
pub use fit::FitPreferenceRule;
pub use formality::FormalityRule;
pub use presentation::CrossPresentationRule;
pub use slots::RequiredSlotsRule;
pub use style::{DislikedStyleRule, StylePreferenceRule};
pub use weather::ExtremeWeatherRule;

use std::fmt::Display;

use crate::types::{Item, RuleCode, ValidationContext};

/// A rule whose violation makes the outfit invalid.
pub trait HardRule: Send + Sync {
    /// The code this rule reports under.
    fn code(&self) -> RuleCode;

    /// Evaluate the outfit.
    ///
    /// Returns `Some("<CODE>: <detail>")` when violated, `None` otherwise.
    fn check(&self, items: &[Item], context: &ValidationContext) -> Option<String>;
}

/// A rule whose violation lowers the coherence score.
pub trait SoftRule: Send + Sync {
    /// The code this rule reports under.
    fn code(&self) -> RuleCode;

    /// Whether the penalty applies to this outfit.
    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool;
}

/// Hard rules in evaluation order. All of them always run.
pub static HARD_RULES: &[&dyn HardRule] = &[
    &CrossPresentationRule,
    &ExtremeWeatherRule,
    &DressCodeRule,
    &RequiredSlotsRule,
];

/// Soft rules in evaluation order. Skipped entirely once any hard rule fires.
pub static SOFT_RULES: &[&dyn SoftRule] = &[
    &FormalityRule,
    &FitPreferenceRule,
    &FabricClimateRule,
    &BudgetRule,
    &DislikedStyleRule,
    &StylePreferenceRule,
];

/// Format a hard-fail message as `"<CODE>: <detail>"`.
pub(crate) fn violation(code: RuleCode, detail: impl Display) -> String {
    format!("{}: {}", code, detail)
}
