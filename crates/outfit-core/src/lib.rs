//! # outfit-core
//!
//! Deterministic outfit coherence validation.
//!
//! This crate decides whether a proposed outfit (a set of wardrobe items)
//! is acceptable for a user in a given context, and scores it:
//! - Is anything in it a hard contradiction (wrong presentation, sandals in the snow)?
//! - Is it wearable as a whole (shoes, tops, bottoms)?
//! - How coherent is it (formality spread, fit, fabric, budget, style)?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same verdict
//! 2. **Fail-open**: Missing metadata disables a rule, it never fails one
//! 3. **Total**: Every well-typed input produces a verdict; findings are data, not errors
//! 4. **Parallel-safe**: Outfits in a batch are evaluated independently
//!
//! ## Example
//!
//! ```rust
//! use outfit_core::{validate_outfit, ClimateZone, Item, Slot, ValidationContext};
//!
//! let items = vec![
//!     Item::new("t1", Slot::Tops),
//!     Item::new("b1", Slot::Bottoms),
//!     Item::new("s1", Slot::Shoes).with_name("Brown Sandals"),
//! ];
//! let context = ValidationContext::empty().with_climate_zone(ClimateZone::Freezing);
//!
//! let result = validate_outfit(&items, &context);
//! assert!(!result.valid);
//! assert!(result.hard_fails[0].starts_with("EXTREME_WEATHER_CONTRADICTION"));
//! assert_eq!(result.coherence_score, 0);
//! ```

pub mod classify;
pub mod document;
pub mod keywords;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use classify::{is_open_footwear, temp_to_climate_zone};
pub use document::{InputError, RequestContext, RequestDocument};
pub use rules::{HardRule, SoftRule};
pub use types::{
    BatchResult, ClimateZone, Item, OutfitCandidate, OutfitValidation, PresentationCode,
    RuleCode, Slot, StyleProfile, UserPresentation, ValidationContext, ValidationResult,
};
pub use validator::OutfitValidator;

/// Validate one outfit against a context.
///
/// This is the main entry point. An empty `items` slice is a valid input
/// that produces the `MISSING_REQUIRED_SLOTS: no items` hard fail.
pub fn validate_outfit(items: &[Item], context: &ValidationContext) -> ValidationResult {
    OutfitValidator::new().validate(items, context)
}

/// Validate each outfit against the same context, preserving input order.
pub fn validate_outfits(outfits: &[OutfitCandidate], context: &ValidationContext) -> BatchResult {
    OutfitValidator::new().validate_batch(outfits, context)
}

/// Parallel variant of [`validate_outfits`]. The result is identical.
pub fn validate_outfits_par(
    outfits: &[OutfitCandidate],
    context: &ValidationContext,
) -> BatchResult {
    OutfitValidator::new().validate_batch_par(outfits, context)
}

/// Cross-rule tests covering interactions between hard and soft rules
#[cfg(test)]
mod cross_rule_tests {
    use super::*;

    fn top() -> Item {
        Item::new("top-1", Slot::Tops).with_name("Crew Tee")
    }

    fn bottom() -> Item {
        Item::new("bottom-1", Slot::Bottoms).with_name("Chinos")
    }

    fn shoes() -> Item {
        Item::new("shoes-1", Slot::Shoes).with_name("White Sneakers")
    }

    #[test]
    fn test_presentation_fail_suppresses_formality_penalty() {
        let items = vec![
            top().with_presentation("feminine").with_formality(1.0),
            bottom().with_formality(9.0),
            shoes(),
        ];
        let ctx = ValidationContext::empty().with_presentation(UserPresentation::Masculine);

        let result = validate_outfit(&items, &ctx);
        assert_eq!(result.hard_fails.len(), 1);
        assert!(result.soft_penalties.is_empty());
        assert_eq!(result.coherence_score, 0);
    }

    #[test]
    fn test_hot_wool_coat_is_hard_and_not_double_counted() {
        let items = vec![
            top(),
            bottom(),
            shoes(),
            Item::new("coat-1", Slot::Outerwear).with_material("Wool"),
        ];
        let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Hot);

        let result = validate_outfit(&items, &ctx);
        assert!(!result.valid);
        assert!(result.has_finding(RuleCode::ExtremeWeatherContradiction));
        assert!(!result.has_finding(RuleCode::FabricClimateMismatch));
    }

    #[test]
    fn test_warm_wool_coat_is_only_soft() {
        let items = vec![
            top(),
            bottom(),
            shoes(),
            Item::new("coat-1", Slot::Outerwear).with_material("Wool"),
        ];
        let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Warm);

        let result = validate_outfit(&items, &ctx);
        assert!(result.valid);
        assert_eq!(result.soft_penalties, vec![RuleCode::FabricClimateMismatch]);
        assert_eq!(result.coherence_score, 97);
    }

    #[test]
    fn test_determinism_same_input_same_output() {
        let items = vec![top().with_formality(2.0), bottom().with_formality(8.0), shoes()];
        let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Mild);

        let first = validate_outfit(&items, &ctx);
        let second = validate_outfit(&items, &ctx);
        let third = validate_outfit(&items, &ctx);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let outfits = vec![
            OutfitCandidate::new("a", vec![top(), bottom(), shoes()]),
            OutfitCandidate::new("b", vec![Item::new("d", Slot::Dresses)]),
        ];
        let ctx = ValidationContext::empty();

        let batch = validate_outfits(&outfits, &ctx);
        for (outfit, entry) in outfits.iter().zip(batch.iter()) {
            assert_eq!(entry.outfit_id, outfit.outfit_id);
            assert_eq!(entry.validation, validate_outfit(&outfit.items, &ctx));
        }
        assert_eq!(validate_outfits_par(&outfits, &ctx), batch);
    }
}
