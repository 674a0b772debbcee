//! Validator: runs the rules and scores the outfit.
//!
//! The validator applies fixed, non-configurable policy:
//! 1. Run every hard rule, in order, collecting every message
//! 2. If any hard rule fired, skip soft rules entirely
//! 3. Otherwise run every soft rule, in order, collecting codes
//! 4. Score: 0 if invalid, else `max(0, 100 - 3 * soft penalties)`
//!
//! Nothing is cached between calls. Same input, same verdict.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::rules::{HardRule, SoftRule, HARD_RULES, SOFT_RULES};
use crate::types::{
    BatchResult, Item, OutfitCandidate, OutfitValidation, RuleCode, ValidationContext,
    ValidationResult,
};

/// Runs the hard and soft rule sets against outfits.
pub struct OutfitValidator {
    hard_rules: &'static [&'static dyn HardRule],
    soft_rules: &'static [&'static dyn SoftRule],
}

impl OutfitValidator {
    /// Points lost per soft penalty.
    pub const SOFT_PENALTY_WEIGHT: i32 = 3;

    /// Score of an outfit with no findings.
    pub const MAX_SCORE: i32 = 100;

    pub fn new() -> Self {
        Self {
            hard_rules: HARD_RULES,
            soft_rules: SOFT_RULES,
        }
    }

    /// Validate one outfit against the context.
    pub fn validate(&self, items: &[Item], context: &ValidationContext) -> ValidationResult {
        let hard_fails: Vec<String> = self
            .hard_rules
            .iter()
            .filter_map(|rule| {
                let message = rule.check(items, context);
                if message.is_some() {
                    debug!(rule = %rule.code(), "hard rule fired");
                }
                message
            })
            .collect();

        let soft_penalties: Vec<RuleCode> = if hard_fails.is_empty() {
            self.soft_rules
                .iter()
                .filter(|rule| rule.triggered(items, context))
                .map(|rule| {
                    debug!(rule = %rule.code(), "soft penalty applied");
                    rule.code()
                })
                .collect()
        } else {
            Vec::new()
        };

        let (total_penalty, coherence_score) = Self::score(&hard_fails, &soft_penalties);

        trace!(
            items = items.len(),
            hard_fails = hard_fails.len(),
            soft_penalties = soft_penalties.len(),
            coherence_score,
            "outfit evaluated"
        );

        ValidationResult {
            valid: hard_fails.is_empty(),
            hard_fails,
            soft_penalties,
            total_penalty,
            coherence_score,
        }
    }

    /// Validate many outfits against one shared context, in input order.
    pub fn validate_batch(
        &self,
        outfits: &[OutfitCandidate],
        context: &ValidationContext,
    ) -> BatchResult {
        BatchResult {
            results: outfits
                .iter()
                .map(|outfit| self.validate_candidate(outfit, context))
                .collect(),
        }
    }

    /// Same as [`validate_batch`](Self::validate_batch), evaluating outfits in parallel.
    ///
    /// Output order still matches input order.
    pub fn validate_batch_par(
        &self,
        outfits: &[OutfitCandidate],
        context: &ValidationContext,
    ) -> BatchResult {
        BatchResult {
            results: outfits
                .par_iter()
                .map(|outfit| self.validate_candidate(outfit, context))
                .collect(),
        }
    }

    fn validate_candidate(
        &self,
        outfit: &OutfitCandidate,
        context: &ValidationContext,
    ) -> OutfitValidation {
        let span = tracing::debug_span!("outfit", outfit_id = %outfit.outfit_id);
        let validation = span.in_scope(|| self.validate(&outfit.items, context));

        OutfitValidation {
            outfit_id: outfit.outfit_id.clone(),
            validation,
        }
    }

    /// Returns `(total_penalty, coherence_score)`.
    fn score(hard_fails: &[String], soft_penalties: &[RuleCode]) -> (i32, u32) {
        let total_penalty = -Self::SOFT_PENALTY_WEIGHT * soft_penalties.len() as i32;

        let coherence_score = if hard_fails.is_empty() {
            (Self::MAX_SCORE + total_penalty).max(0) as u32
        } else {
            0
        };

        (total_penalty, coherence_score)
    }
}

impl Default for OutfitValidator {
    fn default() -> Self {
        Self::new()
    }
}
