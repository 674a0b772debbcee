//! Formality incoherence rule
//!
//! **Soft**: the spread of formality scores across the outfit exceeds 4.

use crate::types::{Item, RuleCode, ValidationContext};

use super::SoftRule;

/// Largest tolerated gap between the most and least formal item.
pub const MAX_FORMALITY_SPREAD: f64 = 4.0;

pub struct FormalityRule;

impl SoftRule for FormalityRule {
    fn code(&self) -> RuleCode {
        RuleCode::FormalityIncoherence
    }

    fn triggered(&self, items: &[Item], _context: &ValidationContext) -> bool {
        let scores: Vec<f64> = items
            .iter()
            .filter_map(|item| item.formality_score)
            .filter(|score| score.is_finite())
            .collect();

        if scores.len() < 2 {
            return false;
        }

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        max - min > MAX_FORMALITY_SPREAD
    }
}
