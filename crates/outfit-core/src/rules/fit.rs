//! Fit preference mismatch rule
//!
//! **Soft**: a slim-fit lover gets an oversized item, or the reverse.

use crate::types::{non_empty, Item, RuleCode, ValidationContext};

use super::SoftRule;

pub struct FitPreferenceRule;

impl SoftRule for FitPreferenceRule {
    fn code(&self) -> RuleCode {
        RuleCode::FitPreferenceMismatch
    }

    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool {
        let preferences: Vec<String> = match context
            .style_profile
            .as_ref()
            .and_then(|p| p.fit_preferences.as_ref())
        {
            Some(prefs) if !prefs.is_empty() => prefs.iter().map(|p| p.to_lowercase()).collect(),
            _ => return false,
        };

        let prefers = |fit: &str| preferences.iter().any(|p| p == fit);
        let prefers_slim = prefers("slim");
        let prefers_oversized = prefers("oversized");

        items.iter().any(|item| {
            let Some(fit) = non_empty(&item.fit) else {
                return false;
            };
            let fit = fit.to_lowercase();
            (prefers_slim && fit.contains("oversized")) || (prefers_oversized && fit.contains("slim"))
        })
    }
}
