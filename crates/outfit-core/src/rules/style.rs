//! Style rules
//!
//! **Soft**, both reading an item's descriptors followed by its archetypes:
//!
//! - `DISLIKED_STYLE_MATCH`: some item carries a style the user dislikes
//! - `STYLE_PREFERENCE_MISMATCH`: no item carries any style the user prefers
//!
//! The second penalises the absence of a good signal, so an outfit whose
//! items have no style tags at all is penalised whenever preferences exist.

use crate::keywords::tokens_intersect;
use crate::types::{Item, RuleCode, StyleProfile, ValidationContext};

use super::SoftRule;

/// Non-empty tag list from the profile, if any.
fn profile_tags<'a>(
    context: &'a ValidationContext,
    select: impl Fn(&'a StyleProfile) -> Option<&'a Vec<String>>,
) -> Option<&'a [String]> {
    context
        .style_profile
        .as_ref()
        .and_then(select)
        .map(Vec::as_slice)
        .filter(|tags| !tags.is_empty())
}

/// Whether the item carries any of `tags`. Untagged items never match.
fn item_matches(item: &Item, tags: &[String]) -> bool {
    tokens_intersect(item.style_tokens(), tags)
}

pub struct DislikedStyleRule;

impl SoftRule for DislikedStyleRule {
    fn code(&self) -> RuleCode {
        RuleCode::DislikedStyleMatch
    }

    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool {
        let Some(disliked) = profile_tags(context, |p| p.disliked_styles.as_ref()) else {
            return false;
        };

        items.iter().any(|item| item_matches(item, disliked))
    }
}

pub struct StylePreferenceRule;

impl SoftRule for StylePreferenceRule {
    fn code(&self) -> RuleCode {
        RuleCode::StylePreferenceMismatch
    }

    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool {
        let Some(preferred) = profile_tags(context, |p| p.style_preferences.as_ref()) else {
            return false;
        };

        !items.iter().any(|item| item_matches(item, preferred))
    }
}
