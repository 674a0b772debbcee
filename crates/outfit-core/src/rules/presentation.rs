//! Cross-presentation rule
//!
//! **Hard**: an item coded for the opposite presentation of the user.

use crate::types::{Item, RuleCode, UserPresentation, ValidationContext};

use super::{violation, HardRule};

pub struct CrossPresentationRule;

impl HardRule for CrossPresentationRule {
    fn code(&self) -> RuleCode {
        RuleCode::CrossPresentation
    }

    fn check(&self, items: &[Item], context: &ValidationContext) -> Option<String> {
        // Mixed presentation disables the rule
        let user = match context.user_presentation {
            Some(UserPresentation::Mixed) | None => return None,
            Some(user) => user,
        };

        items.iter().find_map(|item| {
            let code = item.presentation_code.as_ref()?;
            code.conflicts_with(user).then(|| {
                violation(
                    self.code(),
                    format!(
                        "item {} is coded {} but user presents {}",
                        item.id, code, user
                    ),
                )
            })
        })
    }
}
