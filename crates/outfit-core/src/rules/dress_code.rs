//! Dress code mismatch rule
//!
//! **Hard**: an ultra-casual or athletic item in a business/formal request.
//! Only active when the requested dress code is formal-leaning.

use crate::keywords::{first_marker, CASUAL_DRESS_CODE_MARKERS, FORMAL_DRESS_CODE_MARKERS};
use crate::types::{non_empty, Item, RuleCode, ValidationContext};

use super::{violation, HardRule};

pub struct DressCodeRule;

impl HardRule for DressCodeRule {
    fn code(&self) -> RuleCode {
        RuleCode::DressCodeMismatch
    }

    fn check(&self, items: &[Item], context: &ValidationContext) -> Option<String> {
        let requested = context.requested_dress_code.as_deref()?;
        first_marker(&requested.to_lowercase(), FORMAL_DRESS_CODE_MARKERS)?;

        items.iter().find_map(|item| {
            let dress_code = non_empty(&item.dress_code)?;
            first_marker(&dress_code.to_lowercase(), CASUAL_DRESS_CODE_MARKERS).map(|_| {
                violation(
                    self.code(),
                    format!(
                        "item {} has dress code \"{}\" but request is \"{}\"",
                        item.id, dress_code, requested
                    ),
                )
            })
        })
    }
}
