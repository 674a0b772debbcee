//! Required slots rule
//!
//! **Hard**: the outfit must be wearable as a whole. The first matching
//! branch decides, in priority order:
//!
//! 1. swimwear present: always complete
//! 2. activewear present: needs shoes
//! 3. dresses present: needs shoes
//! 4. otherwise separates: needs tops, bottoms and shoes
//!
//! Branches do not combine. A dress with tops and bottoms but no shoes is
//! judged by the dress branch alone.

use std::collections::BTreeSet;

use crate::types::{Item, RuleCode, Slot, ValidationContext};

use super::{violation, HardRule};

/// Slots a separates outfit needs, in the order they are reported.
const SEPARATES_REQUIRED: [Slot; 3] = [Slot::Tops, Slot::Bottoms, Slot::Shoes];

pub struct RequiredSlotsRule;

impl HardRule for RequiredSlotsRule {
    fn code(&self) -> RuleCode {
        RuleCode::MissingRequiredSlots
    }

    fn check(&self, items: &[Item], _context: &ValidationContext) -> Option<String> {
        if items.is_empty() {
            return Some(violation(self.code(), "no items"));
        }

        let present: BTreeSet<Slot> = items.iter().map(|item| item.slot).collect();
        let has_shoes = present.contains(&Slot::Shoes);

        if present.contains(&Slot::Swimwear) {
            return None;
        }

        if present.contains(&Slot::Activewear) {
            return (!has_shoes).then(|| violation(self.code(), "activewear missing shoes"));
        }

        if present.contains(&Slot::Dresses) {
            return (!has_shoes).then(|| violation(self.code(), "dress missing shoes"));
        }

        let missing: Vec<&str> = SEPARATES_REQUIRED
            .iter()
            .filter(|slot| !present.contains(*slot))
            .map(Slot::as_str)
            .collect();

        if missing.is_empty() {
            None
        } else {
            Some(violation(
                self.code(),
                format!("separates missing {}", missing.join(", ")),
            ))
        }
    }
}
