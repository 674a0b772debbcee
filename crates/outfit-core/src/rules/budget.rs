//! Budget misalignment rule
//!
//! **Soft**: an item priced above twice the user's maximum budget.

use crate::types::{Item, RuleCode, ValidationContext};

use super::SoftRule;

/// How far past `budget_max` an item may go before it is penalised.
pub const BUDGET_TOLERANCE: f64 = 2.0;

pub struct BudgetRule;

impl SoftRule for BudgetRule {
    fn code(&self) -> RuleCode {
        RuleCode::BudgetMisalignment
    }

    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool {
        let Some(budget_max) = context.style_profile.as_ref().and_then(|p| p.budget_max) else {
            return false;
        };

        let ceiling = BUDGET_TOLERANCE * budget_max;
        items
            .iter()
            .filter_map(|item| item.price)
            .any(|price| price > ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Slot, StyleProfile};

    fn ctx(budget_max: Option<f64>) -> ValidationContext {
        ValidationContext::empty().with_style_profile(StyleProfile {
            budget_max,
            ..Default::default()
        })
    }

    fn outfit(shoe_price: f64) -> Vec<Item> {
        vec![
            Item::new("t1", Slot::Tops).with_price(30.0),
            Item::new("b1", Slot::Bottoms),
            Item::new("s1", Slot::Shoes).with_price(shoe_price),
        ]
    }

    #[test]
    fn test_item_over_twice_budget() {
        assert!(BudgetRule.triggered(&outfit(201.0), &ctx(Some(100.0))));
    }

    #[test]
    fn test_item_at_twice_budget_passes() {
        assert!(!BudgetRule.triggered(&outfit(200.0), &ctx(Some(100.0))));
    }

    #[test]
    fn test_no_budget_disables_rule() {
        assert!(!BudgetRule.triggered(&outfit(5000.0), &ctx(None)));
        assert!(!BudgetRule.triggered(&outfit(5000.0), &ValidationContext::empty()));
    }

    #[test]
    fn test_unpriced_items_ignored() {
        let items = vec![
            Item::new("t1", Slot::Tops),
            Item::new("b1", Slot::Bottoms),
            Item::new("s1", Slot::Shoes),
        ];
        assert!(!BudgetRule.triggered(&items, &ctx(Some(10.0))));
    }
}
