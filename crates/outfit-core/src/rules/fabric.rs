//! Fabric/climate mismatch rule
//!
//! **Soft**: warm fabrics in warm or hot weather, airy fabrics in cold or
//! freezing weather. Applies to every slot, not just outerwear.

use crate::keywords::{first_marker, COLD_WEATHER_FABRICS, HOT_WEATHER_FABRICS};
use crate::types::{non_empty, Item, RuleCode, ValidationContext};

use super::SoftRule;

pub struct FabricClimateRule;

impl SoftRule for FabricClimateRule {
    fn code(&self) -> RuleCode {
        RuleCode::FabricClimateMismatch
    }

    fn triggered(&self, items: &[Item], context: &ValidationContext) -> bool {
        let Some(zone) = context.climate_zone else {
            return false;
        };

        let bad_fabrics: &[&str] = if zone.is_hot() {
            HOT_WEATHER_FABRICS
        } else if zone.is_cold() {
            COLD_WEATHER_FABRICS
        } else {
            return false;
        };

        items.iter().any(|item| {
            non_empty(&item.material)
                .and_then(|material| first_marker(&material.to_lowercase(), bad_fabrics))
                .is_some()
        })
    }
}
