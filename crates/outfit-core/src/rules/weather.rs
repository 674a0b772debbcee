//! Extreme weather contradiction rule
//!
//! **Hard**: open footwear in cold or freezing weather, or heavy outerwear
//! in hot weather. At most one message per outfit.

use crate::keywords::{first_marker, HEAVY_OUTERWEAR_MATERIALS};
use crate::types::{non_empty, ClimateZone, Item, RuleCode, Slot, ValidationContext};

use super::{violation, HardRule};

pub struct ExtremeWeatherRule;

impl ExtremeWeatherRule {
    /// First open-footwear shoe, when the zone is cold or freezing.
    fn open_footwear_in_cold(&self, items: &[Item], zone: ClimateZone) -> Option<String> {
        if !zone.is_cold() {
            return None;
        }

        items
            .iter()
            .filter(|item| item.slot == Slot::Shoes)
            .find(|item| item.is_open_footwear())
            .map(|item| {
                violation(
                    self.code(),
                    format!("open footwear \"{}\" in {} weather", item.label(), zone),
                )
            })
    }

    /// First outerwear piece made of a heavy material, when the zone is hot.
    fn heavy_outerwear_in_heat(&self, items: &[Item], zone: ClimateZone) -> Option<String> {
        if zone != ClimateZone::Hot {
            return None;
        }

        items
            .iter()
            .filter(|item| item.slot == Slot::Outerwear)
            .find_map(|item| {
                let material = non_empty(&item.material)?;
                first_marker(&material.to_lowercase(), HEAVY_OUTERWEAR_MATERIALS).map(|_| {
                    violation(
                        self.code(),
                        format!("heavy outerwear material \"{}\" in hot weather", material),
                    )
                })
            })
    }
}

impl HardRule for ExtremeWeatherRule {
    fn code(&self) -> RuleCode {
        RuleCode::ExtremeWeatherContradiction
    }

    fn check(&self, items: &[Item], context: &ValidationContext) -> Option<String> {
        let zone = context.climate_zone?;

        self.open_footwear_in_cold(items, zone)
            .or_else(|| self.heavy_outerwear_in_heat(items, zone))
    }
}
