//! Pure helper classifiers used by the weather rules.
//!
//! Both are independently callable: callers building a context from a
//! weather lookup use [`temp_to_climate_zone`] directly.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::ClimateZone;

lazy_static! {
    /// Open footwear, as whole words: sandal(s), flip flop / flip-flop / flipflop(s),
    /// slide(s), thong(s).
    static ref OPEN_FOOTWEAR_PATTERN: Regex = Regex::new(
        r"(?i)\b(sandals?|flip[- ]?flops?|slides?|thongs?)\b"
    ).unwrap();
}

/// Whether an item's subcategory or name describes open footwear.
///
/// Matching is case-insensitive and whole-word, so "Sandalwood Loafer" is
/// not open footwear while "Blue Flip Flops" is.
pub fn is_open_footwear(name: Option<&str>, subcategory: Option<&str>) -> bool {
    let text = format!(
        "{} {}",
        subcategory.unwrap_or("").to_lowercase(),
        name.unwrap_or("").to_lowercase()
    );
    OPEN_FOOTWEAR_PATTERN.is_match(&text)
}

/// Bucket a Fahrenheit temperature into a climate zone.
///
/// Each bound is exclusive: exactly 32°F is `cold`, not `freezing`.
/// `None` (and NaN) yields `None`, which leaves every weather rule disabled.
pub fn temp_to_climate_zone(temp_f: Option<f64>) -> Option<ClimateZone> {
    let t = temp_f.filter(|t| !t.is_nan())?;

    let zone = if t < 32.0 {
        ClimateZone::Freezing
    } else if t < 45.0 {
        ClimateZone::Cold
    } else if t < 55.0 {
        ClimateZone::Cool
    } else if t < 65.0 {
        ClimateZone::Mild
    } else if t < 85.0 {
        ClimateZone::Warm
    } else {
        ClimateZone::Hot
    };

    Some(zone)
}
