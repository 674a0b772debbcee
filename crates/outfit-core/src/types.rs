//! Core types for outfit validation.
//!
//! These are the data structures passed into and returned from the
//! validator: wardrobe items, the request context, and verdicts.
//!
//! Every optional field is an `Option`. A rule that depends on a field
//! treats `None` as "skip this check", never as a default value.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The wardrobe category an item occupies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Tops,
    Bottoms,
    Shoes,
    Outerwear,
    Dresses,
    Accessories,
    Activewear,
    Swimwear,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Tops => "tops",
            Slot::Bottoms => "bottoms",
            Slot::Shoes => "shoes",
            Slot::Outerwear => "outerwear",
            Slot::Dresses => "dresses",
            Slot::Accessories => "accessories",
            Slot::Activewear => "activewear",
            Slot::Swimwear => "swimwear",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the user presents, as recorded on their style profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserPresentation {
    Masculine,
    Feminine,
    Mixed,
}

impl UserPresentation {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserPresentation::Masculine => "masculine",
            UserPresentation::Feminine => "feminine",
            UserPresentation::Mixed => "mixed",
        }
    }
}

impl fmt::Display for UserPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discretized ambient temperature bucket.
///
/// Ordered from coldest to hottest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Freezing,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl ClimateZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateZone::Freezing => "freezing",
            ClimateZone::Cold => "cold",
            ClimateZone::Cool => "cool",
            ClimateZone::Mild => "mild",
            ClimateZone::Warm => "warm",
            ClimateZone::Hot => "hot",
        }
    }

    /// `warm` or `hot`.
    pub fn is_hot(&self) -> bool {
        matches!(self, ClimateZone::Warm | ClimateZone::Hot)
    }

    /// `cold` or `freezing`.
    pub fn is_cold(&self) -> bool {
        matches!(self, ClimateZone::Cold | ClimateZone::Freezing)
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation coding attached to a single item.
///
/// Anything other than the two recognised codes is kept verbatim and
/// never triggers a presentation conflict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum PresentationCode {
    Masculine,
    Feminine,
    Other(String),
}

impl PresentationCode {
    pub fn as_str(&self) -> &str {
        match self {
            PresentationCode::Masculine => "masculine",
            PresentationCode::Feminine => "feminine",
            PresentationCode::Other(code) => code,
        }
    }

    /// True when this code is the opposite of the user's presentation.
    ///
    /// `mixed` users never conflict with anything.
    pub fn conflicts_with(&self, user: UserPresentation) -> bool {
        matches!(
            (user, self),
            (UserPresentation::Masculine, PresentationCode::Feminine)
                | (UserPresentation::Feminine, PresentationCode::Masculine)
        )
    }
}

impl From<String> for PresentationCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "masculine" => PresentationCode::Masculine,
            "feminine" => PresentationCode::Feminine,
            _ => PresentationCode::Other(code),
        }
    }
}

impl From<PresentationCode> for String {
    fn from(code: PresentationCode) -> Self {
        match code {
            PresentationCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PresentationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept any value for a numeric field; keep it only if it is a finite number.
///
/// A caller sending `"formality_score": "high"` gets an absent score rather
/// than a parse error.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .filter(|n| n.is_finite()))
}

/// One article of clothing or accessory considered for an outfit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Opaque unique identifier
    pub id: String,

    /// Wardrobe category
    pub slot: Slot,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,

    /// Formality on a 0-10 scale
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub formality_score: Option<f64>,

    /// Free-text dress code label (e.g. "business casual", "athletic")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_descriptors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_archetypes: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_code: Option<PresentationCode>,
}

impl Item {
    /// Create an item with only the required fields set.
    pub fn new(id: impl Into<String>, slot: Slot) -> Self {
        Self {
            id: id.into(),
            slot,
            name: None,
            subcategory: None,
            color: None,
            material: None,
            fit: None,
            formality_score: None,
            dress_code: None,
            style_descriptors: None,
            style_archetypes: None,
            price: None,
            presentation_code: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_fit(mut self, fit: impl Into<String>) -> Self {
        self.fit = Some(fit.into());
        self
    }

    pub fn with_formality(mut self, score: f64) -> Self {
        self.formality_score = Some(score);
        self
    }

    pub fn with_dress_code(mut self, dress_code: impl Into<String>) -> Self {
        self.dress_code = Some(dress_code.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_presentation(mut self, code: impl Into<String>) -> Self {
        self.presentation_code = Some(PresentationCode::from(code.into()));
        self
    }

    pub fn with_style_descriptors<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_descriptors = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_style_archetypes<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_archetypes = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Style descriptors followed by style archetypes.
    pub fn style_tokens(&self) -> impl Iterator<Item = &str> {
        self.style_descriptors
            .iter()
            .flatten()
            .chain(self.style_archetypes.iter().flatten())
            .map(String::as_str)
    }

    /// Label used when citing the item in a message: name, then subcategory, then id.
    pub fn label(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.subcategory))
            .unwrap_or(self.id.as_str())
    }

    /// Whether this item reads as open footwear (sandals, flip-flops, slides, thongs).
    pub fn is_open_footwear(&self) -> bool {
        crate::classify::is_open_footwear(self.name.as_deref(), self.subcategory.as_deref())
    }
}

/// Borrow an optional string only when it has content.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Stored style preferences for the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StyleProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_preferences: Option<Vec<String>>,

    /// Part of the stored profile shape; no rule reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric_preferences: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preferences: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disliked_styles: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub budget_min: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub budget_max: Option<f64>,
}

/// Situational data shared by every outfit in a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_presentation: Option<UserPresentation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_zone: Option<ClimateZone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_dress_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_profile: Option<StyleProfile>,
}

impl ValidationContext {
    /// A context with nothing set. Every context-dependent rule is disabled.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_presentation(mut self, presentation: UserPresentation) -> Self {
        self.user_presentation = Some(presentation);
        self
    }

    pub fn with_climate_zone(mut self, zone: ClimateZone) -> Self {
        self.climate_zone = Some(zone);
        self
    }

    pub fn with_dress_code(mut self, dress_code: impl Into<String>) -> Self {
        self.requested_dress_code = Some(dress_code.into());
        self
    }

    pub fn with_style_profile(mut self, profile: StyleProfile) -> Self {
        self.style_profile = Some(profile);
        self
    }
}

/// Stable codes for every rule the validator knows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    // Hard
    CrossPresentation,
    ExtremeWeatherContradiction,
    DressCodeMismatch,
    MissingRequiredSlots,
    // Soft
    FormalityIncoherence,
    FitPreferenceMismatch,
    FabricClimateMismatch,
    BudgetMisalignment,
    DislikedStyleMatch,
    StylePreferenceMismatch,
}

impl RuleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::CrossPresentation => "CROSS_PRESENTATION",
            RuleCode::ExtremeWeatherContradiction => "EXTREME_WEATHER_CONTRADICTION",
            RuleCode::DressCodeMismatch => "DRESS_CODE_MISMATCH",
            RuleCode::MissingRequiredSlots => "MISSING_REQUIRED_SLOTS",
            RuleCode::FormalityIncoherence => "FORMALITY_INCOHERENCE",
            RuleCode::FitPreferenceMismatch => "FIT_PREFERENCE_MISMATCH",
            RuleCode::FabricClimateMismatch => "FABRIC_CLIMATE_MISMATCH",
            RuleCode::BudgetMisalignment => "BUDGET_MISALIGNMENT",
            RuleCode::DislikedStyleMatch => "DISLIKED_STYLE_MATCH",
            RuleCode::StylePreferenceMismatch => "STYLE_PREFERENCE_MISMATCH",
        }
    }

    /// Whether a finding under this code invalidates the outfit.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            RuleCode::CrossPresentation
                | RuleCode::ExtremeWeatherContradiction
                | RuleCode::DressCodeMismatch
                | RuleCode::MissingRequiredSlots
        )
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single outfit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff no hard rule fired
    pub valid: bool,

    /// `"<RULE_CODE>: <detail>"` messages, in rule evaluation order
    pub hard_fails: Vec<String>,

    /// Soft rule codes, in rule evaluation order. Empty whenever `hard_fails` is not.
    pub soft_penalties: Vec<RuleCode>,

    /// `-3` per soft penalty
    pub total_penalty: i32,

    /// 0..=100, and 0 whenever the outfit is invalid
    pub coherence_score: u32,
}

impl ValidationResult {
    /// Check the verdict's internal invariants.
    ///
    /// - `valid` iff `hard_fails` is empty
    /// - an invalid outfit has no soft penalties and a zero score
    /// - a valid outfit scores `max(0, 100 - 3 * penalties)`
    pub fn is_consistent(&self) -> bool {
        let expected_penalty = -3 * self.soft_penalties.len() as i64;
        if self.total_penalty as i64 != expected_penalty {
            return false;
        }
        if self.valid != self.hard_fails.is_empty() {
            return false;
        }
        if self.valid {
            self.coherence_score as i64 == (100 + expected_penalty).max(0)
        } else {
            self.soft_penalties.is_empty() && self.coherence_score == 0
        }
    }

    /// True if `code` appears among the soft penalties or prefixes a hard fail.
    pub fn has_finding(&self, code: RuleCode) -> bool {
        if code.is_hard() {
            self.hard_fails
                .iter()
                .any(|msg| msg.starts_with(code.as_str()))
        } else {
            self.soft_penalties.contains(&code)
        }
    }
}

/// A candidate outfit submitted for batch validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutfitCandidate {
    pub outfit_id: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl OutfitCandidate {
    pub fn new(outfit_id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            outfit_id: outfit_id.into(),
            items,
        }
    }
}

/// One entry of a batch verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutfitValidation {
    pub outfit_id: String,
    pub validation: ValidationResult,
}

/// Verdicts for a batch of outfits, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchResult {
    pub results: Vec<OutfitValidation>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutfitValidation> {
        self.results.iter()
    }

    /// Number of outfits with no hard fails.
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.validation.valid).count()
    }

    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|r| r.validation.valid)
    }

    /// Outfit ids by descending coherence score. Ties keep input order.
    pub fn ranked(&self) -> Vec<&str> {
        let mut entries: Vec<&OutfitValidation> = self.results.iter().collect();
        // sort_by is stable
        entries.sort_by(|a, b| {
            b.validation
                .coherence_score
                .cmp(&a.validation.coherence_score)
        });
        entries.iter().map(|r| r.outfit_id.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a OutfitValidation;
    type IntoIter = std::slice::Iter<'a, OutfitValidation>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
