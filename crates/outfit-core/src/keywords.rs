//! Keyword tables for text-matching rules.
//!
//! All entries are lowercase substrings. Rules lower-case the field they
//! inspect and then look for the first table entry it contains, so a
//! table can be extended without touching rule control flow.

/// Outerwear materials that contradict `hot` weather outright.
pub static HEAVY_OUTERWEAR_MATERIALS: &[&str] = &["wool", "down", "sherpa", "fleece"];

/// Requested dress codes that switch the dress-code rule on.
pub static FORMAL_DRESS_CODE_MARKERS: &[&str] = &[
    "business",
    "businesscasual",
    "business casual",
    "formal",
    "blacktie",
    "black tie",
    "black-tie",
];

/// Item dress codes that clash with a formal-leaning request.
pub static CASUAL_DRESS_CODE_MARKERS: &[&str] = &["ultracasual", "ultra casual", "athletic"];

/// Fabrics penalised in `warm` or `hot` weather.
pub static HOT_WEATHER_FABRICS: &[&str] = &[
    "wool", "cashmere", "fleece", "down", "velvet", "corduroy",
];

/// Fabrics penalised in `cold` or `freezing` weather.
pub static COLD_WEATHER_FABRICS: &[&str] = &["linen", "chiffon", "mesh"];

/// Return the first table entry found as a substring of `text`.
///
/// `text` is expected to already be lowercase.
pub fn first_marker<'a>(text: &str, table: &[&'a str]) -> Option<&'a str> {
    table.iter().copied().find(|marker| text.contains(marker))
}

/// Case-insensitive intersection test between an item's style tokens and a
/// list of profile tags.
pub fn tokens_intersect<'a, I>(tokens: I, tags: &[String]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    tokens
        .into_iter()
        .any(|token| tags.contains(&token.to_lowercase()))
}
