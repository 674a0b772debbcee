//! End-to-end scenarios through the public API.

use outfit_core::{
    is_open_footwear, temp_to_climate_zone, validate_outfit, validate_outfits,
    validate_outfits_par, ClimateZone, Item, OutfitCandidate, RequestDocument, RuleCode, Slot,
    StyleProfile, UserPresentation, ValidationContext,
};

fn top() -> Item {
    Item::new("top", Slot::Tops)
}

fn bottom() -> Item {
    Item::new("bottom", Slot::Bottoms)
}

fn shoes() -> Item {
    Item::new("shoes", Slot::Shoes)
}

/// A spread of outfits and contexts that between them hit every rule.
fn sample_cases() -> Vec<(Vec<Item>, ValidationContext)> {
    let profile = StyleProfile {
        fit_preferences: Some(vec!["slim".into()]),
        style_preferences: Some(vec!["minimalist".into()]),
        disliked_styles: Some(vec!["boho".into()]),
        budget_max: Some(50.0),
        ..Default::default()
    };

    vec![
        (vec![], ValidationContext::empty()),
        (vec![top(), bottom(), shoes()], ValidationContext::empty()),
        (
            vec![top().with_fit("oversized").with_price(400.0), bottom(), shoes()],
            ValidationContext::empty().with_style_profile(profile.clone()),
        ),
        (
            vec![
                top().with_style_descriptors(["minimalist"]),
                bottom().with_material("linen"),
                shoes(),
            ],
            ValidationContext::empty()
                .with_climate_zone(ClimateZone::Cold)
                .with_style_profile(profile.clone()),
        ),
        (
            vec![
                top().with_presentation("masculine"),
                Item::new("d", Slot::Dresses),
            ],
            ValidationContext::empty().with_presentation(UserPresentation::Feminine),
        ),
        (
            vec![
                Item::new("a", Slot::Activewear).with_dress_code("athletic"),
                shoes().with_subcategory("Slides"),
            ],
            ValidationContext::empty()
                .with_dress_code("black tie")
                .with_climate_zone(ClimateZone::Freezing),
        ),
    ]
}

#[test]
fn fail_open_on_bare_complete_outfit() {
    let result = validate_outfit(&[top(), bottom(), shoes()], &ValidationContext::empty());

    assert!(result.valid);
    assert!(result.hard_fails.is_empty());
    assert!(result.soft_penalties.is_empty());
    assert_eq!(result.coherence_score, 100);
}

#[test]
fn every_verdict_is_internally_consistent() {
    for (items, ctx) in sample_cases() {
        let result = validate_outfit(&items, &ctx);
        assert!(result.is_consistent(), "inconsistent verdict: {:?}", result);
        assert_eq!(result.valid, result.coherence_score > 0);
    }
}

#[test]
fn score_drops_three_points_per_soft_penalty() {
    let profile = StyleProfile {
        fit_preferences: Some(vec!["slim".into()]),
        budget_max: Some(50.0),
        ..Default::default()
    };
    let ctx = ValidationContext::empty().with_style_profile(profile);

    let one = validate_outfit(&[top().with_fit("oversized"), bottom(), shoes()], &ctx);
    let two = validate_outfit(
        &[top().with_fit("oversized").with_price(400.0), bottom(), shoes()],
        &ctx,
    );

    assert_eq!(one.coherence_score, 97);
    assert_eq!(two.coherence_score, 94);
    assert_eq!(two.total_penalty, -6);
}

#[test]
fn batch_is_map_over_single_validation() {
    let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Hot);
    let outfits: Vec<OutfitCandidate> = vec![
        OutfitCandidate::new("first", vec![top(), bottom(), shoes()]),
        OutfitCandidate::new(
            "second",
            vec![
                top(),
                bottom(),
                shoes(),
                Item::new("coat", Slot::Outerwear).with_material("Sherpa"),
            ],
        ),
        OutfitCandidate::new("third", vec![Item::new("swim", Slot::Swimwear)]),
    ];

    let batch = validate_outfits(&outfits, &ctx);
    assert_eq!(batch.len(), outfits.len());
    for (i, entry) in batch.iter().enumerate() {
        assert_eq!(entry.outfit_id, outfits[i].outfit_id);
        assert_eq!(entry.validation, validate_outfit(&outfits[i].items, &ctx));
    }
    assert_eq!(batch.valid_count(), 2);
    assert_eq!(batch.ranked(), vec!["first", "third", "second"]);
}

#[test]
fn parallel_batch_matches_sequential() {
    let outfits: Vec<OutfitCandidate> = (0..64)
        .map(|i| {
            let items = match i % 4 {
                0 => vec![top(), bottom(), shoes()],
                1 => vec![Item::new("d", Slot::Dresses)],
                2 => vec![top().with_formality(0.0), bottom().with_formality(10.0), shoes()],
                _ => vec![],
            };
            OutfitCandidate::new(format!("outfit-{}", i), items)
        })
        .collect();
    let ctx = ValidationContext::empty();

    assert_eq!(validate_outfits_par(&outfits, &ctx), validate_outfits(&outfits, &ctx));
}

#[test]
fn sandals_in_freezing_weather() {
    let sandals = shoes().with_name("Brown Sandals").with_subcategory("Sandals");
    let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Freezing);

    let result = validate_outfit(&[top(), bottom(), sandals], &ctx);

    assert!(!result.valid);
    assert!(result.hard_fails[0].contains("EXTREME_WEATHER_CONTRADICTION"));
    assert_eq!(result.coherence_score, 0);
}

#[test]
fn feminine_item_for_masculine_user() {
    let ctx = ValidationContext::empty().with_presentation(UserPresentation::Masculine);
    let result = validate_outfit(&[top().with_presentation("feminine"), bottom(), shoes()], &ctx);

    assert!(result.hard_fails[0].contains("CROSS_PRESENTATION"));
}

#[test]
fn formality_range_threshold() {
    let ctx = ValidationContext::empty();

    let wide = validate_outfit(
        &[top().with_formality(2.0), bottom().with_formality(8.0), shoes()],
        &ctx,
    );
    assert!(wide.valid);
    assert!(wide.soft_penalties.contains(&RuleCode::FormalityIncoherence));

    let narrow = validate_outfit(
        &[top().with_formality(4.0), bottom().with_formality(6.0), shoes()],
        &ctx,
    );
    assert!(!narrow.soft_penalties.contains(&RuleCode::FormalityIncoherence));
}

#[test]
fn dress_and_swimwear_completeness() {
    let ctx = ValidationContext::empty();
    let dress = Item::new("dress", Slot::Dresses);

    let alone = validate_outfit(&[dress.clone()], &ctx);
    assert!(!alone.valid);
    assert!(alone.hard_fails[0].contains("dress missing shoes"));

    assert!(validate_outfit(&[dress, shoes()], &ctx).valid);
    assert!(validate_outfit(&[Item::new("swim", Slot::Swimwear)], &ctx).valid);
}

#[test]
fn open_footwear_classifier() {
    assert!(is_open_footwear(None, Some("Flip-Flops")));
    assert!(is_open_footwear(Some("Blue Flip Flops"), None));
    assert!(!is_open_footwear(Some("White Sneakers"), Some("Sneakers")));
}

#[test]
fn temperature_mapping() {
    assert_eq!(temp_to_climate_zone(Some(20.0)), Some(ClimateZone::Freezing));
    assert_eq!(temp_to_climate_zone(Some(40.0)), Some(ClimateZone::Cold));
    assert_eq!(temp_to_climate_zone(Some(95.0)), Some(ClimateZone::Hot));
    assert_eq!(temp_to_climate_zone(None), None);
}

#[test]
fn first_matching_shoe_is_cited() {
    let ctx = ValidationContext::empty().with_climate_zone(ClimateZone::Cold);
    let items = vec![
        top(),
        bottom(),
        Item::new("boots", Slot::Shoes).with_name("Chelsea Boots"),
        Item::new("slides", Slot::Shoes).with_name("Pool Slides"),
        Item::new("sandals", Slot::Shoes).with_name("Trail Sandals"),
    ];

    let result = validate_outfit(&items, &ctx);
    assert_eq!(result.hard_fails.len(), 1);
    assert!(result.hard_fails[0].contains("Pool Slides"));
    assert!(!result.hard_fails[0].contains("Trail Sandals"));
}

#[test]
fn style_preference_mismatch_when_nothing_preferred() {
    let ctx = ValidationContext::empty().with_style_profile(StyleProfile {
        style_preferences: Some(vec!["Minimalist".into()]),
        ..Default::default()
    });

    let untagged = validate_outfit(&[top(), bottom(), shoes()], &ctx);
    assert_eq!(untagged.soft_penalties, vec![RuleCode::StylePreferenceMismatch]);

    let tagged = validate_outfit(
        &[top().with_style_archetypes(["minimalist"]), bottom(), shoes()],
        &ctx,
    );
    assert!(tagged.soft_penalties.is_empty());
}

#[test]
fn request_document_drives_batch() {
    let doc = RequestDocument::from_yaml(
        r#"
context:
  temperatureF: 20
outfits:
  - outfitId: beach-day
    items:
      - { id: t, slot: tops }
      - { id: b, slot: bottoms }
      - { id: s, slot: shoes, subcategory: Flip-Flops }
  - outfitId: office
    items:
      - { id: t, slot: tops }
      - { id: b, slot: bottoms }
      - { id: s, slot: shoes, name: Oxfords }
"#,
    )
    .unwrap();

    let batch = validate_outfits(&doc.outfits, &doc.context.resolve());
    assert!(!batch.results[0].validation.valid);
    assert!(batch.results[1].validation.valid);
}
