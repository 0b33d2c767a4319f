// Unit tests for Nywele Engine

use nywele_engine::core::{
    analyze_hair_health, check_style_compatibility, detect_damage, severity_for_count,
    tiers_for_budget, HairClassifier, StylistMatcher,
};
use nywele_engine::models::{
    normalize_slug, DamageSeverity, Label, PriceTier, RawHairProfile, StyleRequest, Stylist,
    Texture, UserHairProfile, VerdictStatus,
};

fn profile(hair_type: Option<&str>, concerns: &[&str]) -> UserHairProfile {
    UserHairProfile::from_raw(RawHairProfile {
        hair_type: hair_type.map(|s| s.to_string()),
        current_concerns: Some(concerns.iter().map(|s| s.to_string()).collect()),
        ..RawHairProfile::default()
    })
}

fn stylist(id: &str, skill: &str, tier: PriceTier, rating: f64, hours: u8) -> Stylist {
    Stylist {
        id: id.to_string(),
        name: format!("Stylist {}", id),
        skills: vec![skill.to_string()],
        price_tier: tier,
        rating,
        availability_hours_per_day: hours,
    }
}

#[test]
fn test_classify_empty_labels() {
    let analysis = HairClassifier::default().classify(&[]);

    assert_eq!(analysis.overall_quality, 50);
    assert_eq!(analysis.health.score, 50);
    assert!(analysis.texture.is_none());
    assert!(analysis.hair_type.is_none());
    assert_eq!(analysis.damage.severity, DamageSeverity::None);
}

#[test]
fn test_classify_deterministic() {
    let classifier = HairClassifier::default();
    let labels = vec![
        Label::new("box braids", 0.9),
        Label::new("dry", 0.8),
        Label::new("long hair", 0.7),
    ];

    assert_eq!(classifier.classify(&labels), classifier.classify(&labels));
}

#[test]
fn test_quality_bounds_over_varied_inputs() {
    let classifier = HairClassifier::default();
    let corpora: Vec<Vec<Label>> = vec![
        vec![],
        vec![Label::new("shiny", 1.0), Label::new("healthy", 1.0)],
        vec![
            Label::new("dry", 1.0),
            Label::new("brittle", 1.0),
            Label::new("split ends", 1.0),
            Label::new("breakage", 1.0),
            Label::new("dull", 1.0),
        ],
        vec![Label::new("bleached", 0.5), Label::new("frizzy", 0.5)],
    ];

    for labels in &corpora {
        let analysis = classifier.classify(labels);
        assert!(analysis.overall_quality <= 100);
    }
}

#[test]
fn test_coily_priority_over_straight() {
    let classifier = HairClassifier::default();
    let labels = vec![Label::new("coily and straight strands", 0.8)];

    let analysis = classifier.classify(&labels);
    assert_eq!(analysis.texture, Some(Texture::Coily));
}

#[test]
fn test_damage_monotonicity() {
    let one_category = detect_damage(&[Label::new("dehydrated", 0.8)]);
    let four_categories = detect_damage(&[
        Label::new("dehydrated", 0.8),
        Label::new("breakage", 0.8),
        Label::new("frizz", 0.8),
        Label::new("brittle", 0.8),
    ]);

    assert_eq!(one_category.severity, DamageSeverity::Mild);
    assert_eq!(four_categories.severity, DamageSeverity::Severe);
    assert!(four_categories.severity >= one_category.severity);
    assert_eq!(severity_for_count(4), DamageSeverity::Severe);
}

#[test]
fn test_health_score_two_negatives() {
    let health = analyze_hair_health(&[Label::new("dry", 0.8), Label::new("frizzy", 0.7)]);
    assert_eq!(health.score, 20);
}

#[test]
fn test_compatibility_first_match_semantics() {
    // Both risky rules could fire here; only the breakage reason may win.
    let verdict = check_style_compatibility(
        &profile(Some("4c"), &["breakage", "dryness"]),
        &StyleRequest::new("Twists over Locs"),
    );

    assert_eq!(verdict.status, VerdictStatus::Risky);
    assert!(verdict.reason.contains("tension"));
}

#[test]
fn test_compatibility_unknown_without_hair_type() {
    let verdict =
        check_style_compatibility(&profile(None, &[]), &StyleRequest::new("Cornrows"));
    assert_eq!(verdict.status, VerdictStatus::Unknown);
}

#[test]
fn test_ranking_tiebreak_and_fallback() {
    let matcher = StylistMatcher::default();

    let roster = vec![
        stylist("budget", "box-braids", PriceTier::Budget, 4.6, 8),
        stylist("mid", "box-braids", PriceTier::MidRange, 4.6, 8),
    ];
    let outcome = matcher.match_stylists(&StyleRequest::new("Box Braids"), 4, None, &roster);
    assert_eq!(outcome.stylists[0].id, "mid");

    // Filter that excludes everyone produces the first-two fallback
    let roster = vec![
        stylist("a", "cornrows", PriceTier::Budget, 4.0, 8),
        stylist("b", "cornrows", PriceTier::Budget, 4.5, 8),
        stylist("c", "cornrows", PriceTier::Budget, 5.0, 8),
    ];
    let outcome = matcher.match_stylists(&StyleRequest::new("Locs"), 4, None, &roster);
    assert!(outcome.fallback);
    assert_eq!(outcome.stylists.len(), 2);
    assert_eq!(outcome.stylists[0].id, "a");
    assert_eq!(outcome.stylists[1].id, "b");
}

#[test]
fn test_budget_bracket_lookup() {
    assert_eq!(tiers_for_budget(Some("Under 3,000")), vec![PriceTier::Budget]);
    assert_eq!(tiers_for_budget(Some("8,000+")), vec![PriceTier::Premium]);
    assert_eq!(tiers_for_budget(None).len(), 3);
}

#[test]
fn test_slug_idempotence() {
    for name in ["Box Braids", "Goddess   Locs", "twa!", "already-a-slug"] {
        let once = normalize_slug(name);
        assert_eq!(normalize_slug(&once), once);
    }
}
