use crate::core::keywords::{
    DAMAGE_TABLE, NEGATIVE_HEALTH_INDICATORS, POSITIVE_HEALTH_INDICATORS,
};
use crate::models::{DamageReport, DamageSeverity, HairHealth, Label};

/// Base health score when no indicator is present
pub const BASE_HEALTH_SCORE: i32 = 50;

/// Points added/removed per distinct indicator
const INDICATOR_STEP: i32 = 15;

/// Lowercase all label descriptions into one search string
pub fn concat_descriptions(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|l| l.description.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score hair health from indicator keywords
///
/// Base 50; +15 per distinct positive indicator present, -15 per distinct
/// negative indicator present; clamped to [0, 100]. Indicators are counted
/// once no matter how many labels repeat them.
pub fn analyze_hair_health(labels: &[Label]) -> HairHealth {
    let haystack = concat_descriptions(labels);

    let positive: Vec<String> = POSITIVE_HEALTH_INDICATORS
        .iter()
        .filter(|kw| haystack.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    let negative: Vec<String> = NEGATIVE_HEALTH_INDICATORS
        .iter()
        .filter(|kw| haystack.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    let score = BASE_HEALTH_SCORE + INDICATOR_STEP * positive.len() as i32
        - INDICATOR_STEP * negative.len() as i32;

    HairHealth {
        score: score.clamp(0, 100) as u8,
        positive_indicators: positive,
        negative_indicators: negative,
    }
}

/// Detect damage categories from label text
///
/// A category is present if any of its keywords appears anywhere in the
/// concatenated text. Severity buckets on the count of distinct categories:
/// 0 none, 1 mild, 2-3 moderate, 4+ severe.
pub fn detect_damage(labels: &[Label]) -> DamageReport {
    let haystack = concat_descriptions(labels);

    let mut types = Vec::new();
    let mut indicators = Vec::new();

    for (kind, keywords) in DAMAGE_TABLE {
        let matched: Vec<&str> = keywords
            .iter()
            .filter(|kw| haystack.contains(*kw))
            .copied()
            .collect();
        if !matched.is_empty() {
            types.push(*kind);
            indicators.extend(matched.iter().map(|kw| kw.to_string()));
        }
    }

    let severity = severity_for_count(types.len());

    DamageReport {
        types,
        severity,
        indicators,
    }
}

/// Integer-bucket severity rule
pub fn severity_for_count(count: usize) -> DamageSeverity {
    match count {
        0 => DamageSeverity::None,
        1 => DamageSeverity::Mild,
        2..=3 => DamageSeverity::Moderate,
        _ => DamageSeverity::Severe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DamageKind;

    #[test]
    fn test_health_baseline_on_empty() {
        let health = analyze_hair_health(&[]);
        assert_eq!(health.score, 50);
        assert!(health.positive_indicators.is_empty());
        assert!(health.negative_indicators.is_empty());
    }

    #[test]
    fn test_health_two_negatives() {
        let labels = vec![Label::new("dry", 0.8), Label::new("frizzy", 0.7)];
        let health = analyze_hair_health(&labels);
        assert_eq!(health.score, 20);
        assert_eq!(health.negative_indicators, vec!["dry", "frizzy"]);
    }

    #[test]
    fn test_health_indicator_counted_once() {
        // Duplicate labels must not double the penalty
        let labels = vec![Label::new("dry", 0.8), Label::new("dry hair", 0.6)];
        let health = analyze_hair_health(&labels);
        assert_eq!(health.score, 35);
    }

    #[test]
    fn test_health_clamped_to_bounds() {
        let labels = vec![
            Label::new("dry", 0.9),
            Label::new("damaged", 0.9),
            Label::new("brittle", 0.9),
            Label::new("frizzy", 0.9),
            Label::new("dull", 0.9),
        ];
        let health = analyze_hair_health(&labels);
        assert_eq!(health.score, 0);
    }

    #[test]
    fn test_damage_categories_and_severity() {
        let labels = vec![Label::new("dry", 0.8), Label::new("frizzy", 0.7)];
        let report = detect_damage(&labels);
        assert_eq!(report.types, vec![DamageKind::Dryness, DamageKind::Frizz]);
        assert_eq!(report.severity, DamageSeverity::Moderate);
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(severity_for_count(0), DamageSeverity::None);
        assert_eq!(severity_for_count(1), DamageSeverity::Mild);
        assert_eq!(severity_for_count(2), DamageSeverity::Moderate);
        assert_eq!(severity_for_count(3), DamageSeverity::Moderate);
        assert_eq!(severity_for_count(4), DamageSeverity::Severe);
        assert_eq!(severity_for_count(7), DamageSeverity::Severe);
    }

    #[test]
    fn test_severity_monotonic_in_categories() {
        let mild = detect_damage(&[Label::new("dehydrated", 0.8)]);
        let severe = detect_damage(&[
            Label::new("dehydrated", 0.8),
            Label::new("breakage", 0.8),
            Label::new("frizz", 0.8),
            Label::new("brittle", 0.8),
        ]);
        assert_eq!(mild.severity, DamageSeverity::Mild);
        assert_eq!(severe.severity, DamageSeverity::Severe);
        assert!(severe.severity > mild.severity);
    }
}
