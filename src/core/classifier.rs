use crate::core::health::{analyze_hair_health, concat_descriptions, detect_damage};
use crate::core::keywords::{
    COLOR_TREATMENT_TABLE, DENSITY_TABLE, FRIZZ_TABLE, HAIR_TYPE_TABLE, LENGTH_TABLE,
    POROSITY_TABLE, PRODUCT_RESIDUE_TABLE, SCALP_HEALTH_TABLE, SCALP_VISIBLE_KEYWORDS,
    SHINE_TABLE, STYLE_TABLE, TEXTURE_TABLE, VOLUME_TABLE,
};
use crate::models::{
    ColorTreatment, ColorTreatmentType, Detection, DominantColor, HairAnalysis, Label, Level,
    ProductResidue, QualityAdjustments, ScalpCondition, ScalpHealth,
};

/// Pick the first table value triggered by any single label
///
/// Confidence is the score of the one label that triggered the match, not an
/// aggregate over all matching labels.
fn detect_from_labels<T: Copy>(
    labels: &[Label],
    table: &[(T, &[&str])],
) -> Option<Detection<T>> {
    for (value, keywords) in table {
        for label in labels {
            let description = label.description.to_lowercase();
            if keywords.iter().any(|kw| description.contains(kw)) {
                return Some(Detection {
                    value: *value,
                    confidence: label.score,
                });
            }
        }
    }
    None
}

/// Pick the first table value with any keyword in the concatenated text
fn detect_from_haystack<T: Copy>(haystack: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(value, _)| *value)
}

/// Label classifier
///
/// Pure and total: never fails, performs no I/O, and an empty label list
/// yields an all-absent analysis at the baseline quality of 50.
#[derive(Debug, Clone, Copy)]
pub struct HairClassifier {
    adjustments: QualityAdjustments,
}

impl HairClassifier {
    pub fn new(adjustments: QualityAdjustments) -> Self {
        Self { adjustments }
    }

    pub fn with_default_adjustments() -> Self {
        Self {
            adjustments: QualityAdjustments::default(),
        }
    }

    /// Classify a label set without image-properties data
    pub fn classify(&self, labels: &[Label]) -> HairAnalysis {
        self.classify_with_colors(labels, &[])
    }

    /// Full classification, including the dominant-color treatment heuristic
    pub fn classify_with_colors(
        &self,
        labels: &[Label],
        colors: &[DominantColor],
    ) -> HairAnalysis {
        let haystack = concat_descriptions(labels);

        let health = analyze_hair_health(labels);
        let damage = detect_damage(labels);
        let shine = detect_from_labels(labels, SHINE_TABLE);
        let frizz = detect_from_labels(labels, FRIZZ_TABLE);
        let color_treatment = detect_color_treatment(labels, &haystack, colors);

        let overall_quality = self.overall_quality(
            health.score,
            &damage,
            shine.map(|d| d.value),
            frizz.map(|d| d.value),
            &color_treatment,
        );

        HairAnalysis {
            hair_type: detect_from_labels(labels, HAIR_TYPE_TABLE),
            style: detect_from_labels(labels, STYLE_TABLE),
            length: detect_from_labels(labels, LENGTH_TABLE),
            density: detect_from_labels(labels, DENSITY_TABLE),
            texture: detect_from_haystack(&haystack, TEXTURE_TABLE),
            porosity: detect_from_haystack(&haystack, POROSITY_TABLE),
            curl_pattern: detect_from_haystack(&haystack, HAIR_TYPE_TABLE),
            damage,
            shine,
            frizz,
            volume: detect_from_labels(labels, VOLUME_TABLE),
            color_treatment,
            product_residue: detect_product_residue(&haystack),
            scalp: detect_scalp_condition(&haystack),
            health,
            overall_quality,
        }
    }

    /// Composite quality: health score plus the ordered additive adjustments,
    /// clamped to [0, 100]
    fn overall_quality(
        &self,
        health_score: u8,
        damage: &crate::models::DamageReport,
        shine: Option<Level>,
        frizz: Option<Level>,
        color_treatment: &ColorTreatment,
    ) -> u8 {
        use crate::models::DamageSeverity;

        let adj = &self.adjustments;
        let mut quality = health_score as i32;

        quality += match damage.severity {
            DamageSeverity::Severe => adj.severe_damage,
            DamageSeverity::Moderate => adj.moderate_damage,
            DamageSeverity::Mild => adj.mild_damage,
            DamageSeverity::None => 0,
        };

        match shine {
            Some(Level::High) => quality += adj.shine_high,
            Some(Level::Low) => quality += adj.shine_low,
            _ => {}
        }

        match frizz {
            Some(Level::High) => quality += adj.frizz_high,
            Some(Level::Low) => quality += adj.frizz_low,
            _ => {}
        }

        if color_treatment.treatment_type == Some(ColorTreatmentType::Bleached) {
            quality += adj.bleached;
        }

        quality.clamp(0, 100) as u8
    }
}

impl Default for HairClassifier {
    fn default() -> Self {
        Self::with_default_adjustments()
    }
}

/// Detect color treatment from labels, falling back to the dominant-color
/// heuristic when no keyword matched
fn detect_color_treatment(
    labels: &[Label],
    haystack: &str,
    colors: &[DominantColor],
) -> ColorTreatment {
    if let Some(detection) = detect_from_labels(labels, COLOR_TREATMENT_TABLE) {
        return ColorTreatment {
            has_treatment: true,
            treatment_type: Some(detection.value),
            confidence: detection.confidence,
        };
    }

    if haystack.contains("natural") {
        let confidence = labels
            .iter()
            .find(|l| l.description.to_lowercase().contains("natural"))
            .map(|l| l.score)
            .unwrap_or(0.0);
        return ColorTreatment {
            has_treatment: false,
            treatment_type: Some(ColorTreatmentType::Natural),
            confidence,
        };
    }

    // Strong light dominant color on a hair photo suggests lightening
    for dc in colors {
        if dc.score >= 0.2 && dc.color.red > 180 && dc.color.green > 140 && dc.color.blue < 120 {
            return ColorTreatment {
                has_treatment: true,
                treatment_type: Some(ColorTreatmentType::Bleached),
                confidence: dc.score,
            };
        }
    }

    ColorTreatment::default()
}

fn detect_product_residue(haystack: &str) -> ProductResidue {
    let products: Vec<String> = PRODUCT_RESIDUE_TABLE
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(product, _)| product.to_string())
        .collect();

    ProductResidue {
        visible: !products.is_empty(),
        products,
    }
}

fn detect_scalp_condition(haystack: &str) -> ScalpCondition {
    let health = SCALP_HEALTH_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(value, _)| *value);

    let visible =
        health.is_some() || SCALP_VISIBLE_KEYWORDS.iter().any(|kw| haystack.contains(kw));

    let concerns: Vec<String> = SCALP_HEALTH_TABLE
        .iter()
        .filter(|(value, _)| *value != ScalpHealth::Healthy)
        .flat_map(|(_, keywords)| keywords.iter())
        .filter(|kw| haystack.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    ScalpCondition {
        visible,
        health,
        concerns,
    }
}
