use serde::{Deserialize, Serialize};

/// One weighted observation from the external vision model
///
/// A label with a missing description deserializes to an empty string so a
/// single malformed entry never aborts classification of the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: f64,
}

impl Label {
    pub fn new(description: &str, score: f64) -> Self {
        Self {
            description: description.to_string(),
            score,
        }
    }
}

/// Dominant color sample from the vision model's image-properties output
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DominantColor {
    pub color: Rgb,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rgb {
    #[serde(default)]
    pub red: u8,
    #[serde(default)]
    pub green: u8,
    #[serde(default)]
    pub blue: u8,
}

/// An attribute value together with the score of the label that triggered it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection<T> {
    pub value: T,
    pub confidence: f64,
}

/// Curl pattern buckets used for both hair type and curl pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HairPattern {
    #[serde(rename = "4a")]
    FourA,
    #[serde(rename = "4b")]
    FourB,
    #[serde(rename = "4c")]
    FourC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtectiveStyle {
    BoxBraids,
    KnotlessBraids,
    Cornrows,
    Locs,
    Twists,
    Afro,
    Puff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairDensity {
    Thin,
    Medium,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Straight,
    Wavy,
    Curly,
    Coily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Porosity {
    Low,
    Medium,
    High,
}

/// Generic low/medium/high level used by shine, frizz and volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Severity orders none < mild < moderate < severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DamageKind {
    SplitEnds,
    Breakage,
    Dryness,
    Frizz,
    Brittleness,
    Thinning,
    ColorDamage,
}

/// Damage assessment across the seven fixed categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub types: Vec<DamageKind>,
    pub severity: DamageSeverity,
    /// The matched keywords that triggered each category
    pub indicators: Vec<String>,
}

impl Default for DamageSeverity {
    fn default() -> Self {
        DamageSeverity::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTreatmentType {
    Bleached,
    Dyed,
    Highlighted,
    Natural,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTreatment {
    #[serde(rename = "hasTreatment")]
    pub has_treatment: bool,
    #[serde(rename = "type")]
    pub treatment_type: Option<ColorTreatmentType>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductResidue {
    pub products: Vec<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalpHealth {
    Healthy,
    Dandruff,
    Dry,
    Oily,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalpCondition {
    pub visible: bool,
    pub health: Option<ScalpHealth>,
    pub concerns: Vec<String>,
}

/// Health score with the indicators that moved it off the 50 baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairHealth {
    #[serde(rename = "healthScore")]
    pub score: u8,
    #[serde(rename = "positiveIndicators")]
    pub positive_indicators: Vec<String>,
    #[serde(rename = "negativeIndicators")]
    pub negative_indicators: Vec<String>,
}

impl Default for HairHealth {
    fn default() -> Self {
        Self {
            score: 50,
            positive_indicators: vec![],
            negative_indicators: vec![],
        }
    }
}

/// Full classification output
///
/// Every attribute is independently optional; absence means no keyword
/// matched, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairAnalysis {
    #[serde(rename = "hairType")]
    pub hair_type: Option<Detection<HairPattern>>,
    pub style: Option<Detection<ProtectiveStyle>>,
    pub length: Option<Detection<HairLength>>,
    pub density: Option<Detection<HairDensity>>,
    pub texture: Option<Texture>,
    pub porosity: Option<Porosity>,
    #[serde(rename = "curlPattern")]
    pub curl_pattern: Option<HairPattern>,
    pub damage: DamageReport,
    pub shine: Option<Detection<Level>>,
    pub frizz: Option<Detection<Level>>,
    pub volume: Option<Detection<Level>>,
    #[serde(rename = "colorTreatment")]
    pub color_treatment: ColorTreatment,
    #[serde(rename = "productResidue")]
    pub product_residue: ProductResidue,
    pub scalp: ScalpCondition,
    pub health: HairHealth,
    /// Derived composite, always clamped to [0, 100]
    #[serde(rename = "overallQuality")]
    pub overall_quality: u8,
}

impl Default for HairAnalysis {
    fn default() -> Self {
        Self {
            hair_type: None,
            style: None,
            length: None,
            density: None,
            texture: None,
            porosity: None,
            curl_pattern: None,
            damage: DamageReport::default(),
            shine: None,
            frizz: None,
            volume: None,
            color_treatment: ColorTreatment::default(),
            product_residue: ProductResidue::default(),
            scalp: ScalpCondition::default(),
            health: HairHealth::default(),
            overall_quality: 50,
        }
    }
}

/// Raw profile as received from the client, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHairProfile {
    #[serde(rename = "hairType", default)]
    pub hair_type: Option<String>,
    #[serde(rename = "hairGoals", default)]
    pub hair_goals: Option<Vec<String>>,
    #[serde(rename = "currentConcerns", default)]
    pub current_concerns: Option<Vec<String>>,
    #[serde(rename = "hairPorosity", default)]
    pub hair_porosity: Option<String>,
    #[serde(rename = "hairLength", default)]
    pub hair_length: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
}

/// Normalized profile with every default filled exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHairProfile {
    #[serde(rename = "hairType")]
    pub hair_type: Option<String>,
    #[serde(rename = "hairGoals")]
    pub hair_goals: Vec<String>,
    #[serde(rename = "currentConcerns")]
    pub current_concerns: Vec<String>,
    #[serde(rename = "hairPorosity")]
    pub hair_porosity: Option<String>,
    #[serde(rename = "hairLength")]
    pub hair_length: Option<String>,
    pub budget: Option<String>,
    pub climate: Option<String>,
}

impl UserHairProfile {
    /// Single canonical normalization point for raw client profiles
    pub fn from_raw(raw: RawHairProfile) -> Self {
        Self {
            hair_type: raw.hair_type.filter(|s| !s.is_empty()),
            hair_goals: raw.hair_goals.unwrap_or_default(),
            current_concerns: raw.current_concerns.unwrap_or_default(),
            hair_porosity: raw.hair_porosity.filter(|s| !s.is_empty()),
            hair_length: raw.hair_length.filter(|s| !s.is_empty()),
            budget: raw.budget.filter(|s| !s.is_empty()),
            climate: raw.climate.filter(|s| !s.is_empty()),
        }
    }

    pub fn has_concern(&self, concern: &str) -> bool {
        self.current_concerns
            .iter()
            .any(|c| c.eq_ignore_ascii_case(concern))
    }
}

/// A requested style with its normalized slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleRequest {
    #[serde(rename = "styleName")]
    pub style_name: String,
    #[serde(rename = "normalizedSlug")]
    pub normalized_slug: String,
}

impl StyleRequest {
    pub fn new(style_name: &str) -> Self {
        Self {
            style_name: style_name.to_string(),
            normalized_slug: normalize_slug(style_name),
        }
    }
}

/// Lowercase and collapse non-alphanumeric runs to single hyphens
///
/// Idempotent: `normalize_slug(normalize_slug(x)) == normalize_slug(x)`.
pub fn normalize_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
    Budget,
    MidRange,
    Premium,
}

impl PriceTier {
    /// Tie-break preference when ratings are equal: mid-range over budget
    /// over premium. The table is asymmetric on purpose.
    pub fn preference_score(self) -> u8 {
        match self {
            PriceTier::MidRange => 2,
            PriceTier::Budget => 1,
            PriceTier::Premium => 0,
        }
    }
}

/// Stylist/salon record supplied by the roster collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stylist {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "priceTier")]
    pub price_tier: PriceTier,
    pub rating: f64,
    #[serde(rename = "availabilityHoursPerDay")]
    pub availability_hours_per_day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Compatible,
    Risky,
    Unknown,
}

/// Advisory classification of a requested style against a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub status: VerdictStatus,
    pub reason: String,
}

/// Additive adjustments applied to the health score to form the composite
/// overall quality. Defaults reproduce the production constants.
#[derive(Debug, Clone, Copy)]
pub struct QualityAdjustments {
    pub severe_damage: i32,
    pub moderate_damage: i32,
    pub mild_damage: i32,
    pub shine_high: i32,
    pub shine_low: i32,
    pub frizz_high: i32,
    pub frizz_low: i32,
    pub bleached: i32,
}

impl Default for QualityAdjustments {
    fn default() -> Self {
        Self {
            severe_damage: -20,
            moderate_damage: -10,
            mild_damage: -5,
            shine_high: 10,
            shine_low: -10,
            frizz_high: -10,
            frizz_low: 5,
            bleached: -5,
        }
    }
}
