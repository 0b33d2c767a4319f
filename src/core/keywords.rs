//! Ordered keyword tables for label classification.
//!
//! Every table is an explicit ordered list of `(value, keywords)` tuples
//! evaluated top to bottom; the first value with any substring match wins.
//! Ordering is load-bearing: more specific categories sit above generic
//! ones (coily before curly before wavy before straight) so generic terms
//! cannot shadow specific ones. Do not reorder without pinning tests.

use crate::models::{
    ColorTreatmentType, DamageKind, HairDensity, HairLength, HairPattern, Level, Porosity,
    ProtectiveStyle, ScalpHealth, Texture,
};

pub const TEXTURE_TABLE: &[(Texture, &[&str])] = &[
    (
        Texture::Coily,
        &["coily", "coil", "kinky", "tight curl", "afro-textured", "zigzag"],
    ),
    (Texture::Curly, &["curly", "curl", "spiral", "ringlet"]),
    (Texture::Wavy, &["wavy", "wave"]),
    (Texture::Straight, &["straight", "sleek"]),
];

pub const HAIR_TYPE_TABLE: &[(HairPattern, &[&str])] = &[
    (HairPattern::FourC, &["4c", "tight coil", "zigzag", "kinky"]),
    (HairPattern::FourB, &["4b", "z-pattern", "sharp angle"]),
    (HairPattern::FourA, &["4a", "springy", "s-pattern", "coil"]),
];

pub const STYLE_TABLE: &[(ProtectiveStyle, &[&str])] = &[
    (ProtectiveStyle::KnotlessBraids, &["knotless"]),
    (ProtectiveStyle::BoxBraids, &["box braid"]),
    (ProtectiveStyle::Cornrows, &["cornrow", "canerow"]),
    (ProtectiveStyle::Locs, &["dreadlock", "dread", "locs", "loc"]),
    (ProtectiveStyle::Twists, &["twist"]),
    (ProtectiveStyle::Afro, &["afro"]),
    (ProtectiveStyle::Puff, &["puff"]),
];

pub const LENGTH_TABLE: &[(HairLength, &[&str])] = &[
    (HairLength::Long, &["long hair", "waist length", "mid-back"]),
    (HairLength::Medium, &["medium length", "shoulder length"]),
    (HairLength::Short, &["short hair", "cropped", "big chop", "twa"]),
];

pub const DENSITY_TABLE: &[(HairDensity, &[&str])] = &[
    (HairDensity::Thick, &["thick", "dense", "voluminous"]),
    (HairDensity::Thin, &["thin", "sparse", "fine hair"]),
    (HairDensity::Medium, &["medium density"]),
];

pub const POROSITY_TABLE: &[(Porosity, &[&str])] = &[
    (Porosity::High, &["dry", "porous", "brittle", "rough"]),
    (Porosity::Low, &["glossy", "shiny", "water beads"]),
    (Porosity::Medium, &["balanced moisture"]),
];

pub const SHINE_TABLE: &[(Level, &[&str])] = &[
    (Level::High, &["shiny", "glossy", "lustrous", "sheen"]),
    (Level::Low, &["dull", "matte", "lackluster"]),
    (Level::Medium, &["soft sheen"]),
];

pub const FRIZZ_TABLE: &[(Level, &[&str])] = &[
    (Level::High, &["frizzy", "frizz", "flyaway", "unruly"]),
    (Level::Low, &["smooth", "well-defined", "defined curl"]),
    (Level::Medium, &["slight frizz"]),
];

pub const VOLUME_TABLE: &[(Level, &[&str])] = &[
    (Level::High, &["voluminous", "big hair", "full volume", "afro"]),
    (Level::Low, &["flat", "limp"]),
    (Level::Medium, &["medium volume"]),
];

pub const COLOR_TREATMENT_TABLE: &[(ColorTreatmentType, &[&str])] = &[
    (ColorTreatmentType::Bleached, &["bleach", "platinum", "blonde"]),
    (ColorTreatmentType::Highlighted, &["highlight", "balayage", "ombre"]),
    (ColorTreatmentType::Dyed, &["dyed", "color treated", "colored hair", "vivid"]),
];

/// Damage categories with their keyword sets. Severity is a function of how
/// many distinct categories are present, not of which ones.
pub const DAMAGE_TABLE: &[(DamageKind, &[&str])] = &[
    (DamageKind::SplitEnds, &["split end", "split-end"]),
    (DamageKind::Breakage, &["breakage", "broken hair", "snapped"]),
    (DamageKind::Dryness, &["dry", "dehydrated", "parched"]),
    (DamageKind::Frizz, &["frizz", "frizzy", "flyaway"]),
    (DamageKind::Brittleness, &["brittle"]),
    (DamageKind::Thinning, &["thinning", "bald spot", "hair loss"]),
    (DamageKind::ColorDamage, &["bleach damage", "color damage", "over-processed"]),
];

/// Product names with the residue keywords that reveal them
pub const PRODUCT_RESIDUE_TABLE: &[(&str, &[&str])] = &[
    ("gel", &["gel", "slicked"]),
    ("oil", &["oily", "greasy", "oil sheen"]),
    ("wax", &["wax", "pomade"]),
    ("buildup", &["residue", "buildup", "build-up"]),
];

pub const SCALP_VISIBLE_KEYWORDS: &[&str] = &["scalp", "part line", "parting"];

pub const SCALP_HEALTH_TABLE: &[(ScalpHealth, &[&str])] = &[
    (ScalpHealth::Dandruff, &["dandruff", "flake", "flaky"]),
    (ScalpHealth::Dry, &["dry scalp"]),
    (ScalpHealth::Oily, &["oily scalp", "greasy scalp"]),
    (ScalpHealth::Healthy, &["healthy scalp"]),
];

/// Indicators moving the health score off its 50 baseline, 15 points each
pub const POSITIVE_HEALTH_INDICATORS: &[&str] =
    &["shiny", "healthy", "vibrant", "glossy", "smooth", "well-groomed"];

pub const NEGATIVE_HEALTH_INDICATORS: &[&str] = &["dry", "damaged", "brittle", "frizzy", "dull"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_table_order() {
        // Coily must be checked before straight so "coily" labels never fall
        // through to the generic bucket.
        assert_eq!(TEXTURE_TABLE[0].0, Texture::Coily);
        assert_eq!(TEXTURE_TABLE.last().unwrap().0, Texture::Straight);
    }

    #[test]
    fn test_damage_table_has_seven_categories() {
        assert_eq!(DAMAGE_TABLE.len(), 7);
    }

    #[test]
    fn test_health_indicator_counts() {
        assert_eq!(POSITIVE_HEALTH_INDICATORS.len(), 6);
        assert_eq!(NEGATIVE_HEALTH_INDICATORS.len(), 5);
    }
}
