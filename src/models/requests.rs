use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{DominantColor, Label, RawHairProfile, Stylist};

/// Request to classify a caller-supplied label set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyLabelsRequest {
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(alias = "dominantColors", rename = "dominantColors", default)]
    pub dominant_colors: Vec<DominantColor>,
}

/// Request to analyze an uploaded photo via the vision provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzePhotoRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "imageBase64", rename = "imageBase64")]
    pub image_base64: String,
}

/// Request to check a style against a hair profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "styleName", rename = "styleName")]
    pub style_name: String,
    #[serde(default)]
    pub profile: RawHairProfile,
}

/// Request to rank stylists for a style booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchStylistsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "styleName", rename = "styleName")]
    pub style_name: String,
    #[serde(alias = "requiredHours", rename = "requiredHours", default = "default_required_hours")]
    pub required_hours: u8,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub stylists: Vec<Stylist>,
}

fn default_required_hours() -> u8 {
    4
}
