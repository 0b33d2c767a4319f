use serde::{Deserialize, Serialize};

use crate::models::domain::{CompatibilityVerdict, HairAnalysis, Stylist};

/// Response for the analysis endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
    pub analysis: HairAnalysis,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response for the compatibility check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub verdict: CompatibilityVerdict,
    #[serde(rename = "styleName")]
    pub style_name: String,
    #[serde(rename = "normalizedSlug")]
    pub normalized_slug: String,
}

/// Response for the stylist matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStylistsResponse {
    pub stylists: Vec<Stylist>,
    pub fallback: bool,
    #[serde(rename = "totalRoster")]
    pub total_roster: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
