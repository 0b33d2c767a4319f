// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    normalize_slug, ColorTreatment, ColorTreatmentType, CompatibilityVerdict, DamageKind,
    DamageReport, DamageSeverity, Detection, DominantColor, HairAnalysis, HairDensity, HairHealth,
    HairLength, HairPattern, Label, Level, Porosity, PriceTier, ProductResidue, ProtectiveStyle,
    QualityAdjustments, RawHairProfile, Rgb, ScalpCondition, ScalpHealth, StyleRequest, Stylist,
    Texture, UserHairProfile, VerdictStatus,
};
pub use requests::{
    AnalyzePhotoRequest, ClassifyLabelsRequest, CompatibilityRequest, MatchStylistsRequest,
};
pub use responses::{
    AnalysisResponse, CompatibilityResponse, ErrorResponse, HealthResponse, MatchStylistsResponse,
};
