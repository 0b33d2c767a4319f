//! Nywele Engine - Hair analysis and stylist matching service for Nywele.ai
//!
//! This library provides the core classification and matching logic used by
//! the Nywele.ai hair care app: a keyword-based label classifier that turns
//! vision-model output into a structured hair analysis, and a compatibility
//! matcher that checks styles against hair profiles and ranks stylists.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{check_style_compatibility, HairClassifier, StylistMatcher};
pub use crate::models::{
    CompatibilityVerdict, HairAnalysis, Label, StyleRequest, Stylist, UserHairProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let analysis = HairClassifier::default().classify(&[]);
        assert_eq!(analysis.overall_quality, 50);
    }
}
