use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::check_style_compatibility;
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, ErrorResponse, MatchStylistsRequest,
    MatchStylistsResponse, StyleRequest, UserHairProfile,
};
use crate::routes::AppState;

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/compatibility/check", web::post().to(check_compatibility))
        .route("/stylists/match", web::post().to(match_stylists));
}

/// Check a requested style against a hair profile
///
/// POST /api/v1/compatibility/check
///
/// Request body:
/// ```json
/// {
///   "styleName": "Box Braids",
///   "profile": { "hairType": "4c", "currentConcerns": ["breakage"] }
/// }
/// ```
async fn check_compatibility(req: web::Json<CompatibilityRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let style = StyleRequest::new(&req.style_name);
    let profile = UserHairProfile::from_raw(req.profile.clone());

    let verdict = check_style_compatibility(&profile, &style);

    tracing::info!(
        "Compatibility check: {} -> {:?}",
        req.style_name,
        verdict.status
    );

    HttpResponse::Ok().json(CompatibilityResponse {
        verdict,
        style_name: style.style_name,
        normalized_slug: style.normalized_slug,
    })
}

/// Rank eligible stylists for a style booking
///
/// POST /api/v1/stylists/match
///
/// Request body:
/// ```json
/// {
///   "styleName": "Knotless Braids",
///   "requiredHours": 5,
///   "budget": "3,000 - 5,000",
///   "stylists": [ ... ]
/// }
/// ```
async fn match_stylists(
    state: web::Data<AppState>,
    req: web::Json<MatchStylistsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let style = StyleRequest::new(&req.style_name);
    let required_hours = if req.required_hours > 0 {
        req.required_hours
    } else {
        state.default_required_hours
    };

    tracing::info!(
        "Matching stylists for {} ({} in roster, {} hours needed)",
        style.normalized_slug,
        req.stylists.len(),
        required_hours
    );

    let outcome = state.matcher.match_stylists(
        &style,
        required_hours,
        req.budget.as_deref(),
        &req.stylists,
    );

    if outcome.fallback {
        tracing::debug!(
            "No stylist passed the eligibility filter for {}, returning fallback",
            style.normalized_slug
        );
    }

    HttpResponse::Ok().json(MatchStylistsResponse {
        stylists: outcome.stylists,
        fallback: outcome.fallback,
        total_roster: outcome.total_roster,
    })
}
