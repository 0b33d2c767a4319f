use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AnalysisResponse, AnalyzePhotoRequest, ClassifyLabelsRequest, ErrorResponse, HealthResponse,
};
use crate::routes::AppState;
use crate::services::VisionError;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analysis/labels", web::post().to(classify_labels))
        .route("/analysis/photo", web::post().to(analyze_photo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Classify caller-supplied vision labels
///
/// POST /api/v1/analysis/labels
///
/// Request body:
/// ```json
/// {
///   "labels": [{"description": "afro", "score": 0.93}],
///   "dominantColors": [{"color": {"red": 80, "green": 60, "blue": 40}, "score": 0.4}]
/// }
/// ```
async fn classify_labels(
    state: web::Data<AppState>,
    req: web::Json<ClassifyLabelsRequest>,
) -> impl Responder {
    tracing::info!("Classifying {} labels", req.labels.len());

    let analysis = state
        .classifier
        .classify_with_colors(&req.labels, &req.dominant_colors);

    HttpResponse::Ok().json(AnalysisResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        analysis,
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze an uploaded photo through the vision provider
///
/// POST /api/v1/analysis/photo
///
/// Request body:
/// ```json
/// { "imageBase64": "..." }
/// ```
async fn analyze_photo(
    state: web::Data<AppState>,
    req: web::Json<AnalyzePhotoRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let observations = match state.vision.annotate(&req.image_base64).await {
        Ok(observations) => observations,
        Err(VisionError::Unauthorized) => {
            tracing::error!("Vision provider rejected our credentials");
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Vision provider unauthorized".to_string(),
                message: "The vision provider rejected the configured API key".to_string(),
                status_code: 502,
            });
        }
        Err(e) => {
            tracing::error!("Vision annotate failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Vision provider unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    tracing::debug!(
        "Vision returned {} labels, {} dominant colors",
        observations.labels.len(),
        observations.dominant_colors.len()
    );

    let analysis = state
        .classifier
        .classify_with_colors(&observations.labels, &observations.dominant_colors);

    tracing::info!(
        "Photo analysis complete (quality: {}, damage: {:?})",
        analysis.overall_quality,
        analysis.damage.severity
    );

    HttpResponse::Ok().json(AnalysisResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        analysis,
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
