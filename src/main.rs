mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{HairClassifier, StylistMatcher};
use crate::models::QualityAdjustments;
use crate::routes::AppState;
use crate::services::VisionClient;
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Nywele Engine...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the vision provider client once; handlers borrow it through
    // application state rather than lazily initializing a global.
    let vision_timeout = settings.vision.timeout_secs.unwrap_or(30);
    let vision_max_labels = settings.vision.max_labels.unwrap_or(20);

    let vision = Arc::new(VisionClient::new(
        settings.vision.endpoint,
        settings.vision.api_key,
        vision_timeout,
        vision_max_labels,
    ));

    info!("Vision client initialized (timeout: {}s)", vision_timeout);

    // Initialize classifier with configured quality adjustments
    let adjustments = QualityAdjustments {
        severe_damage: settings.scoring.adjustments.severe_damage,
        moderate_damage: settings.scoring.adjustments.moderate_damage,
        mild_damage: settings.scoring.adjustments.mild_damage,
        shine_high: settings.scoring.adjustments.shine_high,
        shine_low: settings.scoring.adjustments.shine_low,
        frizz_high: settings.scoring.adjustments.frizz_high,
        frizz_low: settings.scoring.adjustments.frizz_low,
        bleached: settings.scoring.adjustments.bleached,
    };

    let classifier = HairClassifier::new(adjustments);

    info!("Classifier initialized with adjustments: {:?}", adjustments);

    let fallback_count = settings.matching.fallback_count.unwrap_or(2);
    let default_required_hours = settings.matching.default_required_hours.unwrap_or(4);
    let matcher = StylistMatcher::new(fallback_count);

    // Build application state
    let app_state = AppState {
        vision,
        classifier,
        matcher,
        default_required_hours,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
