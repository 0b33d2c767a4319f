// Route exports
pub mod analysis;
pub mod booking;

use crate::core::{HairClassifier, StylistMatcher};
use crate::services::VisionClient;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub vision: Arc<VisionClient>,
    pub classifier: HairClassifier,
    pub matcher: StylistMatcher,
    pub default_required_hours: u8,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(analysis::configure)
            .configure(booking::configure),
    );
}
