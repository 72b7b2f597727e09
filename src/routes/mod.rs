// Route exports
pub mod applications;
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use std::sync::Arc;
use thiserror::Error;

use crate::config::MatchingSettings;
use crate::models::ErrorResponse;
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(catalog: Catalog, matching: MatchingSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matching,
        }
    }
}

/// Errors returned to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidJson(_) => "invalid_json",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.label().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(matches::configure)
            .configure(applications::configure),
    );
}
