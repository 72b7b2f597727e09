use serde::{Deserialize, Serialize};

/// Ranked recommendations, truncated to the requested limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse<T> {
    pub results: Vec<T>,
    /// Number of candidates with a non-zero score before truncation
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub courses: usize,
    pub jobs: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
