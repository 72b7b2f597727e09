use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{meets_requirements, qualifies_for_job, recommend_courses, recommend_jobs};
use crate::models::{
    CourseMatchRequest, HealthResponse, JobMatchRequest, RecommendCoursesRequest,
    RecommendJobsRequest, RecommendationsResponse,
};
use crate::routes::{ApiError, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/course", web::post().to(course_match))
        .route("/match/job", web::post().to(job_match))
        .route("/recommend/courses", web::post().to(course_recommendations))
        .route("/recommend/jobs", web::post().to(job_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        courses: state.catalog.courses.len(),
        jobs: state.catalog.jobs.len(),
    })
}

/// Score a student against course requirements
///
/// POST /api/v1/match/course
///
/// Request body:
/// ```json
/// {
///   "student": { "subjects": ["Mathematics - B"], "currentGrade": "Grade 12" },
///   "requirements": { "minimumCredits": 4, "minimumGrade": "C", "subjects": ["Mathematics"] }
/// }
/// ```
async fn course_match(req: web::Json<CourseMatchRequest>) -> impl Responder {
    let req = req.into_inner();
    let result = meets_requirements(&req.student, req.requirements.as_ref());

    tracing::debug!(
        "Course match: score={}, eligible={}, checks={}",
        result.score,
        result.eligible,
        result.reasons.len()
    );

    HttpResponse::Ok().json(result)
}

/// Score a student against job requirements
///
/// POST /api/v1/match/job
async fn job_match(req: web::Json<JobMatchRequest>) -> impl Responder {
    let req = req.into_inner();
    let result = qualifies_for_job(&req.student, req.requirements.as_ref());

    tracing::debug!(
        "Job match: score={}, eligible={}, checks={}",
        result.score,
        result.eligible,
        result.reasons.len()
    );

    HttpResponse::Ok().json(result)
}

/// Rank courses for a student
///
/// POST /api/v1/recommend/courses
///
/// Request body:
/// ```json
/// {
///   "student": { "subjects": ["Mathematics - B"] },
///   "courses": [ { "id": "c1", "name": "BSc", "requirements": {} } ],
///   "limit": 10
/// }
/// ```
/// `courses` defaults to the loaded catalog.
async fn course_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendCoursesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for course recommendations: {:?}", errors);
        return Err(errors.into());
    }

    let limit = state.matching.effective_limit(req.limit);
    let candidates = req.courses.as_deref().unwrap_or(state.catalog.courses.as_slice());

    let mut results = recommend_courses(&req.student, candidates);
    let total = results.len();
    results.truncate(limit);

    tracing::info!(
        "Returning {} course recommendations ({} scored, {} candidates)",
        results.len(),
        total,
        candidates.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse { results, total }))
}

/// Rank jobs for a student
///
/// POST /api/v1/recommend/jobs
async fn job_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for job recommendations: {:?}", errors);
        return Err(errors.into());
    }

    let limit = state.matching.effective_limit(req.limit);
    let candidates = req.jobs.as_deref().unwrap_or(state.catalog.jobs.as_slice());

    let mut results = recommend_jobs(&req.student, candidates);
    let total = results.len();
    results.truncate(limit);

    tracing::info!(
        "Returning {} job recommendations ({} scored, {} candidates)",
        results.len(),
        total,
        candidates.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse { results, total }))
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
            courses: 0,
            jobs: 0,
        };

        assert_eq!(response.status, "healthy");
    }
}
