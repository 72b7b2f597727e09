use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::{can_apply_to_course, can_apply_to_job};
use crate::models::{ApplyToCourseRequest, ApplyToJobRequest};
use crate::routes::{ApiError, AppState};

/// Configure application gating routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/apply/course", web::post().to(course_application_check))
        .route("/apply/job", web::post().to(job_application_check));
}

/// Check whether a student may apply to a catalog course
///
/// POST /api/v1/apply/course
///
/// Request body:
/// ```json
/// { "student": { "subjects": ["Mathematics - B"] }, "courseId": "string" }
/// ```
async fn course_application_check(
    state: web::Data<AppState>,
    req: web::Json<ApplyToCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let course = state.catalog.course(&req.course_id).ok_or_else(|| {
        tracing::warn!("Application check for unknown course {}", req.course_id);
        ApiError::NotFound {
            kind: "Course",
            id: req.course_id.clone(),
        }
    })?;

    let check = can_apply_to_course(&req.student, course);
    tracing::info!(
        "Course application check for {}: can_apply={}, score={}",
        req.course_id,
        check.can_apply,
        check.score
    );

    Ok(HttpResponse::Ok().json(check))
}

/// Check whether a student may apply to a catalog job
///
/// POST /api/v1/apply/job
async fn job_application_check(
    state: web::Data<AppState>,
    req: web::Json<ApplyToJobRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let job = state.catalog.job(&req.job_id).ok_or_else(|| {
        tracing::warn!("Application check for unknown job {}", req.job_id);
        ApiError::NotFound {
            kind: "Job",
            id: req.job_id.clone(),
        }
    })?;

    let check = can_apply_to_job(&req.student, job);
    tracing::info!(
        "Job application check for {}: can_apply={}, score={}",
        req.job_id,
        check.can_apply,
        check.score
    );

    Ok(HttpResponse::Ok().json(check))
}
