use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Course, CourseRequirements, Job, JobRequirements, StudentProfile};

/// Request to score a student against one course's requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMatchRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub requirements: Option<CourseRequirements>,
}

/// Request to score a student against one job's requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub requirements: Option<JobRequirements>,
}

/// Request to rank courses; the catalog is used when `courses` is omitted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendCoursesRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub courses: Option<Vec<Course>>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to rank jobs; the catalog is used when `jobs` is omitted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to check whether a student may apply to a catalog course
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyToCourseRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[validate(length(min = 1))]
    #[serde(alias = "course_id", rename = "courseId")]
    pub course_id: String,
}

/// Request to check whether a student may apply to a catalog job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyToJobRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
}
