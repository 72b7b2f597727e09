// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Course, CourseRequirements, Job, JobRequirements, StudentProfile, Subject, SubjectEntry, WorkExperience};
pub use requests::{ApplyToCourseRequest, ApplyToJobRequest, CourseMatchRequest, JobMatchRequest, RecommendCoursesRequest, RecommendJobsRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse};
