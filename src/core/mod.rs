// Qualification matcher exports
pub mod course;
pub mod grades;
pub mod job;
pub mod matcher;
pub mod reason;
pub mod requirements;

pub use course::{meets_requirements, CourseMatch, CourseMatchDetails, COURSE_ELIGIBILITY_THRESHOLD};
pub use grades::{calculate_credits, calculate_points, grade_points, highest_grade, subject_names, Grade};
pub use job::{qualifies_for_job, EducationLevel, JobMatch, JOB_ELIGIBILITY_THRESHOLD};
pub use matcher::{
    can_apply_to_course, can_apply_to_job, recommend_courses, recommend_jobs, ApplicationCheck,
    RecommendedCourse, RecommendedJob,
};
pub use reason::{Reason, ReasonStatus};
pub use requirements::{has_required_subjects, meets_grade_requirement, subject_coverage, SubjectCoverage};
