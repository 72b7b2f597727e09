//! Career Match - qualification matching for the career and education portal
//!
//! This library scores a student's academic record against course entry
//! requirements and job requirements, producing an eligibility verdict, a
//! percentage score and the reasons behind it. The scoring core is pure; the
//! HTTP routes and catalog service wrap it for the portal's front end.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    can_apply_to_course, can_apply_to_job, meets_requirements, qualifies_for_job,
    recommend_courses, recommend_jobs, ApplicationCheck, CourseMatch, JobMatch, Reason,
};
pub use models::{Course, CourseRequirements, Job, JobRequirements, StudentProfile, SubjectEntry};
