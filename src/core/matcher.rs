use serde::{Deserialize, Serialize};

use crate::core::{
    course::{meets_requirements, CourseMatchDetails},
    job::qualifies_for_job,
    reason::Reason,
};
use crate::models::{Course, Job, StudentProfile};

/// Course annotated with the student's match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    #[serde(flatten)]
    pub course: Course,
    pub match_score: u32,
    pub eligible: bool,
    pub match_reasons: Vec<Reason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_details: Option<CourseMatchDetails>,
}

/// Job annotated with the student's match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: u32,
    pub eligible: bool,
    pub match_reasons: Vec<Reason>,
}

/// Whether a student may submit an application, with the explanation shown to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCheck {
    pub can_apply: bool,
    pub message: String,
    pub reasons: Vec<Reason>,
    pub score: u32,
}

/// Rank courses for a student.
///
/// Courses scoring 0 are dropped. The rest are ordered by score, highest
/// first, and by course name within equal scores.
pub fn recommend_courses(student: &StudentProfile, courses: &[Course]) -> Vec<RecommendedCourse> {
    let mut recommended: Vec<RecommendedCourse> = courses
        .iter()
        .filter_map(|course| {
            let result = meets_requirements(student, course.requirements.as_ref());
            if result.score == 0 {
                return None;
            }

            Some(RecommendedCourse {
                course: course.clone(),
                match_score: result.score,
                eligible: result.eligible,
                match_reasons: result.reasons,
                match_details: result.details,
            })
        })
        .collect();

    recommended.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.course.name.cmp(&b.course.name))
    });

    recommended
}

/// Rank jobs for a student, same ordering rules as [`recommend_courses`]
pub fn recommend_jobs(student: &StudentProfile, jobs: &[Job]) -> Vec<RecommendedJob> {
    let mut recommended: Vec<RecommendedJob> = jobs
        .iter()
        .filter_map(|job| {
            let result = qualifies_for_job(student, job.requirements.as_ref());
            if result.score == 0 {
                return None;
            }

            Some(RecommendedJob {
                job: job.clone(),
                match_score: result.score,
                eligible: result.eligible,
                match_reasons: result.reasons,
            })
        })
        .collect();

    recommended.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.job.title.cmp(&b.job.title))
    });

    recommended
}

pub fn can_apply_to_course(student: &StudentProfile, course: &Course) -> ApplicationCheck {
    let result = meets_requirements(student, course.requirements.as_ref());
    let message = if result.eligible {
        "You meet the requirements for this course"
    } else {
        "You do not meet the minimum requirements for this course"
    };

    ApplicationCheck {
        can_apply: result.eligible,
        message: message.to_string(),
        reasons: result.reasons,
        score: result.score,
    }
}

pub fn can_apply_to_job(student: &StudentProfile, job: &Job) -> ApplicationCheck {
    let result = qualifies_for_job(student, job.requirements.as_ref());
    let message = if result.eligible {
        "You meet the qualifications for this job"
    } else {
        "You do not meet the minimum qualifications for this job"
    };

    ApplicationCheck {
        can_apply: result.eligible,
        message: message.to_string(),
        reasons: result.reasons,
        score: result.score,
    }
}
