use serde::{Deserialize, Serialize};

use crate::core::reason::Reason;
use crate::models::{JobRequirements, StudentProfile};

/// Minimum score for a student to qualify for a job
pub const JOB_ELIGIBILITY_THRESHOLD: u32 = 60;

const STARTING_SCORE: u32 = 100;
const DEGREE_PENALTY: u32 = 50;
const DIPLOMA_PENALTY: u32 = 30;
const SKILLS_PENALTY: u32 = 20;
const EXPERIENCE_PENALTY: u32 = 15;

/// Fraction of required skills a student must match to avoid the skills penalty
const SKILL_MATCH_RATIO: f64 = 0.5;

/// Coarse education bucket derived from a student's current grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Diploma,
    Degree,
    Postgraduate,
}

impl EducationLevel {
    /// Map a profile's `currentGrade` onto a bucket; unlisted values count as high school
    pub fn from_current_grade(current_grade: &str) -> Self {
        match current_grade.trim().to_lowercase().as_str() {
            "certificate" | "diploma" | "higher certificate" => EducationLevel::Diploma,
            "bachelor's" | "bachelors" | "bachelor's degree" | "honours" => EducationLevel::Degree,
            "master's" | "masters" | "master's degree" | "phd" | "doctorate" => {
                EducationLevel::Postgraduate
            }
            _ => EducationLevel::HighSchool,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school",
            EducationLevel::Diploma => "diploma",
            EducationLevel::Degree => "degree",
            EducationLevel::Postgraduate => "postgraduate degree",
        }
    }

    #[inline]
    pub fn holds_degree(self) -> bool {
        matches!(self, EducationLevel::Degree | EducationLevel::Postgraduate)
    }
}

/// Eligibility verdict for a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub eligible: bool,
    /// 100 minus penalties for each unmet requirement
    pub score: u32,
    pub reasons: Vec<Reason>,
}

/// Score a student against a job's requirements.
///
/// Starts from 100 and deducts a fixed penalty per shortfall. The education
/// check works on buckets, skills match by substring in either direction, and
/// experience compares the number of listed positions with the requested years.
pub fn qualifies_for_job(student: &StudentProfile, requirements: Option<&JobRequirements>) -> JobMatch {
    let mut penalty = 0u32;
    let mut reasons = Vec::new();

    if let Some(requirements) = requirements {
        if let Some(required) = non_blank(requirements.education_level.as_deref()) {
            let (deduction, reason) = education_check(&student.current_grade, required);
            penalty += deduction;
            reasons.push(reason);
        }

        if let Some((deduction, reason)) = skills_check(&student.skills, &requirements.skills) {
            penalty += deduction;
            reasons.push(reason);
        }

        if let Some(required) = non_blank(requirements.experience.as_deref()) {
            let (deduction, reason) = experience_check(student.work_experience.len(), required);
            penalty += deduction;
            reasons.push(reason);
        }
    }

    let score = STARTING_SCORE.saturating_sub(penalty);

    JobMatch {
        eligible: score >= JOB_ELIGIBILITY_THRESHOLD,
        score,
        reasons,
    }
}

fn education_check(current_grade: &str, required: &str) -> (u32, Reason) {
    let level = EducationLevel::from_current_grade(current_grade);
    let wanted = required.to_lowercase();

    if wanted.contains("degree") && !level.holds_degree() {
        (
            DEGREE_PENALTY,
            Reason::unsatisfied(format!(
                "Education: {} does not meet the required {required}",
                level.label()
            )),
        )
    } else if wanted.contains("diploma") && level == EducationLevel::HighSchool {
        (
            DIPLOMA_PENALTY,
            Reason::warning(format!(
                "Education: {} is below the preferred {required}",
                level.label()
            )),
        )
    } else {
        (
            0,
            Reason::satisfied(format!("Education: {} meets {required}", level.label())),
        )
    }
}

// Blank required skills stay in the total; they match any listed skill.
fn skills_check(student_skills: &[String], required: &[String]) -> Option<(u32, Reason)> {
    if required.is_empty() {
        return None;
    }
    let required: Vec<&str> = required.iter().map(|skill| skill.trim()).collect();

    let have: Vec<String> = student_skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();

    let total = required.len();
    let (matched, missing): (Vec<&str>, Vec<&str>) = required.into_iter().partition(|skill| {
        let wanted = skill.to_lowercase();
        have.iter()
            .any(|own| own.contains(&wanted) || wanted.contains(own.as_str()))
    });

    let ratio = matched.len() as f64 / total as f64;
    Some(if ratio >= SKILL_MATCH_RATIO {
        (
            0,
            Reason::satisfied(format!(
                "Skills: {} of {total} required skills matched",
                matched.len()
            )),
        )
    } else {
        (
            SKILLS_PENALTY,
            Reason::unsatisfied(format!(
                "Skills: missing {}",
                missing
                    .into_iter()
                    .filter(|skill| !skill.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        )
    })
}

fn experience_check(positions: usize, required: &str) -> (u32, Reason) {
    let years = leading_number(required);

    if years > 0 && positions < years as usize {
        (
            EXPERIENCE_PENALTY,
            Reason::warning(format!(
                "Experience: {positions} position(s) listed, {years} year(s) requested"
            )),
        )
    } else {
        (0, Reason::satisfied("Experience requirement met"))
    }
}

/// Integer prefix of a posted value, so `"3+ years"` reads as 3; anything else
/// is 0. Values past `u32::MAX` saturate.
fn leading_number(raw: &str) -> u32 {
    raw.trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |years, digit| years.saturating_mul(10).saturating_add(digit))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reason::ReasonStatus;
    use crate::models::WorkExperience;

    fn student(current_grade: &str, skills: &[&str], positions: usize) -> StudentProfile {
        StudentProfile {
            current_grade: current_grade.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            work_experience: vec![WorkExperience::default(); positions],
            ..Default::default()
        }
    }

    fn education(level: &str) -> JobRequirements {
        JobRequirements {
            education_level: Some(level.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_requirements_full_score() {
        let result = qualifies_for_job(&student("Grade 12", &[], 0), None);
        assert_eq!(result.score, 100);
        assert!(result.eligible);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_degree_required_from_high_school() {
        let result = qualifies_for_job(&student("Grade 12", &[], 0), Some(&education("degree")));

        assert_eq!(result.score, 50);
        assert!(!result.eligible);
        assert_eq!(result.reasons[0].status, ReasonStatus::Unsatisfied);
    }

    #[test]
    fn test_degree_satisfied_by_postgraduate() {
        let result = qualifies_for_job(
            &student("Master's", &[], 0),
            Some(&education("Bachelor's degree")),
        );
        assert_eq!(result.score, 100);
        assert!(result.reasons[0].is_satisfied());
    }

    #[test]
    fn test_diploma_required_from_high_school_warns() {
        let result = qualifies_for_job(&student("Grade 11", &[], 0), Some(&education("Diploma")));

        assert_eq!(result.score, 70);
        assert!(result.eligible);
        assert_eq!(result.reasons[0].status, ReasonStatus::Warning);
    }

    #[test]
    fn test_diploma_required_from_certificate() {
        let result = qualifies_for_job(&student("Certificate", &[], 0), Some(&education("diploma")));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_education_buckets() {
        assert_eq!(EducationLevel::from_current_grade("Grade 12"), EducationLevel::HighSchool);
        assert_eq!(EducationLevel::from_current_grade("diploma"), EducationLevel::Diploma);
        assert_eq!(EducationLevel::from_current_grade("Bachelor's"), EducationLevel::Degree);
        assert_eq!(EducationLevel::from_current_grade("PhD"), EducationLevel::Postgraduate);
        assert_eq!(EducationLevel::from_current_grade("Apprentice"), EducationLevel::HighSchool);
        assert_eq!(EducationLevel::from_current_grade(""), EducationLevel::HighSchool);
    }

    #[test]
    fn test_skills_half_matched_passes() {
        let requirements = JobRequirements {
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        let result = qualifies_for_job(&student("Diploma", &["rust programming"], 0), Some(&requirements));

        assert_eq!(result.score, 100);
        assert!(result.reasons[0].message.contains("1 of 2"));
    }

    #[test]
    fn test_skills_shortfall_lists_missing() {
        let requirements = JobRequirements {
            skills: vec!["Excel".to_string(), "SQL".to_string(), "Python".to_string()],
            ..Default::default()
        };
        let result = qualifies_for_job(&student("Diploma", &["excel"], 0), Some(&requirements));

        assert_eq!(result.score, 80);
        assert!(result.eligible);
        assert_eq!(result.reasons[0].status, ReasonStatus::Unsatisfied);
        assert!(result.reasons[0].message.contains("SQL, Python"));
    }

    #[test]
    fn test_blank_student_skill_matches_nothing() {
        let requirements = JobRequirements {
            skills: vec!["Accounting".to_string()],
            ..Default::default()
        };
        let result = qualifies_for_job(&student("Diploma", &["  "], 0), Some(&requirements));
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_blank_required_skill_matches_any_skill() {
        let requirements = JobRequirements {
            skills: vec!["".to_string(), "SQL".to_string()],
            ..Default::default()
        };

        let result = qualifies_for_job(&student("Diploma", &["Excel"], 0), Some(&requirements));
        assert_eq!(result.score, 100);
        assert!(result.reasons[0].message.contains("1 of 2"));

        let result = qualifies_for_job(&student("Diploma", &[], 0), Some(&requirements));
        assert_eq!(result.score, 80);
        assert_eq!(result.reasons[0].message, "Skills: missing SQL");
    }

    #[test]
    fn test_experience_counts_positions() {
        let requirements = JobRequirements {
            experience: Some("2 years".to_string()),
            ..Default::default()
        };

        let junior = qualifies_for_job(&student("Diploma", &[], 1), Some(&requirements));
        assert_eq!(junior.score, 85);
        assert_eq!(junior.reasons[0].status, ReasonStatus::Warning);

        let seasoned = qualifies_for_job(&student("Diploma", &[], 2), Some(&requirements));
        assert_eq!(seasoned.score, 100);
        assert!(seasoned.reasons[0].is_satisfied());
    }

    #[test]
    fn test_non_numeric_experience_is_satisfied() {
        let requirements = JobRequirements {
            experience: Some("some".to_string()),
            ..Default::default()
        };
        let result = qualifies_for_job(&student("Grade 12", &[], 0), Some(&requirements));
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn test_all_penalties_stack() {
        let requirements = JobRequirements {
            education_level: Some("degree".to_string()),
            skills: vec!["Rust".to_string()],
            experience: Some("3".to_string()),
        };
        let result = qualifies_for_job(&StudentProfile::default(), Some(&requirements));

        assert_eq!(result.score, 15);
        assert!(!result.eligible);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("3+ years"), 3);
        assert_eq!(leading_number(" 12"), 12);
        assert_eq!(leading_number("none"), 0);
        assert_eq!(leading_number("-1"), 0);
        assert_eq!(leading_number("99999999999 years"), u32::MAX);
    }

    #[test]
    fn test_oversized_experience_still_penalized() {
        let requirements = JobRequirements {
            experience: Some("99999999999".to_string()),
            ..Default::default()
        };
        let result = qualifies_for_job(&student("Diploma", &[], 3), Some(&requirements));

        assert_eq!(result.score, 85);
        assert_eq!(result.reasons[0].status, ReasonStatus::Warning);
    }
}
