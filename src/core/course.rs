use serde::{Deserialize, Serialize};

use crate::core::grades::{calculate_credits, calculate_points, highest_grade, subject_names, Grade};
use crate::core::reason::Reason;
use crate::core::requirements::{meets_grade_requirement, subject_coverage};
use crate::models::{CourseRequirements, StudentProfile};

/// Minimum score for a student to be eligible for a course
pub const COURSE_ELIGIBILITY_THRESHOLD: u32 = 70;

/// Points awarded per passed requirement check
const CHECK_WEIGHT: u32 = 25;

/// Values derived from the student's record while scoring a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMatchDetails {
    pub highest_grade: Grade,
    pub points: u32,
    pub credits: u32,
    pub subjects: Vec<String>,
}

/// Eligibility verdict for a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMatch {
    pub eligible: bool,
    /// Percentage of declared checks passed, 0-100
    pub score: u32,
    pub reasons: Vec<Reason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CourseMatchDetails>,
}

impl CourseMatch {
    fn unrestricted() -> Self {
        Self {
            eligible: true,
            score: 100,
            reasons: Vec::new(),
            details: None,
        }
    }
}

/// Score a student against a course's entry requirements.
///
/// Each declared check (credits, grade, points, subjects) is worth an equal
/// share; undeclared checks are left out of the denominator. Missing
/// requirements mean the course is open to everyone.
pub fn meets_requirements(
    student: &StudentProfile,
    requirements: Option<&CourseRequirements>,
) -> CourseMatch {
    let Some(requirements) = requirements else {
        return CourseMatch::unrestricted();
    };

    let details = CourseMatchDetails {
        highest_grade: highest_grade(&student.subjects),
        points: calculate_points(&student.subjects),
        credits: calculate_credits(&student.subjects),
        subjects: subject_names(&student.subjects),
    };

    let mut reasons = Vec::new();
    let mut evaluated = 0u32;
    let mut earned = 0u32;

    // Zero minimums are treated as undeclared
    if let Some(minimum) = requirements.minimum_credits.filter(|m| *m > 0) {
        evaluated += 1;
        let credits = details.credits;
        if credits >= minimum {
            earned += CHECK_WEIGHT;
            reasons.push(Reason::satisfied(format!(
                "Credits: {credits} (minimum {minimum})"
            )));
        } else {
            reasons.push(Reason::unsatisfied(format!(
                "Credits: {credits} of {minimum} required ({} short)",
                minimum - credits
            )));
        }
    }

    let minimum_grade = requirements
        .minimum_grade
        .as_deref()
        .map(str::trim)
        .filter(|grade| !grade.is_empty());
    if let Some(required) = minimum_grade {
        evaluated += 1;
        let highest = details.highest_grade;
        let required = required.to_uppercase();
        if meets_grade_requirement(highest.as_str(), &required) {
            earned += CHECK_WEIGHT;
            reasons.push(Reason::satisfied(format!(
                "Highest grade {highest} meets minimum grade {required}"
            )));
        } else {
            reasons.push(Reason::unsatisfied(format!(
                "Highest grade {highest} is below minimum grade {required}"
            )));
        }
    }

    if let Some(minimum) = requirements.minimum_points.filter(|m| *m > 0) {
        evaluated += 1;
        let points = details.points;
        if points >= minimum {
            earned += CHECK_WEIGHT;
            reasons.push(Reason::satisfied(format!(
                "Points: {points} (minimum {minimum})"
            )));
        } else {
            reasons.push(Reason::unsatisfied(format!(
                "Points: {points} of {minimum} required ({} short)",
                minimum - points
            )));
        }
    }

    let coverage = subject_coverage(&details.subjects, &requirements.subjects);
    if coverage.required > 0 {
        evaluated += 1;
        if !details.subjects.is_empty() && coverage.is_met() {
            earned += CHECK_WEIGHT;
            reasons.push(Reason::satisfied(format!(
                "Required subjects: {} of {} met",
                coverage.matched, coverage.required
            )));
        } else {
            reasons.push(Reason::unsatisfied(format!(
                "Required subjects: {} of {} met, missing {}",
                coverage.matched,
                coverage.required,
                coverage.missing.join(", ")
            )));
        }
    }

    let score = if evaluated == 0 {
        reasons.push(Reason::satisfied("No specific entry requirements"));
        100
    } else {
        let possible = evaluated * CHECK_WEIGHT;
        (f64::from(earned) * 100.0 / f64::from(possible)).round() as u32
    };

    CourseMatch {
        eligible: score >= COURSE_ELIGIBILITY_THRESHOLD,
        score,
        reasons,
        details: Some(details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reason::ReasonStatus;
    use crate::models::SubjectEntry;

    fn student(subjects: &[&str]) -> StudentProfile {
        StudentProfile {
            subjects: subjects.iter().map(|s| SubjectEntry::from(*s)).collect(),
            current_grade: "Grade 12".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_requirements_short_circuit() {
        let result = meets_requirements(&student(&["Mathematics - F"]), None);

        assert!(result.eligible);
        assert_eq!(result.score, 100);
        assert!(result.reasons.is_empty());
        assert!(result.details.is_none());
    }

    #[test]
    fn test_empty_requirements_pass_with_implicit_reason() {
        let result = meets_requirements(&student(&[]), Some(&CourseRequirements::default()));

        assert!(result.eligible);
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].is_satisfied());
        assert!(result.details.is_some());
    }

    #[test]
    fn test_grade_and_credits_pass() {
        let requirements = CourseRequirements {
            minimum_grade: Some("C".to_string()),
            minimum_credits: Some(2),
            ..Default::default()
        };
        let result = meets_requirements(
            &student(&["Mathematics - B", "English - C", "Biology - C"]),
            Some(&requirements),
        );

        assert_eq!(result.score, 100);
        assert!(result.eligible);
        assert!(result.reasons.iter().all(Reason::is_satisfied));

        let details = result.details.unwrap();
        assert_eq!(details.credits, 3);
        assert_eq!(details.highest_grade, Grade::B);
    }

    #[test]
    fn test_single_failed_grade_check() {
        let requirements = CourseRequirements {
            minimum_grade: Some("A".to_string()),
            ..Default::default()
        };
        let result = meets_requirements(&student(&["English - C"]), Some(&requirements));

        assert_eq!(result.score, 0);
        assert!(!result.eligible);
        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.reasons[0].status, ReasonStatus::Unsatisfied);
        assert!(result.reasons[0].message.contains('C'));
        assert!(result.reasons[0].message.contains('A'));
    }

    #[test]
    fn test_partial_score_is_proportional() {
        let requirements = CourseRequirements {
            minimum_credits: Some(1),
            minimum_grade: Some("B".to_string()),
            minimum_points: Some(20),
            subjects: vec!["Mathematics".to_string()],
        };
        let result = meets_requirements(&student(&["Mathematics - B"]), Some(&requirements));

        // credits, grade and subjects pass; points 4 < 20
        assert_eq!(result.score, 75);
        assert!(result.eligible);
        assert_eq!(result.reasons.len(), 4);
        assert_eq!(result.reasons[2].status, ReasonStatus::Unsatisfied);
        assert!(result.reasons[2].message.contains("16 short"));
    }

    #[test]
    fn test_three_checks_round_score() {
        let requirements = CourseRequirements {
            minimum_credits: Some(5),
            minimum_grade: Some("C".to_string()),
            minimum_points: Some(30),
            ..Default::default()
        };
        let result = meets_requirements(&student(&["Mathematics - C"]), Some(&requirements));

        assert_eq!(result.score, 33);
        assert!(!result.eligible);
    }

    #[test]
    fn test_zero_minimum_is_not_checked() {
        let requirements = CourseRequirements {
            minimum_credits: Some(0),
            minimum_grade: Some("A".to_string()),
            ..Default::default()
        };
        let result = meets_requirements(&student(&["English - C"]), Some(&requirements));

        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_fractional_credit_minimum_not_met_by_floor() {
        let requirements: CourseRequirements =
            serde_json::from_value(serde_json::json!({"minimumCredits": 2.5})).unwrap();
        let result = meets_requirements(&student(&["English - C", "History - B"]), Some(&requirements));

        assert_eq!(result.score, 0);
        assert_eq!(result.reasons[0].status, ReasonStatus::Unsatisfied);
    }

    #[test]
    fn test_blank_required_subject_counts_toward_threshold() {
        let requirements = CourseRequirements {
            subjects: vec!["".to_string(), "Mathematics".to_string(), "Biology".to_string()],
            ..Default::default()
        };
        let result = meets_requirements(&student(&["Mathematics - B"]), Some(&requirements));

        assert_eq!(result.score, 100);
        assert!(result.reasons[0].message.contains("2 of 3"));
    }

    #[test]
    fn test_missing_subjects_are_listed() {
        let requirements = CourseRequirements {
            subjects: vec!["Mathematics".to_string(), "Accounting".to_string()],
            ..Default::default()
        };
        let result = meets_requirements(&student(&["Mathematics - A"]), Some(&requirements));

        assert_eq!(result.score, 0);
        assert!(result.reasons[0].message.contains("Accounting"));
    }

    #[test]
    fn test_empty_profile_never_panics() {
        let requirements = CourseRequirements {
            minimum_credits: Some(4),
            minimum_grade: Some("C".to_string()),
            minimum_points: Some(18),
            subjects: vec!["English".to_string()],
        };
        let result = meets_requirements(&StudentProfile::default(), Some(&requirements));

        assert_eq!(result.score, 0);
        assert!(!result.eligible);
        assert_eq!(result.reasons.len(), 4);
    }
}
