use crate::core::grades::{grade_points, subject_names};
use crate::models::SubjectEntry;

/// Up to this many required subjects, every one of them must be present
pub const STRICT_SUBJECT_LIMIT: usize = 2;

/// Share of required subjects (percent, rounded down) needed above the strict limit
pub const REQUIRED_SUBJECT_PERCENT: usize = 67;

/// Separator for alternatives in a required subject, e.g. `"Mathematics OR Physics"`
const ALTERNATIVE_SEPARATOR: &str = " or ";

/// True when the student's grade is worth at least as many points as the required one
#[inline]
pub fn meets_grade_requirement(student_grade: &str, required_grade: &str) -> bool {
    grade_points(student_grade) >= grade_points(required_grade)
}

/// How well a set of subject names covers a list of required subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCoverage {
    /// Required entries the student satisfies
    pub matched: usize,
    /// Required entries, blank ones included
    pub required: usize,
    /// Matches needed to pass
    pub needed: usize,
    /// Required entries the student does not satisfy, as written
    pub missing: Vec<String>,
}

impl SubjectCoverage {
    #[inline]
    pub fn is_met(&self) -> bool {
        self.matched >= self.needed
    }
}

/// Number of satisfied requirements needed out of `required`
#[inline]
pub fn needed_subject_matches(required: usize) -> usize {
    if required <= STRICT_SUBJECT_LIMIT {
        required
    } else {
        required * REQUIRED_SUBJECT_PERCENT / 100
    }
}

/// Measure coverage of `required` by already normalized (lower-cased) names.
///
/// A blank entry is a substring of every name, so it is satisfied by any
/// non-empty record.
pub fn subject_coverage(student_names: &[String], required: &[String]) -> SubjectCoverage {
    let mut matched = 0;
    let mut missing = Vec::new();

    for entry in required {
        let wanted = entry.trim();
        let lowered = wanted.to_lowercase();
        let satisfied = if lowered.contains(ALTERNATIVE_SEPARATOR) {
            lowered
                .split(ALTERNATIVE_SEPARATOR)
                .map(str::trim)
                .filter(|alternative| !alternative.is_empty())
                .any(|alternative| has_subject(student_names, alternative))
        } else {
            has_subject(student_names, &lowered)
        };

        if satisfied {
            matched += 1;
        } else if !wanted.is_empty() {
            missing.push(wanted.to_string());
        }
    }

    SubjectCoverage {
        matched,
        required: required.len(),
        needed: needed_subject_matches(required.len()),
        missing,
    }
}

/// Check a subject record against required subject names.
///
/// No requirements always passes; an empty record never passes a non-empty list.
pub fn has_required_subjects(student_subjects: &[SubjectEntry], required: &[String]) -> bool {
    let names = subject_names(student_subjects);
    let coverage = subject_coverage(&names, required);

    if coverage.required == 0 {
        return true;
    }
    if names.is_empty() {
        return false;
    }

    coverage.is_met()
}

// Case is already folded on both sides; a match is a substring in either direction.
#[inline]
fn has_subject(student_names: &[String], wanted: &str) -> bool {
    student_names
        .iter()
        .any(|name| name.contains(wanted) || wanted.contains(name.as_str()))
}
