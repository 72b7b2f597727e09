use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::SubjectEntry;

/// Minimum points for a subject to count as a credit (grade C or better)
pub const CREDIT_POINTS: u32 = 3;

/// Letter grade on the fixed A*..F scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Grades from best to worst
    pub const PRIORITY: [Grade; 7] = [
        Grade::AStar,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
    ];

    /// Parse a grade token; surrounding whitespace and case are ignored
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "A*" => Some(Grade::AStar),
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "E" => Some(Grade::E),
            "F" => Some(Grade::F),
            _ => None,
        }
    }

    #[inline]
    pub fn points(self) -> u32 {
        match self {
            Grade::AStar | Grade::A => 5,
            Grade::B => 4,
            Grade::C => 3,
            Grade::D => 2,
            Grade::E => 1,
            Grade::F => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::AStar => "A*",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }

    #[inline]
    fn rank(self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|grade| *grade == self)
            .unwrap_or(Self::PRIORITY.len())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points for a raw grade token. Unknown or empty tokens are worth 0.
#[inline]
pub fn grade_points(token: &str) -> u32 {
    Grade::parse(token).map_or(0, Grade::points)
}

/// Sum of points across all subjects
pub fn calculate_points(subjects: &[SubjectEntry]) -> u32 {
    subjects
        .iter()
        .map(|entry| grade_points(&entry.normalize().grade))
        .sum()
}

/// Number of subjects passed at grade C or better
pub fn calculate_credits(subjects: &[SubjectEntry]) -> u32 {
    subjects
        .iter()
        .filter(|entry| grade_points(&entry.normalize().grade) >= CREDIT_POINTS)
        .count() as u32
}

/// Best grade on the record, `E` when no subject carries a recognizable grade
pub fn highest_grade(subjects: &[SubjectEntry]) -> Grade {
    subjects
        .iter()
        .filter_map(|entry| Grade::parse(&entry.normalize().grade))
        .min_by_key(|grade| grade.rank())
        .unwrap_or(Grade::E)
}

/// Lower-cased subject names, empty names dropped
pub fn subject_names(subjects: &[SubjectEntry]) -> Vec<String> {
    subjects
        .iter()
        .map(|entry| entry.normalize().name)
        .filter(|name| !name.is_empty())
        .collect()
}
