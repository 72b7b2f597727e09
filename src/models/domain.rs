use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A subject on a student's academic record.
///
/// Profiles store subjects either as `"<name> - <grade>"` strings or as
/// `{name, grade}` objects. Scoring never looks at this type directly; it works
/// on the canonical [`Subject`] returned by [`SubjectEntry::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectEntry {
    Formatted(String),
    Structured {
        #[serde(default, deserialize_with = "lenient_string")]
        name: String,
        #[serde(default, deserialize_with = "lenient_string")]
        grade: String,
    },
}

impl SubjectEntry {
    /// Reduce the entry to a lower-cased name and an upper-cased grade token.
    ///
    /// Formatted entries take the text before the first `-` as the name and the
    /// text after the last `-` as the grade, so a hyphenated subject name such as
    /// `"Life-Orientation - B"` reads as `"life"` graded `"B"`.
    pub fn normalize(&self) -> Subject {
        match self {
            SubjectEntry::Formatted(raw) => {
                let name = raw.split('-').next().unwrap_or_default();
                let grade = raw.rsplit('-').next().unwrap_or_default();
                Subject::new(name, grade)
            }
            SubjectEntry::Structured { name, grade } => Subject::new(name, grade),
        }
    }
}

impl From<&str> for SubjectEntry {
    fn from(value: &str) -> Self {
        SubjectEntry::Formatted(value.to_string())
    }
}

/// Canonical subject record used by every scoring function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub grade: String,
}

impl Subject {
    fn new(name: &str, grade: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            grade: grade.trim().to_uppercase(),
        }
    }
}

/// Student academic and work record, owned by the profile subsystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default, deserialize_with = "lenient_list")]
    pub subjects: Vec<SubjectEntry>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_grade: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub work_experience: Vec<WorkExperience>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Entry requirements attached to a course. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequirements {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub minimum_credits: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub minimum_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub minimum_points: Option<u32>,
    /// Required subject names; an entry may list alternatives joined by `OR`
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
}

/// Hiring requirements attached to a job. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    /// Minimum years of experience as posted, e.g. `"2"` or `"3+ years"`
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

/// Course offered by an institution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_record", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<CourseRequirements>,
}

/// Job posted by a company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_record", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<JobRequirements>,
}

// Profile and catalog records are written by forms with loose typing. A field
// holding the wrong JSON type degrades to its empty value instead of rejecting
// the whole record.

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

// Minimums are compared against whole counts, so fractions round up.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().and_then(whole_count),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole_count),
        _ => None,
    })
}

fn whole_count(value: f64) -> Option<u32> {
    // `as` saturates at u32::MAX
    (value.is_finite() && value >= 0.0).then(|| value.ceil() as u32)
}

fn lenient_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => serde_json::from_value(value).ok(),
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
