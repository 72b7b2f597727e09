use crate::models::{Course, Job};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Read-only set of courses and jobs offered through the portal
///
/// Loaded once at startup and shared between workers. Recommendation
/// requests fall back to it when they do not carry their own candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, jobs: Vec<Job>) -> Self {
        Self { courses, jobs }
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_toml(&contents)?
        };

        tracing::debug!(
            "Loaded catalog from {}: {} courses, {} jobs",
            path.display(),
            catalog.courses.len(),
            catalog.jobs.len()
        );

        Ok(catalog)
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(contents)?)
    }

    /// Look up a course by id
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Look up a job by id
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.jobs.is_empty()
    }
}
