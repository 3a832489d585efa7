//! Read-only catalogs backing the analysis workflows.
//!
//! Courses arrive as CSV (`course_name,skills_covered`), job roles and stored
//! resumes as JSON. Everything is normalized on load and never mutated
//! afterwards; the service shares catalogs behind `Arc`.

mod courses;
mod jobs;
mod resumes;

pub use courses::{Course, CourseCatalog};
pub use jobs::{JobCatalog, JobRole};
pub use resumes::{load_resumes, load_resumes_from_path, ResumeRecord};

use std::path::PathBuf;

/// Error enumeration for catalog loading failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed course catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed {} catalog: {}", .what, .source)]
    Json {
        what: &'static str,
        source: serde_json::Error,
    },
}

pub(crate) fn open_file(path: &std::path::Path) -> Result<std::fs::File, CatalogError> {
    std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
