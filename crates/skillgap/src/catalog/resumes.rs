use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A stored resume used by the batch tooling: a display name plus the skill
/// list the learner declared directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

pub fn load_resumes<R: Read>(reader: R) -> Result<Vec<ResumeRecord>, CatalogError> {
    serde_json::from_reader(reader).map_err(|source| CatalogError::Json {
        what: "resume",
        source,
    })
}

pub fn load_resumes_from_path(path: &Path) -> Result<Vec<ResumeRecord>, CatalogError> {
    let file = super::open_file(path)?;
    load_resumes(file)
}
