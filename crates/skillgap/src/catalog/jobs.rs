use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A job role and its required skills. Requirement order is preserved for
/// display; matching itself is order-independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    pub title: String,
    pub required_skills: Vec<String>,
}

/// Immutable collection of job roles, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    roles: Vec<JobRole>,
}

impl JobCatalog {
    pub fn new(roles: Vec<JobRole>) -> Self {
        Self { roles }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<JobRoleRecord> =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Json {
                what: "job role",
                source,
            })?;

        let roles = records
            .into_iter()
            .map(|record| JobRole {
                title: record.job_title,
                required_skills: record.required_skills,
            })
            .collect();

        Ok(Self { roles })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = super::open_file(path)?;
        Self::from_json_reader(file)
    }

    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn titles(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.title.clone()).collect()
    }

    /// Look up a role by its exact title.
    pub fn find(&self, title: &str) -> Option<&JobRole> {
        self.roles.iter().find(|role| role.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.find(title).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct JobRoleRecord {
    job_title: String,
    #[serde(default)]
    required_skills: Vec<String>,
}
