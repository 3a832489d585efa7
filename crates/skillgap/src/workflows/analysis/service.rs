use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{CourseCatalog, JobCatalog};

use super::classifier::{feature_text, RoleModel};
use super::extractor::extract_skills;
use super::gap::{missing_skills, placement_score};
use super::recommend::recommend_courses;
use super::report::{rank_alternative_roles, GapReport};
use super::session::AnalysisSession;

/// Orchestrator composing the extractor, gap analyzer, recommender, and
/// classifier over the shared read-only catalogs. The classifier is optional:
/// without it, auto-detect is unavailable but manual selection still works.
pub struct AnalysisService {
    jobs: Arc<JobCatalog>,
    courses: Arc<CourseCatalog>,
    vocabulary: BTreeSet<String>,
    classifier: Option<Arc<dyn RoleModel>>,
}

impl AnalysisService {
    pub fn new(
        jobs: Arc<JobCatalog>,
        courses: Arc<CourseCatalog>,
        classifier: Option<Arc<dyn RoleModel>>,
    ) -> Self {
        let vocabulary = courses.vocabulary();
        Self {
            jobs,
            courses,
            vocabulary,
            classifier,
        }
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    pub fn job_titles(&self) -> Vec<String> {
        self.jobs.titles()
    }

    pub fn jobs(&self) -> &JobCatalog {
        &self.jobs
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Extract the known-skill subset from resume text.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let found = extract_skills(text, &self.vocabulary);
        debug!(skills = found.len(), "extracted skills from resume text");
        found
    }

    /// Predict the best-fit role for a skill set. `Ok(None)` means the
    /// classifier answered with a title outside the catalog, which the caller
    /// must treat as "no auto-detected role" rather than an error.
    pub fn predict_role(
        &self,
        skills: &BTreeSet<String>,
    ) -> Result<Option<String>, AnalysisError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AnalysisError::ClassifierUnavailable)?;

        let predicted = classifier.predict(&feature_text(skills));
        if self.jobs.contains(&predicted) {
            Ok(Some(predicted))
        } else {
            debug!(%predicted, "auto-detected role absent from catalog");
            Ok(None)
        }
    }

    /// Assemble the full report for a skill set against a selected role:
    /// gap, fit score, course recommendations, and ranked alternatives.
    pub fn analyze(
        &self,
        skills: &BTreeSet<String>,
        role_title: &str,
    ) -> Result<GapReport, AnalysisError> {
        let role = self
            .jobs
            .find(role_title)
            .ok_or_else(|| AnalysisError::RoleNotFound(role_title.to_string()))?;

        let missing = missing_skills(skills, &role.required_skills);
        let recommended_courses = recommend_courses(&missing, self.courses.courses());
        let score = placement_score(skills, &role.required_skills);
        let alternative_roles = rank_alternative_roles(skills, &self.jobs, &role.title);

        Ok(GapReport {
            extracted_skills: skills.iter().cloned().collect(),
            role_title: role.title.clone(),
            missing_skills: missing,
            recommended_courses,
            score,
            readiness: score.readiness(),
            readiness_summary: score.readiness().label().to_string(),
            alternative_roles,
        })
    }

    /// Report assembly for a session that has reached a selected role.
    pub fn run_session(&self, session: &AnalysisSession) -> Result<GapReport, AnalysisError> {
        let role_title = session
            .selected_role()
            .ok_or(AnalysisError::NoRoleSelected)?;
        self.analyze(session.extracted_skills(), role_title)
    }
}

/// Error raised by the analysis orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("role not found: {0}")]
    RoleNotFound(String),
    #[error("no target role selected")]
    NoRoleSelected,
    #[error("role classifier artifacts are not loaded")]
    ClassifierUnavailable,
}
