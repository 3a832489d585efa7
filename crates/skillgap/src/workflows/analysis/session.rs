use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;

use super::classifier::RoleModel;
use super::extractor::extract_skills;
use super::service::AnalysisError;

/// Progress of one analysis session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Start,
    Extracted,
    RoleSelected,
    Analyzed,
}

impl SessionState {
    pub const fn label(self) -> &'static str {
        match self {
            SessionState::Start => "start",
            SessionState::Extracted => "extracted",
            SessionState::RoleSelected => "role_selected",
            SessionState::Analyzed => "analyzed",
        }
    }
}

/// Per-session state for one learner interaction. Each session owns one
/// instance; nothing here is shared across sessions. Submitting new resume
/// text resets every downstream field so no stale report data leaks.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    resume_processed: bool,
    extracted_skills: BTreeSet<String>,
    selected_role: Option<String>,
    auto_detect: bool,
    analysis_ready: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.analysis_ready {
            SessionState::Analyzed
        } else if self.selected_role.is_some() {
            SessionState::RoleSelected
        } else if self.resume_processed {
            SessionState::Extracted
        } else {
            SessionState::Start
        }
    }

    pub fn extracted_skills(&self) -> &BTreeSet<String> {
        &self.extracted_skills
    }

    pub fn selected_role(&self) -> Option<&str> {
        self.selected_role.as_deref()
    }

    pub fn auto_detect_enabled(&self) -> bool {
        self.auto_detect
    }

    /// Extract skills from new resume text. Downstream state (selected role,
    /// auto-detect flag, readiness) is cleared.
    pub fn ingest_resume(&mut self, text: &str, vocabulary: &BTreeSet<String>) {
        self.extracted_skills = extract_skills(text, vocabulary);
        self.resume_processed = true;
        self.selected_role = None;
        self.auto_detect = false;
        self.analysis_ready = false;
    }

    /// Explicit role selection. Titles absent from the catalog are a
    /// user-visible error, never silently accepted.
    pub fn select_role(&mut self, title: &str, jobs: &JobCatalog) -> Result<(), AnalysisError> {
        if !jobs.contains(title) {
            return Err(AnalysisError::RoleNotFound(title.to_string()));
        }
        self.selected_role = Some(title.to_string());
        self.analysis_ready = false;
        Ok(())
    }

    /// Auto-detect the best-fit role. A predicted title absent from the
    /// catalog leaves the session without a selection; the caller should
    /// prompt for manual choice instead of erroring.
    pub fn auto_detect_role(
        &mut self,
        classifier: &dyn RoleModel,
        jobs: &JobCatalog,
    ) -> Option<String> {
        self.auto_detect = true;
        let features = super::classifier::feature_text(&self.extracted_skills);
        let predicted = classifier.predict(&features);

        if jobs.contains(&predicted) {
            self.selected_role = Some(predicted.clone());
            Some(predicted)
        } else {
            self.selected_role = None;
            None
        }
    }

    /// Flag the session ready for report assembly. Requires a selected role.
    pub fn mark_ready(&mut self) -> Result<(), AnalysisError> {
        if self.selected_role.is_none() {
            return Err(AnalysisError::NoRoleSelected);
        }
        self.analysis_ready = true;
        Ok(())
    }
}
