//! Skill-gap analysis workflow: extraction, fit scoring, course
//! recommendation, role classification, and per-session orchestration.

pub mod classifier;
mod extractor;
mod gap;
mod recommend;
pub mod report;
pub mod router;
mod service;
mod session;

#[cfg(test)]
mod tests;

pub use extractor::extract_skills;
pub use gap::{missing_skills, placement_score, MatchScore, ReadinessBand};
pub use recommend::recommend_courses;
pub use report::{AlternativeRole, GapReport, ALTERNATIVE_ROLE_THRESHOLD};
pub use router::analysis_router;
pub use service::{AnalysisError, AnalysisService};
pub use session::{AnalysisSession, SessionState};
