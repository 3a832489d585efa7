//! Skill-gap analysis core.
//!
//! The library matches a learner's extracted skill set against a catalog of
//! job-role requirements, scores the fit, and recommends courses that close
//! the gap. Catalogs (courses, job roles, stored resumes) are loaded once and
//! shared read-only; each analysis request produces a fresh report.

pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
