use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{Course, CourseCatalog, JobCatalog, JobRole};
use crate::workflows::analysis::classifier::RoleModel;
use crate::workflows::analysis::AnalysisService;

pub(super) fn skill_set(skills: &[&str]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

pub(super) fn required(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

pub(super) fn course(name: &str, skills: &[&str]) -> Course {
    Course {
        name: name.to_string(),
        skills_covered: skill_set(skills),
    }
}

pub(super) fn course_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        course("Excel Basics", &["excel"]),
        course("SQL Fundamentals", &["sql"]),
        course("Python for Analysts", &["python", "pandas"]),
        course("Full Stack Web", &["html", "css", "javascript"]),
        course("Applied Machine Learning", &["python", "machine learning"]),
        course("Tableau Dashboards", &["tableau"]),
    ])
}

pub(super) fn job_catalog() -> JobCatalog {
    JobCatalog::new(vec![
        JobRole {
            title: "Data Analyst".to_string(),
            required_skills: required(&["python", "sql", "excel"]),
        },
        JobRole {
            title: "Web Developer".to_string(),
            required_skills: required(&["html", "css", "javascript"]),
        },
        JobRole {
            title: "Machine Learning Engineer".to_string(),
            required_skills: required(&["python", "machine learning", "sql", "pandas"]),
        },
        JobRole {
            title: "BI Developer".to_string(),
            required_skills: required(&["sql", "tableau", "excel"]),
        },
    ])
}

/// Canned classifier so orchestration tests control the predicted label.
pub(super) struct FixedModel {
    pub(super) label: String,
}

impl RoleModel for FixedModel {
    fn predict(&self, _features: &str) -> String {
        self.label.clone()
    }
}

pub(super) fn analysis_service(classifier: Option<Arc<dyn RoleModel>>) -> AnalysisService {
    AnalysisService::new(
        Arc::new(job_catalog()),
        Arc::new(course_catalog()),
        classifier,
    )
}
