use super::common::{job_catalog, skill_set, FixedModel};
use crate::workflows::analysis::{AnalysisError, AnalysisSession, SessionState};

fn vocabulary() -> std::collections::BTreeSet<String> {
    skill_set(&["python", "sql", "excel", "html", "css", "javascript"])
}

#[test]
fn session_walks_through_states_in_order() {
    let jobs = job_catalog();
    let mut session = AnalysisSession::new();
    assert_eq!(session.state(), SessionState::Start);

    session.ingest_resume("python and sql work", &vocabulary());
    assert_eq!(session.state(), SessionState::Extracted);
    assert_eq!(session.extracted_skills(), &skill_set(&["python", "sql"]));

    session
        .select_role("Data Analyst", &jobs)
        .expect("catalog role selects");
    assert_eq!(session.state(), SessionState::RoleSelected);

    session.mark_ready().expect("selected role can be analyzed");
    assert_eq!(session.state(), SessionState::Analyzed);
}

#[test]
fn selecting_unknown_role_is_an_error() {
    let jobs = job_catalog();
    let mut session = AnalysisSession::new();
    session.ingest_resume("python", &vocabulary());

    match session.select_role("Astronaut", &jobs) {
        Err(AnalysisError::RoleNotFound(title)) => assert_eq!(title, "Astronaut"),
        other => panic!("expected role-not-found, got {other:?}"),
    }
    assert_eq!(session.state(), SessionState::Extracted);
}

#[test]
fn mark_ready_requires_a_selected_role() {
    let mut session = AnalysisSession::new();
    session.ingest_resume("python", &vocabulary());

    match session.mark_ready() {
        Err(AnalysisError::NoRoleSelected) => {}
        other => panic!("expected no-role-selected, got {other:?}"),
    }
}

#[test]
fn auto_detect_accepts_catalog_titles() {
    let jobs = job_catalog();
    let classifier = FixedModel {
        label: "Web Developer".to_string(),
    };
    let mut session = AnalysisSession::new();
    session.ingest_resume("html css javascript", &vocabulary());

    let accepted = session.auto_detect_role(&classifier, &jobs);
    assert_eq!(accepted.as_deref(), Some("Web Developer"));
    assert_eq!(session.selected_role(), Some("Web Developer"));
    assert!(session.auto_detect_enabled());
}

#[test]
fn auto_detect_of_unknown_title_leaves_session_unselected() {
    let jobs = job_catalog();
    let classifier = FixedModel {
        label: "Quantum Consultant".to_string(),
    };
    let mut session = AnalysisSession::new();
    session.ingest_resume("python", &vocabulary());

    let accepted = session.auto_detect_role(&classifier, &jobs);
    assert!(accepted.is_none());
    assert!(session.selected_role().is_none());
    assert_eq!(session.state(), SessionState::Extracted);
}

#[test]
fn new_resume_text_resets_downstream_state() {
    let jobs = job_catalog();
    let mut session = AnalysisSession::new();

    session.ingest_resume("python and sql", &vocabulary());
    session
        .select_role("Data Analyst", &jobs)
        .expect("catalog role selects");
    session.mark_ready().expect("session ready");
    assert_eq!(session.state(), SessionState::Analyzed);

    session.ingest_resume("html and css only", &vocabulary());
    assert_eq!(session.state(), SessionState::Extracted);
    assert!(session.selected_role().is_none());
    assert!(!session.auto_detect_enabled());
    assert_eq!(session.extracted_skills(), &skill_set(&["html", "css"]));
}

#[test]
fn empty_resume_text_is_no_skills_found_not_an_error() {
    let mut session = AnalysisSession::new();
    session.ingest_resume("   ", &vocabulary());
    assert_eq!(session.state(), SessionState::Extracted);
    assert!(session.extracted_skills().is_empty());
}
