use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::report::GapReport;
use super::service::{AnalysisError, AnalysisService};
use super::session::AnalysisSession;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router(service: Arc<AnalysisService>) -> Router {
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler))
        .route("/api/v1/roles", get(roles_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisRequest {
    pub(crate) resume_text: String,
    /// Explicit target role; takes precedence over auto-detect.
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) auto_detect: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalysisResponse {
    pub(crate) extracted_skills: Vec<String>,
    pub(crate) role: Option<String>,
    pub(crate) auto_detected: bool,
    pub(crate) state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) report: Option<GapReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) note: Option<String>,
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<AnalysisService>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    let mut session = AnalysisSession::new();
    session.ingest_resume(&request.resume_text, service.vocabulary());

    let mut auto_detected = false;
    let mut note = None;

    if let Some(title) = &request.role {
        if let Err(error) = session.select_role(title, service.jobs()) {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
    } else if request.auto_detect {
        match service.predict_role(session.extracted_skills()) {
            Ok(Some(predicted)) => {
                // Predicted titles come from the catalog here, so selection
                // cannot fail.
                if session.select_role(&predicted, service.jobs()).is_ok() {
                    auto_detected = true;
                }
            }
            Ok(None) => {
                note = Some("no catalog role auto-detected; select one manually".to_string());
            }
            Err(AnalysisError::ClassifierUnavailable) => {
                let payload = json!({
                    "error": AnalysisError::ClassifierUnavailable.to_string(),
                });
                return (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response();
            }
            Err(other) => {
                let payload = json!({ "error": other.to_string() });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
            }
        }
    } else {
        note = Some("no target role provided; select one or enable auto_detect".to_string());
    }

    if session.extracted_skills().is_empty() && note.is_none() {
        note = Some("no skills found in resume text".to_string());
    }

    let report = if session.selected_role().is_some() {
        match session
            .mark_ready()
            .and_then(|_| service.run_session(&session))
        {
            Ok(report) => Some(report),
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
            }
        }
    } else {
        None
    };

    let response = AnalysisResponse {
        extracted_skills: session.extracted_skills().iter().cloned().collect(),
        role: session.selected_role().map(str::to_string),
        auto_detected,
        state: session.state().label(),
        report,
        note,
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn roles_handler(State(service): State<Arc<AnalysisService>>) -> Response {
    let payload = json!({ "roles": service.job_titles() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
