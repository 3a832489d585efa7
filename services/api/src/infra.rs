use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use skillgap::catalog::{CourseCatalog, JobCatalog};
use skillgap::config::DataConfig;
use skillgap::error::AppError;
use skillgap::workflows::analysis::classifier::{RoleModel, TrainedRoleClassifier};
use skillgap::workflows::analysis::AnalysisService;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalogs and, when its artifacts are present, the classifier.
/// A missing or corrupt classifier degrades auto-detect only; manual role
/// selection has to keep working, so the failure is logged rather than fatal.
pub(crate) fn build_analysis_service(data: &DataConfig) -> Result<AnalysisService, AppError> {
    let jobs = Arc::new(JobCatalog::from_path(&data.jobs_path)?);
    let courses = Arc::new(CourseCatalog::from_path(&data.courses_path)?);
    let classifier = load_classifier(data);

    Ok(AnalysisService::new(jobs, courses, classifier))
}

fn load_classifier(data: &DataConfig) -> Option<Arc<dyn RoleModel>> {
    match TrainedRoleClassifier::load(&data.model_path, &data.vectorizer_path) {
        Ok(classifier) => Some(Arc::new(classifier)),
        Err(error) => {
            warn!(%error, "role classifier unavailable; auto-detect disabled");
            None
        }
    }
}
