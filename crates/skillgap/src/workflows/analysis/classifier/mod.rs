//! Role classification over a bag-of-skills text representation.
//!
//! The analysis service only depends on the narrow [`RoleModel`] seam; the
//! concrete implementation is a TF-IDF vectorizer plus a nearest-centroid
//! model fitted offline from labeled `(skills, job_title)` rows and persisted
//! as two separate JSON artifacts.

mod centroid;
mod metrics;
mod tfidf;

pub use centroid::NearestCentroidModel;
pub use metrics::{evaluate_classifier, EvaluationReport, LabelMetrics};
pub use tfidf::TfidfVectorizer;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version stamped into both artifacts. Bumped whenever the feature
/// representation changes, so a stale vectorizer cannot silently degrade
/// predictions.
const ARTIFACT_VERSION: u32 = 1;

/// Narrow prediction seam consumed by the orchestrator. Any concrete
/// classification technique satisfies it.
pub trait RoleModel: Send + Sync {
    /// Predict exactly one role label for the given feature text.
    fn predict(&self, features: &str) -> String;
}

/// Join a skill set into the comma-space-separated feature text. This is the
/// fixed contract between training and inference; changing the separator or
/// casing here invalidates every persisted artifact.
pub fn feature_text(skills: &BTreeSet<String>) -> String {
    skills.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// One labeled example from the training dataset CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingRow {
    pub skills: String,
    pub job_title: String,
}

pub fn load_training_rows<R: Read>(reader: R) -> Result<Vec<TrainingRow>, ClassifierError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<TrainingRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn load_training_rows_from_path(path: &Path) -> Result<Vec<TrainingRow>, ClassifierError> {
    let file = File::open(path).map_err(|source| ClassifierError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    load_training_rows(file)
}

/// Errors raised while training, persisting, or loading the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("cannot access classifier artifact {}: {}", .path.display(), .source)]
    Artifact {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("classifier artifact {} is corrupt: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(
        "classifier artifact {} uses feature format v{}, expected v{}",
        .path.display(),
        .found,
        .expected
    )]
    VersionMismatch {
        path: PathBuf,
        expected: u32,
        found: u32,
    },
    #[error(
        "classifier artifacts {} and {} come from different training runs; retrain both together",
        .model_path.display(),
        .vectorizer_path.display()
    )]
    Incompatible {
        model_path: PathBuf,
        vectorizer_path: PathBuf,
    },
    #[error("malformed training dataset: {0}")]
    TrainingData(#[from] csv::Error),
    #[error("training dataset contains no rows")]
    EmptyTrainingSet,
}

/// A fitted vectorizer/model pair ready for inference.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedRoleClassifier {
    vectorizer: TfidfVectorizer,
    model: NearestCentroidModel,
    trained_at: DateTime<Utc>,
}

impl TrainedRoleClassifier {
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn labels(&self) -> &[String] {
        self.model.labels()
    }

    /// Serialize the pair as two independent artifacts at the given paths.
    pub fn save(&self, model_path: &Path, vectorizer_path: &Path) -> Result<(), ClassifierError> {
        write_artifact(
            model_path,
            &ModelArtifact {
                version: ARTIFACT_VERSION,
                trained_at: self.trained_at,
                model: self.model.clone(),
            },
        )?;
        write_artifact(
            vectorizer_path,
            &VectorizerArtifact {
                version: ARTIFACT_VERSION,
                vectorizer: self.vectorizer.clone(),
            },
        )
    }

    /// Load both artifacts, failing fast when either file is missing,
    /// corrupt, or was produced with an incompatible feature representation.
    /// A model/vectorizer pair from different training runs disagrees on the
    /// feature dimension and is rejected rather than left to predict garbage.
    pub fn load(model_path: &Path, vectorizer_path: &Path) -> Result<Self, ClassifierError> {
        let model: ModelArtifact = read_artifact(model_path)?;
        let vectorizer: VectorizerArtifact = read_artifact(vectorizer_path)?;

        check_version(model_path, model.version)?;
        check_version(vectorizer_path, vectorizer.version)?;

        if !model.model.is_compatible_with(vectorizer.vectorizer.dimension()) {
            return Err(ClassifierError::Incompatible {
                model_path: model_path.to_path_buf(),
                vectorizer_path: vectorizer_path.to_path_buf(),
            });
        }

        Ok(Self {
            vectorizer: vectorizer.vectorizer,
            model: model.model,
            trained_at: model.trained_at,
        })
    }
}

impl RoleModel for TrainedRoleClassifier {
    fn predict(&self, features: &str) -> String {
        let vector = self.vectorizer.transform(features);
        self.model.predict(&vector).to_string()
    }
}

/// Fit the vectorizer on the skills column and a nearest-centroid model on
/// the resulting TF-IDF vectors.
pub fn fit_role_classifier(rows: &[TrainingRow]) -> Result<TrainedRoleClassifier, ClassifierError> {
    if rows.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }

    let documents: Vec<String> = rows.iter().map(|row| row.skills.clone()).collect();
    let labels: Vec<String> = rows.iter().map(|row| row.job_title.clone()).collect();

    let vectorizer = TfidfVectorizer::fit(&documents);
    let vectors: Vec<Vec<f64>> = documents
        .iter()
        .map(|document| vectorizer.transform(document))
        .collect();
    let model = NearestCentroidModel::fit(&labels, &vectors);

    Ok(TrainedRoleClassifier {
        vectorizer,
        model,
        trained_at: Utc::now(),
    })
}

#[derive(Serialize, Deserialize)]
struct ModelArtifact {
    version: u32,
    trained_at: DateTime<Utc>,
    model: NearestCentroidModel,
}

#[derive(Serialize, Deserialize)]
struct VectorizerArtifact {
    version: u32,
    vectorizer: TfidfVectorizer,
}

fn write_artifact<T: Serialize>(path: &Path, artifact: &T) -> Result<(), ClassifierError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ClassifierError::Artifact {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let file = File::create(path).map_err(|source| ClassifierError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, artifact).map_err(|source| ClassifierError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn read_artifact<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ClassifierError> {
    let file = File::open(path).map_err(|source| ClassifierError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(file).map_err(|source| ClassifierError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn check_version(path: &Path, found: u32) -> Result<(), ClassifierError> {
    if found != ARTIFACT_VERSION {
        return Err(ClassifierError::VersionMismatch {
            path: path.to_path_buf(),
            expected: ARTIFACT_VERSION,
            found,
        });
    }
    Ok(())
}
