use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nearest-centroid classifier: one mean TF-IDF vector per label, prediction
/// by maximum dot product (cosine similarity, since inputs are normalized).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCentroidModel {
    labels: Vec<String>,
    centroids: Vec<Vec<f64>>,
}

impl NearestCentroidModel {
    /// Average the vectors of each label and normalize the result. Labels are
    /// stored sorted so ties in `predict` break deterministically.
    pub fn fit(labels: &[String], vectors: &[Vec<f64>]) -> Self {
        let mut grouped: BTreeMap<&str, (Vec<f64>, usize)> = BTreeMap::new();

        for (label, vector) in labels.iter().zip(vectors) {
            let entry = grouped
                .entry(label.as_str())
                .or_insert_with(|| (vec![0.0; vector.len()], 0));
            for (sum, value) in entry.0.iter_mut().zip(vector) {
                *sum += value;
            }
            entry.1 += 1;
        }

        let mut out_labels = Vec::with_capacity(grouped.len());
        let mut centroids = Vec::with_capacity(grouped.len());
        for (label, (mut sum, count)) in grouped {
            for value in &mut sum {
                *value /= count as f64;
            }
            let norm = sum.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in &mut sum {
                    *value /= norm;
                }
            }
            out_labels.push(label.to_string());
            centroids.push(sum);
        }

        Self {
            labels: out_labels,
            centroids,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// True when the model has at least one label, one centroid per label,
    /// and every centroid matches the given vector dimension. A model failing
    /// this check cannot score vectors from the paired vectorizer.
    pub fn is_compatible_with(&self, dimension: usize) -> bool {
        !self.labels.is_empty()
            && self.centroids.len() == self.labels.len()
            && self
                .centroids
                .iter()
                .all(|centroid| centroid.len() == dimension)
    }

    /// The label whose centroid is most similar to the vector. A strict
    /// greater-than keeps the first (sorted) label on exact ties.
    pub fn predict(&self, vector: &[f64]) -> &str {
        let mut best_index = 0;
        let mut best_similarity = f64::NEG_INFINITY;

        for (index, centroid) in self.centroids.iter().enumerate() {
            let similarity: f64 = centroid.iter().zip(vector).map(|(a, b)| a * b).sum();
            if similarity > best_similarity {
                best_similarity = similarity;
                best_index = index;
            }
        }

        &self.labels[best_index]
    }
}
