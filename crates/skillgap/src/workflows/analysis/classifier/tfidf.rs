use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::workflows::analysis::extractor::tokenize;

/// TF-IDF vectorizer over the same token rule the extractor uses, with
/// smoothed inverse document frequencies and L2-normalized output vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and document frequencies from the corpus.
    /// Term indices follow sorted term order, so fitting is deterministic.
    pub fn fit(documents: &[String]) -> Self {
        let total_docs = documents.len();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for document in documents {
            let lowered = document.to_lowercase();
            let unique: BTreeSet<String> = tokenize(&lowered).map(str::to_string).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, frequency)) in document_frequency.into_iter().enumerate() {
            // Smoothed idf: ln((1 + n) / (1 + df)) + 1, never zero or negative.
            let value = ((1 + total_docs) as f64 / (1 + frequency) as f64).ln() + 1.0;
            vocabulary.insert(term, index);
            idf.push(value);
        }

        Self { vocabulary, idf }
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Map a document to its L2-normalized TF-IDF vector. Terms outside the
    /// fitted vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        let lowered = document.to_lowercase();

        for token in tokenize(&lowered) {
            if let Some(&index) = self.vocabulary.get(token) {
                vector[index] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}
