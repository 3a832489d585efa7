use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::{RoleModel, TrainingRow};

/// Accuracy and per-label precision/recall/F1 for a labeled dataset.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub accuracy_pct: f64,
    pub total: usize,
    pub per_label: Vec<LabelMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Run the model over every row and tally a classification report.
pub fn evaluate_classifier(model: &dyn RoleModel, rows: &[TrainingRow]) -> EvaluationReport {
    let mut correct = 0;
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for row in rows {
        let predicted = model.predict(&row.skills);
        let hit = predicted == row.job_title;

        let truth = tallies.entry(row.job_title.clone()).or_default();
        truth.support += 1;
        if hit {
            truth.true_positives += 1;
            correct += 1;
        } else {
            truth.false_negatives += 1;
        }

        if !hit {
            tallies.entry(predicted).or_default().false_positives += 1;
        }
    }

    let total = rows.len();
    let accuracy_pct = if total == 0 {
        0.0
    } else {
        round2(correct as f64 / total as f64 * 100.0)
    };

    let per_label = tallies
        .into_iter()
        .map(|(label, tally)| tally.into_metrics(label))
        .collect();

    EvaluationReport {
        accuracy_pct,
        total,
        per_label,
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<28} {:>9} {:>9} {:>9} {:>9}",
            "label", "precision", "recall", "f1", "support"
        )?;
        for metrics in &self.per_label {
            writeln!(
                f,
                "{:<28} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                metrics.label, metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        write!(
            f,
            "accuracy: {:.2}% over {} example(s)",
            self.accuracy_pct, self.total
        )
    }
}

#[derive(Debug, Default)]
struct Tally {
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
    support: usize,
}

impl Tally {
    fn into_metrics(self, label: String) -> LabelMetrics {
        let precision = ratio(self.true_positives, self.true_positives + self.false_positives);
        let recall = ratio(self.true_positives, self.true_positives + self.false_negatives);
        let f1 = if precision + recall > 0.0 {
            round2(2.0 * precision * recall / (precision + recall))
        } else {
            0.0
        };

        LabelMetrics {
            label,
            precision,
            recall,
            f1,
            support: self.support,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round2(numerator as f64 / denominator as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
