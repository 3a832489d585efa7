use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Required skills absent from the candidate's set, compared
/// case-insensitively. Order and casing of `required` are preserved.
pub fn missing_skills(candidate: &BTreeSet<String>, required: &[String]) -> Vec<String> {
    let have = lowered(candidate);
    required
        .iter()
        .filter(|skill| !have.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Placement fit for one role: the share of required skills the candidate
/// already has. Zero required skills is a documented degenerate case, not an
/// error, and scores `(0.0, 0)`.
pub fn placement_score(candidate: &BTreeSet<String>, required: &[String]) -> MatchScore {
    let required_total = required.len();
    if required_total == 0 {
        return MatchScore {
            percentage: 0.0,
            matched: 0,
            required_total: 0,
        };
    }

    let have = lowered(candidate);
    let matched = required
        .iter()
        .filter(|skill| have.contains(&skill.to_lowercase()))
        .count();

    let percentage = round2(matched as f64 / required_total as f64 * 100.0);
    MatchScore {
        percentage,
        matched,
        required_total,
    }
}

fn lowered(skills: &BTreeSet<String>) -> BTreeSet<String> {
    skills.iter().map(|skill| skill.to_lowercase()).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Match percentage plus the counts behind it, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub percentage: f64,
    pub matched: usize,
    pub required_total: usize,
}

impl MatchScore {
    pub fn readiness(&self) -> ReadinessBand {
        ReadinessBand::from_percentage(self.percentage)
    }
}

/// Coarse interpretation of a fit score for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    High,
    Moderate,
    Low,
}

impl ReadinessBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            Self::High
        } else if percentage >= 50.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReadinessBand::High => "highly suitable; ready for placement",
            ReadinessBand::Moderate => "somewhat suitable; some upskilling recommended",
            ReadinessBand::Low => "needs more training before applying",
        }
    }
}
