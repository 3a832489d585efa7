use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;

use super::gap::{placement_score, MatchScore, ReadinessBand};

/// Alternative roles below this fit percentage are not worth surfacing.
pub const ALTERNATIVE_ROLE_THRESHOLD: f64 = 30.0;

/// Another catalog role the candidate is reasonably qualified for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRole {
    pub title: String,
    pub percentage: f64,
}

/// The full analysis result for one request. Ephemeral: assembled fresh per
/// invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub extracted_skills: Vec<String>,
    pub role_title: String,
    pub missing_skills: Vec<String>,
    pub recommended_courses: BTreeSet<String>,
    pub score: MatchScore,
    pub readiness: ReadinessBand,
    pub readiness_summary: String,
    pub alternative_roles: Vec<AlternativeRole>,
}

/// Score every catalog role other than the selected one and keep those at or
/// above the threshold, sorted by descending fit. The sort is stable, so ties
/// keep catalog order.
pub fn rank_alternative_roles(
    candidate: &BTreeSet<String>,
    jobs: &JobCatalog,
    selected_title: &str,
) -> Vec<AlternativeRole> {
    let mut alternatives: Vec<AlternativeRole> = jobs
        .roles()
        .iter()
        .filter(|role| role.title != selected_title)
        .filter_map(|role| {
            let score = placement_score(candidate, &role.required_skills);
            (score.percentage >= ALTERNATIVE_ROLE_THRESHOLD).then(|| AlternativeRole {
                title: role.title.clone(),
                percentage: score.percentage,
            })
        })
        .collect();

    alternatives.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    alternatives
}
