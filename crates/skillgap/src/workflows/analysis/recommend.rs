use std::collections::BTreeSet;

use crate::catalog::Course;

/// Names of every course covering at least one missing skill. The result is
/// a set: a course covering several gaps still appears once. Empty inputs
/// produce an empty result.
pub fn recommend_courses(missing: &[String], courses: &[Course]) -> BTreeSet<String> {
    let mut recommended = BTreeSet::new();
    for skill in missing {
        let needle = skill.to_lowercase();
        for course in courses {
            if course.skills_covered.contains(&needle) {
                recommended.insert(course.name.clone());
            }
        }
    }
    recommended
}
