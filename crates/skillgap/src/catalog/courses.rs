use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A training course and the set of skills it teaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub skills_covered: BTreeSet<String>,
}

/// Immutable collection of courses, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Parse the `course_name,skills_covered` CSV export. The skills field is
    /// comma-separated inside one quoted cell; entries are trimmed and
    /// lowercased. A row with an empty skills field stays in the catalog as a
    /// course covering zero skills.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut courses = Vec::new();
        for record in csv_reader.deserialize::<CourseRow>() {
            let row = record?;
            courses.push(Course {
                name: row.course_name,
                skills_covered: split_skills(&row.skills_covered),
            });
        }

        Ok(Self { courses })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = super::open_file(path)?;
        Self::from_csv_reader(file)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The known-skill vocabulary: the union of every skill covered by any
    /// course. Already lowercase because the rows were normalized on load.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.courses
            .iter()
            .flat_map(|course| course.skills_covered.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CourseRow {
    course_name: String,
    #[serde(default)]
    skills_covered: String,
}

fn split_skills(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}
