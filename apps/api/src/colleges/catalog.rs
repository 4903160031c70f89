//! Read-only college directory. Seeded by default, optionally replaced at
//! startup from a JSON file (`COLLEGES_FILE`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::college::College;

#[derive(Debug, Clone, Default)]
pub struct CollegeCatalog {
    colleges: Vec<College>,
}

/// One entry of a colleges file. `courses_offered` accepts either a JSON list
/// or a single pipe-separated string such as `"cse|ece|me"`.
#[derive(Debug, Deserialize)]
struct CollegeRecord {
    name: String,
    city: String,
    state: String,
    courses_offered: CourseList,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CourseList {
    List(Vec<String>),
    Piped(String),
}

impl CourseList {
    fn into_slugs(self) -> Vec<String> {
        let raw = match self {
            CourseList::List(items) => items,
            CourseList::Piped(joined) => joined.split('|').map(str::to_string).collect(),
        };
        let mut slugs: Vec<String> = raw
            .iter()
            .map(|c| normalize_course(c))
            .filter(|c| !c.is_empty())
            .collect();
        slugs.dedup();
        slugs
    }
}

pub fn normalize_course(course: &str) -> String {
    course.trim().to_lowercase()
}

impl CollegeCatalog {
    /// Orders colleges by name and numbers them from 1.
    pub fn new(mut colleges: Vec<College>) -> Self {
        colleges.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.city.cmp(&b.city)));
        for (college, id) in colleges.iter_mut().zip(1..) {
            college.id = id;
        }
        Self { colleges }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED_COLLEGES
                .iter()
                .map(|(name, city, state, courses)| College {
                    id: 0,
                    name: name.to_string(),
                    city: city.to_string(),
                    state: state.to_string(),
                    courses_offered: courses.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CollegeRecord> =
            serde_json::from_str(json).context("Colleges file is not a valid JSON list")?;
        let colleges = records
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(|r| College {
                id: 0,
                name: r.name.trim().to_string(),
                city: r.city.trim().to_string(),
                state: r.state.trim().to_string(),
                courses_offered: r.courses_offered.into_slugs(),
            })
            .collect();
        Ok(Self::new(colleges))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read colleges file {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn all(&self) -> &[College] {
        &self.colleges
    }

    /// Colleges offering `course`, or every college when `course` is `None`.
    pub fn filter(&self, course: Option<&str>) -> Vec<&College> {
        match course.map(normalize_course).filter(|c| !c.is_empty()) {
            Some(course) => self.colleges.iter().filter(|c| c.offers(&course)).collect(),
            None => self.colleges.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }
}

const SEED_COLLEGES: &[(&str, &str, &str, &[&str])] = &[
    ("IIT Bombay", "Mumbai", "Maharashtra", &["btech", "cse", "ece", "me", "barch", "bsc"]),
    ("IIT Delhi", "New Delhi", "Delhi", &["btech", "cse", "ece", "me", "bdes"]),
    ("IIT Madras", "Chennai", "Tamil Nadu", &["btech", "cse", "ece", "me", "bsc"]),
    ("NIT Trichy", "Tiruchirappalli", "Tamil Nadu", &["btech", "cse", "ece", "me", "barch"]),
    ("Delhi Technological University", "New Delhi", "Delhi", &["btech", "cse", "ece", "me", "bdes"]),
    ("College of Engineering Pune", "Pune", "Maharashtra", &["btech", "cse", "ece", "me"]),
    ("Jadavpur University", "Kolkata", "West Bengal", &["btech", "cse", "ece", "ba", "bsc", "barch"]),
    ("All India Institute of Medical Sciences", "New Delhi", "Delhi", &["mbbs", "bsc"]),
    ("Maulana Azad Medical College", "New Delhi", "Delhi", &["mbbs"]),
    ("Grant Government Medical College", "Mumbai", "Maharashtra", &["mbbs"]),
    ("Madras Medical College", "Chennai", "Tamil Nadu", &["mbbs", "bpharm"]),
    ("National Law School of India University", "Bengaluru", "Karnataka", &["llb"]),
    ("Government Law College", "Mumbai", "Maharashtra", &["llb"]),
    ("Faculty of Law, University of Delhi", "New Delhi", "Delhi", &["llb"]),
    ("Shri Ram College of Commerce", "New Delhi", "Delhi", &["bcom"]),
    ("Sydenham College of Commerce and Economics", "Mumbai", "Maharashtra", &["bcom", "bba"]),
    ("Loyola College", "Chennai", "Tamil Nadu", &["bcom", "bsc", "ba", "bba"]),
    ("St. Xavier's College", "Kolkata", "West Bengal", &["bcom", "bsc", "ba"]),
    ("Presidency College", "Chennai", "Tamil Nadu", &["bsc", "ba"]),
    ("Miranda House", "New Delhi", "Delhi", &["bsc", "ba"]),
    ("Fergusson College", "Pune", "Maharashtra", &["bsc", "ba", "bcom"]),
    ("Christ University", "Bengaluru", "Karnataka", &["bba", "bcom", "ba", "bsc", "llb", "hm"]),
    ("Sir J.J. College of Architecture", "Mumbai", "Maharashtra", &["barch"]),
    ("School of Planning and Architecture", "New Delhi", "Delhi", &["barch"]),
    ("Regional Institute of Education", "Mysuru", "Karnataka", &["bed", "bsc", "ba"]),
    ("Lady Irwin College", "New Delhi", "Delhi", &["bed", "bsc"]),
    ("Institute of Hotel Management", "Mumbai", "Maharashtra", &["hm"]),
    ("National Institute of Design", "Ahmedabad", "Gujarat", &["bdes"]),
    ("Bombay College of Pharmacy", "Mumbai", "Maharashtra", &["bpharm"]),
    ("Tata Institute of Social Sciences", "Mumbai", "Maharashtra", &["ba", "bsw"]),
];
