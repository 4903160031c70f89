use serde::{Deserialize, Serialize};

/// A college and the course slugs it offers (`"btech"`, `"mbbs"`, `"llb"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub courses_offered: Vec<String>,
}

impl College {
    pub fn offers(&self, course: &str) -> bool {
        self.courses_offered.iter().any(|c| c == course)
    }
}
