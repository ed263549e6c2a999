use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_range: String,
    pub description_points: Vec<String>,
}

impl ExperienceEntry {
    // "Company - Location", as shown under the job title
    pub fn employer_line(&self) -> String {
        format!("{} - {}", self.company, self.location)
    }
}
