use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub technical_skills: Vec<Skill>,
    // older data files carry a list of soft skills.  it is still accepted so
    // those files parse, but nothing renders it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    // any JSON number; out of range values are clamped when displayed
    pub level: f64,
}

impl Skill {
    pub const MAX_LEVEL: f64 = 100.0;

    // proficiency as a percentage, suitable for a progress bar width
    pub fn percent(&self) -> f64 {
        self.level.clamp(0.0, Self::MAX_LEVEL)
    }
}
