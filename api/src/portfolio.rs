use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    education::EducationEntry, experience::ExperienceEntry, personal::PersonalInfo,
    project::Project, skill::Skills,
};

// a top-level field of the data document that could not be used
//
// the page renders every section independently, so one bad field only takes
// down the sections that read it
#[derive(Clone, Debug, PartialEq)]
pub struct SectionFault {
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for SectionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for SectionFault {}

pub type Section<T> = Result<T, SectionFault>;

// the whole data document
//
// this is parsed once after the fetch and never modified afterwards
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub personal_info: Section<PersonalInfo>,
    pub skills: Section<Skills>,
    pub experience: Section<Vec<ExperienceEntry>>,
    pub projects: Section<Vec<Project>>,
    pub education: Section<Vec<EducationEntry>>,
}

impl Portfolio {
    // the root must be a json object, otherwise the document is unusable.
    // each of the top-level fields is then decoded on its own
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(body)?;

        Ok(Self::from_map(root))
    }

    pub fn from_map(mut root: Map<String, Value>) -> Self {
        Portfolio {
            personal_info: section(&mut root, "personal_info"),
            skills: section(&mut root, "skills"),
            experience: section(&mut root, "experience"),
            projects: section(&mut root, "projects"),
            education: section(&mut root, "education"),
        }
    }

    pub fn faults(&self) -> Vec<&SectionFault> {
        [
            self.personal_info.as_ref().err(),
            self.skills.as_ref().err(),
            self.experience.as_ref().err(),
            self.projects.as_ref().err(),
            self.education.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn section<T: DeserializeOwned>(root: &mut Map<String, Value>, field: &'static str) -> Section<T> {
    let value = root.remove(field).ok_or_else(|| SectionFault {
        field,
        reason: String::from("missing from data document"),
    })?;

    serde_json::from_value(value).map_err(|err| SectionFault {
        field,
        reason: err.to_string(),
    })
}
