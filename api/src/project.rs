use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub cover_image: String,
    pub short_description: String,
    pub description: String,
    pub features: Vec<String>,
    pub technologies_used: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub media: Vec<MediaItem>,
}

// an external link for a project; the type doubles as the button label
// ("GitHub", "Live Demo", ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

// media types as they appear in the data file
//
// unknown strings are kept rather than rejected so one odd entry does not
// fault the entire projects section
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaKind {
    Screenshot,
    Gif,
    DemoVideo,
    Other(String),
}

impl MediaKind {
    // screenshots and gifs are shown with an img element, everything else
    // with a video element
    pub fn is_still(&self) -> bool {
        matches!(self, MediaKind::Screenshot | MediaKind::Gif)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Screenshot => "screenshot",
            MediaKind::Gif => "gif",
            MediaKind::DemoVideo => "demo_video",
            MediaKind::Other(other) => other,
        }
    }
}

impl From<String> for MediaKind {
    fn from(string: String) -> MediaKind {
        match string.as_str() {
            "screenshot" => MediaKind::Screenshot,
            "gif" => MediaKind::Gif,
            "demo_video" => MediaKind::DemoVideo,
            _ => MediaKind::Other(string),
        }
    }
}

impl From<MediaKind> for String {
    fn from(kind: MediaKind) -> String {
        match kind {
            MediaKind::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
