use chrono::{Datelike, Local};

pub mod config;
pub mod contact;
pub mod detail;
pub mod layout;
pub mod nav;
pub mod overlay;
pub mod page;
pub mod theme;

// shown in the footer copyright line
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use api::{
        Portfolio,
        project::{MediaItem, MediaKind, Project, ProjectLink},
    };
    use serde_json::{Value, json};

    pub fn document() -> Value {
        json!({
            "personal_info": {
                "name": "Ada Example",
                "title": "Systems Engineer",
                "profile_image": "images/profile.jpg",
                "cv_download": "files/cv.pdf",
                "about_me": "I build things.",
                "contact": { "phone": "+1 555 0100", "email": "ada@example.com" },
                "social_links": [
                    { "platform": "GitHub", "url": "https://github.com/ada" },
                    { "platform": "Mastodon", "url": "https://example.social/@ada" }
                ]
            },
            "skills": {
                "technical_skills": [
                    { "name": "Rust", "level": 90 },
                    { "name": "SQL", "level": 75 },
                    { "name": "Go", "level": 60 }
                ]
            },
            "experience": [
                {
                    "title": "Engineer",
                    "company": "Initech",
                    "location": "Remote",
                    "date_range": "2021 - Present",
                    "description_points": ["Shipped things"]
                },
                {
                    "title": "Intern",
                    "company": "Globex",
                    "location": "Springfield",
                    "date_range": "2020",
                    "description_points": []
                }
            ],
            "projects": [project("Tracker", 2), project("Notes", 0)],
            "education": [
                { "degree": "BSc", "institution": "State University", "date_range": "2015 - 2019" }
            ]
        })
    }

    pub fn portfolio() -> Portfolio {
        Portfolio::from_json(&document().to_string()).unwrap()
    }

    fn project(name: &str, extras: usize) -> Value {
        serde_json::to_value(sample_project(name, extras)).unwrap()
    }

    // a project with `extras` entries in each of its lists
    pub fn sample_project(name: &str, extras: usize) -> Project {
        Project {
            name: name.to_owned(),
            cover_image: format!("images/{name}.png"),
            short_description: format!("{name} in short"),
            description: format!("{name} in detail"),
            features: (0..extras).map(|i| format!("{name} feature {i}")).collect(),
            technologies_used: (0..extras).map(|i| format!("{name} tech {i}")).collect(),
            links: (0..extras)
                .map(|i| ProjectLink {
                    kind: format!("Link {i}"),
                    url: format!("https://example.com/{name}/{i}"),
                })
                .collect(),
            media: (0..extras)
                .map(|i| MediaItem {
                    kind: if i % 2 == 0 {
                        MediaKind::Screenshot
                    } else {
                        MediaKind::DemoVideo
                    },
                    url: format!("media/{name}/{i}"),
                })
                .collect(),
        }
    }
}
