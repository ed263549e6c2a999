use serde::{Deserialize, Serialize};

// everything about the person themselves
//
// the hero, about and contact sections are all fed from this one struct, so a
// problem here faults all three of them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub profile_image: String,
    pub cv_download: String,
    pub about_me: String,
    pub contact: Contact,
    pub social_links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}
