// font awesome classes for the social link icons
pub const GITHUB_ICON: &str = "fab fa-github";
pub const LINKEDIN_ICON: &str = "fab fa-linkedin";
pub const GENERIC_LINK_ICON: &str = "fas fa-link";

pub fn social_icon(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "github" => GITHUB_ICON,
        "linkedin" => LINKEDIN_ICON,
        _ => GENERIC_LINK_ICON,
    }
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}
