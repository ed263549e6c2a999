use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// site configuration
//
// the webapp embeds its site.toml at compile time; anything left out of that
// file falls back to the defaults below
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // relative url of the data document
    pub data_url: String,
    // display name used when the data document cannot be loaded
    pub owner: String,
    // localStorage key holding "light" or "dark"
    pub theme_key: String,
    // animation delay step for the experience and education timelines
    pub timeline_stagger_ms: u32,
    // animation delay step for the project cards
    pub project_stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_url: String::from(api::DATA_URL),
            owner: String::from("Portfolio"),
            theme_key: String::from("theme"),
            timeline_stagger_ms: 150,
            project_stagger_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;
        Ok(config)
    }

    // a broken config file should never keep the page from rendering
    pub fn from_toml_or_default(contents: &str) -> Self {
        match Self::from_toml(contents) {
            Ok(config) => {
                debug!({ config = ?config }, "loaded site config");
                config
            }
            Err(err) => {
                warn!("failed to parse site config, using defaults: {err}");
                SiteConfig::default()
            }
        }
    }
}
