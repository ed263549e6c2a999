use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// class added to the document root while the light theme is active; the
// stylesheet treats its absence as dark
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // only the literal "light" selects the light theme; anything else that
    // might be sitting in storage means dark
    pub fn from_stored(stored: Option<&str>) -> Theme {
        match stored {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    // font awesome glyph for the toggle button
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-sun",
            Theme::Dark => "fa-moon",
        }
    }
}

// durable storage for the theme choice
//
// the browser implementation lives in the webapp; tests use an in-memory one
pub trait ThemeStore {
    fn load(&self) -> anyhow::Result<Option<String>>;

    fn save(&mut self, value: &str) -> anyhow::Result<()>;
}

// ThemeController
//
// owns the current theme and its storage.  applying the theme to the document
// is left to whoever renders it, driven off theme()
#[derive(Debug)]
pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    // read the saved preference, degrading to dark if storage is unusable.
    // an absent or unrecognised value is replaced by the theme in effect
    pub fn restore(mut store: S) -> Self {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(err) => {
                warn!("failed to read theme preference: {err}");
                return ThemeController { store, theme: Theme::default() };
            }
        };

        let theme = Theme::from_stored(stored.as_deref());
        debug!("restored {} theme", theme.as_str());

        if stored.as_deref() != Some(theme.as_str()) {
            if let Err(err) = store.save(theme.as_str()) {
                warn!("failed to save theme preference: {err}");
            }
        }

        ThemeController { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // flip the theme and persist the new choice.  a failed write still
    // switches the theme for this page view
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        if let Err(err) = self.store.save(self.theme.as_str()) {
            warn!("failed to save theme preference: {err}");
        }

        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
