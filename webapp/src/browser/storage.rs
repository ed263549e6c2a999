use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::theme::ThemeStore;

// the theme preference is stored as the bare string "light" or "dark", so
// these go through the raw web_sys::Storage instead of gloo's json encoding
pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// ThemeStore backed by the browser's localStorage
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        LocalThemeStore { key: key.into() }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        get_local_storage(&self.key)
    }

    fn save(&mut self, value: &str) -> anyhow::Result<()> {
        set_local_storage(&self.key, value)
    }
}
