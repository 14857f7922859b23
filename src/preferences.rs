//! Persisted language and theme.

use crate::errors::StoreResult;
use crate::storage::Storage;
use schema::{Language, Theme};
use std::str::FromStr;
use tracing::debug;

pub const LANGUAGE_KEY: &str = "pokezone-language";
pub const THEME_KEY: &str = "pokezone-theme";

/// Language implied by the process locale (`LC_ALL`, then `LANG`).
pub fn detect_language() -> Language {
    std::env::var("LC_ALL")
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| std::env::var("LANG").ok())
        .map(|locale| Language::from_locale(&locale))
        .unwrap_or_default()
}

fn read_scalar<V: FromStr>(storage: &impl Storage, key: &str) -> Option<V> {
    let raw = storage.get(key).ok().flatten()?;
    // Values written by older builds were JSON-quoted.
    raw.trim().trim_matches('"').parse().ok()
}

pub struct Preferences<S: Storage> {
    storage: S,
    language: Language,
    theme: Theme,
}

impl<S: Storage> Preferences<S> {
    /// Loads both settings; anything missing or unrecognized falls back to
    /// the detected locale and the light theme.
    pub fn load(storage: S) -> Self {
        Self::load_with_default(storage, detect_language())
    }

    pub fn load_with_default(storage: S, default_language: Language) -> Self {
        let language = read_scalar(&storage, LANGUAGE_KEY).unwrap_or(default_language);
        let theme = read_scalar(&storage, THEME_KEY).unwrap_or_default();
        debug!(%language, %theme, "preferences loaded");
        Self {
            storage,
            language,
            theme,
        }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.storage.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.storage.set(THEME_KEY, theme.as_ref())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
