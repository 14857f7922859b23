use crate::api::DEFAULT_BASE_URL;
use crate::search::DEFAULT_DEBOUNCE;
use crate::storage::default_data_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const CONFIG_NAME: &str = "pokezone";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Where favorites and preferences live. `None` means the platform data
    /// directory.
    pub data_dir: Option<PathBuf>,
    pub search_debounce_ms: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
            search_debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            user_agent: format!("pokezone/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Reads the user's config file, falling back to defaults.
    pub fn load() -> Self {
        match confy::load(CONFIG_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Applies command-line overrides on top of the loaded file.
    pub fn with_overrides(mut self, base_url: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    /// Resolved data directory; the working directory when the platform has
    /// none.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(".pokezone"))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
