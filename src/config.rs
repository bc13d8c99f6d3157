//! Board Configuration
//!
//! Optional JSON embedded in the host page:
//! `<script type="application/json" id="list-board-config">{ ... }</script>`.
//! Every field has a default. The board itself always starts from the canonical seed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::models::canonical_seed;

/// Element id the host page uses for the config script
pub const CONFIG_ELEMENT_ID: &str = "list-board-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Containers whose items get an inline rename input
    pub renamable_containers: Vec<u32>,
    /// Hide the success banner after this many milliseconds (None = keep until reset)
    pub banner_timeout_ms: Option<u32>,
    /// trace | debug | info | warn | error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            renamable_containers: vec![2],
            banner_timeout_ms: None,
            log_level: "info".to_string(),
        }
    }
}

/// Config errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    UnknownContainer(u32),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config JSON: {}", msg),
            ConfigError::UnknownContainer(id) => write!(f, "Renamable container {} does not exist", id),
            ConfigError::InvalidLogLevel(level) => write!(f, "Invalid log level: {}", level),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config script from the current document
    /// Returns Ok(None) when the page carries no config
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).map(Some),
            _ => Ok(None),
        }
    }

    /// Renamable ids must name seed containers; the log level must parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seed = canonical_seed();
        if let Some(id) = self
            .renamable_containers
            .iter()
            .find(|id| !seed.iter().any(|c| c.id == **id))
        {
            return Err(ConfigError::UnknownContainer(*id));
        }

        Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn max_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn is_renamable(&self, container_id: u32) -> bool {
        self.renamable_containers.contains(&container_id)
    }
}
