use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Client configuration: where the backend lives and how to talk to it.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the SmartSpend REST API, without a trailing slash.
    pub api_base_url: String,

    /// Session token for the per-user endpoints (expenses, incomes).
    pub token: Option<String>,

    /// How many records the dashboard lists per section.
    pub recent_limit: usize,

    /// Per-request timeout applied to the HTTP client.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            token: None,
            recent_limit: 3,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the values make sense before building a client from them.
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "api_base_url '{}' must start with http:// or https://",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}
