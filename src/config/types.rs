use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Connection settings for the remote employee-records service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the service (e.g., "https://records.example.com/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Customer identifier sent as a header on every request.
    #[serde(default)]
    pub customer_id: String,
    /// Shared API key sent as a header on every request. May be empty in
    /// the file; the operator is then prompted once and the key persisted.
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            customer_id: String::new(),
            api_key: String::new(),
        }
    }
}

impl ApiSettings {
    /// Whether a non-empty API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
