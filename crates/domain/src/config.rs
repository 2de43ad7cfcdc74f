//! Client configuration

use serde::{Deserialize, Serialize};

/// Connection settings for a Jenkins server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JenkinsConfig {
    /// Base URL of the server (e.g. "https://ci.example.com")
    pub base_url: String,
    /// Username for HTTP basic auth; anonymous access when unset
    pub username: Option<String>,
    /// API token paired with the username
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for JenkinsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            username: None,
            api_token: None,
            timeout_secs: 30,
        }
    }
}
