use serde::Deserialize;

use crate::models::DEFAULT_SIMILARITY_THRESHOLD;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation service
    #[serde(default = "default_recommender_url")]
    pub recommender_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Similarity threshold in UI units (0-100) applied to selections that
    /// leave it unset
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,
}

fn default_recommender_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_similarity_threshold() -> u8 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommender_url: default_recommender_url(),
            request_timeout_secs: default_request_timeout_secs(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
