#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the storefront client and session, loaded from the
/// environment by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the storefront REST backend, e.g. `https://api.example.com`.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after the first failure for transient HTTP errors.
    /// `0` disables retries, which keeps the catalog load single-shot.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Products shown per collection page.
    pub page_size: usize,
    /// Quiet window after the last filter change before recomputing.
    pub debounce_ms: u64,
    /// Delay before swapping recomputed results into the visible list; drives
    /// the loading-indicator transition and has no semantic effect.
    pub reveal_delay_ms: u64,
}
