//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the task list client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote collection settings.
    pub api: ApiConfig,

    /// Rendering and pagination settings.
    pub view: ViewConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Synthetic creation date settings.
    pub dates: DatesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote collection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection URL (e.g., "https://jsonplaceholder.typicode.com/todos").
    pub base_url: String,

    /// Number of records requested on initial load (`_limit` query).
    pub fetch_limit: u32,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com/todos".to_string(),
            fetch_limit: 100,
            user_agent: concat!("todo-sync/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// View configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Tasks shown per page.
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// Timeout configuration for remote calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Retry configuration. Only the list fetch is retried.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// The remote carries no timestamps, so fetched tasks get a random
/// creation date within `max_age_ms` before load time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatesConfig {
    pub max_age_ms: u64,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            max_age_ms: 10_000_000_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
