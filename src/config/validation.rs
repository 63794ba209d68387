//! Configuration validation.
//!
//! Serde handles syntax; this checks value ranges and the base URL.
//! Returns all validation errors, not just the first.

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Upper bound for `dates.max_age_ms`: 5000 years.
pub const MAX_AGE_LIMIT_MS: u64 = 5_000 * 365 * 24 * 60 * 60 * 1000;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("api.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("retries.base_delay_ms ({base}) exceeds retries.max_delay_ms ({max})")]
    DelayOrder { base: u64, max: u64 },

    #[error("dates.max_age_ms ({0}) exceeds the limit of {limit} ms", limit = MAX_AGE_LIMIT_MS)]
    MaxAgeTooLarge(u64),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.api.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(config.api.base_url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.api.fetch_limit == 0 {
        errors.push(ValidationError::Zero("api.fetch_limit"));
    }
    if config.view.page_size == 0 {
        errors.push(ValidationError::Zero("view.page_size"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::Zero("retries.max_attempts"));
    }
    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(ValidationError::DelayOrder {
            base: config.retries.base_delay_ms,
            max: config.retries.max_delay_ms,
        });
    }
    if config.dates.max_age_ms > MAX_AGE_LIMIT_MS {
        errors.push(ValidationError::MaxAgeTooLarge(config.dates.max_age_ms));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
