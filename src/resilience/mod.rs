//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Remote call:
//!     → reqwest client enforces connect/request timeouts
//!     → On failure: retries.rs (check if retryable, retry with backoff)
//!     → backoff.rs (exponential delay with jitter)
//! ```
//!
//! # Design Decisions
//! - Retries only for idempotent requests (the list fetch)
//! - Jittered backoff prevents thundering herd

pub mod backoff;
pub mod retries;

pub use backoff::calculate_backoff;
pub use retries::{is_retryable_status, RetryPolicy};
