//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! api / session / cli
//!     → tracing events with structured fields (request_id, op, status, id)
//!     → logging.rs subscriber (EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so rendered task lists on stdout stay clean
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
