//! Remote collection subsystem.
//!
//! # Data Flow
//! ```text
//! Session operation
//!     → client.rs (build request, tag with X-Request-Id, send)
//!     → reqwest (timeouts) → remote /todos
//!     → types.rs (decode wire records / map failures to ApiError)
//! ```
//!
//! # Design Decisions
//! - The remote shape is fixed: `GET ?_limit=`, `POST /`, `PUT /{id}`, `DELETE /{id}`
//! - Only the list fetch is retried; writes are sent exactly once
//! - Creation dates are a local concern and never cross the wire

pub mod client;
pub mod types;

pub use client::TodoClient;
pub use types::{ApiError, ApiResult, NewTodo, Operation, RemoteTodo};
