//! Task list client for a remote `/todos` collection.

pub mod api;
pub mod cli;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod session;
pub mod store;
pub mod view;

pub use api::TodoClient;
pub use config::schema::AppConfig;
pub use session::{Session, SessionSettings};
