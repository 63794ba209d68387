//! Local task state.
//!
//! # Data Flow
//! ```text
//! Initial load:   RemoteTodo[] → todo.rs (attach synthetic created_at) → list.rs replace_all
//! Create:         echoed RemoteTodo → created_at = now → prepended
//! Update:         echoed title → renamed in place
//! Delete:         id → every matching record removed
//! ```
//!
//! # Design Decisions
//! - The local list is the source of truth for rendering; it is never re-fetched after writes
//! - Order is display order: newest creations first, then fetch order

pub mod list;
pub mod todo;

pub use list::TodoStore;
pub use todo::{synthetic_created_at, Todo};
