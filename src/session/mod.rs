//! Reconciliation between the remote collection and the local view.
//!
//! # Data Flow
//! ```text
//! user action
//!     → state.rs Session (validate, mark loading)
//!     → api::TodoClient (one remote call)
//!     → store::TodoStore (apply the echoed result locally)
//!     → view (filter + paginate at the current page)
//! ```
//!
//! # Design Decisions
//! - Remote calls are strictly sequential; `&mut self` on every operation enforces it
//! - A failed remote call leaves local state exactly as it was
//! - Filter changes reset to page 1; deletions do not clamp the page

pub mod progress;
pub mod state;

pub use progress::{NoProgress, Progress};
pub use state::{Session, SessionError, SessionResult, SessionSettings, Submitted};
