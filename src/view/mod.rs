//! Filtered, paginated presentation of the local list.
//!
//! # Data Flow
//! ```text
//! TodoStore
//!     → filter.rs (title substring, created_at range)
//!     → paginate.rs (1-based page slice + page count)
//!     → render.rs (terminal text)
//! ```

pub mod filter;
pub mod paginate;
pub mod render;

pub use filter::{parse_bound, BoundError, Filter};
pub use paginate::{paginate, Page};
pub use render::render;
