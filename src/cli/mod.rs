//! Terminal front end.
//!
//! # Data Flow
//! ```text
//! argv → args.rs (clap) → one-shot command or shell.rs loop
//!     → session::Session operations
//!     → view::render → stdout
//! errors → "error: <message>" on stderr (shell keeps running)
//! ```

pub mod args;
pub mod progress;
pub mod prompt;
pub mod shell;

pub use args::{Cli, Commands};
pub use progress::StderrProgress;
pub use prompt::{confirm, DELETE_PROMPT};
pub use shell::{parse_command, run_shell, ShellCommand};
