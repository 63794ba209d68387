use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "todo-sync")]
#[command(about = "Task list client for a remote /todos collection", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Collection URL, overrides api.base_url
    #[arg(short, long)]
    pub url: Option<String>,

    /// Log level, overrides observability.log_level
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one page of tasks
    List {
        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,
        /// Earliest creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        from: Option<String>,
        /// Latest creation date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        to: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Create a task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Rename a task
    Edit {
        id: u64,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Delete a task
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive session
    Shell,
}
