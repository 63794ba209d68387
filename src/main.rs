//! todo-sync
//!
//! Command-line client that keeps a filtered, paginated view of a remote
//! task collection in sync with local edits.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ cli::args ──▶ one-shot command ─┐
//!                    └───▶ cli::shell loop ──┤
//!                                            ▼
//!                                   session::Session ──▶ api::TodoClient ──▶ remote /todos
//!                                       │       │
//!                                       ▼       ▼
//!                             store::TodoStore  view (filter → paginate → render) ──▶ stdout
//! ```

use std::io::{self, Write};

use clap::Parser;

use todo_sync::cli::{confirm, run_shell, Cli, Commands, StderrProgress, DELETE_PROMPT};
use todo_sync::config::{load_or_default, validate_config, ConfigError};
use todo_sync::observability::init_logging;
use todo_sync::session::Submitted;
use todo_sync::view::{parse_bound, render};
use todo_sync::{Session, SessionSettings, TodoClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability.log_level);

    tracing::info!(
        base_url = %config.api.base_url,
        page_size = config.view.page_size,
        fetch_limit = config.api.fetch_limit,
        "Configuration loaded"
    );

    let client = TodoClient::from_config(&config)?;
    let mut session =
        Session::new(client, SessionSettings::from_config(&config)).with_progress(StderrProgress::new());

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List { search, from, to, page } => {
            session.load().await?;
            if let Some(search) = search {
                session.set_search(search);
            }
            if let Some(from) = from {
                session.set_from(Some(parse_bound(&from)?));
            }
            if let Some(to) = to {
                session.set_to(Some(parse_bound(&to)?));
            }
            if page != 1 {
                session.go_to_page(page)?;
            }
            write!(stdout, "{}", render(&session.view()))?;
        }
        Commands::Add { title } => {
            session.load().await?;
            report(&mut stdout, session.submit(&title.join(" ")).await?)?;
            write!(stdout, "{}", render(&session.view()))?;
        }
        Commands::Edit { id, title } => {
            session.load().await?;
            session.begin_edit(id)?;
            report(&mut stdout, session.submit(&title.join(" ")).await?)?;
            write!(stdout, "{}", render(&session.view()))?;
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm(DELETE_PROMPT, &mut io::stdin().lock(), &mut stdout)? {
                return Ok(());
            }
            session.load().await?;
            session.delete(id).await?;
            writeln!(stdout, "Deleted task #{}", id)?;
            write!(stdout, "{}", render(&session.view()))?;
        }
        Commands::Shell => {
            run_shell(&mut session, &mut io::stdin().lock(), &mut stdout).await?;
        }
    }

    Ok(())
}

fn report(out: &mut impl Write, outcome: Submitted) -> io::Result<()> {
    match outcome {
        Submitted::Created { id } => writeln!(out, "Created task #{}", id),
        Submitted::Updated { id } => writeln!(out, "Updated task #{}", id),
        Submitted::Ignored => writeln!(out, "Nothing to submit"),
    }
}
