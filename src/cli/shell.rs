//! Interactive session loop.
//!
//! One `Session` lives for the whole loop, so the local list, filter, page
//! and edit target persist between commands the same way they would in a
//! page that stays open.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::cli::prompt::{confirm, DELETE_PROMPT};
use crate::session::{Session, SessionError, Submitted};
use crate::view::{parse_bound, render, BoundError};

pub const HELP: &str = "\
Commands:
  list                 show the current page
  search [TEXT]        filter titles (no text clears)
  from [DATE]          earliest creation date (no date clears)
  to [DATE]            latest creation date (no date clears)
  page N               jump to page N
  add TEXT             submit: create a task, or save the edit in progress
  edit ID              start editing a task
  cancel               stop editing
  delete ID            delete a task (asks first)
  reload               fetch the list again
  help                 show this text
  quit                 leave
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    Search(String),
    From(Option<String>),
    To(Option<String>),
    Page(usize),
    Submit(String),
    Edit(u64),
    Cancel,
    Delete(u64),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    Missing { command: &'static str, what: &'static str },

    #[error("'{value}' is not a valid {what}")]
    Invalid { value: String, what: &'static str },
}

fn number<T: std::str::FromStr>(
    command: &'static str,
    what: &'static str,
    arg: &str,
) -> Result<T, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::Missing { command, what });
    }
    arg.parse().map_err(|_| ParseError::Invalid {
        value: arg.to_string(),
        what,
    })
}

fn optional(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

/// Parse one input line. Text arguments keep their inner spacing.
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "list" | "ls" => Ok(ShellCommand::List),
        "search" => Ok(ShellCommand::Search(rest.to_string())),
        "from" => Ok(ShellCommand::From(optional(rest))),
        "to" => Ok(ShellCommand::To(optional(rest))),
        "page" => number("page", "page number", rest).map(ShellCommand::Page),
        "add" | "submit" => {
            if rest.is_empty() {
                Err(ParseError::Missing {
                    command: "add",
                    what: "a title",
                })
            } else {
                Ok(ShellCommand::Submit(rest.to_string()))
            }
        }
        "edit" => number("edit", "task id", rest).map(ShellCommand::Edit),
        "cancel" => Ok(ShellCommand::Cancel),
        "delete" | "rm" => number("delete", "task id", rest).map(ShellCommand::Delete),
        "reload" => Ok(ShellCommand::Reload),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Why a single command did not complete. Only `Io` ends the loop.
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Date(#[from] BoundError),
}

enum Flow {
    Continue,
    Quit,
}

fn parse_optional_bound(value: Option<String>) -> Result<Option<chrono::DateTime<chrono::Utc>>, BoundError> {
    value.as_deref().map(parse_bound).transpose()
}

fn prompt_text(session: &Session) -> String {
    match session.editing() {
        Some(id) => format!("edit #{}> ", id),
        None => "todo> ".to_string(),
    }
}

/// Run the loop until `quit` or end of input. Load failures are reported, not fatal.
pub async fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if let Err(e) = session.load().await {
        tracing::error!(error = %e, "Initial load failed");
        writeln!(output, "error: {}", e)?;
    }
    write!(output, "{}", render(&session.view()))?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt_text(session))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match step(session, &line, input, output).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(StepError::Io(e)) => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                writeln!(output, "error: {}", e)?;
            }
        }
    }
}

async fn step<R: BufRead, W: Write>(
    session: &mut Session,
    line: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Flow, StepError> {
    match parse_command(line)? {
        ShellCommand::Empty => return Ok(Flow::Continue),
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Help => {
            write!(output, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        ShellCommand::List => {}
        ShellCommand::Search(text) => session.set_search(text),
        ShellCommand::From(value) => session.set_from(parse_optional_bound(value)?),
        ShellCommand::To(value) => session.set_to(parse_optional_bound(value)?),
        ShellCommand::Page(page) => session.go_to_page(page)?,
        ShellCommand::Submit(text) => match session.submit(&text).await? {
            Submitted::Created { id } => writeln!(output, "Created task #{}", id)?,
            Submitted::Updated { id } => writeln!(output, "Updated task #{}", id)?,
            Submitted::Ignored => return Ok(Flow::Continue),
        },
        ShellCommand::Edit(id) => {
            let title = session.begin_edit(id)?;
            writeln!(output, "Editing #{}: {}", id, title)?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Cancel => {
            session.cancel_edit();
            return Ok(Flow::Continue);
        }
        ShellCommand::Delete(id) => {
            if !confirm(DELETE_PROMPT, input, output)? {
                return Ok(Flow::Continue);
            }
            session.delete(id).await?;
            writeln!(output, "Deleted task #{}", id)?;
        }
        ShellCommand::Reload => session.load().await?,
    }

    write!(output, "{}", render(&session.view()))?;
    Ok(Flow::Continue)
}
