//! Text and date-range filtering.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::store::Todo;

/// Active filter criteria. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive substring of the title.
    pub search: String,
    /// Inclusive lower bound on `created_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub to: Option<DateTime<Utc>>,
}

impl Filter {
    pub fn matches(&self, todo: &Todo) -> bool {
        self.matches_text(todo) && self.matches_dates(todo)
    }

    fn matches_text(&self, todo: &Todo) -> bool {
        self.search.is_empty() || todo.title.to_lowercase().contains(&self.search.to_lowercase())
    }

    fn matches_dates(&self, todo: &Todo) -> bool {
        self.from.map_or(true, |from| todo.created_at >= from)
            && self.to.map_or(true, |to| todo.created_at <= to)
    }

    /// Matching records, in list order.
    pub fn apply<'a>(&self, todos: impl IntoIterator<Item = &'a Todo>) -> Vec<&'a Todo> {
        todos.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct BoundError(pub String);

/// Parse a range bound. A bare date means midnight UTC of that day.
pub fn parse_bound(input: &str) -> Result<DateTime<Utc>, BoundError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BoundError(input.to_string()))
}
