//! Wire types and error definitions for the remote collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A task as the remote returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTodo {
    /// Owner; absent on records echoed back from create/update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> NewTodo<'a> {
    /// Submissions always go out as not completed.
    pub fn open(title: &'a str) -> Self {
        Self {
            title,
            completed: false,
        }
    }
}

/// Remote operation, used to label failures and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Fetch => "fetch todos",
            Operation::Add => "add todo",
            Operation::Update => "update todo",
            Operation::Delete => "delete todo",
        })
    }
}

/// Errors that can occur while talking to the remote collection.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured base URL is unusable.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Remote answered with a non-success status.
    #[error("Failed to {op} (HTTP {status})")]
    Status {
        op: Operation,
        status: reqwest::StatusCode,
    },

    /// Connection, timeout or other transport failure.
    #[error("Failed to {op}: {source}")]
    Transport {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON.
    #[error("Failed to {op}: malformed response: {source}")]
    Decode {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Whether repeating the same idempotent request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => crate::resilience::is_retryable_status(*status),
            ApiError::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            ApiError::Client(_) | ApiError::InvalidBaseUrl(_) | ApiError::Decode { .. } => false,
        }
    }
}

/// Result type for remote operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_listing_record() {
        let json = r#"{"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": false}"#;
        let todo: RemoteTodo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.user_id, Some(1));
        assert_eq!(todo.id, 3);
        assert_eq!(todo.title, "fugiat veniam minus");
        assert!(!todo.completed);
    }

    #[test]
    fn test_decodes_echoed_record_without_owner() {
        let json = r#"{"title": "buy milk", "completed": false, "id": 201}"#;
        let todo: RemoteTodo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.user_id, None);
        assert_eq!(todo.id, 201);
    }

    #[test]
    fn test_new_todo_body() {
        let body = serde_json::to_value(NewTodo::open("write report")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "write report", "completed": false}));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            op: Operation::Fetch,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Failed to fetch todos (HTTP 500 Internal Server Error)");
        assert!(err.is_retryable());

        let err = ApiError::Status {
            op: Operation::Delete,
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(err.to_string().starts_with("Failed to delete todo"));
        assert!(!err.is_retryable());
    }
}
