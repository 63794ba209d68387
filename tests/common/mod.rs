//! Shared utilities for integration tests: an in-process stand-in for the
//! remote `/todos` collection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use todo_sync::api::RemoteTodo;
use todo_sync::config::RetryConfig;
use todo_sync::resilience::RetryPolicy;
use todo_sync::session::{Progress, SessionSettings};
use todo_sync::{Session, TodoClient};

/// Id the remote hands out for every created record, as JSONPlaceholder does.
pub const CREATED_ID: u64 = 201;

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub request_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub todos: Vec<RemoteTodo>,
    /// Upcoming list fetches answered with 503.
    pub failing_fetches: u32,
    /// Answer every write with 500.
    pub fail_writes: bool,
    pub requests: Vec<Recorded>,
}

#[derive(Debug, Clone, Default)]
pub struct MockRemote {
    pub state: Arc<Mutex<MockState>>,
}

impl MockRemote {
    /// A remote holding `count` tasks titled "task 1", "task 2", ...
    pub fn with_tasks(count: u64) -> Self {
        let todos = (1..=count)
            .map(|id| RemoteTodo {
                user_id: Some((id - 1) / 20 + 1),
                id,
                title: format!("task {id}"),
                completed: id % 3 == 0,
            })
            .collect();
        Self {
            state: Arc::new(Mutex::new(MockState {
                todos,
                ..MockState::default()
            })),
        }
    }

    pub fn fail_fetches(&self, times: u32) {
        self.state.lock().unwrap().failing_fetches = times;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method).count()
    }

    /// Serve on an ephemeral port; returns the collection URL.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/todos", get(list_todos).post(create_todo))
            .route("/todos/{id}", put(update_todo).delete(delete_todo))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{addr}/todos")
    }

    fn record(
        &self,
        method: &'static str,
        path: String,
        query: HashMap<String, String>,
        body: Option<Value>,
        headers: &HeaderMap,
    ) {
        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.state.lock().unwrap().requests.push(Recorded {
            method,
            path,
            query,
            body,
            request_id,
        });
    }
}

async fn list_todos(
    State(remote): State<MockRemote>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    remote.record("GET", "/todos".into(), query.clone(), None, &headers);

    let mut state = remote.state.lock().unwrap();
    if state.failing_fetches > 0 {
        state.failing_fetches -= 1;
        return (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response();
    }
    let limit = query
        .get("_limit")
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    let todos: Vec<RemoteTodo> = state.todos.iter().take(limit).cloned().collect();
    Json(todos).into_response()
}

async fn create_todo(
    State(remote): State<MockRemote>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    remote.record("POST", "/todos".into(), HashMap::new(), Some(body.clone()), &headers);

    if remote.state.lock().unwrap().fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut echoed = body;
    echoed["id"] = json!(CREATED_ID);
    (StatusCode::CREATED, Json(echoed)).into_response()
}

async fn update_todo(
    State(remote): State<MockRemote>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    remote.record("PUT", format!("/todos/{id}"), HashMap::new(), Some(body.clone()), &headers);

    if remote.state.lock().unwrap().fail_writes || id > 200 {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut echoed = body;
    echoed["id"] = json!(id);
    Json(echoed).into_response()
}

async fn delete_todo(
    State(remote): State<MockRemote>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    remote.record("DELETE", format!("/todos/{id}"), HashMap::new(), None, &headers);

    if remote.state.lock().unwrap().fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({})).into_response()
}

/// Records every loading notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    pub events: Arc<Mutex<Vec<bool>>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<bool> {
        self.events.lock().unwrap().clone()
    }
}

impl Progress for RecordingProgress {
    fn loading(&mut self, active: bool) {
        self.events.lock().unwrap().push(active);
    }
}

pub fn fast_retries(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::from_config(&RetryConfig {
        enabled: true,
        max_attempts,
        base_delay_ms: 10,
        max_delay_ms: 50,
    })
}

pub fn settings() -> SessionSettings {
    SessionSettings {
        page_size: 10,
        fetch_limit: 100,
        max_age_ms: 10_000_000_000,
    }
}

/// A session against `base_url` with quick retries and a recording progress hook.
pub fn session(base_url: &str, settings: SessionSettings) -> (Session, RecordingProgress) {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = TodoClient::with_client(http, base_url, fast_retries(3)).unwrap();
    let progress = RecordingProgress::default();
    let session = Session::new(client, settings).with_progress(progress.clone());
    (session, progress)
}
