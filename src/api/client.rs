//! HTTP client for the remote task collection.
//!
//! # Responsibilities
//! - Issue list/create/update/delete calls against the collection URL
//! - Apply connect and request timeouts
//! - Retry the list fetch on transient failures

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::types::{ApiError, ApiResult, NewTodo, Operation, RemoteTodo};
use crate::config::AppConfig;
use crate::resilience::RetryPolicy;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client bound to one remote collection.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: Client,
    /// Collection URL without a trailing slash.
    base_url: String,
    retry: RetryPolicy,
}

impl TodoClient {
    /// Create a client from validated configuration.
    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(ApiError::Client)?;

        Self::with_client(client, &config.api.base_url, RetryPolicy::from_config(&config.retries))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base_url: &str, retry: RetryPolicy) -> ApiResult<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch up to `limit` tasks, retrying transient failures.
    pub async fn fetch_all(&self, limit: u32) -> ApiResult<Vec<RemoteTodo>> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(limit).await {
                Ok(todos) => {
                    tracing::info!(count = todos.len(), attempt, "Fetched todos");
                    return Ok(todos);
                }
                Err(e) if e.is_retryable() => match self.retry.next_delay(attempt) {
                    Some(delay) => {
                        tracing::warn!(
                            error = %e,
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "Fetch failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    None => return Err(e),
                },
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, limit: u32) -> ApiResult<Vec<RemoteTodo>> {
        let request = self.client.get(&self.base_url).query(&[("_limit", limit)]);
        let response = self.send(Operation::Fetch, request).await?;
        decode(Operation::Fetch, response).await
    }

    /// Create a task; returns the record the remote echoes back.
    pub async fn create(&self, title: &str) -> ApiResult<RemoteTodo> {
        let request = self.client.post(&self.base_url).json(&NewTodo::open(title));
        let response = self.send(Operation::Add, request).await?;
        decode(Operation::Add, response).await
    }

    /// Replace a task's title; returns the record the remote echoes back.
    pub async fn update(&self, id: u64, title: &str) -> ApiResult<RemoteTodo> {
        let request = self.client.put(self.item_url(id)).json(&NewTodo::open(title));
        let response = self.send(Operation::Update, request).await?;
        decode(Operation::Update, response).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        let request = self.client.delete(self.item_url(id));
        self.send(Operation::Delete, request).await?;
        Ok(())
    }

    async fn send(&self, op: Operation, request: RequestBuilder) -> ApiResult<Response> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let result = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(source) => {
                tracing::warn!(
                    request_id = %request_id,
                    op = %op,
                    error = %source,
                    "Remote call failed"
                );
                return Err(ApiError::Transport { op, source });
            }
        };

        let status = response.status();
        tracing::debug!(
            request_id = %request_id,
            op = %op,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Remote call finished"
        );

        if !status.is_success() {
            return Err(ApiError::Status { op, status });
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(op: Operation, response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode { op, source })
}
