//! Session state: the local list plus filter, page and edit target.

use chrono::Utc;
use thiserror::Error;

use crate::api::{ApiError, TodoClient};
use crate::config::AppConfig;
use crate::session::progress::{NoProgress, Progress};
use crate::store::{Todo, TodoStore};
use crate::view::{paginate, paginate::page_count, Filter, Page};

/// Errors surfaced to the user by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no task with id {0}")]
    UnknownTodo(u64),

    #[error("page {page} is out of range (1..={page_count})")]
    PageOutOfRange { page: usize, page_count: usize },
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Outcome of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Blank input; nothing was sent.
    Ignored,
    Created { id: u64 },
    Updated { id: u64 },
}

/// Sizing knobs taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub page_size: usize,
    pub fetch_limit: u32,
    pub max_age_ms: u64,
}

impl SessionSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.view.page_size,
            fetch_limit: config.api.fetch_limit,
            max_age_ms: config.dates.max_age_ms,
        }
    }
}

/// One user's view of the remote collection.
pub struct Session {
    client: TodoClient,
    store: TodoStore,
    filter: Filter,
    current_page: usize,
    editing: Option<u64>,
    settings: SessionSettings,
    progress: Box<dyn Progress>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.client.base_url())
            .field("todos", &self.store.len())
            .field("filter", &self.filter)
            .field("current_page", &self.current_page)
            .field("editing", &self.editing)
            .finish()
    }
}

impl Session {
    pub fn new(client: TodoClient, settings: SessionSettings) -> Self {
        Self {
            client,
            store: TodoStore::new(),
            filter: Filter::default(),
            current_page: 1,
            editing: None,
            settings,
            progress: Box::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: impl Progress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Replace the local list with a fresh fetch.
    pub async fn load(&mut self) -> SessionResult<()> {
        self.progress.loading(true);
        let result = self.client.fetch_all(self.settings.fetch_limit).await;
        self.progress.loading(false);

        let remote = result?;
        self.store.replace_all(
            remote,
            Utc::now(),
            self.settings.max_age_ms,
            &mut rand::thread_rng(),
        );
        tracing::debug!(count = self.store.len(), "Local list replaced");
        Ok(())
    }

    /// The current page of the filtered list.
    pub fn view(&self) -> Page<'_> {
        paginate(
            self.filter.apply(self.store.iter()),
            self.current_page,
            self.settings.page_size,
        )
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.current_page = 1;
    }

    pub fn set_from(&mut self, from: Option<chrono::DateTime<Utc>>) {
        self.filter.from = from;
        self.current_page = 1;
    }

    pub fn set_to(&mut self, to: Option<chrono::DateTime<Utc>>) {
        self.filter.to = to;
        self.current_page = 1;
    }

    /// Jump to a page of the filtered list.
    pub fn go_to_page(&mut self, page: usize) -> SessionResult<()> {
        let total = self.filter.apply(self.store.iter()).len();
        let page_count = page_count(total, self.settings.page_size);
        if page == 0 || page > page_count {
            return Err(SessionError::PageOutOfRange { page, page_count });
        }
        self.current_page = page;
        Ok(())
    }

    /// Make `id` the target of the next submission. Returns its current title.
    pub fn begin_edit(&mut self, id: u64) -> SessionResult<&str> {
        let todo = self.store.get(id).ok_or(SessionError::UnknownTodo(id))?;
        self.editing = Some(id);
        Ok(&todo.title)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Create a task, or update the one being edited.
    pub async fn submit(&mut self, text: &str) -> SessionResult<Submitted> {
        let title = text.trim();
        if title.is_empty() {
            return Ok(Submitted::Ignored);
        }

        match self.editing {
            Some(id) => {
                self.progress.loading(true);
                let result = self.client.update(id, title).await;
                self.progress.loading(false);

                let updated = result?;
                if !self.store.rename(id, updated.title) {
                    tracing::warn!(id, "Edited task no longer held locally");
                }
                self.editing = None;
                tracing::info!(id, "Task updated");
                Ok(Submitted::Updated { id })
            }
            None => {
                self.progress.loading(true);
                let result = self.client.create(title).await;
                self.progress.loading(false);

                let created = result?;
                let id = created.id;
                self.store.prepend(created, Utc::now());
                self.current_page = 1;
                tracing::info!(id, "Task created");
                Ok(Submitted::Created { id })
            }
        }
    }

    /// Delete a task remotely, then locally.
    pub async fn delete(&mut self, id: u64) -> SessionResult<()> {
        self.progress.loading(true);
        let result = self.client.delete(id).await;
        self.progress.loading(false);
        result?;

        let removed = self.store.remove(id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        tracing::info!(id, removed, "Task deleted");
        Ok(())
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn todos(&self) -> &[Todo] {
        self.store.as_slice()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.store.get(id)
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut TodoStore {
        &mut self.store
    }
}
