//! Ordered in-memory task list.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::api::RemoteTodo;
use crate::store::todo::{synthetic_created_at, Todo};

/// The locally held list, in display order.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a fresh fetch, giving each record a synthetic creation date.
    pub fn replace_all<R: Rng>(
        &mut self,
        remote: Vec<RemoteTodo>,
        now: DateTime<Utc>,
        max_age_ms: u64,
        rng: &mut R,
    ) {
        self.todos = remote
            .into_iter()
            .map(|r| {
                let created_at = synthetic_created_at(now, max_age_ms, rng);
                Todo::from_remote(r, created_at)
            })
            .collect();
    }

    /// Insert a freshly created record at the front.
    pub fn prepend(&mut self, remote: RemoteTodo, created_at: DateTime<Utc>) {
        self.todos.insert(0, Todo::from_remote(remote, created_at));
    }

    /// Set the title of the first record with `id`. Other fields are kept as they are.
    pub fn rename(&mut self, id: u64, title: String) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.title = title;
                true
            }
            None => false,
        }
    }

    /// Drop every record with `id`, returning how many went.
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        before - self.todos.len()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }
}
