use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::todo::model::Todo;
use business::domain::todo::repository::TodoRepository;
use business::domain::todo::value_objects::{TodoId, TodoPatch};

/// Process-local todo store keyed by id.
///
/// Guards are never held across an `.await`, so a plain `std` lock is enough
/// on the multi-threaded runtime.
#[derive(Default)]
pub struct TodoRepositoryInMemory {
    todos: RwLock<HashMap<TodoId, Todo>>,
}

impl TodoRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for TodoRepositoryInMemory {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self
            .todos
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        let mut all: Vec<Todo> = todos.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, RepositoryError> {
        let todos = self
            .todos
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(todos.get(id).cloned())
    }

    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let mut todos = self
            .todos
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        match todos.entry(todo.id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicated),
            Entry::Vacant(slot) => {
                slot.insert(todo.clone());
                tracing::debug!(id = %todo.id, "todo stored");
                Ok(())
            }
        }
    }

    async fn update(
        &self,
        id: &TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, RepositoryError> {
        let mut todos = self
            .todos
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(todos.get_mut(id).map(|todo| {
            todo.apply(patch);
            todo.clone()
        }))
    }

    async fn remove(&self, id: &TodoId) -> Result<bool, RepositoryError> {
        let mut todos = self
            .todos
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(todos.remove(id).is_some())
    }
}
