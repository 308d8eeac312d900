use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Todo;
use super::value_objects::{TodoId, TodoPatch};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, oldest first.
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, RepositoryError>;
    /// Fails with [`RepositoryError::Duplicated`] when the id is already taken.
    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError>;
    /// Returns `None` and leaves the store untouched when the id is unknown.
    async fn update(
        &self,
        id: &TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, RepositoryError>;
    /// Returns whether a todo was removed.
    async fn remove(&self, id: &TodoId) -> Result<bool, RepositoryError>;
}
