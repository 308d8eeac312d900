use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;

#[async_trait]
pub trait GetAllTodosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Todo>, TodoError>;
}
