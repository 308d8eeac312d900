use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;

pub struct CreateTodoParams {
    pub title: String,
}

#[async_trait]
pub trait CreateTodoUseCase: Send + Sync {
    async fn execute(&self, params: CreateTodoParams) -> Result<Todo, TodoError>;
}
