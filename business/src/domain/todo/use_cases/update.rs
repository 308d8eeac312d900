use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::value_objects::TodoId;

pub struct UpdateTodoParams {
    pub id: TodoId,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[async_trait]
pub trait UpdateTodoUseCase: Send + Sync {
    async fn execute(&self, params: UpdateTodoParams) -> Result<Todo, TodoError>;
}
