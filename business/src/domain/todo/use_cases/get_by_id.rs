use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::value_objects::TodoId;

pub struct GetTodoByIdParams {
    pub id: TodoId,
}

#[async_trait]
pub trait GetTodoByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetTodoByIdParams) -> Result<Todo, TodoError>;
}
