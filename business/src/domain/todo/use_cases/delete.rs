use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::value_objects::TodoId;

pub struct DeleteTodoParams {
    pub id: TodoId,
}

#[async_trait]
pub trait DeleteTodoUseCase: Send + Sync {
    async fn execute(&self, params: DeleteTodoParams) -> Result<(), TodoError>;
}
