use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::repository::TodoRepository;
use crate::domain::todo::use_cases::get_all::GetAllTodosUseCase;

pub struct GetAllTodosUseCaseImpl {
    pub repository: Arc<dyn TodoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllTodosUseCase for GetAllTodosUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Todo>, TodoError> {
        self.logger.debug("Getting all todos");
        let todos = self.repository.find_all().await?;
        self.logger
            .debug(&format!("Retrieved {} todos", todos.len()));
        Ok(todos)
    }
}
