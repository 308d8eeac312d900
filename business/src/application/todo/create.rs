use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::repository::TodoRepository;
use crate::domain::todo::use_cases::create::{CreateTodoParams, CreateTodoUseCase};
use crate::domain::todo::value_objects::{TodoId, normalize_title};

/// Fresh ids drawn before giving up on a colliding store.
const MAX_ID_ATTEMPTS: usize = 3;

pub struct CreateTodoUseCaseImpl {
    pub repository: Arc<dyn TodoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateTodoUseCase for CreateTodoUseCaseImpl {
    async fn execute(&self, params: CreateTodoParams) -> Result<Todo, TodoError> {
        let title = normalize_title(&params.title)?;
        self.logger.info(&format!("Creating todo: {}", title));

        for _ in 0..MAX_ID_ATTEMPTS {
            let todo = Todo::new(TodoId::generate(), &title)?;
            match self.repository.create(&todo).await {
                Ok(()) => {
                    self.logger.info(&format!("Todo created: {}", todo.id));
                    return Ok(todo);
                }
                Err(RepositoryError::Duplicated) => {
                    self.logger
                        .warn(&format!("Todo id {} already taken, drawing a new one", todo.id));
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.logger.error("Could not allocate a unique todo id");
        Err(TodoError::Repository(RepositoryError::Duplicated))
    }
}
