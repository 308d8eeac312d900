use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::repository::TodoRepository;
use crate::domain::todo::use_cases::delete::{DeleteTodoParams, DeleteTodoUseCase};

pub struct DeleteTodoUseCaseImpl {
    pub repository: Arc<dyn TodoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteTodoUseCase for DeleteTodoUseCaseImpl {
    async fn execute(&self, params: DeleteTodoParams) -> Result<(), TodoError> {
        self.logger.info(&format!("Deleting todo: {}", params.id));

        if !self.repository.remove(&params.id).await? {
            return Err(TodoError::NotFound);
        }

        self.logger.info(&format!("Todo deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::todo::model::Todo;
    use crate::domain::todo::value_objects::{TodoId, TodoPatch};
    use mockall::mock;

    mock! {
        pub TodoRepo {}

        #[async_trait]
        impl TodoRepository for TodoRepo {
            async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;
            async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, RepositoryError>;
            async fn create(&self, todo: &Todo) -> Result<(), RepositoryError>;
            async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, RepositoryError>;
            async fn remove(&self, id: &TodoId) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_existing_todo() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_remove().times(1).returning(|_| Ok(true));

        let use_case = DeleteTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteTodoParams {
                id: TodoId::from("abc"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_remove().returning(|_| Ok(false));

        let use_case = DeleteTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteTodoParams {
                id: TodoId::from("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), TodoError::NotFound));
    }
}
