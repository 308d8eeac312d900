use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::repository::TodoRepository;
use crate::domain::todo::use_cases::get_by_id::{GetTodoByIdParams, GetTodoByIdUseCase};

pub struct GetTodoByIdUseCaseImpl {
    pub repository: Arc<dyn TodoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTodoByIdUseCase for GetTodoByIdUseCaseImpl {
    async fn execute(&self, params: GetTodoByIdParams) -> Result<Todo, TodoError> {
        self.logger.debug(&format!("Getting todo: {}", params.id));

        self.repository
            .find_by_id(&params.id)
            .await?
            .ok_or(TodoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::todo::value_objects::{TodoId, TodoPatch};
    use mockall::mock;
    use mockall::predicate::eq;

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
    async fn should_return_todo_when_found() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(TodoId::from("abc")))
            .returning(|id| {
                Ok(Some(Todo::from_repository(
                    id.clone(),
                    "Buy milk".to_string(),
                    false,
                    chrono::Utc::now(),
                )))
            });

        let use_case = GetTodoByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTodoByIdParams {
                id: TodoId::from("abc"),
            })
            .await;

        assert_eq!(result.unwrap().title, "Buy milk");
    }

    #[tokio::test]
    async fn should_return_not_found_when_todo_does_not_exist() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetTodoByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTodoByIdParams {
                id: TodoId::from("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), TodoError::NotFound));
    }
}
