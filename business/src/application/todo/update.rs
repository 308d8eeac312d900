use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::model::Todo;
use crate::domain::todo::repository::TodoRepository;
use crate::domain::todo::use_cases::update::{UpdateTodoParams, UpdateTodoUseCase};
use crate::domain::todo::value_objects::TodoPatch;

pub struct UpdateTodoUseCaseImpl {
    pub repository: Arc<dyn TodoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateTodoUseCase for UpdateTodoUseCaseImpl {
    async fn execute(&self, params: UpdateTodoParams) -> Result<Todo, TodoError> {
        self.logger.info(&format!("Updating todo: {}", params.id));

        let patch = TodoPatch::new(params.title, params.completed)?;
        if patch.is_empty() {
            self.logger
                .debug(&format!("Empty patch for todo {}", params.id));
        }
        let updated = self
            .repository
            .update(&params.id, &patch)
            .await?
            .ok_or(TodoError::NotFound)?;

        self.logger.info(&format!("Todo updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::todo::value_objects::TodoId;
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

    fn existing_todo(id: &TodoId) -> Todo {
        Todo::from_repository(
            id.clone(),
            "Buy milk".to_string(),
            false,
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_toggle_completed() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_update().returning(|id, patch| {
            let mut todo = existing_todo(id);
            todo.apply(patch);
            Ok(Some(todo))
        });

        let use_case = UpdateTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateTodoParams {
                id: TodoId::from("abc"),
                title: None,
                completed: Some(true),
            })
            .await;

        let todo = result.unwrap();
        assert!(todo.completed);
        assert_eq!(todo.title, "Buy milk");
    }

    #[tokio::test]
    async fn should_pass_trimmed_title_to_repository() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo
            .expect_update()
            .withf(|_, patch| patch.title() == Some("Buy oat milk") && patch.completed().is_none())
            .returning(|id, patch| {
                let mut todo = existing_todo(id);
                todo.apply(patch);
                Ok(Some(todo))
            });

        let use_case = UpdateTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateTodoParams {
                id: TodoId::from("abc"),
                title: Some("  Buy oat milk ".to_string()),
                completed: None,
            })
            .await;

        assert_eq!(result.unwrap().title, "Buy oat milk");
    }

    #[tokio::test]
    async fn should_return_not_found_when_todo_does_not_exist() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let use_case = UpdateTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateTodoParams {
                id: TodoId::from("missing"),
                title: None,
                completed: Some(true),
            })
            .await;

        assert!(matches!(result.unwrap_err(), TodoError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_title_empty() {
        let mut mock_repo = MockTodoRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateTodoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateTodoParams {
                id: TodoId::from("abc"),
                title: Some("   ".to_string()),
                completed: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), TodoError::TitleEmpty));
    }
}
