use std::sync::Arc;

use firebase::{FirebaseClientConfig, FirebaseTokenVerifier};
use logger::TracingLogger;
use persistence::todo::repository::TodoRepositoryInMemory;

use business::application::auth::verify_token::VerifyIdTokenUseCaseImpl;
use business::application::todo::create::CreateTodoUseCaseImpl;
use business::application::todo::delete::DeleteTodoUseCaseImpl;
use business::application::todo::get_all::GetAllTodosUseCaseImpl;
use business::application::todo::get_by_id::GetTodoByIdUseCaseImpl;
use business::application::todo::update::UpdateTodoUseCaseImpl;
use business::domain::auth::services::TokenVerifier;
use business::domain::todo::repository::TodoRepository;

use crate::api::auth::routes::AuthApi;
use crate::api::health::routes::HealthApi;
use crate::api::home::routes::HomeApi;
use crate::api::todo::routes::TodoApi;
use crate::config::app_config::AppConfig;
use crate::config::service_config::ServiceConfig;

pub struct DependencyContainer {
    pub home_api: HomeApi,
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub todo_api: TodoApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let verifier = config
            .firebase
            .as_ref()
            .and_then(|firebase| match FirebaseTokenVerifier::new(firebase) {
                Ok(verifier) => Some(Arc::new(verifier) as Arc<dyn TokenVerifier>),
                Err(e) => {
                    tracing::error!("Failed to build Firebase token verifier: {e}");
                    None
                }
            });

        Self::with_token_verifier(&config.service, verifier, config.firebase_client.clone())
    }

    /// Wires every API around the given verifier. `None` leaves protected
    /// routes answering 503.
    pub fn with_token_verifier(
        service: &ServiceConfig,
        verifier: Option<Arc<dyn TokenVerifier>>,
        client_config: Option<FirebaseClientConfig>,
    ) -> Self {
        let todo_logger = Arc::new(TracingLogger::new("todo"));
        let auth_logger = Arc::new(TracingLogger::new("auth"));

        // Infrastructure adapters
        let todo_repository: Arc<dyn TodoRepository> = Arc::new(TodoRepositoryInMemory::new());

        // Todo use cases
        let create_use_case = Arc::new(CreateTodoUseCaseImpl {
            repository: todo_repository.clone(),
            logger: todo_logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllTodosUseCaseImpl {
            repository: todo_repository.clone(),
            logger: todo_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetTodoByIdUseCaseImpl {
            repository: todo_repository.clone(),
            logger: todo_logger.clone(),
        });
        let update_use_case = Arc::new(UpdateTodoUseCaseImpl {
            repository: todo_repository.clone(),
            logger: todo_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteTodoUseCaseImpl {
            repository: todo_repository,
            logger: todo_logger,
        });

        // Auth use cases
        let verify_use_case = Arc::new(VerifyIdTokenUseCaseImpl {
            verifier,
            logger: auth_logger,
        });

        Self {
            home_api: HomeApi::new(service),
            health_api: HealthApi::new(service),
            auth_api: AuthApi::new(verify_use_case, client_config),
            todo_api: TodoApi::new(
                create_use_case,
                get_all_use_case,
                get_by_id_use_case,
                update_use_case,
                delete_use_case,
            ),
        }
    }
}
