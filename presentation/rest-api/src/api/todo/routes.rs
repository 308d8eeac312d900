use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::todo::use_cases::create::{CreateTodoParams, CreateTodoUseCase};
use business::domain::todo::use_cases::delete::{DeleteTodoParams, DeleteTodoUseCase};
use business::domain::todo::use_cases::get_all::GetAllTodosUseCase;
use business::domain::todo::use_cases::get_by_id::{GetTodoByIdParams, GetTodoByIdUseCase};
use business::domain::todo::use_cases::update::{UpdateTodoParams, UpdateTodoUseCase};
use business::domain::todo::value_objects::TodoId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::todo::dto::{
    CreateTodoRequest, JsonString, TodoListResponse, TodoResponse, UpdateTodoRequest,
};

pub struct TodoApi {
    create_use_case: Arc<dyn CreateTodoUseCase>,
    get_all_use_case: Arc<dyn GetAllTodosUseCase>,
    get_by_id_use_case: Arc<dyn GetTodoByIdUseCase>,
    update_use_case: Arc<dyn UpdateTodoUseCase>,
    delete_use_case: Arc<dyn DeleteTodoUseCase>,
}

impl TodoApi {
    pub fn new(
        create_use_case: Arc<dyn CreateTodoUseCase>,
        get_all_use_case: Arc<dyn GetAllTodosUseCase>,
        get_by_id_use_case: Arc<dyn GetTodoByIdUseCase>,
        update_use_case: Arc<dyn UpdateTodoUseCase>,
        delete_use_case: Arc<dyn DeleteTodoUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Todo management API
#[OpenApi]
impl TodoApi {
    /// List all todos
    ///
    /// Returns every todo ordered by creation date.
    #[oai(path = "/api/todos", method = "get", tag = "ApiTags::Todos")]
    async fn get_all(&self) -> GetAllTodosResponse {
        match self.get_all_use_case.execute().await {
            Ok(todos) => GetAllTodosResponse::Ok(Json(TodoListResponse {
                todos: todos.into_iter().map(TodoResponse::from).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllTodosResponse::InternalError(json)
            }
        }
    }

    /// Get a todo by ID
    #[oai(path = "/api/todos/:id", method = "get", tag = "ApiTags::Todos")]
    async fn get_by_id(&self, id: Path<String>) -> GetTodoResponse {
        let params = GetTodoByIdParams {
            id: TodoId::from(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(todo) => GetTodoResponse::Ok(Json(todo.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTodoResponse::NotFound(json),
                    _ => GetTodoResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a todo
    ///
    /// The title is trimmed and must not be empty. New todos start incomplete.
    #[oai(path = "/api/todos", method = "post", tag = "ApiTags::Todos")]
    async fn create(&self, body: Json<CreateTodoRequest>) -> CreateTodoResponse {
        let params = CreateTodoParams {
            title: body.0.title.into_inner(),
        };

        match self.create_use_case.execute(params).await {
            Ok(todo) => CreateTodoResponse::Created(Json(todo.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTodoResponse::BadRequest(json),
                    _ => CreateTodoResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a todo
    ///
    /// Changes the title and/or completion state. Absent fields are left as is.
    #[oai(path = "/api/todos/:id", method = "patch", tag = "ApiTags::Todos")]
    async fn update(&self, id: Path<String>, body: Json<UpdateTodoRequest>) -> UpdateTodoResponse {
        let params = UpdateTodoParams {
            id: TodoId::from(id.0),
            title: body.0.title.map(JsonString::into_inner),
            completed: body.0.completed,
        };

        match self.update_use_case.execute(params).await {
            Ok(todo) => UpdateTodoResponse::Ok(Json(todo.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateTodoResponse::BadRequest(json),
                    404 => UpdateTodoResponse::NotFound(json),
                    _ => UpdateTodoResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a todo
    #[oai(path = "/api/todos/:id", method = "delete", tag = "ApiTags::Todos")]
    async fn delete(&self, id: Path<String>) -> DeleteTodoResponse {
        let params = DeleteTodoParams {
            id: TodoId::from(id.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteTodoResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteTodoResponse::NotFound(json),
                    _ => DeleteTodoResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllTodosResponse {
    #[oai(status = 200)]
    Ok(Json<TodoListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTodoResponse {
    #[oai(status = 200)]
    Ok(Json<TodoResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTodoResponse {
    #[oai(status = 201)]
    Created(Json<TodoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateTodoResponse {
    #[oai(status = 200)]
    Ok(Json<TodoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTodoResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use business::domain::errors::RepositoryError;
    use business::domain::todo::errors::TodoError;
    use business::domain::todo::model::Todo;

    mock! {
        CreateUseCase {}
        #[async_trait]
        impl CreateTodoUseCase for CreateUseCase {
            async fn execute(&self, params: CreateTodoParams) -> Result<Todo, TodoError>;
        }
    }

    mock! {
        GetAllUseCase {}
        #[async_trait]
        impl GetAllTodosUseCase for GetAllUseCase {
            async fn execute(&self) -> Result<Vec<Todo>, TodoError>;
        }
    }

    mock! {
        GetByIdUseCase {}
        #[async_trait]
        impl GetTodoByIdUseCase for GetByIdUseCase {
            async fn execute(&self, params: GetTodoByIdParams) -> Result<Todo, TodoError>;
        }
    }

    mock! {
        UpdateUseCase {}
        #[async_trait]
        impl UpdateTodoUseCase for UpdateUseCase {
            async fn execute(&self, params: UpdateTodoParams) -> Result<Todo, TodoError>;
        }
    }

    mock! {
        DeleteUseCase {}
        #[async_trait]
        impl DeleteTodoUseCase for DeleteUseCase {
            async fn execute(&self, params: DeleteTodoParams) -> Result<(), TodoError>;
        }
    }

    fn client(
        get_all: MockGetAllUseCase,
        update: MockUpdateUseCase,
    ) -> TestClient<impl poem::Endpoint> {
        let api = TodoApi::new(
            Arc::new(MockCreateUseCase::new()),
            Arc::new(get_all),
            Arc::new(MockGetByIdUseCase::new()),
            Arc::new(update),
            Arc::new(MockDeleteUseCase::new()),
        );
        TestClient::new(OpenApiService::new(api, "test", "0.0.0"))
    }

    #[tokio::test]
    async fn should_answer_500_when_store_fails() {
        // Arrange
        let mut get_all = MockGetAllUseCase::new();
        get_all
            .expect_execute()
            .returning(|| Err(TodoError::Repository(RepositoryError::Persistence)));
        let client = client(get_all, MockUpdateUseCase::new());

        // Act
        let response = client.get("/api/todos").send().await;

        // Assert
        response.assert_status(poem::http::StatusCode::INTERNAL_SERVER_ERROR);
        response
            .assert_json(serde_json::json!({ "error": "repository.persistence" }))
            .await;
    }

    #[tokio::test]
    async fn should_pass_patch_fields_to_use_case() {
        // Arrange
        let mut update = MockUpdateUseCase::new();
        update
            .expect_execute()
            .withf(|params| {
                params.id.as_str() == "abc"
                    && params.title.is_none()
                    && params.completed == Some(true)
            })
            .times(1)
            .returning(|params| {
                let mut todo = Todo::new(params.id, "Buy milk").unwrap();
                todo.completed = true;
                Ok(todo)
            });
        let client = client(MockGetAllUseCase::new(), update);

        // Act
        let response = client
            .patch("/api/todos/abc")
            .body_json(&serde_json::json!({ "completed": true }))
            .send()
            .await;

        // Assert
        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("id").assert_string("abc");
        body.get("completed").assert_bool(true);
    }
}
