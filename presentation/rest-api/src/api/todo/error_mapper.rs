use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::todo::errors::TodoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TodoError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            TodoError::TitleEmpty => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
