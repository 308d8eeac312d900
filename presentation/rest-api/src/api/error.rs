use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint. `error` is a dotted code such as
/// `todo.not_found`, suitable as an i18n key.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self { error: code.into() }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Code returned when a request body cannot be parsed.
pub const INVALID_PAYLOAD: &str = "request.invalid_payload";
