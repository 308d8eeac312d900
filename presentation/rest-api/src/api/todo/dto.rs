use std::borrow::Cow;

use poem_openapi::Object;
use poem_openapi::registry::{MetaSchema, MetaSchemaRef};
use poem_openapi::types::{ParseError, ParseFromJSON, ParseResult, ToJSON, Type};
use serde_json::Value;

use business::domain::todo::model::Todo;

/// A string that must arrive as a JSON string. Numbers and booleans are
/// rejected instead of being coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonString(String);

impl JsonString {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Type for JsonString {
    const IS_REQUIRED: bool = true;

    type RawValueType = String;

    type RawElementValueType = String;

    fn name() -> Cow<'static, str> {
        "string".into()
    }

    fn schema_ref() -> MetaSchemaRef {
        MetaSchemaRef::Inline(Box::new(MetaSchema::new("string")))
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.0)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for JsonString {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        match value.unwrap_or_default() {
            Value::String(s) => Ok(Self(s)),
            other => Err(ParseError::expected_type(other)),
        }
    }
}

impl ToJSON for JsonString {
    fn to_json(&self) -> Option<Value> {
        Some(Value::String(self.0.clone()))
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateTodoRequest {
    /// Todo title (cannot be empty)
    pub title: JsonString,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateTodoRequest {
    /// New title
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<JsonString>,
    /// New completion state
    #[oai(skip_serializing_if_is_none)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo unique identifier
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Creation timestamp, ISO 8601 with milliseconds
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            created_at: todo.created_at_iso(),
            id: todo.id.to_string(),
            title: todo.title,
            completed: todo.completed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TodoListResponse {
    pub todos: Vec<TodoResponse>,
}
