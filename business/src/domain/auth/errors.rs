#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AuthError {
    #[error("auth.not_configured")]
    NotConfigured,
    #[error("auth.missing_token")]
    MissingToken,
    #[error("auth.invalid_token")]
    InvalidToken,
}
