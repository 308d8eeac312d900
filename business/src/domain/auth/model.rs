use chrono::{DateTime, Utc};

use super::value_objects::UserId;

/// Claims of a verified identity token.
///
/// Produced by a [`TokenVerifier`](super::services::TokenVerifier) and kept
/// only for the duration of the request that presented the token.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityToken {
    pub uid: UserId,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
    pub issuer: String,
    pub audience: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub auth_time: Option<DateTime<Utc>>,
    pub sign_in_provider: Option<String>,
}
