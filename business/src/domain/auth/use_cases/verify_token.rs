use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::IdentityToken;

pub struct VerifyIdTokenParams {
    /// Raw `Authorization` header value, if the request carried one.
    pub authorization: Option<String>,
}

#[async_trait]
pub trait VerifyIdTokenUseCase: Send + Sync {
    async fn execute(&self, params: VerifyIdTokenParams) -> Result<IdentityToken, AuthError>;
}
