use async_trait::async_trait;

use super::model::IdentityToken;
use super::value_objects::BearerToken;

/// Verifies identity tokens issued by the identity provider.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Returns the decoded claims, or `None` when the token is expired,
    /// malformed, revoked or otherwise unverifiable.
    async fn verify_id_token(&self, token: &BearerToken) -> Option<IdentityToken>;
}
