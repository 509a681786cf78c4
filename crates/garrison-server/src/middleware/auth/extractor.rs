//! Authentication extractors for handlers.

use crate::error::ApiError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use garrison_core::Principal;

/// Extractor for an authenticated principal (required).
pub struct Auth(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Auth)
            .ok_or(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use garrison_core::{Role, UserId};

    #[tokio::test]
    async fn test_auth_extractor_success() {
        let principal = Principal::new(UserId::new(), "adm", Role::Admin);

        let req = Request::new(());
        let (mut parts, _) = req.into_parts();
        parts.extensions.insert(principal.clone());

        let Auth(extracted) = Auth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.id, principal.id);
    }

    #[tokio::test]
    async fn test_auth_extractor_missing() {
        let req = Request::new(());
        let (mut parts, _) = req.into_parts();

        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

}
