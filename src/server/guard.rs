use super::error::ApiError;
use super::state::AppState;
use crate::auth::{Claims, Role, TokenError};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use log::{debug, warn};
use std::sync::Arc;

/// Caller with a valid bearer token
pub struct AuthUser(pub Claims);

/// Caller with a valid bearer token and the merchant role
pub struct MerchantUser(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer"))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Not authorized. Please login.", "NO_TOKEN"))?;

        let claims = state.auth.verify(token).map_err(|e| {
            warn!("Token verification failed: {}", e);
            match e {
                TokenError::Expired => ApiError::unauthorized(e.to_string(), "TOKEN_EXPIRED"),
                TokenError::Invalid => ApiError::unauthorized(e.to_string(), "INVALID_TOKEN"),
                TokenError::Signing(_) => {
                    ApiError::unauthorized("Authentication failed", "AUTH_FAILED")
                }
            }
        })?;

        debug!("Token verified for {} ({})", claims.user_id, claims.role.as_str());
        Ok(AuthUser(claims))
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for MerchantUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if claims.role != Role::Merchant {
            warn!("Merchant route denied for role {}", claims.role.as_str());
            return Err(ApiError::Forbidden { role: claims.role });
        }

        Ok(MerchantUser(claims))
    }
}
