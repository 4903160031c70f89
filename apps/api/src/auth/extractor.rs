use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::auth::resolve_session;
use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated caller. Extracting it rejects the request with
/// `Unauthorized` before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub token: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let session = resolve_session(state.accounts.as_ref(), token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser {
            user_id: session.user_id,
            token,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}
