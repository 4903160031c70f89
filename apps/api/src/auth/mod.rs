//! Token-session authentication: bcrypt password hashes and random UUID bearer
//! tokens with an expiry. Resolves a request to a user id for the quiz pipeline.

pub mod extractor;
pub mod handlers;
pub mod store;

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::auth::store::AccountStore;
use crate::errors::AppError;
use crate::models::user::Session;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("bcrypt hash failed: {e}")))
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password check task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("bcrypt verify failed: {e}")))
}

/// Creates and stores a new session for `user_id`.
pub async fn issue_session(
    store: &dyn AccountStore,
    user_id: Uuid,
    ttl_days: i64,
) -> Result<Session, AppError> {
    let now = Utc::now();
    let session = Session {
        token: Uuid::new_v4(),
        user_id,
        expires_at: now + Duration::days(ttl_days),
        created_at: now,
    };
    store.create_session(session.clone()).await?;
    Ok(session)
}

/// Looks up a live session. Expired sessions are deleted and reported as absent.
pub async fn resolve_session(
    store: &dyn AccountStore,
    token: Uuid,
) -> Result<Option<Session>, AppError> {
    let Some(session) = store.session_by_token(token).await? else {
        return Ok(None);
    };
    if session.is_expired(Utc::now()) {
        debug!("Session for user {} expired, removing", session.user_id);
        store.delete_session(token).await?;
        return Ok(None);
    }
    Ok(Some(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryAccountStore;

    #[tokio::test]
    async fn test_issued_session_resolves() {
        let store = MemoryAccountStore::new();
        let user = Uuid::new_v4();
        let session = issue_session(&store, user, 7).await.unwrap();

        let resolved = resolve_session(&store, session.token).await.unwrap();
        assert_eq!(resolved.map(|s| s.user_id), Some(user));
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let store = MemoryAccountStore::new();
        let token = Uuid::new_v4();
        store
            .create_session(Session {
                token,
                user_id: Uuid::new_v4(),
                expires_at: Utc::now() - Duration::minutes(1),
                created_at: Utc::now() - Duration::days(8),
            })
            .await
            .unwrap();

        assert!(resolve_session(&store, token).await.unwrap().is_none());
        assert!(store.session_by_token(token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_password_round_trip() {
        let hash = hash_password("hunter22".to_string(), 4).await.unwrap();
        assert!(verify_password("hunter22".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("hunter23".to_string(), hash).await.unwrap());
    }
}
