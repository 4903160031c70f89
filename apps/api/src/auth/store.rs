use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{Session, User};

/// Users and their bearer sessions.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fails with `Conflict` when the e-mail is already registered.
    async fn create_user(&self, user: User) -> Result<User, AppError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn create_session(&self, session: Session) -> Result<(), AppError>;
    async fn session_by_token(&self, token: Uuid) -> Result<Option<Session>, AppError>;
    async fn delete_session(&self, token: Uuid) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryAccountStore {
    users: RwLock<HashMap<Uuid, User>>,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(format!(
                "An account for {} already exists",
                user.email
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create_session(&self, session: Session) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(session.token, session);
        Ok(())
    }

    async fn session_by_token(&self, token: Uuid) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(&token).cloned())
    }

    async fn delete_session(&self, token: Uuid) -> Result<(), AppError> {
        self.sessions.write().await.remove(&token);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, age, standard, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.age)
        .bind(&user.standard)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AppError::Conflict(
                format!("An account for {} already exists", user.email),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_session(&self, session: Session) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "INSERT INTO sessions (token, user_id, expires_at, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(session.token)
        .bind(session.user_id)
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn session_by_token(&self, token: Uuid) -> Result<Option<Session>, AppError> {
        Ok(
            sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn delete_session(&self, token: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Asha".to_string(),
            password_hash: "hash".to_string(),
            age: 16,
            standard: "10".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryAccountStore::new();
        let first = store.create_user(user("a@example.com")).await.unwrap();

        let err = store.create_user(user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let found = store.user_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.user_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = MemoryAccountStore::new();
        let session = Session {
            token: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::days(1),
            created_at: Utc::now(),
        };
        store.create_session(session.clone()).await.unwrap();
        assert_eq!(
            store
                .session_by_token(session.token)
                .await
                .unwrap()
                .map(|s| s.user_id),
            Some(session.user_id)
        );

        store.delete_session(session.token).await.unwrap();
        assert!(store.session_by_token(session.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_new_session_prunes_expired_ones() {
        let store = MemoryAccountStore::new();
        let stale = Session {
            token: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() - Duration::minutes(5),
            created_at: Utc::now() - Duration::days(8),
        };
        store.create_session(stale.clone()).await.unwrap();

        let fresh = Session {
            token: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::days(7),
            created_at: Utc::now(),
        };
        store.create_session(fresh.clone()).await.unwrap();

        let sessions = store.sessions.read().await;
        assert!(!sessions.contains_key(&stale.token));
        assert!(sessions.contains_key(&fresh.token));
    }
}
