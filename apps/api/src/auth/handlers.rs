use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::{hash_password, issue_session, verify_password};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::{User, UserProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub age: i32,
    pub standard: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

const MIN_PASSWORD_LEN: usize = 6;
const MIN_AGE: i32 = 14;
const MAX_AGE: i32 = 20;
const STANDARDS: &[&str] = &["10", "12"];

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_signup(req: &SignupRequest) -> Result<(), AppError> {
    let email = normalize_email(&req.email);
    let looks_valid = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !looks_valid {
        return Err(AppError::validation("email", "a valid e-mail address is required"));
    }
    if req.name.trim().is_empty() {
        return Err(AppError::validation("name", "name cannot be empty"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&req.age) {
        return Err(AppError::validation(
            "age",
            format!("age must be between {MIN_AGE} and {MAX_AGE}"),
        ));
    }
    if !STANDARDS.contains(&req.standard.as_str()) {
        return Err(AppError::validation("standard", "standard must be \"10\" or \"12\""));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_signup(&req)?;

    let password_hash = hash_password(req.password, state.config.bcrypt_cost).await?;
    let user = state
        .accounts
        .create_user(User {
            id: Uuid::new_v4(),
            email: normalize_email(&req.email),
            name: req.name.trim().to_string(),
            password_hash,
            age: req.age,
            standard: req.standard,
            created_at: Utc::now(),
        })
        .await?;

    let session = issue_session(
        state.accounts.as_ref(),
        user.id,
        state.config.session_ttl_days,
    )
    .await?;
    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
            expires_at: session.expires_at,
            user: UserProfile::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .accounts
        .user_by_email(&normalize_email(&req.email))
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(req.password, user.password_hash.clone()).await? {
        return Err(AppError::Unauthorized);
    }

    let session = issue_session(
        state.accounts.as_ref(),
        user.id,
        state.config.session_ttl_days,
    )
    .await?;

    Ok(Json(AuthResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: UserProfile::from(&user),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, AppError> {
    state.accounts.delete_session(auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = state
        .accounts
        .user_by_id(auth.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(UserProfile::from(&user)))
}
