pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::careers::handlers as careers;
use crate::colleges::handlers as colleges;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth API
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Quiz API
        .route("/api/v1/quiz/questions", get(quiz::handle_list_questions))
        .route(
            "/api/v1/quiz/questions/:category",
            get(quiz::handle_questions_by_category),
        )
        .route("/api/v1/quiz/stats", get(quiz::handle_quiz_stats))
        .route(
            "/api/v1/quiz/answers/submit",
            post(quiz::handle_submit_answers),
        )
        .route("/api/v1/quiz/answers/my", get(quiz::handle_my_answers))
        .route(
            "/api/v1/quiz/recommendations",
            get(quiz::handle_get_recommendations),
        )
        .route("/api/v1/quiz/status", get(quiz::handle_quiz_status))
        .route(
            "/api/v1/quiz/disliked-careers",
            get(quiz::handle_disliked_careers),
        )
        // Careers API
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/:id", get(careers::handle_get_career))
        // Colleges API
        .route("/api/v1/colleges", get(colleges::handle_list_colleges))
        .with_state(state)
}
