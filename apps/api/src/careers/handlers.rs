use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::AppPath;
use crate::models::career::Career;
use crate::state::AppState;

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<Career>> {
    Json(state.quiz.catalog().all().to_vec())
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Career>, AppError> {
    state
        .quiz
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
