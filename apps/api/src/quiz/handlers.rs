//! Axum route handlers for the Quiz API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::quiz::{Choice, Question, QuestionCategory};
use crate::models::recommendation::Recommendation;
use crate::quiz::submission::AnswerSubmission;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<AnswerSubmission>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct StoredAnswer {
    pub question_id: i32,
    pub question_text: String,
    pub question_category: QuestionCategory,
    pub choice: Choice,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuizStats {
    pub total_questions: usize,
    pub questions_by_category: BTreeMap<String, usize>,
    pub choice_options: Vec<&'static str>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizStatus {
    pub completed: bool,
    pub answered: usize,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DislikedCareersResponse {
    pub careers: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.quiz.questions().all().to_vec())
}

/// GET /api/v1/quiz/questions/:category
pub async fn handle_questions_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Question>>, AppError> {
    let category = category
        .parse::<QuestionCategory>()
        .map_err(|msg| AppError::validation("category", msg))?;
    Ok(Json(
        state
            .quiz
            .questions()
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// GET /api/v1/quiz/stats
pub async fn handle_quiz_stats(State(state): State<AppState>) -> Json<QuizStats> {
    let questions = state.quiz.questions();
    let questions_by_category = QuestionCategory::ALL
        .iter()
        .map(|c| (c.to_string(), questions.by_category(*c).len()))
        .collect();
    Json(QuizStats {
        total_questions: questions.len(),
        questions_by_category,
        choice_options: Choice::ALL.iter().map(|c| c.as_str()).collect(),
    })
}

/// POST /api/v1/quiz/answers/submit
///
/// Stores the batch (all-or-nothing), rescores, and returns the new ranking.
pub async fn handle_submit_answers(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<SubmitAnswersRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = state.quiz.submit(auth.user_id, &request.answers).await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// GET /api/v1/quiz/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = state.quiz.recommendations(auth.user_id).await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// GET /api/v1/quiz/answers/my
pub async fn handle_my_answers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<StoredAnswer>>, AppError> {
    let questions = state.quiz.questions();
    let answers = state
        .quiz
        .answers(auth.user_id)
        .await?
        .into_iter()
        .filter_map(|a| {
            let question = questions.get(a.question_id)?;
            Some(StoredAnswer {
                question_id: a.question_id,
                question_text: question.text.clone(),
                question_category: question.category,
                choice: a.choice,
                updated_at: a.updated_at,
            })
        })
        .collect();
    Ok(Json(answers))
}

/// GET /api/v1/quiz/status
///
/// Completion is derived from stored recommendations, not tracked separately.
pub async fn handle_quiz_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<QuizStatus>, AppError> {
    let completed = !state.quiz.recommendations(auth.user_id).await?.is_empty();
    let answered = state.quiz.answers(auth.user_id).await?.len();
    Ok(Json(QuizStatus {
        completed,
        answered,
        total_questions: state.quiz.questions().len(),
    }))
}

/// GET /api/v1/quiz/disliked-careers
pub async fn handle_disliked_careers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DislikedCareersResponse>, AppError> {
    let careers = state.quiz.disliked_careers(auth.user_id).await?;
    Ok(Json(DislikedCareersResponse { careers }))
}
