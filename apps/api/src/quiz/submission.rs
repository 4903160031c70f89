//! Quiz submission pipeline: validate → upsert answers → score → replace recommendations.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::careers::catalog::CareerCatalog;
use crate::errors::AppError;
use crate::models::quiz::{Answer, Choice};
use crate::models::recommendation::Recommendation;
use crate::quiz::locks::UserLocks;
use crate::quiz::questions::QuestionBank;
use crate::quiz::scoring::{disliked_careers, CareerScorer};
use crate::quiz::store::{AnswerStore, RecommendationStore, ValidatedAnswer};

/// One answer as it arrives from the client, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: Option<i32>,
    pub choice: Option<String>,
}

impl AnswerSubmission {
    pub fn new(question_id: i32, choice: &str) -> Self {
        Self {
            question_id: Some(question_id),
            choice: Some(choice.to_string()),
        }
    }
}

pub struct QuizService {
    questions: Arc<QuestionBank>,
    catalog: Arc<CareerCatalog>,
    answers: Arc<dyn AnswerStore>,
    recommendations: Arc<dyn RecommendationStore>,
    scorer: Arc<dyn CareerScorer>,
    locks: UserLocks,
    limit: usize,
}

impl QuizService {
    pub fn new(
        questions: Arc<QuestionBank>,
        catalog: Arc<CareerCatalog>,
        answers: Arc<dyn AnswerStore>,
        recommendations: Arc<dyn RecommendationStore>,
        scorer: Arc<dyn CareerScorer>,
        limit: usize,
    ) -> Self {
        Self {
            questions,
            catalog,
            answers,
            recommendations,
            scorer,
            locks: UserLocks::new(),
            limit,
        }
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Stores a batch of answers and returns the freshly ranked recommendations.
    ///
    /// The whole batch is validated before anything is written. Once answers are
    /// committed they stay committed, even if scoring fails afterwards.
    pub async fn submit(
        &self,
        user_id: Uuid,
        batch: &[AnswerSubmission],
    ) -> Result<Vec<Recommendation>, AppError> {
        let validated = validate_batch(&self.questions, batch)?;

        let _guard = self.locks.acquire(user_id).await;

        self.answers.upsert_answers(user_id, &validated).await?;
        let answers = self.answers.answers_for_user(user_id).await?;

        let matches = self
            .scorer
            .score(&answers, &self.questions, &self.catalog, self.limit)
            .map_err(|e| {
                error!("Scoring failed for user {user_id}: {e}");
                AppError::Internal(anyhow::anyhow!("scoring failed: {e}"))
            })?;

        let created_at = Utc::now();
        let recommendations: Vec<Recommendation> = matches
            .into_iter()
            .zip(1..)
            .map(|(m, rank)| Recommendation {
                user_id,
                career_id: m.career_id,
                career_name: m.career_name,
                rank,
                match_score: m.match_score,
                reasoning: m.reasoning,
                created_at,
            })
            .collect();

        self.recommendations
            .replace_recommendations(user_id, &recommendations)
            .await?;

        info!(
            "User {user_id} submitted {} answers ({} stored), {} recommendations",
            validated.len(),
            answers.len(),
            recommendations.len()
        );

        Ok(recommendations)
    }

    /// Last stored recommendations. Never recomputes.
    pub async fn recommendations(&self, user_id: Uuid) -> Result<Vec<Recommendation>, AppError> {
        self.recommendations.recommendations_for_user(user_id).await
    }

    pub async fn answers(&self, user_id: Uuid) -> Result<Vec<Answer>, AppError> {
        self.answers.answers_for_user(user_id).await
    }

    pub async fn disliked_careers(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let answers = self.answers.answers_for_user(user_id).await?;
        Ok(disliked_careers(&answers, &self.questions, &self.catalog))
    }
}

/// Checks every item of the batch. The first problem rejects the whole batch.
fn validate_batch(
    questions: &QuestionBank,
    batch: &[AnswerSubmission],
) -> Result<Vec<ValidatedAnswer>, AppError> {
    if batch.is_empty() {
        return Err(AppError::validation(
            "answers",
            "at least one answer is required",
        ));
    }

    let mut seen = HashSet::with_capacity(batch.len());
    let mut validated = Vec::with_capacity(batch.len());

    for (i, item) in batch.iter().enumerate() {
        let question_id = item.question_id.ok_or_else(|| {
            AppError::validation(format!("answers[{i}].question_id"), "question_id is required")
        })?;
        if !questions.contains(question_id) {
            return Err(AppError::validation(
                format!("answers[{i}].question_id"),
                format!("unknown question {question_id}"),
            ));
        }
        if !seen.insert(question_id) {
            return Err(AppError::validation(
                format!("answers[{i}].question_id"),
                format!("question {question_id} appears more than once in the batch"),
            ));
        }

        let raw_choice = item.choice.as_deref().ok_or_else(|| {
            AppError::validation(format!("answers[{i}].choice"), "choice is required")
        })?;
        let choice = raw_choice
            .parse::<Choice>()
            .map_err(|msg| AppError::validation(format!("answers[{i}].choice"), msg))?;

        validated.push(ValidatedAnswer {
            question_id,
            choice,
        });
    }

    Ok(validated)
}
