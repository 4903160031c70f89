//! Answer and recommendation repositories.
//!
//! Each store is a trait with two backends: in-memory (default, tests) and
//! PostgreSQL. Batch writes are all-or-nothing in both.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::quiz::{Answer, AnswerRow, Choice};
use crate::models::recommendation::Recommendation;

/// An answer that already passed validation against the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAnswer {
    pub question_id: i32,
    pub choice: Choice,
}

#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Inserts or overwrites one answer per question. Either every answer in the
    /// batch is applied or none is.
    async fn upsert_answers(&self, user_id: Uuid, batch: &[ValidatedAnswer])
        -> Result<(), AppError>;

    /// All answers of a user, ordered by question id.
    async fn answers_for_user(&self, user_id: Uuid) -> Result<Vec<Answer>, AppError>;
}

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Replaces the user's previous set wholesale.
    async fn replace_recommendations(
        &self,
        user_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError>;

    /// The last stored set, ordered by rank. Empty if none.
    async fn recommendations_for_user(&self, user_id: Uuid)
        -> Result<Vec<Recommendation>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryAnswerStore {
    answers: RwLock<HashMap<Uuid, BTreeMap<i32, Answer>>>,
}

impl MemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnswerStore for MemoryAnswerStore {
    async fn upsert_answers(
        &self,
        user_id: Uuid,
        batch: &[ValidatedAnswer],
    ) -> Result<(), AppError> {
        let now = Utc::now();
        // A single write guard covers the whole batch.
        let mut answers = self.answers.write().await;
        let user_answers = answers.entry(user_id).or_default();
        for item in batch {
            user_answers
                .entry(item.question_id)
                .and_modify(|existing| {
                    existing.choice = item.choice;
                    existing.updated_at = now;
                })
                .or_insert_with(|| Answer {
                    user_id,
                    question_id: item.question_id,
                    choice: item.choice,
                    created_at: now,
                    updated_at: now,
                });
        }
        Ok(())
    }

    async fn answers_for_user(&self, user_id: Uuid) -> Result<Vec<Answer>, AppError> {
        let answers = self.answers.read().await;
        Ok(answers
            .get(&user_id)
            .map(|by_question| by_question.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MemoryRecommendationStore {
    recommendations: RwLock<HashMap<Uuid, Vec<Recommendation>>>,
}

impl MemoryRecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecommendationStore for MemoryRecommendationStore {
    async fn replace_recommendations(
        &self,
        user_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError> {
        let mut sorted = recommendations.to_vec();
        sorted.sort_by_key(|r| r.rank);
        self.recommendations.write().await.insert(user_id, sorted);
        Ok(())
    }

    async fn recommendations_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Recommendation>, AppError> {
        Ok(self
            .recommendations
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn upsert_answers(
        &self,
        user_id: Uuid,
        batch: &[ValidatedAnswer],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for item in batch {
            sqlx::query(
                r#"
                INSERT INTO quiz_answers (user_id, question_id, choice)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id, question_id)
                DO UPDATE SET choice = EXCLUDED.choice, updated_at = NOW()
                "#,
            )
            .bind(user_id)
            .bind(item.question_id)
            .bind(item.choice.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn answers_for_user(&self, user_id: Uuid) -> Result<Vec<Answer>, AppError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT user_id, question_id, choice, created_at, updated_at
            FROM quiz_answers
            WHERE user_id = $1
            ORDER BY question_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Answer::try_from(row).map_err(AppError::Internal))
            .collect()
    }
}

pub struct PgRecommendationStore {
    pool: PgPool,
}

impl PgRecommendationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationStore for PgRecommendationStore {
    async fn replace_recommendations(
        &self,
        user_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM career_recommendations WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for rec in recommendations {
            sqlx::query(
                r#"
                INSERT INTO career_recommendations
                    (user_id, career_id, career_name, rank, match_score, reasoning, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(user_id)
            .bind(rec.career_id)
            .bind(&rec.career_name)
            .bind(rec.rank)
            .bind(rec.match_score)
            .bind(&rec.reasoning)
            .bind(rec.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn recommendations_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Recommendation>, AppError> {
        Ok(sqlx::query_as::<_, Recommendation>(
            r#"
            SELECT user_id, career_id, career_name, rank, match_score, reasoning, created_at
            FROM career_recommendations
            WHERE user_id = $1
            ORDER BY rank
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i32, choice: Choice) -> ValidatedAnswer {
        ValidatedAnswer {
            question_id,
            choice,
        }
    }

    fn recommendation(user_id: Uuid, career_id: i32, rank: i32) -> Recommendation {
        Recommendation {
            user_id,
            career_id,
            career_name: format!("Career {career_id}"),
            rank,
            match_score: 50.0,
            reasoning: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_resubmission_overwrites_choice() {
        let store = MemoryAnswerStore::new();
        let user = Uuid::new_v4();

        store
            .upsert_answers(user, &[answer(1, Choice::Like), answer(2, Choice::Neutral)])
            .await
            .unwrap();
        store
            .upsert_answers(user, &[answer(1, Choice::StronglyDislike)])
            .await
            .unwrap();

        let stored = store.answers_for_user(user).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].question_id, 1);
        assert_eq!(stored[0].choice, Choice::StronglyDislike);
        assert!(stored[0].updated_at >= stored[0].created_at);
    }

    #[tokio::test]
    async fn test_answers_are_isolated_per_user() {
        let store = MemoryAnswerStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .upsert_answers(alice, &[answer(1, Choice::Like)])
            .await
            .unwrap();

        assert_eq!(store.answers_for_user(alice).await.unwrap().len(), 1);
        assert!(store.answers_for_user(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_recommendations_supersedes_previous_set() {
        let store = MemoryRecommendationStore::new();
        let user = Uuid::new_v4();

        store
            .replace_recommendations(
                user,
                &[recommendation(user, 1, 1), recommendation(user, 2, 2)],
            )
            .await
            .unwrap();
        store
            .replace_recommendations(user, &[recommendation(user, 7, 1)])
            .await
            .unwrap();

        let stored = store.recommendations_for_user(user).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].career_id, 7);
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_recommendations() {
        let store = MemoryRecommendationStore::new();
        assert!(store
            .recommendations_for_user(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }
}
