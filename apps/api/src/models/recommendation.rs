use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One ranked career produced by a scoring run.
/// A user's set is replaced wholesale by every new run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub user_id: Uuid,
    pub career_id: i32,
    pub career_name: String,
    pub rank: i32,
    pub match_score: f64, // 0 – 100
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
}
