use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The three question groups the client walks through, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Interest,
    Degree,
    Career,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 3] = [
        QuestionCategory::Interest,
        QuestionCategory::Degree,
        QuestionCategory::Career,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Interest => "interest",
            QuestionCategory::Degree => "degree",
            QuestionCategory::Career => "career",
        }
    }
}

impl FromStr for QuestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interest" => Ok(QuestionCategory::Interest),
            "degree" => Ok(QuestionCategory::Degree),
            "career" => Ok(QuestionCategory::Career),
            other => Err(format!(
                "unknown category '{other}', expected one of interest, degree, career"
            )),
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub category: QuestionCategory,
}

/// Ordinal 5-point answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    StronglyDislike,
    Dislike,
    Neutral,
    Like,
    StronglyLike,
}

impl Choice {
    pub const ALL: [Choice; 5] = [
        Choice::StronglyDislike,
        Choice::Dislike,
        Choice::Neutral,
        Choice::Like,
        Choice::StronglyLike,
    ];

    /// Highest weight any choice can carry.
    pub const MAX_WEIGHT: i32 = 2;

    pub fn weight(&self) -> i32 {
        match self {
            Choice::StronglyDislike => -2,
            Choice::Dislike => -1,
            Choice::Neutral => 0,
            Choice::Like => 1,
            Choice::StronglyLike => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::StronglyDislike => "strongly_dislike",
            Choice::Dislike => "dislike",
            Choice::Neutral => "neutral",
            Choice::Like => "like",
            Choice::StronglyLike => "strongly_like",
        }
    }

    pub fn is_negative(&self) -> bool {
        self.weight() < 0
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Choice::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown choice '{s}', expected one of {}",
                    Choice::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored answer. At most one exists per `(user_id, question_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub user_id: Uuid,
    pub question_id: i32,
    pub choice: Choice,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AnswerRow {
    pub user_id: Uuid,
    pub question_id: i32,
    pub choice: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = anyhow::Error;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        let choice = row
            .choice
            .parse::<Choice>()
            .map_err(|e| anyhow::anyhow!("corrupt answer row for question {}: {e}", row.question_id))?;
        Ok(Answer {
            user_id: row.user_id,
            question_id: row.question_id,
            choice,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_weights_are_symmetric() {
        let weights: Vec<i32> = Choice::ALL.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_choice_parse_rejects_unknown() {
        let err = "maybe".parse::<Choice>().unwrap_err();
        assert!(err.contains("maybe"));
        assert!(err.contains("strongly_like"));
    }

    #[test]
    fn test_choice_serde_is_snake_case() {
        let json = serde_json::to_string(&Choice::StronglyDislike).unwrap();
        assert_eq!(json, "\"strongly_dislike\"");
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Degree".parse::<QuestionCategory>(), Ok(QuestionCategory::Degree));
        assert!("hobby".parse::<QuestionCategory>().is_err());
    }
}
