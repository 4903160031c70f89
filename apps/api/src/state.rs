use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::store::{AccountStore, MemoryAccountStore, PgAccountStore};
use crate::careers::catalog::CareerCatalog;
use crate::colleges::catalog::CollegeCatalog;
use crate::config::Config;
use crate::quiz::questions::QuestionBank;
use crate::quiz::scoring::KeywordCareerScorer;
use crate::quiz::store::{
    AnswerStore, MemoryAnswerStore, MemoryRecommendationStore, PgAnswerStore,
    PgRecommendationStore, RecommendationStore,
};
use crate::quiz::submission::QuizService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub quiz: Arc<QuizService>,
    pub accounts: Arc<dyn AccountStore>,
    pub colleges: Arc<CollegeCatalog>,
}

impl AppState {
    /// Everything lives in process memory; lost on restart.
    pub fn in_memory(config: Config) -> Self {
        Self::build(
            config,
            Arc::new(MemoryAnswerStore::new()),
            Arc::new(MemoryRecommendationStore::new()),
            Arc::new(MemoryAccountStore::new()),
        )
    }

    pub fn postgres(config: Config, pool: PgPool) -> Self {
        Self::build(
            config,
            Arc::new(PgAnswerStore::new(pool.clone())),
            Arc::new(PgRecommendationStore::new(pool.clone())),
            Arc::new(PgAccountStore::new(pool)),
        )
    }

    fn build(
        config: Config,
        answers: Arc<dyn AnswerStore>,
        recommendations: Arc<dyn RecommendationStore>,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        let quiz = QuizService::new(
            Arc::new(QuestionBank::seeded()),
            Arc::new(CareerCatalog::seeded()),
            answers,
            recommendations,
            Arc::new(KeywordCareerScorer),
            config.recommendation_limit,
        );
        Self {
            config,
            quiz: Arc::new(quiz),
            accounts,
            colleges: Arc::new(CollegeCatalog::seeded()),
        }
    }

    /// Swaps the built-in college directory for a loaded one.
    pub fn with_colleges(mut self, colleges: CollegeCatalog) -> Self {
        self.colleges = Arc::new(colleges);
        self
    }
}
