use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const SCHEMA: &str = include_str!("../migrations/0001_init.sql");

/// Creates a PostgreSQL connection pool and makes sure the schema exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");

    for statement in schema_statements(SCHEMA) {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .with_context(|| format!("Failed to apply schema statement: {statement}"))?;
    }
    info!("Database schema ready");

    Ok(pool)
}

fn schema_statements(schema: &str) -> impl Iterator<Item = &str> {
    schema.split(';').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_splits_into_tables() {
        let statements: Vec<&str> = schema_statements(SCHEMA).collect();
        assert_eq!(statements.len(), 4);
        assert!(statements
            .iter()
            .all(|s| s.starts_with("CREATE TABLE IF NOT EXISTS")));
    }
}
