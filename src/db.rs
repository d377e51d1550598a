//! SQLite pool construction and schema migrations.

use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::config::AppConfig;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the pool described by `config`.
///
/// Foreign keys are left unenforced: a backup may reference a user id that
/// was never created and the rows are still written. An in-memory database
/// lives only as long as its connection, so it gets exactly one that is
/// never recycled.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse DATABASE_URL {}", config.database_url))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    pool_options
        .connect_with(options)
        .await
        .context("connect to database")
}

/// Creates the `user` and `log` tables if they are missing. Idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR.run(pool).await.context("run migrations")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 5,
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect(&memory_config()).await.expect("connect");
        run_migrations(&pool).await.expect("first run");
        run_migrations(&pool).await.expect("second run");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('user', 'log') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["log".to_string(), "user".to_string()]);
    }

    #[tokio::test]
    async fn email_is_unique_at_the_storage_layer() {
        let pool = connect(&memory_config()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query("INSERT INTO user (email, password) VALUES ('a@b.com', 'pw')")
            .execute(&pool)
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO user (email, password) VALUES ('a@b.com', 'other')")
            .execute(&pool)
            .await
            .unwrap_err();
        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
