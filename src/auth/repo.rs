use crate::auth::repo_types::User;
use sqlx::SqlitePool;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM user
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find the user whose email and password both match exactly.
    pub async fn find_by_credentials(
        db: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM user
            WHERE email = ? AND password = ?
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user and return its id.
    pub async fn create(db: &SqlitePool, email: &str, password: &str) -> Result<i64, sqlx::Error> {
        let done = sqlx::query(
            r#"
            INSERT INTO user (email, password)
            VALUES (?, ?)
            "#,
        )
        .bind(email)
        .bind(password)
        .execute(db)
        .await?;
        Ok(done.last_insert_rowid())
    }
}
