use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::logs::repo_types::LogEntry;

pub async fn insert_entry_tx(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    content: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO log (user_id, content)
        VALUES (?, ?)
        "#,
    )
    .bind(user_id)
    .bind(content)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// All entries of a user in insertion order.
pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> Result<Vec<LogEntry>, sqlx::Error> {
    sqlx::query_as::<_, LogEntry>(
        r#"
        SELECT id, user_id, content
        FROM log
        WHERE user_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
