use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, error};

use super::repo;
use crate::error::AppError;

/// Serializes one entry to the text stored in `log.content`.
pub fn encode_entry(entry: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(entry)
}

pub fn decode_entry(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(content)
}

/// Stores every entry for `user_id` in one transaction. Returns the number of rows written.
pub async fn backup_entries(
    db: &SqlitePool,
    user_id: i64,
    entries: &[Value],
) -> Result<usize, AppError> {
    let encoded = entries
        .iter()
        .map(encode_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let mut tx = db.begin().await?;
    for content in &encoded {
        repo::insert_entry_tx(&mut tx, user_id, content).await?;
    }
    tx.commit().await?;

    debug!(user_id, count = encoded.len(), "log entries committed");
    Ok(encoded.len())
}

/// Every entry ever backed up for `user_id`, oldest first.
pub async fn restore_entries(db: &SqlitePool, user_id: i64) -> Result<Vec<Value>, AppError> {
    let rows = repo::list_by_user(db, user_id).await?;
    let entries = rows
        .iter()
        .map(|row| {
            decode_entry(&row.content).map_err(|e| {
                error!(row_id = row.id, user_id, error = %e, "stored log entry is not valid JSON");
                e
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encoding_is_compact_json() {
        assert_eq!(encode_entry(&json!({ "x": 1 })).unwrap(), r#"{"x":1}"#);
        assert_eq!(encode_entry(&json!("hi")).unwrap(), r#""hi""#);
    }

    #[test]
    fn decodes_rows_written_with_spaced_separators() {
        let value = decode_entry(r#"{"a": [1, 2], "b": {"c": null}}"#).unwrap();
        assert_eq!(value, json!({ "a": [1, 2], "b": { "c": null } }));
    }

    #[test]
    fn rejects_non_json_rows() {
        assert!(decode_entry("not json").is_err());
    }
}
