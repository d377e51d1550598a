use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One backed-up entry. `content` holds the entry as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
}
