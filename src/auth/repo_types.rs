use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,          // rowid, assigned on insert
    pub email: String,    // unique
    #[serde(skip_serializing)]
    pub password: String, // stored as received, not exposed in JSON
}
