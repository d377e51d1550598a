use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Request body for `POST /backup`.
#[derive(Debug, Deserialize)]
pub struct BackupRequest {
    pub user_id: Option<i64>,
    pub logs: Option<Vec<Value>>,
}

/// A backup that passed validation.
#[derive(Debug)]
pub struct Backup {
    pub user_id: i64,
    pub logs: Vec<Value>,
}

impl BackupRequest {
    /// A zero id and an empty batch count as missing.
    pub fn validate(self) -> Result<Backup, AppError> {
        match (self.user_id, self.logs) {
            (Some(user_id), Some(logs)) if user_id != 0 && !logs.is_empty() => {
                Ok(Backup { user_id, logs })
            }
            _ => Err(AppError::Validation("User ID and logs are required")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub logs: Vec<Value>,
}
