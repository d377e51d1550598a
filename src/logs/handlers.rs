use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{BackupRequest, BackupResponse, RestoreResponse};
use super::services::{backup_entries, restore_entries};
use crate::{
    error::{AppError, AppJson},
    state::AppState,
};

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/backup", post(backup))
}

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/restore/:user_id", get(restore))
}

/// POST /backup { user_id, logs: [...] }
///
/// The user id is taken at face value; nothing checks that the account exists.
#[instrument(skip(state, payload))]
pub async fn backup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BackupRequest>,
) -> Result<Json<BackupResponse>, AppError> {
    let backup = payload.validate().map_err(|e| {
        warn!("backup missing user id or logs");
        e
    })?;

    let count = backup_entries(&state.db, backup.user_id, &backup.logs).await?;

    info!(user_id = backup.user_id, count, "logs backed up");
    Ok(Json(BackupResponse {
        message: "Logs backed up successfully",
    }))
}

/// GET /restore/:user_id
///
/// Only non-negative ids parse; anything else is rejected by the path extractor.
#[instrument(skip(state))]
pub async fn restore(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<RestoreResponse>, AppError> {
    // Ids past i64::MAX can never have been assigned.
    let logs = match i64::try_from(user_id) {
        Ok(user_id) => restore_entries(&state.db, user_id).await?,
        Err(_) => Vec::new(),
    };
    info!(user_id, count = logs.len(), "logs restored");
    Ok(Json(RestoreResponse { logs }))
}
