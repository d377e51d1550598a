use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest},
        repo_types::User,
    },
    error::{AppError, AppJson},
    state::AppState,
};

const USER_EXISTS: &str = "User already exists";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let creds = payload.into_credentials().map_err(|e| {
        warn!("signup missing credentials");
        e
    })?;

    // Check-then-insert; the UNIQUE index on email catches a concurrent duplicate.
    if User::find_by_email(&state.db, &creds.email).await?.is_some() {
        warn!(email = %creds.email, "email already registered");
        return Err(AppError::Conflict(USER_EXISTS));
    }

    let user_id = match User::create(&state.db, &creds.email, &creds.password).await {
        Ok(id) => id,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(email = %creds.email, "email registered concurrently");
            return Err(AppError::Conflict(USER_EXISTS));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id, email = %creds.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User created successfully. Please log in.",
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let creds = payload.into_credentials().map_err(|e| {
        warn!("login missing credentials");
        e
    })?;

    let Some(user) = User::find_by_credentials(&state.db, &creds.email, &creds.password).await?
    else {
        warn!(email = %creds.email, "login invalid credentials");
        return Err(AppError::Auth("Invalid credentials"));
    };

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        user_id: user.id,
    }))
}
