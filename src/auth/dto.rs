use serde::{Deserialize, Serialize};

use crate::error::AppError;

const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// Request body for account creation.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Email and password, both present and non-empty. Kept exactly as sent.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

fn require(email: Option<String>, password: Option<String>) -> Result<Credentials, AppError> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok(Credentials { email, password })
        }
        _ => Err(AppError::Validation(CREDENTIALS_REQUIRED)),
    }
}

impl SignupRequest {
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        require(self.email, self.password)
    }
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        require(self.email, self.password)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Returned on login. There is no token: callers keep `user_id` themselves.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user_id: i64,
}
