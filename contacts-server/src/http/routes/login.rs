//! Admin login endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::auth;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{Credentials, LoginRequest};

/// Login result
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// POST /login
///
/// Unknown email and wrong password produce the same 401.
async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let creds = Credentials::try_from(req)?;

    let admin = state
        .store
        .find_admin(&creds.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // Argon2 is CPU-bound; keep it off the async workers
    let verified = tokio::task::spawn_blocking(move || {
        auth::verify_password(&creds.password, &admin.password_hash)
    })
    .await
    .map_err(|e| ApiError::Internal {
        message: format!("password verification task failed: {}", e),
    })?;

    match verified {
        Ok(true) => Ok(Json(LoginResponse { success: true })),
        Ok(false) => Err(ApiError::Unauthorized),
        Err(e) => {
            tracing::warn!("Rejecting login: {}", e);
            Err(ApiError::Unauthorized)
        }
    }
}

/// Login routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}
