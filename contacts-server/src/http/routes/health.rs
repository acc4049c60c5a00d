//! Liveness and store reachability

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 503 while the store cannot be reached
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match state.store.ping().await {
        Ok(()) => ("ok", StatusCode::OK, "reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach store");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Admin, ContactStore, ImportSummary, MemoryStore, StoreError};
    use crate::models::{Contact, ContactFields};
    use async_trait::async_trait;

    struct DownStore;

    fn down() -> StoreError {
        StoreError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl ContactStore for DownStore {
        async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
            Err(down())
        }

        async fn get_contact(&self, _id: i32) -> Result<Contact, StoreError> {
            Err(down())
        }

        async fn create_contact(&self, _fields: &ContactFields) -> Result<i32, StoreError> {
            Err(down())
        }

        async fn update_contact(&self, _id: i32, _fields: &ContactFields) -> Result<(), StoreError> {
            Err(down())
        }

        async fn delete_contact(&self, _id: i32) -> Result<(), StoreError> {
            Err(down())
        }

        async fn import_contacts(
            &self,
            _rows: &[ContactFields],
        ) -> Result<ImportSummary, StoreError> {
            Err(down())
        }

        async fn find_admin(&self, _email: &str) -> Result<Option<Admin>, StoreError> {
            Err(down())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(down())
        }
    }

    #[tokio::test]
    async fn health_returns_ok_when_store_answers() {
        let state = Arc::new(AppState::new(MemoryStore::new()));
        let (code, Json(body)) = health(State(state)).await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "reachable");
    }

    #[tokio::test]
    async fn health_is_unavailable_when_store_is_down() {
        let state = Arc::new(AppState::new(DownStore));
        let (code, Json(body)) = health(State(state)).await;

        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "unreachable");
    }
}
