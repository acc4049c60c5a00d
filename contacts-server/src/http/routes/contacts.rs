//! Contact CRUD endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ContactId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Contact, ContactFields};

/// Confirmation body for update and delete
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /contacts - all contacts, ascending by id
async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list_contacts().await?;
    Ok(Json(contacts))
}

/// POST /contacts - create a contact, echoing it back with its id
async fn create_contact(
    State(state): State<Arc<AppState>>,
    ValidJson(fields): ValidJson<ContactFields>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let id = state.store.create_contact(&fields).await?;
    tracing::info!(id, "contact created");

    Ok((StatusCode::CREATED, Json(fields.with_id(id))))
}

/// GET /contacts/{id}
async fn get_contact(
    State(state): State<Arc<AppState>>,
    ContactId(id): ContactId,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.store.get_contact(id).await?;
    Ok(Json(contact))
}

/// PUT /contacts/{id} - replace all fields; omitted fields become empty
async fn update_contact(
    State(state): State<Arc<AppState>>,
    ContactId(id): ContactId,
    ValidJson(fields): ValidJson<ContactFields>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_contact(id, &fields).await?;
    Ok(Json(MessageResponse {
        message: "Contact updated",
    }))
}

/// DELETE /contacts/{id}
async fn delete_contact(
    State(state): State<Arc<AppState>>,
    ContactId(id): ContactId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_contact(id).await?;
    Ok(Json(MessageResponse {
        message: "Contact deleted",
    }))
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}
