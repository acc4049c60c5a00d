//! Spreadsheet import and export endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ValidationError;
use crate::sheet::{self, XLSX_CONTENT_TYPE};

/// Multipart field name carrying the workbook
pub const UPLOAD_FIELD: &str = "file";

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const EXPORT_DISPOSITION: &str = "attachment; filename=\"contacts.xlsx\"";

/// Import result
#[derive(Serialize)]
pub struct ImportResponse {
    pub message: &'static str,
    pub inserted: u64,
    pub skipped: u64,
}

/// POST /contacts/import - bulk insert from an uploaded workbook
async fn import_contacts(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut multipart = multipart.map_err(|_| ValidationError::MissingFile)?;
    let upload = read_upload(&mut multipart)
        .await?
        .ok_or(ValidationError::MissingFile)?;

    let rows = sheet::read_contacts(&upload)?;
    let summary = state.store.import_contacts(&rows).await?;
    tracing::info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "import completed"
    );

    Ok(Json(ImportResponse {
        message: "Import completed",
        inserted: summary.inserted,
        skipped: summary.skipped,
    }))
}

/// Bytes of the `file` part, or of the first part carrying a filename.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    let mut fallback = None;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let named_file = field.name() == Some(UPLOAD_FIELD);
        if !named_file && (fallback.is_some() || field.file_name().is_none()) {
            continue;
        }

        let data = field.bytes().await.map_err(upload_error)?;
        if named_file {
            return Ok(Some(data));
        }
        fallback = Some(data);
    }

    Ok(fallback)
}

fn upload_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge {
            limit: MAX_UPLOAD_BYTES,
        }
    } else {
        ApiError::Validation(ValidationError::Malformed {
            reason: e.body_text(),
        })
    }
}

/// GET /contacts/export - download all contacts as `contacts.xlsx`
async fn export_contacts(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let contacts = state.store.list_contacts().await?;
    if contacts.is_empty() {
        return Err(ValidationError::NothingToExport.into());
    }

    let workbook = sheet::write_contacts(&contacts)?;
    tracing::info!(rows = contacts.len(), "export generated");

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, EXPORT_DISPOSITION),
        ],
        workbook,
    )
        .into_response())
}

/// Import/export routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/contacts/import",
            post(import_contacts).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/contacts/export", get(export_contacts))
}
