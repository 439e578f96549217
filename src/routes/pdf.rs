//! Replace and delete endpoints for PDF files.
//!
//! - POST /api/replace-pdf
//!   Multipart form: `pdfFile` (binary), `fileName` (new name),
//!   `oldFileName` (root-relative path of the file being replaced).
//!   The upload lands in the old file's directory under the new name.
//!
//! - DELETE /api/delete-pdf/{*path}
//!   The wildcard segment carries the file's real root-relative path,
//!   URL-encoded per segment by the client.

use axum::{
    extract::{Multipart, Path, State},
    routing::{delete, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::models::{DeleteResponse, ReplaceResponse};
use crate::store::SharedRoot;

pub fn routes(root: SharedRoot) -> Router {
    Router::new()
        .route("/api/replace-pdf", post(replace_pdf))
        .route("/api/delete-pdf/{*path}", delete(delete_pdf))
        .with_state(root)
}

async fn replace_pdf(
    State(root): State<SharedRoot>,
    mut multipart: Multipart,
) -> Result<Json<ReplaceResponse>> {
    let mut content = None;
    let mut file_name = None;
    let mut old_file_name = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("pdfFile") => content = Some(field.bytes().await?),
            Some("fileName") => file_name = Some(field.text().await?),
            Some("oldFileName") => old_file_name = Some(field.text().await?),
            _ => {}
        }
    }

    // The upload is checked first: a request without one is rejected no
    // matter what the other fields say.
    let content = content.ok_or(AppError::MissingUpload)?;
    let file_name = file_name.ok_or(AppError::MissingField("fileName"))?;
    let old_file_name = old_file_name.ok_or(AppError::MissingField("oldFileName"))?;

    let new_rel = root.replace(&content, &file_name, &old_file_name)?;

    Ok(Json(ReplaceResponse {
        success: true,
        path: format!("/data/{}", new_rel),
    }))
}

async fn delete_pdf(
    State(root): State<SharedRoot>,
    Path(path): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if let Err(e) = root.delete(&path) {
        tracing::error!("failed to delete {}: {}", path, e);
        return Err(e);
    }

    Ok(Json(DeleteResponse { success: true }))
}
