//! API route handlers - maps HTTP endpoints to document root operations.
//!
//! Each submodule defines routes for a feature area:
//! - `structure`: Full directory tree listing (GET /api/structure)
//! - `pdf`: Replace and delete operations on PDF files

pub mod pdf;
pub mod structure;

use axum::Router;

use crate::store::SharedRoot;

pub fn create_router(root: SharedRoot) -> Router {
    Router::new()
        .merge(structure::routes(root.clone()))
        .merge(pdf::routes(root))
}
