use axum::{extract::State, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::models::Node;
use crate::store::SharedRoot;

pub fn routes(root: SharedRoot) -> Router {
    Router::new()
        .route("/api/structure", get(get_structure))
        .with_state(root)
}

/// Always the full tree rooted at the document root; no pagination, no
/// filtering. Walk failures collapse into one generic response.
async fn get_structure(State(root): State<SharedRoot>) -> Result<Json<Vec<Node>>> {
    let tree = root.scan().map_err(|e| {
        tracing::error!("directory walk failed: {}", e);
        AppError::Internal("Failed to read directory structure".to_string())
    })?;

    Ok(Json(tree))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use axum::extract::State;

    use super::*;
    use crate::store::DocumentRoot;

    #[tokio::test]
    async fn structure_returns_full_tree() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("folderA")).unwrap();
        fs::write(temp.path().join("folderA/x.pdf"), b"x").unwrap();
        let root = Arc::new(DocumentRoot::open(temp.path()).unwrap());

        let Json(tree) = get_structure(State(root)).await.unwrap();

        assert_eq!(tree.len(), 1);
        let Node::Folder { name, children } = &tree[0] else {
            panic!("expected folderA as a folder node");
        };
        assert_eq!(name, "folderA");
        assert_eq!(
            children[0],
            Node::File {
                name: "x.pdf".to_string(),
                path: "folderA/x.pdf".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn structure_collapses_walk_errors_into_generic_failure() {
        let temp = tempfile::tempdir().unwrap();
        let sub = temp.path().join("root");
        fs::create_dir(&sub).unwrap();
        let root = Arc::new(DocumentRoot::open(&sub).unwrap());
        fs::remove_dir(&sub).unwrap();

        let err = get_structure(State(root)).await.unwrap_err();
        match err {
            AppError::Internal(msg) => {
                assert_eq!(msg, "Failed to read directory structure");
            }
            other => panic!("expected generic internal error, got {:?}", other),
        }
    }
}
