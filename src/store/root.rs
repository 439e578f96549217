use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, Result};

/// The one directory tree the service reads and writes, fixed at startup.
pub struct DocumentRoot {
    pub path: PathBuf,
}

impl DocumentRoot {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(AppError::NotFound(path.display().to_string()));
        }
        let path = std::fs::canonicalize(path)?;

        Ok(Self { path })
    }

    /// Joins a root-relative path onto the document root.
    ///
    /// Rejects absolute paths and any `..` component, so the result can never
    /// escape the root.
    pub fn resolve(&self, rel: &str) -> Result<PathBuf> {
        let rel_path = Path::new(rel);
        if rel_path.is_absolute() {
            return Err(AppError::InvalidPath(rel.to_string()));
        }

        for component in rel_path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(AppError::InvalidPath(rel.to_string())),
            }
        }

        Ok(self.path.join(rel_path))
    }
}

pub type SharedRoot = Arc<DocumentRoot>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_missing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let result = DocumentRoot::open(temp.path().join("nope"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn resolve_rejects_traversal() {
        let temp = tempfile::tempdir().unwrap();
        let root = DocumentRoot::open(temp.path()).unwrap();

        assert!(matches!(
            root.resolve("../secret.pdf"),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            root.resolve("docs/../../secret.pdf"),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            root.resolve("/etc/passwd"),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn resolve_joins_relative_path_onto_root() {
        let temp = tempfile::tempdir().unwrap();
        let root = DocumentRoot::open(temp.path()).unwrap();

        let resolved = root.resolve("docs/a.pdf").unwrap();
        assert!(resolved.starts_with(&root.path));
        assert!(resolved.ends_with("docs/a.pdf"));
    }
}
