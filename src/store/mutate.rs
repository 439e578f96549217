//! Replace and delete operations on the document root.
//!
//! Replace stages the uploaded bytes next to the target and renames them into
//! place, so overwriting a file under its own name is atomic. Renaming to a
//! different name then unlinks the old file as a second step; if that unlink
//! fails both files remain on disk and the error is surfaced to the caller.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::store::root::DocumentRoot;

impl DocumentRoot {
    /// Replaces the file at `old_rel` with `content` stored under `file_name`
    /// in the same directory. Returns the new file's root-relative path.
    pub fn replace(&self, content: &[u8], file_name: &str, old_rel: &str) -> Result<String> {
        let old_path = self.resolve(old_rel)?;
        if !old_path.is_file() {
            return Err(AppError::NotFound(old_rel.to_string()));
        }

        // The new name lands in the old file's directory, so it must be a
        // bare file name.
        if file_name.is_empty()
            || file_name == ".."
            || file_name.contains('/')
            || file_name.contains('\\')
        {
            return Err(AppError::InvalidPath(file_name.to_string()));
        }

        let dir = old_path
            .parent()
            .ok_or_else(|| AppError::Internal("old file has no parent directory".to_string()))?;
        let new_path = dir.join(file_name);

        let staged = dir.join(format!(".{}.upload", file_name));
        if let Err(e) = fs::write(&staged, content).and_then(|_| fs::rename(&staged, &new_path)) {
            discard_staged(&staged);
            return Err(e.into());
        }

        if new_path != old_path {
            if let Err(e) = fs::remove_file(&old_path) {
                tracing::error!(
                    "replaced {} but failed to remove old file: {}",
                    old_rel,
                    e
                );
                return Err(e.into());
            }
        }

        let new_rel = Path::new(old_rel)
            .parent()
            .map(|p| p.join(file_name))
            .unwrap_or_else(|| file_name.into());

        Ok(new_rel.to_string_lossy().to_string())
    }

    /// Unlinks the file at `rel`. Not idempotent: deleting a path that is
    /// already gone reports the filesystem error.
    pub fn delete(&self, rel: &str) -> Result<()> {
        let path = self.resolve(rel)?;
        fs::remove_file(&path)?;

        Ok(())
    }
}

fn discard_staged(staged: &Path) {
    if let Err(e) = fs::remove_file(staged) {
        tracing::warn!("failed to remove staged upload {}: {}", staged.display(), e);
    }
}
