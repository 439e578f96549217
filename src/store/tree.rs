use std::path::Path;

use crate::error::Result;
use crate::models::Node;
use crate::store::root::DocumentRoot;

impl DocumentRoot {
    /// Walks the whole document root into a `Node` tree.
    ///
    /// Every directory becomes a Folder node (empty ones included); a file
    /// becomes a File node only if it ends in `.pdf`, everything else is
    /// dropped. Entries keep the filesystem's enumeration order. Any read
    /// error aborts the walk, there are no partial results.
    pub fn scan(&self) -> Result<Vec<Node>> {
        scan_dir(&self.path, Path::new(""))
    }
}

fn scan_dir(dir: &Path, rel: &Path) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let entry_path = entry.path();
        let rel_path = rel.join(&name);

        if entry_path.is_dir() {
            nodes.push(Node::Folder {
                name,
                children: scan_dir(&entry_path, &rel_path)?,
            });
        } else if name.ends_with(".pdf") {
            nodes.push(Node::File {
                name,
                path: rel_path.to_string_lossy().to_string(),
            });
        }
    }

    Ok(nodes)
}
