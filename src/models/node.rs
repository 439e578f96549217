//! Directory tree DTOs.
//!
//! - `Node`: one tree entry, Folder or File variant (sidebar tree)
//! - `ReplaceResponse` / `DeleteResponse`: mutation endpoint bodies
//!
//! The JSON tagging (`"type": "folder" | "file"`) is what the frontend
//! switches on when rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder { name: String, children: Vec<Node> },
    File { name: String, path: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_json_shape_is_tagged_by_type() {
        let tree = Node::Folder {
            name: "docs".to_string(),
            children: vec![Node::File {
                name: "a.pdf".to_string(),
                path: "docs/a.pdf".to_string(),
            }],
        };

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["name"], "docs");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["name"], "a.pdf");
        assert_eq!(json["children"][0]["path"], "docs/a.pdf");
    }

    #[test]
    fn empty_folder_serializes_with_empty_children() {
        let node = Node::Folder {
            name: "empty".to_string(),
            children: Vec::new(),
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["children"].as_array().unwrap().len(), 0);
    }
}
