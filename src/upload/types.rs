use serde::{Deserialize, Serialize};
use std::path::Path;

/// One file visible to the current user, with the group marker already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFileEntry {
    pub display_name: String,
    pub is_group_shared: bool,
}

/// Listing record as the storage backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFileEntry {
    pub name: String,
    #[serde(rename = "isGroup", default)]
    pub is_group: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid filename")
            })?;
        let content = tokio::fs::read(path).await?;
        Ok(Self { name, content })
    }
}

#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub group_access: bool,
}

impl UploadPayload {
    pub fn new(file: SelectedFile, group_access: bool) -> Self {
        Self {
            file_name: file.name,
            content: file.content,
            group_access,
        }
    }
}
