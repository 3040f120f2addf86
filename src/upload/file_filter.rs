use std::path::Path;

/// Extensions offered by the file picker. Advisory only, uploads are not
/// rejected locally.
pub const ACCEPTED_EXTENSIONS: [&str; 14] = [
    "txt", "md", "json", "png", "jpg", "jpeg", "bmp", "heic", "tiff", "pdf", "docx", "xlsx",
    "pptx", "html",
];

pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
