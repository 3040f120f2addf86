pub mod file_filter;
pub mod group_prefix;
mod types;

pub use types::{RawFileEntry, SelectedFile, UploadPayload, UploadResponse, UploadedFileEntry};
