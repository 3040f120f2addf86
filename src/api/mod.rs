//! Collaborators the file manager consumes.
//!
//! The widget only talks to these traits, so the HTTP client and the token
//! source can be swapped for fakes in tests.

mod auth;
#[cfg(test)]
pub mod fake;
mod http;

pub use auth::SessionTokenProvider;
pub use http::HttpFileApi;

use crate::error::FileManagerError;
use crate::upload::{RawFileEntry, UploadPayload, UploadResponse};
use async_trait::async_trait;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// `Ok(None)` means no token can be obtained right now.
    async fn get_token(&self) -> Result<Option<String>, FileManagerError>;
}

#[async_trait]
pub trait FileStorageApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<RawFileEntry>, FileManagerError>;

    async fn upload(
        &self,
        payload: UploadPayload,
        token: &str,
    ) -> Result<UploadResponse, FileManagerError>;

    async fn delete(&self, storage_key: &str, token: &str) -> Result<(), FileManagerError>;
}
