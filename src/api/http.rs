use super::FileStorageApi;
use crate::config::ApiSettings;
use crate::error::FileManagerError;
use crate::upload::{RawFileEntry, UploadPayload, UploadResponse};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::json;
use std::time::Duration;

/// File storage backend reached over HTTP with bearer authentication.
#[derive(Clone)]
pub struct HttpFileApi {
    client: Client,
    base_url: String,
}

impl HttpFileApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, FileManagerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_status(response: Response) -> Result<Response, FileManagerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(FileManagerError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl FileStorageApi for HttpFileApi {
    async fn list(&self, token: &str) -> Result<Vec<RawFileEntry>, FileManagerError> {
        let url = self.url("list_uploaded");
        tracing::debug!(%url, "Listing uploaded files");

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let response = Self::check_status(response).await?;
        let entries = response
            .json::<Vec<RawFileEntry>>()
            .await
            .map_err(|e| FileManagerError::Decode(e.to_string()))?;

        tracing::debug!(count = entries.len(), "Listing received");
        Ok(entries)
    }

    async fn upload(
        &self,
        payload: UploadPayload,
        token: &str,
    ) -> Result<UploadResponse, FileManagerError> {
        let url = self.url("upload");
        tracing::debug!(
            %url,
            file_name = %payload.file_name,
            size = payload.content.len(),
            group_access = payload.group_access,
            "Uploading file"
        );

        let part = Part::bytes(payload.content).file_name(payload.file_name);
        let form = Form::new()
            .part("file", part)
            .text("is_group", payload.group_access.to_string());

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| FileManagerError::Decode(e.to_string()))
    }

    async fn delete(&self, storage_key: &str, token: &str) -> Result<(), FileManagerError> {
        let url = self.url("delete_uploaded");
        tracing::debug!(%url, %storage_key, "Deleting file");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "filename": storage_key }))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
