use super::state::{DeletionStatus, FileManagerState, UploadOutcome};
use crate::api::{AuthProvider, FileStorageApi};
use crate::error::FileManagerError;
use crate::localization::Localizer;
use crate::upload::file_filter;
use crate::upload::group_prefix;
use crate::upload::{SelectedFile, UploadPayload, UploadedFileEntry};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Upload/list/delete panel state kept in sync with the storage backend.
///
/// Operations never return errors. Failures end up in the state (upload
/// outcome, deletion status) or only in the log (listing refresh). Every
/// successful mutation is followed by a full listing refresh.
///
/// Clones share state, so operations can be spawned concurrently. Nothing
/// serializes them: a delete's trailing refresh clears the whole status map,
/// including a `Pending` marker of a sibling delete that is still running.
#[derive(Clone)]
pub struct FileManagerWidget {
    state: Arc<Mutex<FileManagerState>>,
    auth: Arc<dyn AuthProvider>,
    api: Arc<dyn FileStorageApi>,
    localizer: Arc<Localizer>,
}

impl FileManagerWidget {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        api: Arc<dyn FileStorageApi>,
        localizer: Arc<Localizer>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FileManagerState::default())),
            auth,
            api,
            localizer,
        }
    }

    pub fn snapshot(&self) -> FileManagerState {
        self.lock().clone()
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn set_group_access_requested(&self, requested: bool) {
        self.lock().group_access_requested = requested;
    }

    /// Marks a row as being deleted before its task is spawned, so the
    /// delete control is disabled from the next frame on.
    pub fn mark_delete_pending(&self, entry: &UploadedFileEntry) {
        self.lock()
            .set_deletion_status(&entry.display_name, DeletionStatus::Pending);
    }

    /// Flags an upload as running before its task is spawned. Only call
    /// this with a file in hand, an empty selection must leave state alone.
    pub fn mark_uploading(&self) {
        self.lock().uploading = true;
    }

    fn lock(&self) -> MutexGuard<'_, FileManagerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn acquire_token(&self) -> Result<String, FileManagerError> {
        self.auth
            .get_token()
            .await?
            .ok_or(FileManagerError::AuthUnavailable)
    }

    pub async fn toggle_panel(&self) {
        let opened = self.lock().toggle_panel();
        tracing::debug!(open = opened, "File panel toggled");
        if !opened {
            return;
        }

        match self.acquire_token().await {
            Ok(token) => self.refresh_listing(&token).await,
            Err(e) => {
                tracing::error!(error = %e, "Cannot list files without a token");
                self.lock().list_loading = false;
            }
        }
    }

    pub async fn refresh_listing(&self, token: &str) {
        match self.api.list(token).await {
            Ok(raw) => {
                let files: Vec<UploadedFileEntry> =
                    raw.into_iter().map(group_prefix::to_entry).collect();
                tracing::info!(count = files.len(), "File listing refreshed");
                self.lock().apply_listing(files);
            }
            Err(e) => {
                // Listing failures stay invisible to the user, unlike upload and delete.
                tracing::error!(error = %e, "Failed to list uploaded files");
                self.lock().list_loading = false;
            }
        }
    }

    pub async fn upload_file(&self, selected: Option<SelectedFile>, group_access: bool) {
        let Some(file) = selected else {
            tracing::debug!(reason = %FileManagerError::EmptySelection, "Ignoring upload");
            return;
        };

        self.lock().uploading = true;
        let file_name = file.name.clone();
        let payload = UploadPayload::new(file, group_access);

        match self.send_upload(payload).await {
            Ok((message, token)) => {
                tracing::info!(file = %file_name, group_access, "File uploaded");
                {
                    let mut state = self.lock();
                    state.upload_outcome = Some(UploadOutcome::Success(message));
                    state.uploading = false;
                }
                self.refresh_listing(&token).await;
            }
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "Upload failed");
                self.fail_upload();
            }
        }
    }

    /// Reads the picked file and uploads it. `None` is a cancelled picker.
    pub async fn upload_path(&self, path: Option<PathBuf>, group_access: bool) {
        let Some(path) = path else {
            return self.upload_file(None, group_access).await;
        };

        if !file_filter::is_accepted(&path) {
            tracing::warn!(path = %path.display(), "File type is not in the accepted list, uploading anyway");
        }

        match SelectedFile::read(&path).await {
            Ok(file) => self.upload_file(Some(file), group_access).await,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read file for upload");
                self.fail_upload();
            }
        }
    }

    async fn send_upload(
        &self,
        payload: UploadPayload,
    ) -> Result<(String, String), FileManagerError> {
        let token = self.acquire_token().await?;
        let response = self.api.upload(payload, &token).await?;
        Ok((response.message, token))
    }

    fn fail_upload(&self) {
        let message = self.localizer.translate("upload.error");
        let mut state = self.lock();
        state.uploading = false;
        state.upload_outcome = Some(UploadOutcome::Error(message));
    }

    pub async fn delete_file(&self, entry: UploadedFileEntry) {
        let name = entry.display_name.clone();
        self.lock()
            .set_deletion_status(&name, DeletionStatus::Pending);

        let token = match self.acquire_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(file = %name, error = %e, "Cannot delete without a token");
                self.lock().set_deletion_status(&name, DeletionStatus::Error);
                return;
            }
        };

        let storage_key = group_prefix::storage_key(&entry);
        match self.api.delete(&storage_key, &token).await {
            Ok(()) => {
                tracing::info!(file = %name, %storage_key, "File deleted");
                self.lock()
                    .set_deletion_status(&name, DeletionStatus::Success);
                self.refresh_listing(&token).await;
            }
            Err(e) => {
                tracing::error!(file = %name, %storage_key, error = %e, "Delete failed");
                self.lock().set_deletion_status(&name, DeletionStatus::Error);
            }
        }
    }
}
