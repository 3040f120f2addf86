//! In-memory collaborators for widget tests.

use super::{AuthProvider, FileStorageApi};
use crate::error::FileManagerError;
use crate::upload::group_prefix;
use crate::upload::{RawFileEntry, UploadPayload, UploadResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub struct FakeAuth {
    pub token: Option<String>,
    pub fail: bool,
}

impl FakeAuth {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            fail: false,
        }
    }

    pub fn absent() -> Self {
        Self {
            token: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            token: None,
            fail: true,
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn get_token(&self) -> Result<Option<String>, FileManagerError> {
        if self.fail {
            return Err(FileManagerError::Network("auth service down".to_string()));
        }
        Ok(self.token.clone())
    }
}

/// Storage backend keeping files in memory. Deletes of keys with a gate
/// block until [`FakeFileApi::open_gate`] is called.
#[derive(Default)]
pub struct FakeFileApi {
    pub files: Mutex<Vec<RawFileEntry>>,
    pub fail_list: AtomicBool,
    pub fail_upload: AtomicBool,
    pub fail_delete: AtomicBool,
    pub list_calls: AtomicUsize,
    pub deleted_keys: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<UploadPayload>>,
    pub seen_tokens: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl FakeFileApi {
    pub fn with_files(files: &[(&str, bool)]) -> Self {
        let api = Self::default();
        *api.files.lock().unwrap() = files
            .iter()
            .map(|(name, is_group)| RawFileEntry {
                name: name.to_string(),
                is_group: *is_group,
            })
            .collect();
        api
    }

    pub fn gate_delete(&self, storage_key: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(storage_key.to_string(), Arc::new(Notify::new()));
    }

    pub fn open_gate(&self, storage_key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(storage_key) {
            gate.notify_one();
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn record_token(&self, token: &str) {
        self.seen_tokens.lock().unwrap().push(token.to_string());
    }
}

#[async_trait]
impl FileStorageApi for FakeFileApi {
    async fn list(&self, token: &str) -> Result<Vec<RawFileEntry>, FileManagerError> {
        self.record_token(token);
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(FileManagerError::Server {
                status: 500,
                message: "list failed".to_string(),
            });
        }
        Ok(self.files.lock().unwrap().clone())
    }

    async fn upload(
        &self,
        payload: UploadPayload,
        token: &str,
    ) -> Result<UploadResponse, FileManagerError> {
        self.record_token(token);
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(FileManagerError::Network("connection reset".to_string()));
        }

        let name = if payload.group_access {
            group_prefix::prepend(&payload.file_name)
        } else {
            payload.file_name.clone()
        };
        self.files.lock().unwrap().push(RawFileEntry {
            name,
            is_group: payload.group_access,
        });
        self.uploads.lock().unwrap().push(payload);

        Ok(UploadResponse {
            message: "ok".to_string(),
        })
    }

    async fn delete(&self, storage_key: &str, token: &str) -> Result<(), FileManagerError> {
        self.record_token(token);
        let gate = self.gates.lock().unwrap().get(storage_key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.deleted_keys.lock().unwrap().push(storage_key.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(FileManagerError::Server {
                status: 404,
                message: "no such file".to_string(),
            });
        }

        self.files.lock().unwrap().retain(|f| f.name != storage_key);
        Ok(())
    }
}
