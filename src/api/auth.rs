use super::AuthProvider;
use crate::error::FileManagerError;
use crate::utils::curl_parser::CurlParser;
use async_trait::async_trait;
use std::sync::RwLock;

/// Holds the token for the current session. Seeded from configuration and
/// replaceable at runtime from a pasted curl command.
#[derive(Default)]
pub struct SessionTokenProvider {
    token: RwLock<Option<String>>,
}

impl SessionTokenProvider {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            token: RwLock::new(initial.filter(|t| !t.is_empty())),
        }
    }

    pub fn apply_curl(&self, curl_text: &str) -> Result<(), FileManagerError> {
        let mut parser = CurlParser::new();
        parser.parse(curl_text)?;
        tracing::info!("Session token updated from curl command");
        self.set_token(parser.token);
        Ok(())
    }

    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    pub fn has_token(&self) -> bool {
        match self.token.read() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }
}

#[async_trait]
impl AuthProvider for SessionTokenProvider {
    async fn get_token(&self) -> Result<Option<String>, FileManagerError> {
        match self.token.read() {
            Ok(guard) => Ok(guard.clone()),
            Err(poisoned) => Ok(poisoned.into_inner().clone()),
        }
    }
}
