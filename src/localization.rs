use crate::error::FileManagerError;
use std::collections::HashMap;
use std::path::Path;

const ENGLISH: &str = include_str!("../assets/locales/en.json");

/// Key based string table. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    strings: HashMap<String, String>,
}

impl Localizer {
    pub fn english() -> Self {
        let strings = serde_json::from_str(ENGLISH).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Built-in English table is invalid");
            HashMap::new()
        });
        Self { strings }
    }

    /// English strings overridden by the JSON object in `path`.
    pub fn load(path: &Path) -> Result<Self, FileManagerError> {
        let content = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)?;

        let mut localizer = Self::english();
        localizer.strings.extend(overrides);
        tracing::info!(path = %path.display(), "Loaded locale table");
        Ok(localizer)
    }

    pub fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_table() {
        let localizer = Localizer::english();
        assert_eq!(localizer.translate("delete.default"), "Delete");
        assert_eq!(
            localizer.translate("upload.error"),
            "Error uploading file - please try again or contact admin."
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(Localizer::english().translate("no.such.key"), "no.such.key");
        assert_eq!(Localizer::default().translate("delete.default"), "delete.default");
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.json");
        std::fs::write(&path, r#"{"delete.default": "Löschen"}"#).unwrap();

        let localizer = Localizer::load(&path).unwrap();
        assert_eq!(localizer.translate("delete.default"), "Löschen");
        assert_eq!(localizer.translate("delete.pending"), "Deleting...");
    }

    #[test]
    fn test_load_rejects_bad_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            Localizer::load(&path),
            Err(FileManagerError::Locale(_))
        ));
        assert!(matches!(
            Localizer::load(&dir.path().join("missing.json")),
            Err(FileManagerError::Io(_))
        ));
    }
}
