use tracing::info;

use crate::credentials::{Credentials, STORAGE_KEY};
use crate::document::Document;
use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Id of the element that receives the confirmation text
pub const RESULT_ELEMENT_ID: &str = "result";

/// Text shown after a simulated login
pub const CONFIRMATION_TEXT: &str = "Login realizado! Token salvo.";

/// Simulates a successful SSO login against injected storage and UI.
///
/// The simulator keeps no state of its own between calls.
pub struct LoginSimulator<S, D> {
    storage: S,
    document: D,
}

impl<S: KeyValueStorage, D: Document> LoginSimulator<S, D> {
    pub fn new(storage: S, document: D) -> Self {
        Self { storage, document }
    }

    /// Store the fake credentials, then write the confirmation text.
    ///
    /// Errors from either capability are returned as-is. The storage write
    /// happens first, so a missing `result` element still leaves the
    /// credentials stored.
    pub fn login(&mut self) -> Result<()> {
        let json = Credentials::fake().to_json()?;
        self.storage.set(STORAGE_KEY, &json)?;
        info!(backend = self.storage.name(), key = STORAGE_KEY, "Credentials stored");

        self.document.set_text(RESULT_ELEMENT_ID, CONFIRMATION_TEXT)?;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_parts(self) -> (S, D) {
        (self.storage, self.document)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::error::SsoError;
    use crate::storage::{FileStorage, MemoryStorage};
    use std::cell::Cell;

    const EXPECTED_JSON: &str =
        r#"{"access_token":"fake-access-token","id_token":"fake-id-token","expires_in":3600}"#;

    /// Wraps a storage and counts every call made through it
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        gets: Cell<usize>,
        sets: usize,
        removes: usize,
    }

    impl KeyValueStorage for CountingStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.gets.set(self.gets.get() + 1);
            self.inner.get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.sets += 1;
            self.inner.set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<()> {
            self.removes += 1;
            self.inner.remove(key)
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(SsoError::Storage("quota exceeded".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    fn simulator() -> LoginSimulator<MemoryStorage, MemoryDocument> {
        LoginSimulator::new(
            MemoryStorage::new(),
            MemoryDocument::with_elements([RESULT_ELEMENT_ID]),
        )
    }

    #[test]
    fn test_login_stores_exact_json() {
        let mut sim = simulator();
        sim.login().unwrap();

        let stored = sim.storage().get("sso_credentials").unwrap();
        assert_eq!(stored.as_deref(), Some(EXPECTED_JSON));
    }

    #[test]
    fn test_login_writes_confirmation() {
        let mut sim = simulator();
        sim.login().unwrap();
        assert_eq!(
            sim.document().text("result"),
            Some("Login realizado! Token salvo.")
        );
    }

    #[test]
    fn test_login_twice_same_state() {
        let mut once = simulator();
        once.login().unwrap();

        let mut twice = simulator();
        twice.login().unwrap();
        twice.login().unwrap();

        let (once_storage, once_doc) = once.into_parts();
        let (twice_storage, twice_doc) = twice.into_parts();
        assert_eq!(
            once_storage.get(STORAGE_KEY).unwrap(),
            twice_storage.get(STORAGE_KEY).unwrap()
        );
        assert_eq!(twice_storage.len(), 1);
        assert_eq!(once_doc.text("result"), twice_doc.text("result"));
    }

    #[test]
    fn test_login_overwrites_previous_value() {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, r#"{"access_token":"old"}"#).unwrap();
        storage.set("unrelated", "kept").unwrap();

        let mut sim = LoginSimulator::new(storage, MemoryDocument::with_elements(["result"]));
        sim.login().unwrap();

        let stored = sim.storage().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(Credentials::from_json(&stored).unwrap(), Credentials::fake());
        assert_eq!(sim.storage().get("unrelated").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_login_only_writes_storage() {
        let mut sim = LoginSimulator::new(
            CountingStorage::default(),
            MemoryDocument::with_elements(["result"]),
        );
        sim.login().unwrap();

        let storage = sim.storage();
        assert_eq!(storage.sets, 1);
        assert_eq!(storage.gets.get(), 0);
        assert_eq!(storage.removes, 0);
    }

    #[test]
    fn test_login_missing_element_after_store() {
        let mut sim = LoginSimulator::new(MemoryStorage::new(), MemoryDocument::new());

        let err = sim.login().unwrap_err();
        assert!(matches!(err, SsoError::ElementNotFound(ref id) if id == "result"));

        // Storage was written before the UI update failed
        let stored = sim.storage().get(STORAGE_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some(EXPECTED_JSON));
    }

    #[test]
    fn test_login_storage_failure_skips_ui() {
        let mut sim = LoginSimulator::new(
            FailingStorage,
            MemoryDocument::with_elements(["result"]),
        );

        let err = sim.login().unwrap_err();
        assert!(matches!(err, SsoError::Storage(_)));
        assert_eq!(sim.document().text("result"), Some(""));
    }

    #[test]
    fn test_login_with_borrowed_capabilities() {
        let mut storage = MemoryStorage::new();
        let mut doc = MemoryDocument::with_elements(["result"]);

        LoginSimulator::new(&mut storage, &mut doc).login().unwrap();

        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some(EXPECTED_JSON));
        assert_eq!(doc.text("result"), Some(CONFIRMATION_TEXT));
    }

    #[test]
    fn test_login_with_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = LoginSimulator::new(
            FileStorage::new(dir.path()),
            MemoryDocument::with_elements(["result"]),
        );
        sim.login().unwrap();

        let reopened = FileStorage::new(dir.path());
        assert_eq!(reopened.get(STORAGE_KEY).unwrap().as_deref(), Some(EXPECTED_JSON));
    }
}
