use keyring::Entry;
use tracing::{debug, warn};

use super::KeyValueStorage;
use crate::error::{Result, SsoError};

const SERVICE_NAME: &str = "ssosim";

/// Entry written and read back by `open` to confirm values are retained
const CHECK_ENTRY: &str = "__ssosim_check__";
const CHECK_VALUE: &str = "ok";

/// Storage backed by the OS keychain, one entry per key.
#[derive(Debug, Clone)]
pub struct KeychainStorage {
    service: String,
}

impl KeychainStorage {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Open the default service, failing if the platform keychain does not
    /// keep what is written to it (e.g. no native store is available and
    /// keyring fell back to its in-process mock).
    pub fn open() -> Result<Self> {
        let storage = Self::new();
        storage.verify()?;
        Ok(storage)
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Ok(Entry::new(&self.service, key)?)
    }

    /// Write a check value through one entry and read it through another
    fn verify(&self) -> Result<()> {
        self.entry(CHECK_ENTRY)?.set_password(CHECK_VALUE)?;
        let read_back = match self.entry(CHECK_ENTRY)?.get_password() {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = self.entry(CHECK_ENTRY)?.delete_credential() {
            debug!(error = %e, "Failed to remove keychain check entry");
        }

        if read_back.as_deref() != Some(CHECK_VALUE) {
            warn!(service = %self.service, "Keychain does not retain values");
            return Err(SsoError::Storage(
                "OS keychain is not available: written values are not retained".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KeychainStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for KeychainStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entry(key)?.set_password(value)?;
        debug!(key, service = %self.service, "Stored value in keychain");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        "keyring"
    }
}
