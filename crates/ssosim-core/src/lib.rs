//! Core library for ssosim.
//!
//! Simulates an SSO login: fabricated OIDC-style credentials are written to
//! an injected key-value store and a confirmation is written to an injected
//! document. No network traffic and no real token issuance take place.
//!
//! - `credentials`: the credential record and its storage key
//! - `storage`: key-value storage capability and backends
//! - `document`: UI text capability
//! - `login`: the `LoginSimulator`
//! - `config`: backend selection and paths

pub mod config;
pub mod credentials;
pub mod document;
pub mod error;
pub mod login;
pub mod storage;

pub use config::{Backend, Config};
pub use credentials::{Credentials, STORAGE_KEY};
pub use document::{Document, MemoryDocument};
pub use error::{Result, SsoError};
pub use login::{LoginSimulator, CONFIRMATION_TEXT, RESULT_ELEMENT_ID};
pub use storage::{FileStorage, KeyValueStorage, KeychainStorage, MemoryStorage};
