use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key under which the serialized credentials are persisted
pub const STORAGE_KEY: &str = "sso_credentials";

const FAKE_ACCESS_TOKEN: &str = "fake-access-token";
const FAKE_ID_TOKEN: &str = "fake-id-token";

/// Lifetime reported for the fabricated tokens, in seconds
const FAKE_EXPIRES_IN: u64 = 3600;

/// OIDC-style token set produced by a simulated login.
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub id_token: String,
    pub expires_in: u64,
}

impl Credentials {
    /// The fixed placeholder credentials. No tokens are issued or signed.
    pub fn fake() -> Self {
        Self {
            access_token: FAKE_ACCESS_TOKEN.to_string(),
            id_token: FAKE_ID_TOKEN.to_string(),
            expires_in: FAKE_EXPIRES_IN,
        }
    }

    /// Compact JSON, as written to storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
