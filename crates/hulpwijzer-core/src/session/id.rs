use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{HulpwijzerError, Result};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 11;

/// Opaque, non-empty session identifier.
///
/// Generated values look like `sess_k3j9x0q1z8a_1767225600000`: a prefix tag,
/// a random base-36 component and the creation time in Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Wraps an existing identifier. Blank input is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(HulpwijzerError::InvalidSessionId(value));
        }
        Ok(Self(value))
    }

    /// Generates a fresh identifier with the given prefix tag.
    pub fn generate(prefix: &str) -> Self {
        let mut rng = rand::thread_rng();
        let random: String = (0..RANDOM_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{prefix}_{random}_{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SessionId {
    type Error = HulpwijzerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
