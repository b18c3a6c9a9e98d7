//! Credential and shared-secret value types.
//!
//! # Invariants
//! - A [`ConfiguredSecret`] is never set to the empty string.
//! - Neither type prints its contents through `Debug`.

use serde_json::Value;

/// An API key presented by a caller.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

/// Body field carrying the credential.
const API_KEY_FIELD: &str = "apiKey";

impl Credential {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extract the credential from a raw request body.
    ///
    /// The body is expected to be a JSON object with an optional string
    /// field `apiKey`. An empty body, invalid JSON, a non-object value, or a
    /// non-string `apiKey` all mean no credential was presented.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return None;
        };
        match fields.remove(API_KEY_FIELD) {
            Some(Value::String(key)) => Some(Self(key)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(..{} bytes)", self.0.len())
    }
}

/// The shared secret a deployment is configured with, if any.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfiguredSecret(Option<String>);

impl ConfiguredSecret {
    /// No secret configured.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Wrap a raw configuration value. An empty string counts as unset.
    #[must_use]
    pub fn new(value: Option<String>) -> Self {
        Self(value.filter(|secret| !secret.is_empty()))
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Whether `credential` equals the secret.
    ///
    /// Always false when the secret is unset. Runs in time independent of
    /// where the first differing byte is.
    #[must_use]
    pub fn matches(&self, credential: &Credential) -> bool {
        self.0
            .as_deref()
            .is_some_and(|secret| constant_time_eq(secret.as_bytes(), credential.0.as_bytes()))
    }
}

impl From<&str> for ConfiguredSecret {
    fn from(value: &str) -> Self {
        Self::new(Some(value.to_string()))
    }
}

impl std::fmt::Debug for ConfiguredSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_set() {
            write!(f, "ConfiguredSecret(<set>)")
        } else {
            write!(f, "ConfiguredSecret(<unset>)")
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
