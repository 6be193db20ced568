//! Bearer-key verification seam
//!
//! The HTTP layer extracts the bearer key and asks the host's verifier;
//! when no verifier is configured, requests pass through unchecked.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Host-supplied predicate over the bearer API key
#[async_trait]
pub trait KeyVerifier: Send + Sync {
    /// Whether the presented key grants access
    async fn verify(&self, key: &str) -> bool;
}

/// Verifier backed by a fixed set of accepted keys
pub struct StaticKeys {
    keys: Vec<SecretString>,
}

impl StaticKeys {
    /// Build a verifier from the given keys
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(|key| SecretString::from(key.into())).collect(),
        }
    }
}

#[async_trait]
impl KeyVerifier for StaticKeys {
    async fn verify(&self, key: &str) -> bool {
        self.keys.iter().any(|candidate| candidate.expose_secret() == key)
    }
}
