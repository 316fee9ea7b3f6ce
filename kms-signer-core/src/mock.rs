//! In-memory KMS double.
//!
//! [`StaticKms`] answers `describe_key` with a fixed algorithm list and `sign`
//! with a fixed signature, and counts every call. It is deterministic, so it
//! suits tests that assert signatures are passed through untouched.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{
    error::BoxError,
    plugin::KmsClient,
    types::{KeyMetadata, SigningAlgorithm},
};

/// A sign request observed by [`StaticKms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    /// Key the request was made against
    pub key_id: String,
    /// Raw message bytes
    pub message: Vec<u8>,
    /// Requested algorithm
    pub algorithm: SigningAlgorithm,
}

/// A KMS that always reports the same algorithms and signature.
#[derive(Debug, Default)]
pub struct StaticKms {
    signing_algorithms: Vec<String>,
    signature: Vec<u8>,
    describe_failures: AtomicUsize,
    fail_sign: bool,
    describe_calls: AtomicUsize,
    sign_requests: Mutex<Vec<SignRequest>>,
}

impl StaticKms {
    /// Creates a KMS whose key supports `signing_algorithms`.
    pub fn new(signing_algorithms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            signing_algorithms: signing_algorithms.into_iter().map(Into::into).collect(),
            signature: b"static-signature".to_vec(),
            ..Self::default()
        }
    }

    /// Returns `signature` from every sign call.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Fails the next `count` describe calls.
    #[must_use]
    pub fn failing_describe(self, count: usize) -> Self {
        self.describe_failures.store(count, Ordering::SeqCst);
        self
    }

    /// Fails every sign call.
    #[must_use]
    pub fn failing_sign(mut self) -> Self {
        self.fail_sign = true;
        self
    }

    /// Number of `describe_key` calls received.
    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }

    /// Number of `sign` calls received.
    pub fn sign_calls(&self) -> usize {
        self.sign_requests().len()
    }

    /// Every sign request received, oldest first.
    pub fn sign_requests(&self) -> Vec<SignRequest> {
        self.sign_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl KmsClient for StaticKms {
    async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata, BoxError> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);

        let failed = self
            .describe_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            return Err(format!("describe {key_id}: service unavailable").into());
        }

        Ok(KeyMetadata::new(key_id, self.signing_algorithms.clone()))
    }

    async fn sign(
        &self,
        key_id: &str,
        message: &[u8],
        algorithm: SigningAlgorithm,
    ) -> Result<Vec<u8>, BoxError> {
        if let Ok(mut requests) = self.sign_requests.lock() {
            requests.push(SignRequest {
                key_id: key_id.to_string(),
                message: message.to_vec(),
                algorithm,
            });
        }

        if self.fail_sign {
            return Err(format!("sign {key_id}: access denied").into());
        }
        Ok(self.signature.clone())
    }
}
