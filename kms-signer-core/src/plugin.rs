//! Plugin traits for issuer signing.
//!
//! Two seams are defined here:
//! - [`KmsClient`]: the narrow capability a remote key-management service must
//!   offer (describe a key, sign a raw message). Vendor adapters and test
//!   doubles implement it.
//! - [`IssuerSigner`]: what a certificate or token issuer consumes. Any signer
//!   (remote, local, hardware) can sit behind it;
//!   [`KmsIssuerSigner`](crate::KmsIssuerSigner) is the KMS-backed one.
//!
//! # Examples
//!
//! Implementing a client for a custom service:
//!
//! ```rust,no_run
//! use kms_signer_core::{BoxError, KeyMetadata, KmsClient, SigningAlgorithm};
//!
//! struct HttpKms {
//!     // Endpoint, credentials...
//! }
//!
//! #[async_trait::async_trait]
//! impl KmsClient for HttpKms {
//!     async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata, BoxError> {
//!         // Fetch the key's metadata...
//!         todo!()
//!     }
//!
//!     async fn sign(
//!         &self,
//!         key_id: &str,
//!         message: &[u8],
//!         algorithm: SigningAlgorithm,
//!     ) -> Result<Vec<u8>, BoxError> {
//!         // Ask the service to hash and sign `message`...
//!         todo!()
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::{
    error::{BoxError, Result},
    types::{KeyMetadata, SigningAlgorithm},
};

/// A remote key-management service holding asymmetric signing keys.
#[async_trait]
pub trait KmsClient: Send + Sync {
    /// Fetches the metadata of a key, including its supported signing algorithms.
    ///
    /// # Errors
    /// - If the key does not exist or access is denied
    /// - If the service cannot be reached
    async fn describe_key(&self, key_id: &str) -> std::result::Result<KeyMetadata, BoxError>;

    /// Signs `message` with the key.
    ///
    /// The message is sent in raw mode: the service applies the digest of
    /// `algorithm` itself. The returned bytes are whatever the service
    /// produced (DER-encoded ECDSA for the common services).
    ///
    /// # Errors
    /// - If the key cannot be used with `algorithm`
    /// - On network, authorization or throttling failures
    async fn sign(
        &self,
        key_id: &str,
        message: &[u8],
        algorithm: SigningAlgorithm,
    ) -> std::result::Result<Vec<u8>, BoxError>;
}

/// Signs issued tokens and certificates.
#[async_trait]
pub trait IssuerSigner: Send + Sync {
    /// Returns the URL verifiers fetch the public key from.
    ///
    /// # Errors
    /// Implementations that derive the URL may fail; a configured URL never does.
    fn key_url(&self) -> Result<String>;

    /// Signs `message` and returns the raw signature bytes.
    ///
    /// # Errors
    /// See [`Error`](crate::Error) for the failure kinds.
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: IssuerSigner + ?Sized> IssuerSigner for std::sync::Arc<T> {
    fn key_url(&self) -> Result<String> {
        (**self).key_url()
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        (**self).sign(message).await
    }
}

#[async_trait]
impl<T: KmsClient + ?Sized> KmsClient for std::sync::Arc<T> {
    async fn describe_key(&self, key_id: &str) -> std::result::Result<KeyMetadata, BoxError> {
        (**self).describe_key(key_id).await
    }

    async fn sign(
        &self,
        key_id: &str,
        message: &[u8],
        algorithm: SigningAlgorithm,
    ) -> std::result::Result<Vec<u8>, BoxError> {
        (**self).sign(key_id, message, algorithm).await
    }
}
