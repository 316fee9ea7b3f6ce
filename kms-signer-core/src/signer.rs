//! KMS-backed issuer signer.
//!
//! [`KmsIssuerSigner`] signs payloads with a key that never leaves the remote
//! service. The signing algorithm is either configured up front or resolved
//! on first use by describing the key; in both cases it is validated against
//! the ECDSA allow-list before any sign request goes out.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kms_signer_core::{IssuerSigner, KmsClient, KmsIssuerSigner, SignerConfig};
//!
//! async fn issue(client: impl KmsClient) -> kms_signer_core::Result<Vec<u8>> {
//!     let config = SignerConfig::new("alias/issuer", "https://keys.example.com/issuer.pem");
//!     let signer = KmsIssuerSigner::new(config, client);
//!
//!     // First call describes the key to learn its algorithm, later calls reuse it
//!     signer.sign(b"header.claims").await
//! }
//! ```

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::{
    config::SignerConfig,
    error::{BoxError, Error, ResolutionError, Result},
    plugin::{IssuerSigner, KmsClient},
    types::SigningAlgorithm,
};

/// Signs with a key held by a remote key-management service.
///
/// The algorithm cell is written at most once: concurrent first callers share
/// a single `describe_key` request. A failed lookup leaves it empty.
#[derive(Debug)]
pub struct KmsIssuerSigner<C> {
    key_id: String,
    public_key_url: String,
    client: C,
    signing_algorithm: OnceCell<String>,
    request_timeout: Option<Duration>,
}

impl<C: KmsClient> KmsIssuerSigner<C> {
    /// Creates a signer from its configuration and a service client.
    ///
    /// An empty configured algorithm is treated as unset.
    pub fn new(config: SignerConfig, client: C) -> Self {
        let request_timeout = config.request_timeout();
        let configured = config.signing_algorithm.filter(|name| !name.is_empty());

        Self {
            key_id: config.key_id,
            public_key_url: config.public_key_url,
            client,
            signing_algorithm: OnceCell::new_with(configured),
            request_timeout,
        }
    }

    /// The identifier of the remote key.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The signing algorithm name, once configured or resolved.
    pub fn signing_algorithm(&self) -> Option<&str> {
        self.signing_algorithm.get().map(String::as_str)
    }

    /// The underlying service client.
    pub fn client(&self) -> &C {
        &self.client
    }

    async fn resolve_algorithm(&self) -> Result<&str> {
        let name = self
            .signing_algorithm
            .get_or_try_init(|| async {
                debug!(key_id = %self.key_id, "describing key to resolve signing algorithm");

                let metadata = self
                    .with_deadline(self.client.describe_key(&self.key_id))
                    .await
                    .map_err(ResolutionError::Lookup)?;

                let mut candidates = metadata.signing_algorithms;
                if candidates.len() != 1 {
                    warn!(
                        key_id = %self.key_id,
                        ?candidates,
                        "cannot pick a signing algorithm automatically"
                    );
                    return Err(ResolutionError::Ambiguous { candidates });
                }

                let name = candidates.remove(0);
                info!(key_id = %self.key_id, algorithm = %name, "resolved signing algorithm");
                Ok(name)
            })
            .await?;

        Ok(name.as_str())
    }

    async fn with_deadline<T, F>(&self, request: F) -> std::result::Result<T, BoxError>
    where
        F: Future<Output = std::result::Result<T, BoxError>>,
    {
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|elapsed| Box::new(elapsed) as BoxError)?,
            None => request.await,
        }
    }
}

#[async_trait]
impl<C: KmsClient> IssuerSigner for KmsIssuerSigner<C> {
    fn key_url(&self) -> Result<String> {
        Ok(self.public_key_url.clone())
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let algorithm: SigningAlgorithm = self.resolve_algorithm().await?.parse()?;

        debug!(
            key_id = %self.key_id,
            %algorithm,
            message_len = message.len(),
            "requesting remote signature"
        );

        self.with_deadline(self.client.sign(&self.key_id, message, algorithm))
            .await
            .map_err(|e| {
                warn!(key_id = %self.key_id, %algorithm, error = %e, "remote signing failed");
                Error::RemoteSigning(e)
            })
    }
}
