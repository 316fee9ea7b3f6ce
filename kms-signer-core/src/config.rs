//! Signer configuration.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the key identifier.
pub const ENV_KEY_ID: &str = "KMS_KEY_ID";
/// Environment variable holding the public key URL.
pub const ENV_PUBLIC_KEY_URL: &str = "KMS_PUBLIC_KEY_URL";
/// Environment variable holding the pre-selected signing algorithm.
pub const ENV_SIGNING_ALGORITHM: &str = "KMS_SIGNING_ALGORITHM";
/// Environment variable holding the per-request timeout in milliseconds.
pub const ENV_REQUEST_TIMEOUT_MS: &str = "KMS_REQUEST_TIMEOUT_MS";

/// Configuration for a [`KmsIssuerSigner`](crate::KmsIssuerSigner).
///
/// # Examples
///
/// ```rust
/// use kms_signer_core::SignerConfig;
/// use std::time::Duration;
///
/// let config = SignerConfig::new("alias/issuer", "https://keys.example.com/issuer.pem")
///     .with_signing_algorithm("ECDSA_SHA_256")
///     .with_request_timeout(Duration::from_millis(1500));
///
/// assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Identifier of the remote key (id, ARN or alias)
    pub key_id: String,

    /// URL verifiers fetch the public key from, returned verbatim
    #[serde(default)]
    pub public_key_url: String,

    /// Signing algorithm to use instead of asking the service.
    ///
    /// Not cross-checked against the key; the service rejects a mismatch at
    /// sign time.
    #[serde(default)]
    pub signing_algorithm: Option<String>,

    /// Upper bound for each remote call, in milliseconds. Zero means unbounded.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl SignerConfig {
    /// Create a configuration that resolves the algorithm from the key.
    pub fn new(key_id: impl Into<String>, public_key_url: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            public_key_url: public_key_url.into(),
            signing_algorithm: None,
            request_timeout_ms: None,
        }
    }

    /// Pre-select the signing algorithm
    #[must_use]
    pub fn with_signing_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.signing_algorithm = Some(algorithm.into());
        self
    }

    /// Bound each remote call.
    ///
    /// Sub-millisecond parts round up to the next millisecond. A zero
    /// duration removes the bound.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.request_timeout_ms = match u64::try_from(millis) {
            Ok(0) => None,
            Ok(millis) => Some(millis),
            Err(_) => Some(u64::MAX),
        };
        self
    }

    /// The per-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms
            .filter(|millis| *millis > 0)
            .map(Duration::from_millis)
    }

    /// Load the configuration from `KMS_*` environment variables.
    ///
    /// # Errors
    /// - If `KMS_KEY_ID` is unset or empty
    /// - If any variable is not valid unicode
    /// - If `KMS_REQUEST_TIMEOUT_MS` is not a positive integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> std::result::Result<String, VarError>,
    ) -> Result<Self> {
        let var = |name: &str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::InvalidConfig(format!(
                "{name} is not valid unicode"
            ))),
        };

        let key_id = var(ENV_KEY_ID)?
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::InvalidConfig(format!("{ENV_KEY_ID} is not set")))?;

        let request_timeout_ms = var(ENV_REQUEST_TIMEOUT_MS)?
            .map(|value| match value.trim().parse::<u64>() {
                Ok(0) => Err(Error::InvalidConfig(format!(
                    "{ENV_REQUEST_TIMEOUT_MS} must be greater than zero"
                ))),
                Ok(millis) => Ok(millis),
                Err(e) => Err(Error::InvalidConfig(format!(
                    "{ENV_REQUEST_TIMEOUT_MS}={value:?}: {e}"
                ))),
            })
            .transpose()?;

        Ok(Self {
            key_id,
            public_key_url: var(ENV_PUBLIC_KEY_URL)?.unwrap_or_default(),
            signing_algorithm: var(ENV_SIGNING_ALGORITHM)?.filter(|value| !value.is_empty()),
            request_timeout_ms,
        })
    }
}
