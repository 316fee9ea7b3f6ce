//! Error types for the kms-signer-core crate.

use thiserror::Error;

/// Boxed error returned by [`KmsClient`](crate::KmsClient) implementations.
///
/// The signer never inspects it; it is carried as the `source()` of the
/// [`Error`] variant describing which remote call failed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for signing operations
#[derive(Debug, Error)]
pub enum Error {
    /// The signing algorithm of the key could not be determined
    #[error("unable to determine signing algorithm: {0}")]
    AlgorithmResolution(#[from] ResolutionError),

    /// The resolved or configured algorithm is outside the ECDSA allow-list
    #[error(
        "unsupported signing algorithm. Supported: ECDSA_SHA_256, ECDSA_SHA_384 & ECDSA_SHA_512. Found: {0}"
    )]
    UnsupportedAlgorithm(String),

    /// The remote sign call failed
    #[error("remote signing failed: {0}")]
    RemoteSigning(#[source] BoxError),

    /// The signer configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Reasons the signing algorithm of a key could not be resolved.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The key metadata lookup failed
    #[error("key lookup failed: {0}")]
    Lookup(#[source] BoxError),

    /// The key does not advertise exactly one signing algorithm
    #[error("expected exactly one signing algorithm, key advertises {candidates:?}")]
    Ambiguous {
        /// Algorithm names reported by the service
        candidates: Vec<String>,
    },
}

/// Result type for signing operations
pub type Result<T> = std::result::Result<T, Error>;
