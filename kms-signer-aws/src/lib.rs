//! AWS KMS backend for `kms-signer-core`.
//!
//! This crate provides [`AwsKmsClient`], a [`KmsClient`](kms_signer_core::KmsClient)
//! that talks to AWS KMS through `aws-sdk-kms`, and helpers that build a ready
//! [`KmsIssuerSigner`] from configuration.
//!
//! Sign requests always use `MessageType::Raw`: KMS hashes the payload with
//! the digest of the selected ECDSA algorithm before signing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kms_signer_aws::connect;
//! use kms_signer_core::{IssuerSigner, SignerConfig};
//!
//! async fn example() -> kms_signer_core::Result<()> {
//!     let config = SignerConfig::new("alias/token-issuer", "https://issuer.example.com/key.pem");
//!     let signer = connect(config).await;
//!
//!     let signature = signer.sign(b"header.claims").await?;
//!     let key_url = signer.key_url()?;
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;


use kms_signer_core::{KmsIssuerSigner, SignerConfig};

// Re-export main types for convenience
pub use client::AwsKmsClient;
pub use error::Error;

/// A [`KmsIssuerSigner`] backed by AWS KMS.
pub type AwsKmsIssuerSigner = KmsIssuerSigner<AwsKmsClient>;

/// Builds a signer using the default AWS provider chain.
pub async fn connect(config: SignerConfig) -> AwsKmsIssuerSigner {
    KmsIssuerSigner::new(config, AwsKmsClient::from_env().await)
}

/// Builds a signer configured entirely from the environment.
///
/// # Errors
/// If the `KMS_*` variables do not form a valid [`SignerConfig`].
pub async fn connect_from_env() -> kms_signer_core::Result<AwsKmsIssuerSigner> {
    let config = SignerConfig::from_env()?;
    Ok(connect(config).await)
}
