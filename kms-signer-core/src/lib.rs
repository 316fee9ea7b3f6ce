//! Issuer signing backed by a remote key-management service.
//!
//! This crate lets a certificate or token issuer sign payloads with a key that
//! never leaves a remote KMS. Callers do not need to know which ECDSA
//! algorithm the key uses: it is resolved from the key's metadata on first use.
//!
//! # Features
//!
//! - [`IssuerSigner`] trait shared by every signer implementation
//! - [`KmsIssuerSigner`], generic over any [`KmsClient`]
//! - Lazy, single-flight signing algorithm resolution
//! - ECDSA allow-list (`ECDSA_SHA_256`, `ECDSA_SHA_384`, `ECDSA_SHA_512`)
//! - Optional per-request timeouts
//! - [`mock::StaticKms`] for tests
//!
//! # Architecture
//!
//! - `plugin`: the [`KmsClient`] and [`IssuerSigner`] traits
//! - `signer`: the KMS-backed signer
//! - `types`: [`SigningAlgorithm`] and [`KeyMetadata`]
//! - `config`: [`SignerConfig`]
//! - `error`: Error types and handling
//!
//! Vendor adapters (such as `kms-signer-aws`) implement [`KmsClient`].
//!
//! # Examples
//!
//! ```rust
//! use kms_signer_core::{mock::StaticKms, IssuerSigner, KmsIssuerSigner, SignerConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> kms_signer_core::Result<()> {
//! let config = SignerConfig::new("alias/issuer", "https://keys.example.com/issuer.pem");
//! let signer = KmsIssuerSigner::new(config, StaticKms::new(["ECDSA_SHA_256"]));
//!
//! let signature = signer.sign(b"header.claims").await?;
//! assert_eq!(signer.signing_algorithm(), Some("ECDSA_SHA_256"));
//! assert_eq!(signer.key_url()?, "https://keys.example.com/issuer.pem");
//! # let _ = signature;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod mock;
pub mod plugin;
pub mod prelude;
pub mod signer;
pub mod types;


pub use config::SignerConfig;
pub use error::{BoxError, Error, ResolutionError, Result};
pub use plugin::{IssuerSigner, KmsClient};
pub use signer::KmsIssuerSigner;
pub use types::{KeyMetadata, SigningAlgorithm};
