//! Commonly used types and traits.
//!
//! Import everything with `use kms_signer_core::prelude::*`.
//!
//! # Example
//!
//! ```rust
//! use kms_signer_core::prelude::*;
//!
//! async fn sign_token(signer: &dyn IssuerSigner, claims: &[u8]) -> Result<(String, Vec<u8>)> {
//!     Ok((signer.key_url()?, signer.sign(claims).await?))
//! }
//! ```

pub use crate::config::SignerConfig;
pub use crate::error::{BoxError, Error, ResolutionError, Result};
pub use crate::plugin::{IssuerSigner, KmsClient};
pub use crate::signer::KmsIssuerSigner;
pub use crate::types::{KeyMetadata, SigningAlgorithm};
