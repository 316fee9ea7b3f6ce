//! Signing algorithm and key metadata types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The ECDSA signing algorithms a remote key may be used with.
///
/// Any other algorithm reported by the service (RSA, SM2, ...) is rejected
/// before a sign request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// ECDSA with SHA-256
    #[serde(rename = "ECDSA_SHA_256")]
    EcdsaSha256,
    /// ECDSA with SHA-384
    #[serde(rename = "ECDSA_SHA_384")]
    EcdsaSha384,
    /// ECDSA with SHA-512
    #[serde(rename = "ECDSA_SHA_512")]
    EcdsaSha512,
}

impl SigningAlgorithm {
    /// Every supported algorithm, in ascending digest size.
    pub const ALL: [SigningAlgorithm; 3] = [Self::EcdsaSha256, Self::EcdsaSha384, Self::EcdsaSha512];

    /// The name the remote service uses for this algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EcdsaSha256 => "ECDSA_SHA_256",
            Self::EcdsaSha384 => "ECDSA_SHA_384",
            Self::EcdsaSha512 => "ECDSA_SHA_512",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ECDSA_SHA_256" => Ok(Self::EcdsaSha256),
            "ECDSA_SHA_384" => Ok(Self::EcdsaSha384),
            "ECDSA_SHA_512" => Ok(Self::EcdsaSha512),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Metadata the remote service reports for a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMetadata {
    /// The key identifier as reported by the service (may be a full ARN)
    pub key_id: String,
    /// Names of the signing algorithms the key supports
    pub signing_algorithms: Vec<String>,
}

impl KeyMetadata {
    /// Create metadata for a key
    pub fn new(
        key_id: impl Into<String>,
        signing_algorithms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            signing_algorithms: signing_algorithms.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for algorithm in SigningAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<SigningAlgorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.as_str());
        }
    }

    #[test]
    fn rejects_non_ecdsa_names() {
        for name in ["RSASSA_PSS_SHA_256", "ECDSA_SHA_224", "ecdsa_sha_256", ""] {
            match name.parse::<SigningAlgorithm>() {
                Err(Error::UnsupportedAlgorithm(found)) => assert_eq!(found, name),
                other => panic!("expected UnsupportedAlgorithm for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn serde_uses_service_names() {
        let json = serde_json::to_string(&SigningAlgorithm::EcdsaSha384).unwrap();
        assert_eq!(json, "\"ECDSA_SHA_384\"");
        let parsed: SigningAlgorithm = serde_json::from_str("\"ECDSA_SHA_512\"").unwrap();
        assert_eq!(parsed, SigningAlgorithm::EcdsaSha512);
    }
}
