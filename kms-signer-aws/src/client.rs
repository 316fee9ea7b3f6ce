//! [`KmsClient`] over the AWS SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kms::primitives::Blob;
use aws_sdk_kms::types::{MessageType, SigningAlgorithmSpec};
use aws_sdk_kms::Client;
use kms_signer_core::{BoxError, KeyMetadata, KmsClient, SigningAlgorithm};
use tracing::debug;

use crate::error::Error;

/// AWS KMS, reached through an [`aws_sdk_kms::Client`].
///
/// Retries, timeouts and credentials are whatever the SDK client was
/// configured with.
#[derive(Debug, Clone)]
pub struct AwsKmsClient {
    client: Client,
}

impl AwsKmsClient {
    /// Wraps an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS provider chain
    /// (environment, profile, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        debug!(region = ?config.region(), "loaded AWS configuration");
        Self::new(Client::new(&config))
    }
}

/// Maps an allowed algorithm onto the SDK enum.
pub(crate) fn signing_algorithm_spec(algorithm: SigningAlgorithm) -> SigningAlgorithmSpec {
    match algorithm {
        SigningAlgorithm::EcdsaSha256 => SigningAlgorithmSpec::EcdsaSha256,
        SigningAlgorithm::EcdsaSha384 => SigningAlgorithmSpec::EcdsaSha384,
        SigningAlgorithm::EcdsaSha512 => SigningAlgorithmSpec::EcdsaSha512,
    }
}

#[async_trait]
impl KmsClient for AwsKmsClient {
    async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata, BoxError> {
        let output = self
            .client
            .describe_key()
            .key_id(key_id)
            .send()
            .await
            .map_err(Error::from)?;

        // No metadata means no algorithms, which the signer rejects
        let metadata = match output.key_metadata() {
            Some(metadata) => KeyMetadata::new(
                metadata.key_id(),
                metadata
                    .signing_algorithms()
                    .iter()
                    .map(|spec| spec.as_str().to_string()),
            ),
            None => KeyMetadata::new(key_id, Vec::<String>::new()),
        };

        Ok(metadata)
    }

    async fn sign(
        &self,
        key_id: &str,
        message: &[u8],
        algorithm: SigningAlgorithm,
    ) -> Result<Vec<u8>, BoxError> {
        let output = self
            .client
            .sign()
            .key_id(key_id)
            .message(Blob::new(message))
            .message_type(MessageType::Raw)
            .signing_algorithm(signing_algorithm_spec(algorithm))
            .send()
            .await
            .map_err(Error::from)?;

        let signature = output
            .signature()
            .ok_or_else(|| Error::MissingSignature(key_id.to_string()))?;

        Ok(signature.as_ref().to_vec())
    }
}
