//! Error types for the kms-signer-aws crate.

use aws_sdk_kms::error::SdkError;
use aws_sdk_kms::operation::{describe_key::DescribeKeyError, sign::SignError};
use thiserror::Error;

/// Failures talking to AWS KMS.
///
/// These surface as the `source()` of the
/// [`kms_signer_core::Error`] returned by the signer.
#[derive(Error, Debug)]
pub enum Error {
    /// The `DescribeKey` call failed.
    #[error("DescribeKey failed: {0}")]
    DescribeKey(#[from] SdkError<DescribeKeyError>),

    /// The `Sign` call failed.
    #[error("Sign failed: {0}")]
    Sign(#[from] SdkError<SignError>),

    /// The `Sign` response carried no signature.
    #[error("Sign response for key {0} carried no signature")]
    MissingSignature(String),
}
