// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use thiserror::Error;

use crate::tsl::CacheState;

/// `Error` enumerates errors returned by most ades-validation functions.
///
/// Failed or inconclusive constraints are not errors. They are reported as
/// [`Conclusion`](crate::Conclusion)s in the validation reports. The errors
/// below are configuration problems or programming defects.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The validation policy lacks a value required to run the validation.
    #[error("validation policy is not initialised: {0}")]
    PolicyNotInitialised(String),

    /// The diagnostic data lacks a value required to run the validation.
    #[error("diagnostic data is not initialised: {0}")]
    DiagnosticDataNotInitialised(String),

    /// A token referenced by id is not part of the diagnostic data.
    #[error("unknown token referenced: {0}")]
    UnknownToken(String),

    /// An evidence record carries no digest matcher at all.
    #[error("evidence record {0} does not contain any digest matcher")]
    EmptyEvidenceRecord(String),

    /// A cache entry was asked to perform a transition its current state
    /// does not define.
    #[error("transition from {from} to {to} is not allowed")]
    IllegalStateTransition {
        /// State of the entry before the attempt.
        from: CacheState,

        /// Requested state.
        to: CacheState,
    },

    /// The refresh of a trusted list stopped unexpectedly.
    #[error("refresh of {0} aborted")]
    RefreshAborted(String),

    /// The policy could not be read or deserialized.
    #[error("could not parse validation policy: {0}")]
    PolicyParsing(#[from] config::ConfigError),

    /// The policy file format is not supported.
    #[error("unsupported policy format: {0}")]
    UnsupportedPolicyFormat(String),

    /// Unable to read a file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// A DER certificate could not be decoded.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// No extension stage is registered for a step of the requested level.
    #[error("no extension stage registered for {0}")]
    MissingExtensionStage(String),

    /// An extension stage failed.
    #[error("extension stage {stage} failed: {reason}")]
    ExtensionFailed {
        /// Name of the failing stage.
        stage: &'static str,

        /// Description of the failure.
        reason: String,
    },
}

/// A specialized `Result` type for ades-validation operations.
pub type Result<T> = std::result::Result<T, Error>;
