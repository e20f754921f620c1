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

use ades_status_tracker::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{BasicSignature, DigestAlgorithm, EncryptionAlgorithm},
    policy::PolicyValidate,
    Error, Result,
};

/// Acceptable algorithms, minimum key sizes and algorithm sunset dates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptographicConstraint {
    /// Level of the cryptographic checks. `None` disables them.
    pub level: Option<Level>,

    /// Encryption algorithms accepted at all.
    pub acceptable_encryption_algorithms: Vec<EncryptionAlgorithm>,

    /// Digest algorithms accepted at all.
    pub acceptable_digest_algorithms: Vec<DigestAlgorithm>,

    /// Minimum public key sizes per encryption algorithm.
    pub min_public_key_sizes: Vec<KeySizeConstraint>,

    /// Dates after which a digest algorithm is no longer reliable.
    pub digest_expirations: Vec<DigestExpiration>,

    /// Dates after which an encryption algorithm with keys of at least a
    /// given size is no longer reliable.
    pub encryption_expirations: Vec<EncryptionExpiration>,
}

/// Minimum key size for an encryption algorithm.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeySizeConstraint {
    pub algorithm: EncryptionAlgorithm,
    pub min_size: u32,
}

/// Sunset date of a digest algorithm.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigestExpiration {
    pub algorithm: DigestAlgorithm,
    pub expiration: DateTime<Utc>,
}

/// Sunset date of an encryption algorithm for keys of `key_size` bits or
/// more (up to the next configured size).
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptionExpiration {
    pub algorithm: EncryptionAlgorithm,
    pub key_size: u32,
    pub expiration: DateTime<Utc>,
}

/// Outcome of checking cryptographic material against a
/// [`CryptographicConstraint`] at a given time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptographicValidation {
    /// The material is reliable at `validation_time`.
    pub secure: bool,

    /// Description of the checked algorithms.
    pub algorithm: String,

    /// Earliest sunset date among the checked algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<DateTime<Utc>>,

    /// Time the material was checked at.
    pub validation_time: DateTime<Utc>,

    /// Identifier or description of the checked material.
    pub concerned_material: String,

    /// Why the material is not reliable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl CryptographicConstraint {
    /// Checks the algorithms and key length of a signature at `time`.
    pub fn check_signature(
        &self,
        signature: &BasicSignature,
        time: DateTime<Utc>,
        concerned_material: &str,
    ) -> CryptographicValidation {
        let mut result = CryptographicValidation {
            secure: true,
            algorithm: signature.describe(),
            not_after: None,
            validation_time: time,
            concerned_material: concerned_material.to_owned(),
            failure: None,
        };

        let Some(encryption) = signature
            .encryption_algorithm
            .filter(|alg| self.acceptable_encryption_algorithms.contains(alg))
        else {
            return result.insecure("the encryption algorithm is not acceptable");
        };

        let Some(digest) = signature
            .digest_algorithm
            .filter(|alg| self.acceptable_digest_algorithms.contains(alg))
        else {
            return result.insecure("the digest algorithm is not acceptable");
        };

        if let Some(min) = self
            .min_public_key_sizes
            .iter()
            .find(|c| c.algorithm == encryption)
        {
            if signature.key_length.map_or(true, |len| len < min.min_size) {
                return result.insecure("the public key size is too small");
            }
        }

        result.not_after = earliest(
            self.digest_expiration(digest),
            signature
                .key_length
                .and_then(|len| self.encryption_expiration(encryption, len)),
        );

        match result.not_after {
            Some(not_after) if not_after < time => {
                result.insecure("the algorithm is no longer considered reliable")
            }
            _ => result,
        }
    }

    /// Checks a digest algorithm at `time`.
    pub fn check_digest(
        &self,
        digest: Option<DigestAlgorithm>,
        time: DateTime<Utc>,
        concerned_material: &str,
    ) -> CryptographicValidation {
        let mut result = CryptographicValidation {
            secure: true,
            algorithm: digest.map(|d| d.name()).unwrap_or("?").to_owned(),
            not_after: None,
            validation_time: time,
            concerned_material: concerned_material.to_owned(),
            failure: None,
        };

        let Some(digest) = digest.filter(|alg| self.acceptable_digest_algorithms.contains(alg))
        else {
            return result.insecure("the digest algorithm is not acceptable");
        };

        result.not_after = self.digest_expiration(digest);
        match result.not_after {
            Some(not_after) if not_after < time => {
                result.insecure("the algorithm is no longer considered reliable")
            }
            _ => result,
        }
    }

    fn digest_expiration(&self, digest: DigestAlgorithm) -> Option<DateTime<Utc>> {
        self.digest_expirations
            .iter()
            .find(|e| e.algorithm == digest)
            .map(|e| e.expiration)
    }

    fn encryption_expiration(
        &self,
        encryption: EncryptionAlgorithm,
        key_length: u32,
    ) -> Option<DateTime<Utc>> {
        self.encryption_expirations
            .iter()
            .filter(|e| e.algorithm == encryption && e.key_size <= key_length)
            .max_by_key(|e| e.key_size)
            .map(|e| e.expiration)
    }
}

impl CryptographicValidation {
    /// Returns the sunset date of a failed check.
    pub fn not_after_if_insecure(&self) -> Option<DateTime<Utc>> {
        if self.secure {
            None
        } else {
            self.not_after
        }
    }

    fn insecure(self, reason: &str) -> Self {
        Self {
            secure: false,
            failure: Some(reason.to_owned()),
            ..self
        }
    }
}

impl PolicyValidate for CryptographicConstraint {
    fn validate(&self) -> Result<()> {
        if self.level.is_some()
            && (self.acceptable_encryption_algorithms.is_empty()
                || self.acceptable_digest_algorithms.is_empty())
        {
            return Err(Error::PolicyNotInitialised(
                "cryptographic constraint without acceptable algorithms".to_owned(),
            ));
        }
        Ok(())
    }
}

fn earliest(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
