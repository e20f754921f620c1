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

//! Validation policy: which checks run, at which [`Level`], and with which
//! cryptographic suite.
//!
//! A policy is plain data. It can be loaded from JSON or TOML with
//! [`ValidationPolicy::from_string`] or [`ValidationPolicy::from_file`];
//! the document only needs to carry the values that differ from
//! [`ValidationPolicy::default`].

use std::path::Path;

use ades_status_tracker::Level;
use chrono::{Duration, TimeZone, Utc};
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{DigestAlgorithm, EncryptionAlgorithm},
    Error, Result,
};

mod cryptographic;
pub use cryptographic::{
    CryptographicConstraint, CryptographicValidation, DigestExpiration, EncryptionExpiration,
    KeySizeConstraint,
};

// trait used to check that a loaded policy can drive a validation
pub(crate) trait PolicyValidate {
    // returns error if the policy is not usable
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Kind of token a set of constraints applies to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    /// A signature.
    Signature,

    /// A counter-signature.
    CounterSignature,

    /// A time-stamp.
    Timestamp,

    /// A CRL or OCSP response.
    Revocation,

    /// An evidence record.
    EvidenceRecord,
}

/// Position of a certificate within the chain of the validated token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubContext {
    /// The certificate that signed the token.
    SigningCert,

    /// Any certificate above the signing certificate.
    CaCertificate,
}

/// A constraint on a list of values, such as commitment types.
///
/// An empty `values` list only requires the attribute to be present.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiValuesConstraint {
    pub level: Level,
    #[serde(default)]
    pub values: Vec<String>,
}

/// A constraint on the age of a piece of data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeConstraint {
    /// Level of the check.
    pub level: Level,

    /// Maximum age in seconds. When absent, the data's own validity window
    /// is used where one exists.
    #[serde(default)]
    pub max_age_seconds: Option<i64>,
}

impl TimeConstraint {
    /// Returns the maximum age as a duration.
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age_seconds.map(Duration::seconds)
    }
}

/// A constraint requiring an exact value.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueConstraint {
    pub level: Level,
    pub value: u32,
}

/// Constraints applied to one certificate of a token's chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateConstraints {
    /// The certificate signature is intact.
    pub signature: Option<Level>,

    /// The validation time is within the certificate validity range.
    pub validity_range: Option<Level>,

    /// Revocation data is available for the certificate.
    pub revocation_data_available: Option<Level>,

    /// The revocation data is fresh.
    pub revocation_freshness: Option<TimeConstraint>,

    /// The certificate is not revoked.
    pub not_revoked: Option<Level>,

    /// The certificate is not suspended.
    pub not_on_hold: Option<Level>,

    /// Cryptographic suite overriding the context's.
    pub cryptographic: Option<CryptographicConstraint>,
}

/// Constraints applied by the basic building blocks to one kind of token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSignatureConstraints {
    /// Every referenced data object is found.
    pub reference_data_existence: Option<Level>,

    /// Every found data object is intact.
    pub reference_data_intact: Option<Level>,

    /// The signature value is intact.
    pub signature_intact: Option<Level>,

    /// The signature is structurally valid.
    pub structural_validation: Option<Level>,

    /// The signing-certificate attribute is present.
    pub signing_certificate_attribute_present: Option<Level>,

    /// The signing-certificate digest matches.
    pub signing_certificate_digest_match: Option<Level>,

    /// The signing-certificate issuer and serial number match.
    pub signing_certificate_issuer_serial_match: Option<Level>,

    /// The certificate chain reaches a trust anchor.
    pub prospective_certificate_chain: Option<Level>,

    /// The signing time is present.
    pub signing_time: Option<Level>,

    /// Accepted commitment types.
    pub commitment_type: Option<MultiValuesConstraint>,

    /// Accepted signer roles.
    pub signer_role: Option<MultiValuesConstraint>,

    /// Constraints on the signing certificate.
    pub signing_certificate: CertificateConstraints,

    /// Constraints on the CA certificates.
    pub ca_certificate: CertificateConstraints,

    /// Cryptographic suite overriding the global one.
    pub cryptographic: Option<CryptographicConstraint>,
}

/// Constraints applied to evidence records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceRecordConstraints {
    /// Every protected data object is found.
    pub data_object_existence: Option<Level>,

    /// Every found data object is intact.
    pub data_object_intact: Option<Level>,

    /// At least one protected data object is found.
    pub data_object_found: Option<Level>,

    /// All found data objects of the group are intact.
    pub data_object_group: Option<Level>,

    /// Cryptographic suite overriding the global one.
    pub cryptographic: Option<CryptographicConstraint>,
}

/// Constraints applied to trusted lists and lists of trusted lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedListConstraints {
    /// The list was issued recently enough.
    pub freshness: Option<TimeConstraint>,

    /// The next update date of the list is not passed.
    pub not_expired: Option<Level>,

    /// The list has the expected version.
    pub version: Option<ValueConstraint>,

    /// The list signature is valid.
    pub well_signed: Option<Level>,
}

/// A complete validation policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Name of the policy.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Constraints for signatures.
    pub signature: BasicSignatureConstraints,

    /// Constraints for counter-signatures. Falls back to `signature`.
    pub counter_signature: Option<BasicSignatureConstraints>,

    /// Constraints for time-stamps.
    pub timestamp: BasicSignatureConstraints,

    /// Constraints for revocation data.
    pub revocation: BasicSignatureConstraints,

    /// Constraints for evidence records.
    pub evidence_record: EvidenceRecordConstraints,

    /// Global cryptographic suite.
    pub cryptographic: CryptographicConstraint,

    /// Constraints for trusted lists.
    pub trusted_list: TrustedListConstraints,

    /// Level of the check on each time-stamp's validation result in the
    /// archival process.
    pub timestamp_valid: Option<Level>,

    /// Level of the check on each evidence record's validation result in
    /// the archival process.
    pub evidence_record_valid: Option<Level>,
}

impl ValidationPolicy {
    /// Load a policy from a configuration string, applied over
    /// [`ValidationPolicy::default`].
    ///
    /// `format` is `"json"` or `"toml"`.
    pub fn from_string(policy_str: &str, format: &str) -> Result<Self> {
        let f = match format.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            other => return Err(Error::UnsupportedPolicyFormat(other.to_owned())),
        };

        let policy = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(config::File::from_str(policy_str, f))
            .build()?
            .try_deserialize::<Self>()?;

        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a JSON or TOML file; the format is taken from the
    /// file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_owned();
        let policy_str = std::fs::read_to_string(path)?;
        Self::from_string(&policy_str, &ext)
    }

    /// Returns the basic building block constraints of a context.
    pub fn basic_constraints(&self, context: Context) -> &BasicSignatureConstraints {
        match context {
            Context::Signature | Context::EvidenceRecord => &self.signature,
            Context::CounterSignature => self.counter_signature.as_ref().unwrap_or(&self.signature),
            Context::Timestamp => &self.timestamp,
            Context::Revocation => &self.revocation,
        }
    }

    /// Returns the constraints applied to a certificate of a chain.
    pub fn certificate_constraints(
        &self,
        context: Context,
        sub_context: SubContext,
    ) -> &CertificateConstraints {
        let basic = self.basic_constraints(context);
        match sub_context {
            SubContext::SigningCert => &basic.signing_certificate,
            SubContext::CaCertificate => &basic.ca_certificate,
        }
    }

    /// Returns the cryptographic suite for the signature of a token.
    pub fn signature_cryptographic_constraint(&self, context: Context) -> &CryptographicConstraint {
        if context == Context::EvidenceRecord {
            return self.evidence_record_cryptographic_constraint();
        }
        self.basic_constraints(context)
            .cryptographic
            .as_ref()
            .unwrap_or(&self.cryptographic)
    }

    /// Returns the cryptographic suite for a certificate of a chain.
    pub fn certificate_cryptographic_constraint(
        &self,
        context: Context,
        sub_context: SubContext,
    ) -> &CryptographicConstraint {
        self.certificate_constraints(context, sub_context)
            .cryptographic
            .as_ref()
            .unwrap_or_else(|| self.signature_cryptographic_constraint(context))
    }

    /// Returns the cryptographic suite for evidence record hashes.
    pub fn evidence_record_cryptographic_constraint(&self) -> &CryptographicConstraint {
        self.evidence_record
            .cryptographic
            .as_ref()
            .unwrap_or(&self.cryptographic)
    }
}

impl PolicyValidate for ValidationPolicy {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::PolicyNotInitialised("policy name".to_owned()));
        }

        self.cryptographic.validate()?;

        let contexts = [
            Some(&self.signature),
            self.counter_signature.as_ref(),
            Some(&self.timestamp),
            Some(&self.revocation),
        ];
        for basic in contexts.into_iter().flatten() {
            for crypto in [
                basic.cryptographic.as_ref(),
                basic.signing_certificate.cryptographic.as_ref(),
                basic.ca_certificate.cryptographic.as_ref(),
            ]
            .into_iter()
            .flatten()
            {
                crypto.validate()?;
            }
            for freshness in [
                &basic.signing_certificate.revocation_freshness,
                &basic.ca_certificate.revocation_freshness,
            ]
            .into_iter()
            .flatten()
            {
                if freshness.max_age_seconds.is_some_and(|s| s < 0) {
                    return Err(Error::PolicyNotInitialised(
                        "negative revocation freshness".to_owned(),
                    ));
                }
            }
        }

        if let Some(crypto) = &self.evidence_record.cryptographic {
            crypto.validate()?;
        }

        Ok(())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        let signing_certificate = CertificateConstraints {
            signature: Some(Level::Fail),
            validity_range: Some(Level::Fail),
            revocation_data_available: Some(Level::Fail),
            revocation_freshness: Some(TimeConstraint {
                level: Level::Warn,
                max_age_seconds: None,
            }),
            not_revoked: Some(Level::Fail),
            not_on_hold: Some(Level::Fail),
            cryptographic: None,
        };

        let signature = BasicSignatureConstraints {
            reference_data_existence: Some(Level::Fail),
            reference_data_intact: Some(Level::Fail),
            signature_intact: Some(Level::Fail),
            structural_validation: Some(Level::Warn),
            signing_certificate_attribute_present: Some(Level::Warn),
            signing_certificate_digest_match: Some(Level::Fail),
            signing_certificate_issuer_serial_match: Some(Level::Warn),
            prospective_certificate_chain: Some(Level::Fail),
            signing_time: Some(Level::Warn),
            commitment_type: None,
            signer_role: None,
            signing_certificate: signing_certificate.clone(),
            ca_certificate: signing_certificate.clone(),
            cryptographic: None,
        };

        let lenient_certificate = CertificateConstraints {
            revocation_data_available: Some(Level::Warn),
            ..signing_certificate
        };

        let timestamp = BasicSignatureConstraints {
            structural_validation: None,
            signing_certificate_attribute_present: None,
            signing_certificate_issuer_serial_match: None,
            signing_time: None,
            signing_certificate: lenient_certificate.clone(),
            ca_certificate: lenient_certificate.clone(),
            ..signature.clone()
        };

        let revocation = BasicSignatureConstraints {
            signing_certificate: CertificateConstraints {
                revocation_data_available: None,
                revocation_freshness: None,
                ..lenient_certificate.clone()
            },
            ..timestamp.clone()
        };

        Self {
            name: "ETSI EN 319 102-1 default policy".to_owned(),
            description: Some(
                "Validates signatures against the default ETSI constraints and cryptographic suite"
                    .to_owned(),
            ),
            signature,
            counter_signature: None,
            timestamp,
            revocation,
            evidence_record: EvidenceRecordConstraints {
                data_object_existence: Some(Level::Fail),
                data_object_intact: Some(Level::Fail),
                data_object_found: Some(Level::Fail),
                data_object_group: Some(Level::Warn),
                cryptographic: None,
            },
            cryptographic: default_cryptographic_constraint(),
            trusted_list: TrustedListConstraints {
                freshness: Some(TimeConstraint {
                    level: Level::Warn,
                    max_age_seconds: Some(6 * 30 * 24 * 3600),
                }),
                not_expired: Some(Level::Warn),
                version: Some(ValueConstraint {
                    level: Level::Warn,
                    value: 5,
                }),
                well_signed: Some(Level::Warn),
            },
            timestamp_valid: Some(Level::Warn),
            evidence_record_valid: Some(Level::Warn),
        }
    }
}

fn default_cryptographic_constraint() -> CryptographicConstraint {
    use DigestAlgorithm::*;
    use EncryptionAlgorithm::*;

    let date = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .unwrap_or_default()
    };
    let digest = |algorithm, expiration| DigestExpiration {
        algorithm,
        expiration,
    };
    let encryption = |algorithm, key_size, expiration| EncryptionExpiration {
        algorithm,
        key_size,
        expiration,
    };

    CryptographicConstraint {
        level: Some(Level::Fail),
        acceptable_encryption_algorithms: vec![Rsa, RsaSsaPss, Dsa, Ecdsa, EdDsa],
        acceptable_digest_algorithms: vec![
            Sha1, Sha224, Sha256, Sha384, Sha512, Sha3_256, Sha3_384, Sha3_512, Ripemd160,
        ],
        min_public_key_sizes: vec![
            KeySizeConstraint {
                algorithm: Rsa,
                min_size: 1024,
            },
            KeySizeConstraint {
                algorithm: RsaSsaPss,
                min_size: 1024,
            },
            KeySizeConstraint {
                algorithm: Dsa,
                min_size: 1024,
            },
            KeySizeConstraint {
                algorithm: Ecdsa,
                min_size: 160,
            },
        ],
        digest_expirations: vec![
            digest(Sha1, date(2009, 12, 31)),
            digest(Ripemd160, date(2014, 8, 1)),
            digest(Sha224, date(2029, 1, 1)),
        ],
        encryption_expirations: vec![
            encryption(Rsa, 1024, date(2013, 12, 31)),
            encryption(Rsa, 1536, date(2016, 12, 31)),
            encryption(Rsa, 1900, date(2029, 1, 1)),
            encryption(Rsa, 3000, date(2035, 1, 1)),
            encryption(RsaSsaPss, 1024, date(2013, 12, 31)),
            encryption(RsaSsaPss, 1536, date(2016, 12, 31)),
            encryption(RsaSsaPss, 1900, date(2029, 1, 1)),
            encryption(RsaSsaPss, 3000, date(2035, 1, 1)),
            encryption(Dsa, 1024, date(2015, 12, 31)),
            encryption(Dsa, 2048, date(2029, 1, 1)),
            encryption(Ecdsa, 160, date(2013, 12, 31)),
            encryption(Ecdsa, 192, date(2016, 12, 31)),
            encryption(Ecdsa, 224, date(2021, 12, 31)),
            encryption(Ecdsa, 256, date(2030, 12, 31)),
            encryption(Ecdsa, 384, date(2035, 12, 31)),
        ],
    }
}
