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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{BasicSignature, DigestAlgorithm, Token, TokenType};

/// A signature or counter-signature of the validated document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureToken {
    /// Identifier of the signature.
    pub id: String,

    /// Claimed signing time from the signed attributes.
    #[serde(default)]
    pub claimed_signing_time: Option<DateTime<Utc>>,

    /// The signature counter-signs another signature.
    #[serde(default)]
    pub counter_signature: bool,

    /// Result of the structural (schema) validation, when one was run.
    #[serde(default)]
    pub structurally_valid: Option<bool>,

    /// Cryptographic attributes of the signature value.
    #[serde(default)]
    pub basic_signature: BasicSignature,

    /// Identifier of the identified signing certificate.
    #[serde(default)]
    pub signing_certificate: Option<String>,

    /// The signed signing-certificate attribute, when present.
    #[serde(default)]
    pub signing_certificate_reference: Option<SigningCertificateReference>,

    /// Certificate chain, signing certificate first.
    #[serde(default)]
    pub certificate_chain: Vec<String>,

    /// References to the signed data objects.
    #[serde(default)]
    pub digest_matchers: Vec<DigestMatcher>,

    /// Identifiers of the time-stamps incorporated in the signature.
    #[serde(default)]
    pub timestamps: Vec<String>,

    /// Identifiers of the evidence records covering the signature.
    #[serde(default)]
    pub evidence_records: Vec<String>,

    /// Commitment type indications (URIs or OIDs).
    #[serde(default)]
    pub commitment_types: Vec<String>,

    /// Claimed signer roles.
    #[serde(default)]
    pub signer_roles: Vec<String>,
}

impl Token for SignatureToken {
    fn id(&self) -> &str {
        &self.id
    }

    fn token_type(&self) -> TokenType {
        TokenType::Signature
    }

    fn basic_signature(&self) -> &BasicSignature {
        &self.basic_signature
    }

    fn signing_certificate(&self) -> Option<&str> {
        self.signing_certificate.as_deref()
    }

    fn certificate_chain(&self) -> &[String] {
        &self.certificate_chain
    }

    fn signing_certificate_reference(&self) -> Option<&SigningCertificateReference> {
        self.signing_certificate_reference.as_ref()
    }

    fn digest_matchers(&self) -> &[DigestMatcher] {
        &self.digest_matchers
    }
}

/// The signed signing-certificate attribute of a signature.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningCertificateReference {
    /// Digest algorithm used for the certificate digest.
    pub digest_algorithm: Option<DigestAlgorithm>,

    /// The certificate digest matches the signing certificate.
    pub digest_value_match: bool,

    /// The issuer and serial number match the signing certificate.
    pub issuer_serial_match: bool,
}

/// One reference from a signature or evidence record to a data object.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DigestMatcher {
    /// Name of the referenced object, if known.
    #[serde(default)]
    pub name: Option<String>,

    /// Kind of reference.
    pub matcher_type: DigestMatcherType,

    /// Digest algorithm of the reference.
    #[serde(default)]
    pub digest_algorithm: Option<DigestAlgorithm>,

    /// The referenced data was found.
    #[serde(default)]
    pub data_found: bool,

    /// The referenced data matches the digest.
    #[serde(default)]
    pub data_intact: bool,
}

impl DigestMatcher {
    /// Describes the matcher, for messages.
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("{:?} {name}", self.matcher_type),
            None => format!("{:?}", self.matcher_type),
        }
    }
}

/// Kinds of digest matchers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigestMatcherType {
    /// A reference of an XML signature.
    Reference,

    /// A reference to a signed object.
    ObjectReference,

    /// The CMS message digest.
    MessageDigest,

    /// The reference to the signed properties.
    SignedProperties,

    /// The hash of an archive data object in an evidence record.
    EvidenceRecordArchiveObject,

    /// A hash of an evidence record not matching any data object.
    EvidenceRecordOrphanReference,
}

impl DigestMatcherType {
    /// Returns `true` for references that do not point to any known data.
    pub fn is_orphan(self) -> bool {
        self == Self::EvidenceRecordOrphanReference
    }
}
