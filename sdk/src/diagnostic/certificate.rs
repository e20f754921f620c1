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

use crate::{diagnostic::BasicSignature, tsl::TrustedService};

/// A certificate of the diagnostic data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateToken {
    /// Identifier of the certificate.
    pub id: String,

    /// Subject distinguished name.
    #[serde(default)]
    pub subject: String,

    /// Start of the validity period.
    pub not_before: DateTime<Utc>,

    /// End of the validity period.
    pub not_after: DateTime<Utc>,

    /// The certificate is self-signed.
    #[serde(default)]
    pub self_signed: bool,

    /// The certificate is a trust anchor.
    #[serde(default)]
    pub trusted: bool,

    /// Cryptographic attributes of the certificate's signature.
    #[serde(default)]
    pub basic_signature: BasicSignature,

    /// Identifier of the issuer certificate.
    #[serde(default)]
    pub signing_certificate: Option<String>,

    /// Chain of issuers above this certificate, closest issuer first.
    #[serde(default)]
    pub certificate_chain: Vec<String>,

    /// Revocation status entries found for this certificate.
    #[serde(default)]
    pub revocations: Vec<CertificateRevocation>,

    /// QC statements of the certificate.
    #[serde(default)]
    pub qc_statements: QcStatements,

    /// Certificate policy identifiers (OIDs in dotted form).
    #[serde(default)]
    pub certificate_policies: Vec<String>,

    /// Key usages asserted by the certificate.
    #[serde(default)]
    pub key_usages: Vec<KeyUsage>,

    /// Trusted services whose service digital identity matches this
    /// certificate's path.
    #[serde(default)]
    pub trusted_services: Vec<TrustedServiceRef>,
}

impl CertificateToken {
    /// Returns `true` if `time` falls within the validity period.
    pub fn is_valid_at(&self, time: DateTime<Utc>) -> bool {
        self.not_before <= time && time <= self.not_after
    }

    /// Returns `true` if the certificate is reached through at least one
    /// trusted list.
    pub fn is_trusted_list_reached(&self) -> bool {
        !self.trusted_services.is_empty()
    }
}

/// Revocation status of a certificate as reported by one revocation token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateRevocation {
    /// Identifier of the CRL or OCSP response.
    pub revocation_id: String,

    /// Reported status.
    pub status: RevocationStatus,

    /// Revocation date, for revoked certificates.
    #[serde(default)]
    pub revocation_date: Option<DateTime<Utc>>,

    /// Revocation reason, for revoked certificates.
    #[serde(default)]
    pub reason: Option<RevocationReason>,
}

impl CertificateRevocation {
    /// Returns `true` if the certificate is revoked (excluding on-hold).
    pub fn is_revoked(&self) -> bool {
        self.status == RevocationStatus::Revoked
            && self.reason != Some(RevocationReason::CertificateHold)
    }

    /// Returns `true` if the certificate is suspended.
    pub fn is_on_hold(&self) -> bool {
        self.status == RevocationStatus::Revoked
            && self.reason == Some(RevocationReason::CertificateHold)
    }
}

/// Status reported by a revocation token.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationStatus {
    Good,
    Revoked,
    Unknown,
}

/// CRL reason codes (RFC 5280).
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationReason {
    Unspecified,
    KeyCompromise,
    CaCompromise,
    AffiliationChanged,
    Superseded,
    CessationOfOperation,
    CertificateHold,
    RemoveFromCrl,
    PrivilegeWithdrawn,
    AaCompromise,
}

/// ETSI EN 319 412-5 QC statements.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcStatements {
    /// `QcCompliance` is present.
    pub qc_compliance: bool,

    /// `QcSSCD` is present.
    pub qc_sscd: bool,

    /// Types declared in `QcType`.
    pub qc_types: Vec<QcType>,
}

/// Values of the `QcType` statement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QcType {
    /// Electronic signatures.
    Esign,

    /// Electronic seals.
    Eseal,

    /// Website authentication.
    Web,
}

/// Key usage bits relevant to validation.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyUsage {
    DigitalSignature,
    NonRepudiation,
    KeyEncipherment,
    KeyCertSign,
    CrlSign,
}

/// A trusted service that covers a certificate, with the trusted list it
/// was published in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustedServiceRef {
    /// URL of the trusted list publishing the service.
    pub tl_url: String,

    /// URL of the list of trusted lists pointing to the trusted list.
    #[serde(default)]
    pub lotl_url: Option<String>,

    /// Territory of the trusted list.
    #[serde(default)]
    pub country_code: String,

    /// The service and its status history.
    pub service: TrustedService,
}
