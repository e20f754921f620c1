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

//! Typed model of the diagnostic data produced by the signature parsing
//! stage.
//!
//! Every token is identified by an opaque id and refers to other tokens by
//! id. The model is read-only for the validation processes.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

mod certificate;
pub use certificate::{
    CertificateRevocation, CertificateToken, KeyUsage, QcStatements, QcType, RevocationReason,
    RevocationStatus, TrustedServiceRef,
};

mod evidence_record;
pub use evidence_record::EvidenceRecord;

mod revocation;
pub use revocation::{RevocationToken, RevocationType};

mod signature;
pub use signature::{
    DigestMatcher, DigestMatcherType, SignatureToken, SigningCertificateReference,
};

mod timestamp;
pub use timestamp::{TimestampToken, TimestampType, TimestampedObject, TimestampedObjectType};

mod token;
pub use token::{BasicSignature, DigestAlgorithm, EncryptionAlgorithm, Token, TokenType};

mod trusted_list;
pub use trusted_list::TrustedListStatus;

mod x509;

/// The object graph a validation run operates on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticData {
    /// Signatures and counter-signatures.
    pub signatures: Vec<SignatureToken>,

    /// All certificates referenced by any token.
    pub certificates: Vec<CertificateToken>,

    /// All CRLs and OCSP responses.
    pub revocations: Vec<RevocationToken>,

    /// All time-stamps, including evidence record time-stamps.
    pub timestamps: Vec<TimestampToken>,

    /// All evidence records.
    pub evidence_records: Vec<EvidenceRecord>,

    /// Trusted lists and lists of trusted lists known to the run.
    pub trusted_lists: Vec<TrustedListStatus>,
}

impl DiagnosticData {
    /// Reads diagnostic data from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the signature with the given id.
    pub fn signature(&self, id: &str) -> Option<&SignatureToken> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Returns the certificate with the given id.
    pub fn certificate(&self, id: &str) -> Option<&CertificateToken> {
        self.certificates.iter().find(|c| c.id == id)
    }

    /// Returns the revocation token with the given id.
    pub fn revocation(&self, id: &str) -> Option<&RevocationToken> {
        self.revocations.iter().find(|r| r.id == id)
    }

    /// Returns the time-stamp with the given id.
    pub fn timestamp(&self, id: &str) -> Option<&TimestampToken> {
        self.timestamps.iter().find(|t| t.id == id)
    }

    /// Returns the evidence record with the given id.
    pub fn evidence_record(&self, id: &str) -> Option<&EvidenceRecord> {
        self.evidence_records.iter().find(|e| e.id == id)
    }

    /// Returns the status of the trusted list with the given URL.
    pub fn trusted_list(&self, url: &str) -> Option<&TrustedListStatus> {
        self.trusted_lists.iter().find(|tl| tl.url == url)
    }

    /// Resolves the certificate chain of a token, signing certificate
    /// first.
    pub fn certificate_chain<T: Token + ?Sized>(&self, token: &T) -> Vec<&CertificateToken> {
        token
            .certificate_chain()
            .iter()
            .filter_map(|id| self.certificate(id))
            .collect()
    }

    /// Returns the signing certificate of a token.
    pub fn signing_certificate<T: Token + ?Sized>(&self, token: &T) -> Option<&CertificateToken> {
        token.signing_certificate().and_then(|id| self.certificate(id))
    }

    /// Pairs every revocation entry of a certificate with its token.
    pub fn revocations_of<'a>(
        &'a self,
        certificate: &'a CertificateToken,
    ) -> Vec<(&'a CertificateRevocation, &'a RevocationToken)> {
        certificate
            .revocations
            .iter()
            .filter_map(|entry| {
                self.revocation(&entry.revocation_id)
                    .map(|token| (entry, token))
            })
            .collect()
    }

    /// Returns the most recently produced revocation entry of a
    /// certificate.
    pub fn latest_revocation<'a>(
        &'a self,
        certificate: &'a CertificateToken,
    ) -> Option<(&'a CertificateRevocation, &'a RevocationToken)> {
        self.revocations_of(certificate)
            .into_iter()
            .max_by_key(|(_, token)| token.production_date)
    }

    /// Returns the time-stamps incorporated in a signature.
    pub fn timestamps_of(&self, signature: &SignatureToken) -> Vec<&TimestampToken> {
        signature
            .timestamps
            .iter()
            .filter_map(|id| self.timestamp(id))
            .collect()
    }

    /// Returns the evidence records covering a signature.
    pub fn evidence_records_of(&self, signature: &SignatureToken) -> Vec<&EvidenceRecord> {
        signature
            .evidence_records
            .iter()
            .filter_map(|id| self.evidence_record(id))
            .collect()
    }

    /// Checks that every id referenced by a token resolves to a token of
    /// this diagnostic data.
    pub fn validate(&self) -> Result<()> {
        if self.signatures.is_empty() {
            return Err(Error::DiagnosticDataNotInitialised(
                "no signature to validate".to_owned(),
            ));
        }

        for signature in &self.signatures {
            self.check_token_refs(signature)?;
            for id in &signature.timestamps {
                require(self.timestamp(id).is_some(), id)?;
            }
            for id in &signature.evidence_records {
                require(self.evidence_record(id).is_some(), id)?;
            }
        }

        for timestamp in &self.timestamps {
            self.check_token_refs(timestamp)?;
        }

        for revocation in &self.revocations {
            self.check_token_refs(revocation)?;
        }

        for certificate in &self.certificates {
            if let Some(id) = &certificate.signing_certificate {
                require(self.certificate(id).is_some(), id)?;
            }
            for id in &certificate.certificate_chain {
                require(self.certificate(id).is_some(), id)?;
            }
            for entry in &certificate.revocations {
                require(
                    self.revocation(&entry.revocation_id).is_some(),
                    &entry.revocation_id,
                )?;
            }
        }

        for record in &self.evidence_records {
            for id in &record.timestamps {
                require(self.timestamp(id).is_some(), id)?;
            }
        }

        Ok(())
    }

    fn check_token_refs<T: Token>(&self, token: &T) -> Result<()> {
        if let Some(id) = token.signing_certificate() {
            require(self.certificate(id).is_some(), id)?;
        }
        for id in token.certificate_chain() {
            require(self.certificate(id).is_some(), id)?;
        }
        Ok(())
    }
}

fn require(found: bool, id: &str) -> Result<()> {
    if found {
        Ok(())
    } else {
        Err(Error::UnknownToken(id.to_owned()))
    }
}
