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


//! Diagnostic data shared by the unit tests.
//!
//! The graph holds one signature by `SIGNER`, whose chain ends at the
//! trusted `ROOT`, with fresh OCSP data, and a time-stamping unit `TSA`
//! issued by the same root. Validated at [`validation_time`] it passes.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    diagnostic::{
        BasicSignature, CertificateRevocation, CertificateToken, DigestAlgorithm, DigestMatcher,
        DigestMatcherType, EncryptionAlgorithm, EvidenceRecord, KeyUsage, QcStatements, QcType,
        RevocationReason, RevocationStatus, RevocationToken, RevocationType, SignatureToken,
        SigningCertificateReference, TimestampToken, TimestampType, TimestampedObject,
        TimestampedObjectType, TrustedServiceRef,
    },
    tsl::{ServiceStatus, TrustedService, SERVICE_STATUS_GRANTED, SERVICE_TYPE_CA_QC},
    DiagnosticData,
};

pub(crate) const ROOT: &str = "C-ROOT";
pub(crate) const SIGNER: &str = "C-SIGNER";
pub(crate) const TSA: &str = "C-TSA";
pub(crate) const SIGNER_OCSP: &str = "R-SIGNER";
pub(crate) const SIGNATURE: &str = "S-1";
pub(crate) const EVIDENCE_RECORD: &str = "ER-1";
pub(crate) const TL_URL: &str = "https://tl.example.com/tl-be.xml";
pub(crate) const LOTL_URL: &str = "https://tl.example.com/lotl.xml";

pub(crate) const QUALIFIER: &str = "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/";
pub(crate) const FOR_ESIGNATURES: &str =
    "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSignatures";

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub(crate) fn validation_time() -> DateTime<Utc> {
    date(2025, 6, 1)
}

pub(crate) fn rsa_sha256(key_length: u32) -> BasicSignature {
    BasicSignature {
        digest_algorithm: Some(DigestAlgorithm::Sha256),
        encryption_algorithm: Some(EncryptionAlgorithm::Rsa),
        key_length: Some(key_length),
        signature_intact: true,
        signature_valid: true,
    }
}

pub(crate) fn certificate(id: &str, issuer: Option<&str>, chain: &[&str]) -> CertificateToken {
    CertificateToken {
        id: id.to_owned(),
        subject: format!("CN={id}"),
        not_before: date(2020, 1, 1),
        not_after: date(2030, 1, 1),
        self_signed: false,
        trusted: false,
        basic_signature: rsa_sha256(3072),
        signing_certificate: issuer.map(str::to_owned),
        certificate_chain: chain.iter().map(|c| (*c).to_owned()).collect(),
        revocations: Vec::new(),
        qc_statements: QcStatements::default(),
        certificate_policies: Vec::new(),
        key_usages: Vec::new(),
        trusted_services: Vec::new(),
    }
}

pub(crate) fn root() -> CertificateToken {
    CertificateToken {
        self_signed: true,
        trusted: true,
        not_after: date(2035, 1, 1),
        ..certificate(ROOT, None, &[ROOT])
    }
}

pub(crate) fn signer() -> CertificateToken {
    CertificateToken {
        not_before: date(2024, 1, 1),
        not_after: date(2027, 1, 1),
        revocations: vec![CertificateRevocation {
            revocation_id: SIGNER_OCSP.to_owned(),
            status: RevocationStatus::Good,
            revocation_date: None,
            reason: None,
        }],
        qc_statements: QcStatements {
            qc_compliance: true,
            qc_sscd: true,
            qc_types: vec![QcType::Esign],
        },
        key_usages: vec![KeyUsage::NonRepudiation],
        ..certificate(SIGNER, Some(ROOT), &[SIGNER, ROOT])
    }
}

pub(crate) fn ocsp(id: &str, this_update: DateTime<Utc>) -> RevocationToken {
    RevocationToken {
        id: id.to_owned(),
        revocation_type: RevocationType::Ocsp,
        production_date: this_update,
        this_update,
        next_update: Some(this_update + Duration::days(7)),
        basic_signature: rsa_sha256(3072),
        signing_certificate: Some(ROOT.to_owned()),
        certificate_chain: vec![ROOT.to_owned()],
    }
}

pub(crate) fn signature() -> SignatureToken {
    SignatureToken {
        id: SIGNATURE.to_owned(),
        claimed_signing_time: Some(date(2025, 5, 30)),
        counter_signature: false,
        structurally_valid: Some(true),
        basic_signature: rsa_sha256(3072),
        signing_certificate: Some(SIGNER.to_owned()),
        signing_certificate_reference: Some(SigningCertificateReference {
            digest_algorithm: Some(DigestAlgorithm::Sha256),
            digest_value_match: true,
            issuer_serial_match: true,
        }),
        certificate_chain: vec![SIGNER.to_owned(), ROOT.to_owned()],
        digest_matchers: vec![DigestMatcher {
            name: Some("document".to_owned()),
            matcher_type: DigestMatcherType::Reference,
            digest_algorithm: Some(DigestAlgorithm::Sha256),
            data_found: true,
            data_intact: true,
        }],
        timestamps: Vec::new(),
        evidence_records: Vec::new(),
        commitment_types: Vec::new(),
        signer_roles: Vec::new(),
    }
}

/// A valid time-stamp by [`TSA`] over the given objects.
pub(crate) fn timestamp(
    id: &str,
    timestamp_type: TimestampType,
    production_time: DateTime<Utc>,
    covered: &[&str],
) -> TimestampToken {
    TimestampToken {
        id: id.to_owned(),
        timestamp_type,
        production_time,
        message_imprint_data_found: true,
        message_imprint_data_intact: true,
        message_imprint_digest_algorithm: Some(DigestAlgorithm::Sha256),
        basic_signature: rsa_sha256(3072),
        signing_certificate: Some(TSA.to_owned()),
        certificate_chain: vec![TSA.to_owned(), ROOT.to_owned()],
        timestamped_objects: covered
            .iter()
            .map(|id| TimestampedObject::new(*id, TimestampedObjectType::Signature))
            .collect(),
    }
}

pub(crate) fn diagnostic() -> DiagnosticData {
    DiagnosticData {
        signatures: vec![signature()],
        certificates: vec![root(), signer(), certificate(TSA, Some(ROOT), &[TSA, ROOT])],
        revocations: vec![ocsp(SIGNER_OCSP, date(2025, 5, 31))],
        ..Default::default()
    }
}

/// Marks the signing certificate revoked at `revoked_at`, as reported by
/// OCSP data produced the day after.
pub(crate) fn revoke_signer(diagnostic: &mut DiagnosticData, revoked_at: DateTime<Utc>) {
    for certificate in diagnostic.certificates.iter_mut().filter(|c| c.id == SIGNER) {
        certificate.revocations = vec![CertificateRevocation {
            revocation_id: SIGNER_OCSP.to_owned(),
            status: RevocationStatus::Revoked,
            revocation_date: Some(revoked_at),
            reason: Some(RevocationReason::KeyCompromise),
        }];
    }
    diagnostic.revocations = vec![ocsp(SIGNER_OCSP, revoked_at + Duration::days(1))];
}

/// Attaches a time-stamp of `timestamp_type` covering the signature.
pub(crate) fn add_timestamp(
    diagnostic: &mut DiagnosticData,
    id: &str,
    timestamp_type: TimestampType,
    production_time: DateTime<Utc>,
) {
    diagnostic
        .timestamps
        .push(timestamp(id, timestamp_type, production_time, &[SIGNATURE]));
    for signature in &mut diagnostic.signatures {
        signature.timestamps.push(id.to_owned());
    }
}

/// Attaches a signature time-stamp.
pub(crate) fn add_signature_timestamp(
    diagnostic: &mut DiagnosticData,
    id: &str,
    production_time: DateTime<Utc>,
) {
    add_timestamp(
        diagnostic,
        id,
        TimestampType::SignatureTimestamp,
        production_time,
    );
}

/// Makes the signing certificate expire at `not_after`, before the OCSP
/// data about it was produced.
pub(crate) fn expire_signer(diagnostic: &mut DiagnosticData, not_after: DateTime<Utc>) {
    for certificate in diagnostic.certificates.iter_mut().filter(|c| c.id == SIGNER) {
        certificate.not_after = not_after;
    }
}

/// Attaches an evidence record with one archive time-stamp per round.
pub(crate) fn add_evidence_record(diagnostic: &mut DiagnosticData, rounds: &[DateTime<Utc>]) {
    let mut ids = Vec::new();
    for (round, time) in rounds.iter().enumerate() {
        let id = format!("{EVIDENCE_RECORD}-T{}", round + 1);
        diagnostic.timestamps.push(timestamp(
            &id,
            TimestampType::EvidenceRecordTimestamp,
            *time,
            &[SIGNATURE],
        ));
        ids.push(id);
    }

    diagnostic.evidence_records.push(EvidenceRecord {
        id: EVIDENCE_RECORD.to_owned(),
        digest_matchers: vec![DigestMatcher {
            name: Some("signature".to_owned()),
            matcher_type: DigestMatcherType::EvidenceRecordArchiveObject,
            digest_algorithm: Some(DigestAlgorithm::Sha256),
            data_found: true,
            data_intact: true,
        }],
        timestamps: ids,
        covered_objects: vec![TimestampedObject::new(
            SIGNATURE,
            TimestampedObjectType::Signature,
        )],
    });
    for signature in &mut diagnostic.signatures {
        signature.evidence_records.push(EVIDENCE_RECORD.to_owned());
    }
}

/// A CA/QC service for e-signatures, granted since 2016, with the given
/// qualifiers (names relative to [`QUALIFIER`]).
pub(crate) fn granted_service(name: &str, qualifiers: &[&str]) -> TrustedServiceRef {
    TrustedServiceRef {
        tl_url: TL_URL.to_owned(),
        lotl_url: Some(LOTL_URL.to_owned()),
        country_code: "BE".to_owned(),
        service: TrustedService {
            tsp_name: "Example Trust Services".to_owned(),
            service_name: name.to_owned(),
            service_type: SERVICE_TYPE_CA_QC.to_owned(),
            status_history: vec![ServiceStatus {
                status: SERVICE_STATUS_GRANTED.to_owned(),
                start_date: date(2016, 7, 1),
                end_date: None,
                qualifiers: qualifiers
                    .iter()
                    .map(|q| format!("{QUALIFIER}{q}"))
                    .collect(),
                additional_service_info: vec![FOR_ESIGNATURES.to_owned()],
            }],
        },
    }
}

/// Publishes the signing certificate's issuer on a trusted list.
pub(crate) fn trust_signer(diagnostic: &mut DiagnosticData, services: Vec<TrustedServiceRef>) {
    for certificate in diagnostic.certificates.iter_mut().filter(|c| c.id == SIGNER) {
        certificate.trusted_services = services.clone();
    }
}
