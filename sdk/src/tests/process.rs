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


use crate::{
    diagnostic::{DigestAlgorithm, TimestampType},
    message_tags::{ARCH_IERVPC, LTV_IARBST, LTV_IRDABST, PSV},
    qualification::SignatureQualification,
    tests::fixtures::{
        self, add_evidence_record, add_signature_timestamp, add_timestamp, date, expire_signer,
        granted_service, revoke_signer, trust_signer, validation_time, SIGNATURE, SIGNER,
    },
    ConstraintStatus, DiagnosticData, DocumentValidator, Indication, Reports, SubIndication,
};

fn validate(diagnostic: DiagnosticData) -> Reports {
    DocumentValidator::new(diagnostic)
        .with_current_time(validation_time())
        .validate()
        .unwrap()
}

#[test]
fn valid_signature_passes() {
    let reports = validate(fixtures::diagnostic());

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Passed);
    assert_eq!(summary.sub_indication, None);
    assert_eq!(summary.best_signature_time, validation_time());
    // no trusted list covers the signer
    assert_eq!(summary.qualification, SignatureQualification::Na);
    assert!(reports.summary.is_valid(SIGNATURE));

    let detailed = &reports.detailed.signatures[0];
    assert!(detailed.basic_building_blocks.conclusion.is_passed());
    assert!(detailed.long_term_validation.block.conclusion.is_passed());
    assert!(detailed
        .archival_data_validation
        .block
        .sub_block(PSV.key)
        .is_none());
    assert!(reports
        .detailed
        .basic_building_blocks
        .iter()
        .any(|bbb| bbb.id == SIGNATURE));
}

#[test]
fn qualified_signature_on_trusted_list() {
    let mut diagnostic = fixtures::diagnostic();
    trust_signer(&mut diagnostic, vec![granted_service("CA", &[])]);

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert_eq!(signature.qualification.qualification, SignatureQualification::Qesig);
    assert!(signature.qualification.at_issuance.is_some());
    assert!(signature.qualification.at_signing_time.is_some());
    // the list itself was never analysed, which only warns
    assert_eq!(signature.qualification.trusted_list_analysis.len(), 2);
}

#[test]
fn altered_document_fails() {
    let mut diagnostic = fixtures::diagnostic();
    diagnostic.signatures[0].digest_matchers[0].data_intact = false;

    let reports = validate(diagnostic);

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Failed);
    assert_eq!(summary.sub_indication, Some(SubIndication::HashFailure));
    assert!(!summary.errors.is_empty());
    assert_eq!(reports.summary.valid_signatures_count(), 0);
}

#[test]
fn revoked_signer_without_proof_of_existence() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert!(signature
        .basic_building_blocks
        .conclusion
        .is(Indication::Indeterminate, Some(SubIndication::RevokedNoPoe)));
    assert_eq!(signature.indication, Indication::Indeterminate);
    assert_eq!(signature.sub_indication, Some(SubIndication::RevokedNoPoe));
    assert_eq!(
        signature.long_term_validation.block.status_of(LTV_IRDABST.key),
        Some(ConstraintStatus::NotOk)
    );

    let psv = signature.archival_data_validation.block.sub_block(PSV.key);
    assert!(psv.is_some_and(|psv| !psv.conclusion.is_passed()));
}

#[test]
fn qualified_but_indeterminate() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));
    trust_signer(&mut diagnostic, vec![granted_service("CA", &[])]);

    let reports = validate(diagnostic);

    assert_eq!(
        reports.summary.signatures[0].qualification,
        SignatureQualification::IndeterminateQesig
    );
}

#[test]
fn signature_timestamp_before_revocation() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));
    add_signature_timestamp(&mut diagnostic, "T-1", date(2025, 2, 1));

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert_eq!(signature.indication, Indication::Passed);
    assert_eq!(signature.best_signature_time, date(2025, 2, 1));
    assert_eq!(
        signature.long_term_validation.proof_of_existence.token_id.as_deref(),
        Some("T-1")
    );
    assert_eq!(reports.detailed.timestamps.len(), 1);
    assert!(reports.detailed.timestamps[0]
        .basic_building_blocks
        .conclusion
        .is_passed());
}

#[test]
fn signature_timestamp_after_revocation() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));
    add_signature_timestamp(&mut diagnostic, "T-1", date(2025, 4, 1));

    let reports = validate(diagnostic);

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Indeterminate);
    assert_eq!(summary.sub_indication, Some(SubIndication::RevokedNoPoe));
}

#[test]
fn evidence_record_proves_existence_before_revocation() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));
    add_evidence_record(&mut diagnostic, &[date(2024, 6, 1), date(2025, 1, 1)]);

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert_eq!(signature.indication, Indication::Passed);
    assert_eq!(signature.best_signature_time, date(2024, 6, 1));

    let archival = &signature.archival_data_validation;
    assert_eq!(archival.evidence_records.len(), 1);
    assert_eq!(
        archival.block.status_of(ARCH_IERVPC.key),
        Some(ConstraintStatus::Ok)
    );
    assert!(archival
        .block
        .sub_block(PSV.key)
        .is_some_and(|psv| psv.conclusion.is_passed()));
}

#[test]
fn signer_certificate_not_yet_valid_at_proof_of_existence() {
    let mut diagnostic = fixtures::diagnostic();
    revoke_signer(&mut diagnostic, date(2025, 3, 1));
    add_evidence_record(&mut diagnostic, &[date(2023, 6, 1)]);

    let reports = validate(diagnostic);

    // the record predates the certificate
    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Failed);
    assert_eq!(summary.sub_indication, Some(SubIndication::NotYetValid));
}

#[test]
fn expired_signer_without_proof_of_existence() {
    let mut diagnostic = fixtures::diagnostic();
    expire_signer(&mut diagnostic, date(2025, 1, 1));

    let reports = validate(diagnostic);

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Indeterminate);
    assert_eq!(
        summary.sub_indication,
        Some(SubIndication::OutOfBoundsNotRevoked)
    );
}

#[test]
fn expired_signer_rescued_by_archive_timestamp() {
    let mut diagnostic = fixtures::diagnostic();
    expire_signer(&mut diagnostic, date(2025, 1, 1));
    add_timestamp(
        &mut diagnostic,
        "A-1",
        TimestampType::ArchiveTimestamp,
        date(2024, 6, 1),
    );

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert_eq!(signature.indication, Indication::Passed);
    assert_eq!(signature.sub_indication, None);
    assert_eq!(signature.best_signature_time, date(2024, 6, 1));
    assert!(signature
        .archival_data_validation
        .block
        .sub_block(PSV.key)
        .is_some_and(|psv| psv.conclusion.is_passed()));
}

#[test]
fn unacceptable_signature_digest_fails_long_term_validation() {
    let mut diagnostic = fixtures::diagnostic();
    diagnostic.signatures[0].basic_signature.digest_algorithm = Some(DigestAlgorithm::Md5);

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert!(signature.basic_building_blocks.conclusion.is(
        Indication::Indeterminate,
        Some(SubIndication::CryptoConstraintsFailureNoPoe)
    ));
    assert_eq!(
        signature.long_term_validation.block.status_of(LTV_IARBST.key),
        Some(ConstraintStatus::NotOk)
    );
    assert_eq!(signature.indication, Indication::Indeterminate);
    assert_eq!(
        signature.sub_indication,
        Some(SubIndication::CryptoConstraintsFailureNoPoe)
    );
    assert!(!reports.summary.is_valid(SIGNATURE));
}

#[test]
fn unacceptable_certificate_digest_fails_long_term_validation() {
    let mut diagnostic = fixtures::diagnostic();
    for certificate in diagnostic.certificates.iter_mut().filter(|c| c.id == SIGNER) {
        certificate.basic_signature.digest_algorithm = Some(DigestAlgorithm::Md5);
    }

    let reports = validate(diagnostic);

    let signature = &reports.detailed.signatures[0];
    assert!(!signature.long_term_validation.block.conclusion.is_passed());
    assert_eq!(
        signature.long_term_validation.block.status_of(LTV_IARBST.key),
        Some(ConstraintStatus::NotOk)
    );
    assert_eq!(signature.indication, Indication::Indeterminate);
    assert_eq!(
        signature.sub_indication,
        Some(SubIndication::CryptoConstraintsFailureNoPoe)
    );
}

#[test]
fn reports_serialize_to_json() {
    let reports = validate(fixtures::diagnostic());

    let json = reports.to_json().unwrap();
    assert!(json.contains(SIGNER));
    let parsed: Reports = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reports);
}
