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


use chrono::Duration;

use crate::{
    diagnostic::{
        CertificateToken, DigestAlgorithm, EncryptionAlgorithm, KeyUsage, QcType, TokenType,
        Token,
    },
    tests::fixtures::{self, date, ocsp, ROOT, SIGNATURE, SIGNER, SIGNER_OCSP},
    DiagnosticData, Error,
};

const QC_SIGNER: &[u8] = include_bytes!("../../tests/fixtures/qc_signer.der");

#[test]
fn certificate_from_der() {
    let certificate = CertificateToken::from_der(QC_SIGNER).unwrap();

    assert_eq!(certificate.id.len(), 64);
    assert!(certificate.subject.contains("CN=QualifiedSigner"));
    assert!(certificate.self_signed);
    assert!(!certificate.trusted);
    assert_eq!(certificate.not_after - certificate.not_before, Duration::days(3650));

    let signature = &certificate.basic_signature;
    assert_eq!(signature.encryption_algorithm, Some(EncryptionAlgorithm::Rsa));
    assert_eq!(signature.digest_algorithm, Some(DigestAlgorithm::Sha256));
    assert_eq!(signature.key_length, Some(2048));
    assert!(!signature.signature_intact);

    assert!(certificate.qc_statements.qc_compliance);
    assert!(certificate.qc_statements.qc_sscd);
    assert_eq!(certificate.qc_statements.qc_types, [QcType::Esign]);
    assert_eq!(certificate.key_usages, [KeyUsage::NonRepudiation]);
}

#[test]
fn certificate_id_is_stable() {
    let a = CertificateToken::from_der(QC_SIGNER).unwrap();
    let b = CertificateToken::from_der(QC_SIGNER).unwrap();
    assert_eq!(a.id, b.id);
}

#[test]
fn garbage_is_not_a_certificate() {
    assert!(matches!(
        CertificateToken::from_der(b"not a certificate"),
        Err(Error::InvalidCertificate(_))
    ));
}

#[test]
fn lookups_resolve_references() {
    let diagnostic = fixtures::diagnostic();
    diagnostic.validate().unwrap();

    let signature = diagnostic.signature(SIGNATURE).unwrap();
    assert_eq!(signature.token_type(), TokenType::Signature);
    assert_eq!(diagnostic.signing_certificate(signature).unwrap().id, SIGNER);

    let chain: Vec<_> = diagnostic
        .certificate_chain(signature)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(chain, [SIGNER, ROOT]);

    let signer = diagnostic.certificate(SIGNER).unwrap();
    let (_, latest) = diagnostic.latest_revocation(signer).unwrap();
    assert_eq!(latest.id, SIGNER_OCSP);
}

#[test]
fn latest_revocation_is_the_most_recent() {
    let mut diagnostic = fixtures::diagnostic();
    diagnostic.revocations.push(ocsp("R-OLD", date(2025, 1, 1)));
    for certificate in diagnostic.certificates.iter_mut().filter(|c| c.id == SIGNER) {
        let mut old = certificate.revocations[0].clone();
        old.revocation_id = "R-OLD".to_owned();
        certificate.revocations.insert(0, old);
    }

    let signer = diagnostic.certificate(SIGNER).unwrap();
    assert_eq!(diagnostic.revocations_of(signer).len(), 2);
    assert_eq!(diagnostic.latest_revocation(signer).unwrap().1.id, SIGNER_OCSP);
}

#[test]
fn freshness_window() {
    let revocation = ocsp(SIGNER_OCSP, date(2025, 5, 31));

    // nextUpdate - thisUpdate is one week
    assert!(revocation.is_fresh_at(date(2025, 6, 7), None));
    assert!(!revocation.is_fresh_at(date(2025, 6, 8), None));
    assert!(!revocation.is_fresh_at(date(2025, 6, 2), Some(Duration::hours(12))));
}

#[test]
fn empty_diagnostic_data_is_rejected() {
    assert!(matches!(
        DiagnosticData::default().validate(),
        Err(Error::DiagnosticDataNotInitialised(_))
    ));
}

#[test]
fn dangling_reference_is_rejected() {
    let mut diagnostic = fixtures::diagnostic();
    diagnostic.signatures[0].timestamps.push("T-MISSING".to_owned());

    assert!(matches!(
        diagnostic.validate(),
        Err(Error::UnknownToken(id)) if id == "T-MISSING"
    ));
}

#[test]
fn json_form() {
    let diagnostic = fixtures::diagnostic();
    let json = serde_json::to_string(&diagnostic).unwrap();
    assert_eq!(DiagnosticData::from_json(&json).unwrap(), diagnostic);

    assert!(matches!(
        DiagnosticData::from_json("{ \"signatures\": 3 }"),
        Err(Error::JsonError(_))
    ));
}
