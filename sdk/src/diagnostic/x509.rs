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

//! Builds [`CertificateToken`]s from DER-encoded X.509 certificates.

use asn1_rs::{Any, FromDer};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use x509_parser::{
    certificate::X509Certificate, extensions::ParsedExtension, public_key::PublicKey,
    time::ASN1Time,
};

use crate::{
    diagnostic::{
        BasicSignature, CertificateToken, DigestAlgorithm, EncryptionAlgorithm, KeyUsage,
        QcStatements, QcType,
    },
    Error, Result,
};

const QC_STATEMENTS_EXTENSION: &str = "1.3.6.1.5.5.7.1.3";
const QC_COMPLIANCE: &str = "0.4.0.1862.1.1";
const QC_SSCD: &str = "0.4.0.1862.1.4";
const QC_TYPE: &str = "0.4.0.1862.1.6";
const QC_TYPE_ESIGN: &str = "0.4.0.1862.1.6.1";
const QC_TYPE_ESEAL: &str = "0.4.0.1862.1.6.2";
const QC_TYPE_WEB: &str = "0.4.0.1862.1.6.3";

impl CertificateToken {
    /// Decodes a DER certificate.
    ///
    /// The id of the returned token is the lowercase hex SHA-256 digest of
    /// the DER bytes, so the same certificate always gets the same id. The
    /// signature validity flags are left unset: verifying the certificate
    /// signature is the job of the signature parsing stage.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (_rem, cert) = X509Certificate::from_der(der)
            .map_err(|err| Error::InvalidCertificate(format!("{err:?}")))?;

        let validity = cert.validity();
        let not_before = asn1_time_to_datetime(&validity.not_before)?;
        let not_after = asn1_time_to_datetime(&validity.not_after)?;

        let (encryption_algorithm, digest_algorithm) =
            signature_algorithm(&cert.signature_algorithm.algorithm.to_id_string());

        let key_length = match cert.public_key().parsed() {
            Ok(PublicKey::RSA(rsa)) => Some(rsa.key_size() as u32),
            Ok(PublicKey::EC(ec)) => Some(ec.key_size() as u32),
            _ => None,
        };

        let mut qc_statements = QcStatements::default();
        let mut certificate_policies = Vec::new();
        for ext in cert.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::CertificatePolicies(policies) => {
                    certificate_policies
                        .extend(policies.iter().map(|p| p.policy_id.to_id_string()));
                }
                _ if ext.oid.to_id_string() == QC_STATEMENTS_EXTENSION => {
                    qc_statements = parse_qc_statements(ext.value).ok_or_else(|| {
                        Error::InvalidCertificate("malformed QC statements".to_owned())
                    })?;
                }
                _ => {}
            }
        }

        let mut key_usages = Vec::new();
        if let Ok(Some(ku)) = cert.key_usage() {
            let ku = ku.value;
            if ku.digital_signature() {
                key_usages.push(KeyUsage::DigitalSignature);
            }
            if ku.non_repudiation() {
                key_usages.push(KeyUsage::NonRepudiation);
            }
            if ku.key_encipherment() {
                key_usages.push(KeyUsage::KeyEncipherment);
            }
            if ku.key_cert_sign() {
                key_usages.push(KeyUsage::KeyCertSign);
            }
            if ku.crl_sign() {
                key_usages.push(KeyUsage::CrlSign);
            }
        }

        let self_signed = cert.subject() == cert.issuer();

        Ok(CertificateToken {
            id: hex::encode(Sha256::digest(der)),
            subject: cert.subject().to_string(),
            not_before,
            not_after,
            self_signed,
            trusted: false,
            basic_signature: BasicSignature {
                digest_algorithm,
                encryption_algorithm,
                // Only known when the certificate signed itself.
                key_length: key_length.filter(|_| self_signed),
                signature_intact: false,
                signature_valid: false,
            },
            signing_certificate: None,
            certificate_chain: Vec::new(),
            revocations: Vec::new(),
            qc_statements,
            certificate_policies,
            key_usages,
            trusted_services: Vec::new(),
        })
    }
}

fn asn1_time_to_datetime(time: &ASN1Time) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| Error::InvalidCertificate("validity date out of range".to_owned()))
}

fn signature_algorithm(oid: &str) -> (Option<EncryptionAlgorithm>, Option<DigestAlgorithm>) {
    use DigestAlgorithm::*;
    use EncryptionAlgorithm::*;

    match oid {
        "1.2.840.113549.1.1.4" => (Some(Rsa), Some(Md5)),
        "1.2.840.113549.1.1.5" => (Some(Rsa), Some(Sha1)),
        "1.2.840.113549.1.1.14" => (Some(Rsa), Some(Sha224)),
        "1.2.840.113549.1.1.11" => (Some(Rsa), Some(Sha256)),
        "1.2.840.113549.1.1.12" => (Some(Rsa), Some(Sha384)),
        "1.2.840.113549.1.1.13" => (Some(Rsa), Some(Sha512)),
        "1.2.840.113549.1.1.10" => (Some(RsaSsaPss), None),
        "1.2.840.10045.4.1" => (Some(Ecdsa), Some(Sha1)),
        "1.2.840.10045.4.3.2" => (Some(Ecdsa), Some(Sha256)),
        "1.2.840.10045.4.3.3" => (Some(Ecdsa), Some(Sha384)),
        "1.2.840.10045.4.3.4" => (Some(Ecdsa), Some(Sha512)),
        "1.2.840.10040.4.3" => (Some(Dsa), Some(Sha1)),
        "1.3.101.112" => (Some(EdDsa), Some(Sha512)),
        _ => (None, None),
    }
}

fn parse_qc_statements(value: &[u8]) -> Option<QcStatements> {
    let (_, statements) = <Any as FromDer>::from_der(value).ok()?;
    let statements = statements.as_sequence().ok()?;

    let mut qc = QcStatements::default();
    for statement in der_items(&statements.content)? {
        let statement = statement.as_sequence().ok()?;
        let (info, id) = <Any as FromDer>::from_der(&statement.content).ok()?;

        match id.as_oid().ok()?.to_id_string().as_str() {
            QC_COMPLIANCE => qc.qc_compliance = true,
            QC_SSCD => qc.qc_sscd = true,
            QC_TYPE => {
                let (_, types) = <Any as FromDer>::from_der(info).ok()?;
                let types = types.as_sequence().ok()?;
                for qc_type in der_items(&types.content)? {
                    match qc_type.as_oid().ok()?.to_id_string().as_str() {
                        QC_TYPE_ESIGN => qc.qc_types.push(QcType::Esign),
                        QC_TYPE_ESEAL => qc.qc_types.push(QcType::Eseal),
                        QC_TYPE_WEB => qc.qc_types.push(QcType::Web),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    Some(qc)
}

fn der_items(mut input: &[u8]) -> Option<Vec<Any<'_>>> {
    let mut items = Vec::new();
    while !input.is_empty() {
        let (rest, item) = <Any as FromDer>::from_der(input).ok()?;
        items.push(item);
        input = rest;
    }
    Some(items)
}
