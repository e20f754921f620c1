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

//! Qualification of a certificate at a given time.

use ades_status_tracker::{message_tags::*, Indication, Level, MessageTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{CertificateToken, QcType, TrustedServiceRef},
    process::{BlockResult, Chain, Check},
    qualification::{
        certificate_qualification, CaQcFilter, CertificateQualification, CertificateType,
        CertificateTypeFilter, GrantedStatusFilter, ServiceByDateFilter, TrustedServiceFilter,
        UniqueServiceFilter,
    },
    tsl::ServiceStatus,
};

const QCP_PUBLIC: &str = "0.4.0.194112.1.0";
const QCP_LEGAL: &str = "0.4.0.194112.1.1";
const QCP_PUBLIC_QSCD: &str = "0.4.0.194112.1.2";
const QCP_LEGAL_QSCD: &str = "0.4.0.194112.1.3";
const QCP_WEB: &str = "0.4.0.194112.1.4";

const QUALIFIER_PREFIX: &str = "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/";

/// The qualification of a certificate at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertQualificationResult {
    /// The qualification block.
    pub block: BlockResult,

    /// The time the qualification was computed at.
    pub time: DateTime<Utc>,

    /// The certificate is qualified.
    pub qc: bool,

    /// Purpose of the certificate.
    pub certificate_type: CertificateType,

    /// The private key is on a QSCD.
    pub qscd: bool,

    /// Resulting qualification.
    pub qualification: CertificateQualification,
}

/// Returns `true` if the certificate claims to be qualified.
pub(crate) fn qc_from_certificate(certificate: &CertificateToken) -> bool {
    certificate.qc_statements.qc_compliance
        || certificate.certificate_policies.iter().any(|p| {
            [QCP_PUBLIC, QCP_LEGAL, QCP_PUBLIC_QSCD, QCP_LEGAL_QSCD, QCP_WEB].contains(&p.as_str())
        })
}

/// Returns `true` if the certificate claims its key is on a QSCD.
pub(crate) fn qscd_from_certificate(certificate: &CertificateToken) -> bool {
    certificate.qc_statements.qc_sscd
        || certificate
            .certificate_policies
            .iter()
            .any(|p| p == QCP_PUBLIC_QSCD || p == QCP_LEGAL_QSCD)
}

/// Returns the type declared by the certificate's QC statements, or by its
/// QC policy.
pub(crate) fn type_from_certificate(certificate: &CertificateToken) -> CertificateType {
    match certificate.qc_statements.qc_types.as_slice() {
        [QcType::Esign] => return CertificateType::Esign,
        [QcType::Eseal] => return CertificateType::Eseal,
        [QcType::Web] => return CertificateType::Wsa,
        [] => {}
        _ => return CertificateType::Unknown,
    }

    let policies = &certificate.certificate_policies;
    let has = |oid: &str| policies.iter().any(|p| p == oid);
    if has(QCP_PUBLIC) || has(QCP_PUBLIC_QSCD) {
        CertificateType::Esign
    } else if has(QCP_LEGAL) || has(QCP_LEGAL_QSCD) {
        CertificateType::Eseal
    } else if has(QCP_WEB) {
        CertificateType::Wsa
    } else {
        CertificateType::Unknown
    }
}

fn has_qualifier(status: &ServiceStatus, name: &str) -> bool {
    status
        .qualifiers
        .iter()
        .any(|q| q.strip_prefix(QUALIFIER_PREFIX) == Some(name))
}

/// Qualified status, type and QSCD status once the qualifiers of a service
/// are applied over the certificate's own claims.
pub(crate) fn qualification_with_service(
    certificate: &CertificateToken,
    service: &TrustedServiceRef,
    time: DateTime<Utc>,
) -> (bool, CertificateType, bool) {
    let mut qc = qc_from_certificate(certificate);
    let mut certificate_type = type_from_certificate(certificate);
    let mut qscd = qscd_from_certificate(certificate);

    if let Some(status) = service.service.status_at(time) {
        if has_qualifier(status, "QCStatement") {
            qc = true;
        } else if has_qualifier(status, "NotQualified") {
            qc = false;
        }

        if has_qualifier(status, "QCWithSSCD") || has_qualifier(status, "QCWithQSCD") {
            qscd = true;
        } else if has_qualifier(status, "QCNoSSCD") || has_qualifier(status, "QCNoQSCD") {
            qscd = false;
        }

        if has_qualifier(status, "QCForESig") {
            certificate_type = CertificateType::Esign;
        } else if has_qualifier(status, "QCForESeal") {
            certificate_type = CertificateType::Eseal;
        } else if has_qualifier(status, "QCForWSA") {
            certificate_type = CertificateType::Wsa;
        }
    }

    (qc, certificate_type, qscd && qc)
}

// Contradicting qualifiers within one status period.
fn is_consistent(service: &TrustedServiceRef, time: DateTime<Utc>) -> bool {
    let Some(status) = service.service.status_at(time) else {
        return true;
    };
    let both = |a, b| has_qualifier(status, a) && has_qualifier(status, b);
    let types = ["QCForESig", "QCForESeal", "QCForWSA"]
        .iter()
        .filter(|t| has_qualifier(status, t))
        .count();
    !both("QCStatement", "NotQualified") && !both("QCWithSSCD", "QCNoSSCD") && types <= 1
}

/// Computes the qualification of `certificate` at `time`, from the services
/// of the acceptable trusted lists.
pub(crate) fn execute(
    title: MessageTag,
    certificate: &CertificateToken,
    services: Vec<&TrustedServiceRef>,
    time: DateTime<Utc>,
) -> CertQualificationResult {
    let mut chain = Chain::new(title).with_token_id(&certificate.id);

    let at_time = ServiceByDateFilter { time }.filter(services);
    chain.add(
        Some(Level::Fail),
        Check::new(QUAL_HAS_TS_AT_TIME, QUAL_HAS_TS_AT_TIME_ANS, || !at_time.is_empty())
            .fails_with(Indication::Failed, None),
    );

    let ca_qc = CaQcFilter.filter(at_time);
    chain.add(
        Some(Level::Warn),
        Check::new(QUAL_HAS_CAQC, QUAL_HAS_CAQC_ANS, || !ca_qc.is_empty()),
    );

    let mut candidates = ca_qc;
    if !candidates.is_empty() {
        candidates = CertificateTypeFilter {
            time,
            certificate_type: type_from_certificate(certificate),
        }
        .filter(candidates);
        chain.add(
            Some(Level::Fail),
            Check::new(
                QUAL_HAS_CERT_TYPE_COVERAGE,
                QUAL_HAS_CERT_TYPE_COVERAGE_ANS,
                || !candidates.is_empty(),
            )
            .fails_with(Indication::Failed, None),
        );

        let all_consistent = candidates.iter().all(|s| is_consistent(s, time));
        chain.add(
            Some(Level::Warn),
            Check::new(QUAL_TL_SERV_CONS, QUAL_TL_SERV_CONS_ANS, || all_consistent),
        );
        candidates.retain(|s| is_consistent(s, time));
        chain.add(
            Some(Level::Fail),
            Check::new(QUAL_HAS_CONSISTENT, QUAL_HAS_CONSISTENT_ANS, || {
                !candidates.is_empty()
            })
            .fails_with(Indication::Failed, None),
        );

        candidates = GrantedStatusFilter { time }.filter(candidates);
        chain.add(
            Some(Level::Warn),
            Check::new(QUAL_HAS_GRANTED_AT, QUAL_HAS_GRANTED_AT_ANS, || {
                !candidates.is_empty()
            }),
        );
    }

    let (qc, certificate_type, qscd) = if candidates.is_empty() {
        // nothing on a trusted list qualifies the certificate
        (false, type_from_certificate(certificate), false)
    } else {
        let unique = UniqueServiceFilter { certificate, time }.filter(candidates);
        chain.add(
            Some(Level::Fail),
            Check::new(QUAL_UNIQUE_SERVICE, QUAL_UNIQUE_SERVICE_ANS, || {
                unique.len() == 1
            })
            .fails_with(Indication::Failed, None),
        );

        match unique.first() {
            Some(service) => {
                chain.add(
                    Some(Level::Warn),
                    Check::new(QUAL_VALID_CAQC, QUAL_VALID_CAQC_ANS, || {
                        service.service.is_ca_qc()
                    })
                    .info(service.service.service_name.clone()),
                );
                qualification_with_service(certificate, service, time)
            }
            None => (false, CertificateType::Unknown, false),
        }
    };

    chain.add(
        Some(Level::Warn),
        Check::new(QUAL_IS_QC, QUAL_IS_QC_ANS, || qc),
    );
    chain.add(
        Some(Level::Warn),
        Check::new(QUAL_IS_TYPE, QUAL_IS_TYPE_ANS, || {
            certificate_type != CertificateType::Unknown
        }),
    );
    chain.add(
        Some(Level::Warn),
        Check::new(QUAL_IS_QSCD, QUAL_IS_QSCD_ANS, || qscd),
    );

    let qualification = if chain.is_terminated() {
        CertificateQualification::Na
    } else {
        certificate_qualification(qc, certificate_type, qscd)
    };

    CertQualificationResult {
        block: chain.finish(),
        time,
        qc,
        certificate_type,
        qscd,
        qualification,
    }
}
