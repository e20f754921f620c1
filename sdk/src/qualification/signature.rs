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

//! Qualification of a signature or seal.

use std::collections::BTreeSet;

use ades_status_tracker::{message_tags::*, Conclusion, Indication, Level};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{SignatureToken, TrustedListStatus, TrustedServiceRef},
    process::{BlockResult, Chain, Check, ValidationContext},
    qualification::{
        certificate::{self, CertQualificationResult},
        certificate_qualification, signature_qualification, tl_analysis, CertificateQualification,
        CertificateType, SignatureQualification,
    },
};

/// Result of the qualification of one signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureQualificationResult {
    /// Identifier of the signature.
    pub signature_id: String,

    /// The qualification block.
    pub block: BlockResult,

    /// Resulting qualification.
    pub qualification: SignatureQualification,

    /// Acceptance of every list of trusted lists and trusted list involved.
    #[serde(default)]
    pub trusted_list_analysis: Vec<BlockResult>,

    /// Qualification of the signing certificate at its issuance.
    #[serde(default)]
    pub at_issuance: Option<CertQualificationResult>,

    /// Qualification of the signing certificate at the best-signature-time.
    #[serde(default)]
    pub at_signing_time: Option<CertQualificationResult>,
}

fn missing_status(url: &str, lotl: bool) -> TrustedListStatus {
    TrustedListStatus {
        url: url.to_owned(),
        lotl,
        parent_lotl_url: None,
        country_code: None,
        issue_date: None,
        next_update: None,
        version: None,
        well_signed: false,
    }
}

/// Qualifies `signature` given the conclusion of its AdES validation and its
/// best-signature-time.
pub(crate) fn execute(
    ctx: &ValidationContext,
    signature: &SignatureToken,
    ades: &Conclusion,
    best_signature_time: DateTime<Utc>,
) -> SignatureQualificationResult {
    let diagnostic = ctx.diagnostic();
    let constraints = &ctx.policy().trusted_list;
    let mut chain = Chain::new(SIG_QUAL).with_token_id(&signature.id);
    let mut trusted_list_analysis = Vec::new();
    let mut at_issuance = None;
    let mut at_signing_time = None;

    let ades_error = if ades.indication == Indication::Indeterminate {
        QUAL_IS_ADES_IND
    } else {
        QUAL_IS_ADES_ANS
    };
    chain.add(
        Some(Level::Warn),
        Check::new(QUAL_IS_ADES, ades_error, || ades.is_passed()),
    );

    let signing_certificate = diagnostic.signing_certificate(signature);
    let services: Vec<&TrustedServiceRef> = signing_certificate
        .map(|c| c.trusted_services.iter().collect())
        .unwrap_or_default();
    chain.add(
        Some(Level::Fail),
        Check::new(QUAL_TRUSTED_LIST_REACHED, QUAL_TRUSTED_LIST_REACHED_ANS, || {
            !services.is_empty()
        })
        .fails_with(Indication::Failed, None),
    );

    let mut final_qualification = CertificateQualification::Na;
    if let (false, Some(certificate)) = (chain.is_terminated(), signing_certificate) {
        let lotl_urls: BTreeSet<&str> =
            services.iter().filter_map(|s| s.lotl_url.as_deref()).collect();
        let tl_urls: BTreeSet<&str> = services.iter().map(|s| s.tl_url.as_str()).collect();

        let mut accepted_lotls = BTreeSet::new();
        for url in lotl_urls {
            let status = diagnostic
                .trusted_list(url)
                .cloned()
                .unwrap_or_else(|| missing_status(url, true));
            let block =
                tl_analysis::execute(LOTLA, &status, constraints, ctx.current_time());
            let accepted = block.conclusion.is_passed();
            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_LOTL_ACCEPT, QUAL_LOTL_ACCEPT_ANS, || accepted).token_id(url),
            );
            if accepted {
                accepted_lotls.insert(url);
            }
            trusted_list_analysis.push(block);
        }

        let mut accepted_tls = BTreeSet::new();
        for url in tl_urls {
            let status = diagnostic
                .trusted_list(url)
                .cloned()
                .unwrap_or_else(|| missing_status(url, false));
            let block = tl_analysis::execute(TLA, &status, constraints, ctx.current_time());
            let accepted = block.conclusion.is_passed();
            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_TL_ACCEPT, QUAL_TL_ACCEPT_ANS, || accepted).token_id(url),
            );
            if accepted {
                accepted_tls.insert(url);
            }
            trusted_list_analysis.push(block);
        }

        let acceptable: Vec<&TrustedServiceRef> = services
            .iter()
            .copied()
            .filter(|s| {
                accepted_tls.contains(s.tl_url.as_str())
                    && s.lotl_url
                        .as_deref()
                        .map_or(true, |lotl| accepted_lotls.contains(lotl))
            })
            .collect();
        chain.add(
            Some(Level::Fail),
            Check::new(QUAL_HAS_ACCEPTABLE_TL, QUAL_HAS_ACCEPTABLE_TL_ANS, || {
                !acceptable.is_empty()
            })
            .fails_with(Indication::Failed, None),
        );

        if !chain.is_terminated() {
            let issuance = certificate::execute(
                CERT_QUAL_ISSUANCE,
                certificate,
                acceptable.clone(),
                certificate.not_before,
            );
            let signing = certificate::execute(
                CERT_QUAL_SIGNING,
                certificate,
                acceptable,
                best_signature_time,
            );

            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_QC_AT_ST, QUAL_QC_AT_ST_ANS, || signing.qualification.is_qc()),
            );
            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_TYPE_AT_ST, QUAL_TYPE_AT_ST_ANS, || {
                    signing.certificate_type != CertificateType::Unknown
                }),
            );
            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_QC_AT_CC, QUAL_QC_AT_CC_ANS, || {
                    issuance.qualification.is_qc()
                }),
            );
            chain.add(
                Some(Level::Warn),
                Check::new(QUAL_QSCD_AT_ST, QUAL_QSCD_AT_ST_ANS, || {
                    signing.qualification.is_qscd()
                }),
            );

            let qc = issuance.qualification.is_qc() && signing.qualification.is_qc();
            let certificate_type = if issuance.certificate_type == signing.certificate_type {
                signing.certificate_type
            } else {
                CertificateType::Unknown
            };
            final_qualification = certificate_qualification(
                qc,
                certificate_type,
                signing.qualification.is_qscd(),
            );

            chain.push_sub_block(issuance.block.clone());
            chain.push_sub_block(signing.block.clone());
            at_issuance = Some(issuance);
            at_signing_time = Some(signing);
        }
    }

    if chain.is_terminated() {
        final_qualification = CertificateQualification::Na;
    }
    let qualification = signature_qualification(ades.indication, final_qualification);
    log::debug!("signature {} qualified as {qualification}", signature.id);

    let mut conclusion = chain.conclusion().clone();
    conclusion.indication = if !conclusion.errors.is_empty() {
        Indication::Failed
    } else if !conclusion.warnings.is_empty() {
        Indication::Indeterminate
    } else {
        Indication::Passed
    };
    chain.set_conclusion(conclusion);

    SignatureQualificationResult {
        signature_id: signature.id.clone(),
        block: chain.finish(),
        qualification,
        trusted_list_analysis,
        at_issuance,
        at_signing_time,
    }
}
