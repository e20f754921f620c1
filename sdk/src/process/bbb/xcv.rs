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

//! X.509 certificate validation.

use ades_status_tracker::{message_tags::*, Indication, Level, SubIndication};

use crate::{
    diagnostic::{CertificateToken, RevocationStatus, Token},
    policy::{Context, SubContext},
    process::{BlockResult, Chain, Check, ConclusionCheck, ValidationContext},
};

pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
) -> BlockResult {
    let constraints = ctx.policy().basic_constraints(context);
    let certificates = ctx.diagnostic().certificate_chain(token);
    let anchored = certificates.iter().any(|c| c.trusted);

    let mut chain = Chain::new(XCV).with_token_id(token.id());

    chain.add(
        constraints.prospective_certificate_chain,
        Check::new(BBB_XCV_CCCBB, BBB_XCV_CCCBB_ANS, || anchored).fails_with(
            Indication::Indeterminate,
            Some(SubIndication::NoCertificateChainFound),
        ),
    );

    for (position, certificate) in certificates.iter().enumerate() {
        // nothing is validated above the trust anchor
        if certificate.trusted || chain.is_terminated() {
            break;
        }

        let sub_context = if position == 0 {
            SubContext::SigningCert
        } else {
            SubContext::CaCertificate
        };
        let sub_block = validate_certificate(ctx, certificate, context, sub_context);

        chain.add(
            Some(Level::Fail),
            ConclusionCheck::new(BBB_XCV_SUB, BBB_XCV_SUB_ANS, &sub_block.conclusion)
                .token_id(&certificate.id),
        );
        chain.push_sub_block(sub_block);
    }

    chain.finish()
}

fn validate_certificate(
    ctx: &ValidationContext,
    certificate: &CertificateToken,
    context: Context,
    sub_context: SubContext,
) -> BlockResult {
    let policy = ctx.policy();
    let constraints = policy.certificate_constraints(context, sub_context);
    let crypto = policy.certificate_cryptographic_constraint(context, sub_context);
    let time = ctx.current_time();
    let latest = ctx.diagnostic().latest_revocation(certificate);

    let mut chain = Chain::new(SUB_XCV).with_token_id(&certificate.id);

    chain.add(
        constraints.signature,
        Check::new(BBB_XCV_ICSI, BBB_XCV_ICSI_ANS, || {
            certificate.basic_signature.signature_intact
        })
        .fails_with(
            Indication::Indeterminate,
            Some(SubIndication::CertificateChainGeneralFailure),
        ),
    );

    chain.add(
        constraints.revocation_data_available,
        Check::new(BBB_XCV_IRDPFC, BBB_XCV_IRDPFC_ANS, || latest.is_some())
            .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater)),
    );

    if let Some((entry, revocation)) = latest {
        if let Some(freshness) = &constraints.revocation_freshness {
            chain.add(
                Some(freshness.level),
                Check::new(BBB_XCV_IRIF, BBB_XCV_IRIF_ANS, || {
                    revocation.is_fresh_at(time, freshness.max_age())
                })
                .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater))
                .token_id(&revocation.id),
            );
        }

        let revoked_sub_indication = match sub_context {
            SubContext::SigningCert => SubIndication::RevokedNoPoe,
            SubContext::CaCertificate => SubIndication::RevokedCaNoPoe,
        };
        let revocation_date = entry
            .revocation_date
            .map(|date| date.to_rfc3339())
            .unwrap_or_default();

        chain.add(
            constraints.not_revoked,
            Check::new(BBB_XCV_ISCR, BBB_XCV_ISCR_ANS, || !entry.is_revoked())
                .fails_with(Indication::Indeterminate, Some(revoked_sub_indication))
                .info(format!("revocation date: {revocation_date}"))
                .token_id(&revocation.id),
        );

        chain.add(
            constraints.not_on_hold,
            Check::new(BBB_XCV_ISCOH, BBB_XCV_ISCOH_ANS, || !entry.is_on_hold())
                .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater))
                .token_id(&revocation.id),
        );
    }

    let known_not_revoked = latest.is_some_and(|(entry, _)| entry.status == RevocationStatus::Good);
    chain.add(
        constraints.validity_range,
        Check::new(BBB_XCV_ICTIVRSC, BBB_XCV_ICTIVRSC_ANS, || {
            certificate.is_valid_at(time)
        })
        .fails_with(
            Indication::Indeterminate,
            Some(if known_not_revoked {
                SubIndication::OutOfBoundsNotRevoked
            } else {
                SubIndication::OutOfBoundsNoPoe
            }),
        )
        .info(format!(
            "validation time: {}, validity: {} - {}",
            time.to_rfc3339(),
            certificate.not_before.to_rfc3339(),
            certificate.not_after.to_rfc3339()
        )),
    );

    if crypto.level.is_some() {
        let validation =
            crypto.check_signature(&certificate.basic_signature, time, &certificate.id);
        let secure = validation.secure;
        chain.add(
            crypto.level,
            Check::new(ACCM_CERT, ACCM_CERT_ANS, || secure)
                .fails_with(
                    Indication::Indeterminate,
                    Some(SubIndication::CryptoConstraintsFailureNoPoe),
                )
                .detail(&validation.algorithm),
        );
        chain.set_cryptographic_validation(validation);
    }

    chain.finish()
}
