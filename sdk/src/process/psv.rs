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

//! Past signature validation: re-evaluates an indeterminate token at the
//! time of its earliest proof of existence.

use ades_status_tracker::{
    message_tags::*, Conclusion, Indication, Level, MessageTag, SubIndication,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{CertificateToken, Token},
    policy::{Context, SubContext},
    process::{
        bbb::sav, pcv, BlockResult, Chain, Check, ConclusionCheck, PoeExtraction,
        ValidationContext,
    },
};

/// Result of the past signature validation of a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PsvResult {
    /// The PSV block, with the PCV block nested.
    pub block: BlockResult,

    /// Control time found by the past certificate validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_time: Option<DateTime<Utc>>,
}

/// Runs the past signature validation of `token`, whose validation so far
/// ended with `current`.
pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
    current: &Conclusion,
    poe: &PoeExtraction,
) -> PsvResult {
    let diagnostic = ctx.diagnostic();
    let signing_certificate = diagnostic.signing_certificate(token);
    let mut chain = Chain::new(PSV).with_token_id(token.id());

    let revocation_poe_status = signing_certificate_revocation_poe(ctx, signing_certificate, poe);

    let pcv = pcv::execute(ctx, token, context);
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(PSV_IPCVA, PSV_IPCVA_ANS, &pcv.block.conclusion)
            .fails_with(current.indication, current.sub_indication),
    );
    let control_time = pcv.control_time;
    chain.push_sub_block(pcv.block);

    let poe_exists = control_time.is_some_and(|time| poe.is_poe_exists(token.id(), time));
    chain.add(
        Some(Level::Warn),
        Check::new(PSV_IPSVC, PSV_IPSVC_ANS, || poe_exists),
    );

    let best_signature_time = poe.lowest_poe_time(token.id());
    let latest_revocation = signing_certificate.and_then(|c| diagnostic.latest_revocation(c));
    let suspended = latest_revocation.is_some_and(|(entry, _)| entry.is_on_hold());

    let sub_indication = current
        .sub_indication
        .filter(|_| current.indication == Indication::Indeterminate);

    match sub_indication {
        Some(SubIndication::NoCertificateChainFoundNoPoe) if poe_exists => {
            add_validity_checks(
                &mut chain,
                signing_certificate,
                best_signature_time,
                SubIndication::OutOfBoundsNoPoe,
            );
        }
        Some(SubIndication::RevokedNoPoe | SubIndication::RevocationOutOfBoundsNoPoe)
            if poe_exists =>
        {
            let revocation_date = latest_revocation.and_then(|(entry, _)| entry.revocation_date);
            add_before_revocation_check(
                &mut chain,
                PSV_IBSTBRD,
                PSV_IBSTBRD_ANS,
                revocation_date,
                best_signature_time,
                SubIndication::RevokedNoPoe,
            );
            add_validity_checks(
                &mut chain,
                signing_certificate,
                best_signature_time,
                SubIndication::OutOfBoundsNotRevoked,
            );
        }
        Some(SubIndication::TryLater) if poe_exists && suspended => {
            let revocation_date = latest_revocation.and_then(|(entry, _)| entry.revocation_date);
            add_before_revocation_check(
                &mut chain,
                PSV_IBSTBRD,
                PSV_IBSTBRD_ANS,
                revocation_date,
                best_signature_time,
                SubIndication::TryLater,
            );
            add_validity_checks(
                &mut chain,
                signing_certificate,
                best_signature_time,
                SubIndication::OutOfBoundsNotRevoked,
            );
        }
        Some(SubIndication::RevokedCaNoPoe) if poe_exists => {
            let ca_revocation_date = signing_certificate
                .and_then(|c| c.signing_certificate.as_deref())
                .and_then(|id| diagnostic.certificate(id))
                .and_then(|ca| diagnostic.latest_revocation(ca))
                .and_then(|(entry, _)| entry.revocation_date);
            add_before_revocation_check(
                &mut chain,
                PSV_IBSTBCARD,
                PSV_IBSTBCARD_ANS,
                ca_revocation_date,
                best_signature_time,
                SubIndication::RevokedCaNoPoe,
            );
            add_validity_checks(
                &mut chain,
                signing_certificate,
                best_signature_time,
                SubIndication::OutOfBoundsNotRevoked,
            );
        }
        Some(
            sub @ (SubIndication::OutOfBoundsNoPoe | SubIndication::OutOfBoundsNotRevoked),
        ) if poe_exists => {
            add_validity_checks(&mut chain, signing_certificate, best_signature_time, sub);
        }
        Some(SubIndication::CryptoConstraintsFailureNoPoe) => {
            add_cryptographic_checks_at(
                ctx,
                &mut chain,
                token,
                context,
                poe.lowest_poe_time_of(token),
                |id| poe.lowest_poe_time(id),
            );
        }
        Some(SubIndication::TryLater) => {
            let max_age = ctx
                .policy()
                .certificate_constraints(context, SubContext::SigningCert)
                .revocation_freshness
                .as_ref()
                .and_then(|f| f.max_age());
            chain.add(
                Some(Level::Fail),
                Check::new(PSV_IRDFBST, PSV_IRDFBST_ANS, || {
                    latest_revocation.is_some_and(|(_, revocation)| {
                        revocation.is_fresh_at(best_signature_time, max_age)
                    })
                })
                .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater)),
            );
        }
        _ => {
            chain.add(
                Some(Level::Fail),
                ConclusionCheck::new(PSV_ICTIC, PSV_ICTIC_ANS, current),
            );
        }
    }

    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(PSV_IRDPOE, PSV_IRDPOE_ANS, &revocation_poe_status),
    );

    PsvResult {
        block: chain.finish(),
        control_time,
    }
}

// A revocation of the signing certificate is acceptable when a POE for it
// exists while its issuer was valid.
fn signing_certificate_revocation_poe(
    ctx: &ValidationContext,
    signing_certificate: Option<&CertificateToken>,
    poe: &PoeExtraction,
) -> Conclusion {
    let diagnostic = ctx.diagnostic();
    let revocations = signing_certificate
        .map(|c| diagnostic.revocations_of(c))
        .unwrap_or_default();
    if revocations.is_empty() {
        return Conclusion::passed();
    }

    let acceptable = revocations.iter().any(|(_, revocation)| {
        diagnostic
            .signing_certificate(*revocation)
            .is_some_and(|issuer| {
                poe.is_poe_exists_in_range(&revocation.id, issuer.not_before, issuer.not_after)
            })
    });

    if acceptable {
        Conclusion::passed()
    } else {
        let mut conclusion = Conclusion::new(
            Indication::Indeterminate,
            Some(SubIndication::RevocationOutOfBoundsNoPoe),
        );
        conclusion.add_error(PSV_IRDPOE_ANS);
        conclusion
    }
}

fn add_validity_checks(
    chain: &mut Chain,
    signing_certificate: Option<&CertificateToken>,
    best_signature_time: DateTime<Utc>,
    out_of_bounds: SubIndication,
) {
    chain.add(
        Some(Level::Fail),
        Check::new(PSV_ITPOSVAOBCT, PSV_ITPOSVAOBCT_ANS, || {
            signing_certificate.is_some_and(|c| best_signature_time >= c.not_before)
        })
        .fails_with(Indication::Failed, Some(SubIndication::NotYetValid))
        .info(format!("best signature time: {}", best_signature_time.to_rfc3339())),
    );
    chain.add(
        Some(Level::Fail),
        Check::new(PSV_IBSTBCE, PSV_IBSTBCE_ANS, || {
            signing_certificate.is_some_and(|c| best_signature_time <= c.not_after)
        })
        .fails_with(Indication::Indeterminate, Some(out_of_bounds))
        .info(format!("best signature time: {}", best_signature_time.to_rfc3339())),
    );
}

fn add_before_revocation_check(
    chain: &mut Chain,
    tag: MessageTag,
    error: MessageTag,
    revocation_date: Option<DateTime<Utc>>,
    best_signature_time: DateTime<Utc>,
    sub_indication: SubIndication,
) {
    chain.add(
        Some(Level::Fail),
        Check::new(tag, error, || {
            revocation_date.is_some_and(|date| best_signature_time < date)
        })
        .fails_with(Indication::Indeterminate, Some(sub_indication)),
    );
}

/// Adds the checks of the algorithms used by `token` at `token_time`, and
/// of those used by its certificate chain and their revocation data, each
/// object at `time_of(id)`. The walk stops at the first trust anchor.
pub(crate) fn add_cryptographic_checks_at<T, F>(
    ctx: &ValidationContext,
    chain: &mut Chain,
    token: &T,
    context: Context,
    token_time: DateTime<Utc>,
    time_of: F,
) where
    T: Token + ?Sized,
    F: Fn(&str) -> DateTime<Utc>,
{
    let policy = ctx.policy();
    let diagnostic = ctx.diagnostic();
    let no_poe = (
        Indication::Indeterminate,
        Some(SubIndication::CryptoConstraintsFailureNoPoe),
    );

    sav::add_cryptographic_checks(
        chain,
        policy.signature_cryptographic_constraint(context),
        token,
        token_time,
    );

    for (position, certificate) in diagnostic.certificate_chain(token).iter().enumerate() {
        if certificate.trusted {
            break;
        }
        let sub_context = if position == 0 {
            SubContext::SigningCert
        } else {
            SubContext::CaCertificate
        };

        let crypto = policy.certificate_cryptographic_constraint(context, sub_context);
        let validation = crypto.check_signature(
            &certificate.basic_signature,
            time_of(&certificate.id),
            &certificate.id,
        );
        let secure = validation.secure;
        chain.add(
            crypto.level,
            Check::new(ACCM_CERT, ACCM_CERT_ANS, || secure)
                .fails_with(no_poe.0, no_poe.1)
                .detail(&validation.algorithm)
                .token_id(&certificate.id),
        );
        chain.set_cryptographic_validation(validation);

        if let Some((_, revocation)) = diagnostic.latest_revocation(certificate) {
            let crypto = policy.signature_cryptographic_constraint(Context::Revocation);
            let validation = crypto.check_signature(
                &revocation.basic_signature,
                time_of(&revocation.id),
                &revocation.id,
            );
            let secure = validation.secure;
            chain.add(
                crypto.level,
                Check::new(ACCM_REV, ACCM_REV_ANS, || secure)
                    .fails_with(no_poe.0, no_poe.1)
                    .detail(&validation.algorithm)
                    .token_id(&revocation.id),
            );
            chain.set_cryptographic_validation(validation);
        }
    }
}
