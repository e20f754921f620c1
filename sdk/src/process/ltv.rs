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

//! Validation process for signatures with time and with long-term
//! validation data.

use ades_status_tracker::{message_tags::*, Indication, Level, SubIndication};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{SignatureToken, TimestampType},
    policy::Context,
    process::{
        is_poe_resolvable, psv, BlockResult, Chain, Check, ConclusionCheck, PoeExtraction,
        ProofOfExistence, ValidationContext,
    },
};

/// Result of the long-term validation of a signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LtvResult {
    /// The LTV block.
    pub block: BlockResult,

    /// Earliest POE of the signature once its time-stamps were taken into
    /// account: the best-signature-time.
    pub proof_of_existence: ProofOfExistence,
}

pub(crate) fn execute(
    ctx: &ValidationContext,
    signature: &SignatureToken,
    context: Context,
    poe: &mut PoeExtraction,
) -> LtvResult {
    let diagnostic = ctx.diagnostic();
    let bbb = ctx.bbb(signature, context);
    let basic = &bbb.conclusion;

    let mut chain = Chain::new(LTV).with_token_id(&signature.id);
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(LTV_ABSV, LTV_ABSV_ANS, basic).accept(is_poe_resolvable),
    );

    if !chain.is_terminated() {
        let mut timestamps: Vec<_> = diagnostic
            .timestamps_of(signature)
            .into_iter()
            .filter(|ts| {
                matches!(
                    ts.timestamp_type,
                    TimestampType::SignatureTimestamp | TimestampType::ValidationDataTimestamp
                )
            })
            .collect();
        timestamps.sort_by_key(|ts| ts.production_time);

        for timestamp in timestamps {
            let valid = ctx
                .bbb(timestamp, Context::Timestamp)
                .conclusion
                .is_passed();
            chain.add(
                Some(Level::Warn),
                Check::new(LTV_ITVPC, LTV_ITVPC_ANS, || valid).token_id(&timestamp.id),
            );
            if valid {
                poe.extract_from_timestamp(timestamp);
            }
        }
    }

    let proof_of_existence = poe.lowest_poe(&signature.id).cloned().unwrap_or(ProofOfExistence {
        time: poe.current_time(),
        token_id: None,
    });
    let best_signature_time = proof_of_existence.time;
    let signing_certificate = diagnostic.signing_certificate(signature);

    let sub_indication = basic
        .sub_indication
        .filter(|_| basic.indication == Indication::Indeterminate);

    match sub_indication {
        Some(sub @ (SubIndication::RevokedNoPoe | SubIndication::RevokedCaNoPoe)) => {
            let revoked_certificate = match sub {
                SubIndication::RevokedNoPoe => signing_certificate,
                _ => signing_certificate
                    .and_then(|c| c.signing_certificate.as_deref())
                    .and_then(|id| diagnostic.certificate(id)),
            };
            let revocation_date = revoked_certificate
                .and_then(|c| diagnostic.latest_revocation(c))
                .and_then(|(entry, _)| entry.revocation_date);
            chain.add(
                Some(Level::Fail),
                Check::new(LTV_IRDABST, LTV_IRDABST_ANS, || {
                    revocation_date.is_some_and(|date| date > best_signature_time)
                })
                .fails_with(Indication::Indeterminate, Some(sub)),
            );
        }
        Some(sub @ (SubIndication::OutOfBoundsNoPoe | SubIndication::OutOfBoundsNotRevoked)) => {
            chain.add(
                Some(Level::Fail),
                Check::new(LTV_IBSTBCE, LTV_IBSTBCE_ANS, || {
                    signing_certificate.is_some_and(|c| best_signature_time <= c.not_after)
                })
                .fails_with(Indication::Indeterminate, Some(sub)),
            );
        }
        Some(SubIndication::CryptoConstraintsFailureNoPoe) => {
            let mut crypto = Chain::new(LTV_IARBST).with_token_id(&signature.id);
            psv::add_cryptographic_checks_at(
                ctx,
                &mut crypto,
                signature,
                context,
                best_signature_time,
                |_| best_signature_time,
            );
            let crypto = crypto.finish();
            chain.add(
                Some(Level::Fail),
                ConclusionCheck::new(LTV_IARBST, LTV_IARBST_ANS, &crypto.conclusion)
                    .fails_with(
                        Indication::Indeterminate,
                        Some(SubIndication::CryptoConstraintsFailureNoPoe),
                    ),
            );
            chain.push_sub_block(crypto);
        }
        _ => {
            chain.add(
                Some(Level::Fail),
                ConclusionCheck::new(LTV_IBVCBST, LTV_IBVCBST_ANS, basic),
            );
        }
    }

    if chain.conclusion().is_passed() {
        let mut conclusion = chain.conclusion().clone();
        conclusion.merge_non_error_messages(basic);
        chain.set_conclusion(conclusion);
    }

    log::debug!(
        "long-term validation of {}: {}",
        signature.id,
        chain.conclusion().indication
    );

    LtvResult {
        block: chain.finish(),
        proof_of_existence,
    }
}
