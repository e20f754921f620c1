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

//! Past certificate validation and validation time sliding.

use ades_status_tracker::{message_tags::*, Indication, Level, SubIndication};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{CertificateToken, Token},
    policy::{Context, SubContext},
    process::{BlockResult, Chain, Check, ConclusionCheck, ValidationContext},
};

/// Result of the past certificate validation of a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PcvResult {
    /// The PCV block, with the VTS block nested.
    pub block: BlockResult,

    /// Latest time at which the chain can be trusted. `None` when the
    /// chain does not reach a trust anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_time: Option<DateTime<Utc>>,
}

pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
) -> PcvResult {
    let certificates = ctx.diagnostic().certificate_chain(token);
    let anchor = certificates.iter().position(|c| c.trusted);

    let mut chain = Chain::new(PCV).with_token_id(token.id());
    chain.add(
        Some(Level::Fail),
        Check::new(PCV_ICCBTA, PCV_ICCBTA_ANS, || anchor.is_some()).fails_with(
            Indication::Indeterminate,
            Some(SubIndication::NoCertificateChainFoundNoPoe),
        ),
    );

    let Some(anchor) = anchor else {
        return PcvResult {
            block: chain.finish(),
            control_time: None,
        };
    };

    let (vts, control_time) = validation_time_sliding(ctx, token, context, &certificates[..anchor]);
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(PCV_IVTSC, PCV_IVTSC_ANS, &vts.conclusion),
    );
    chain.push_sub_block(vts);

    let control_time = chain.conclusion().is_passed().then_some(control_time);
    PcvResult {
        block: chain.finish(),
        control_time,
    }
}

// Walks the chain from the trust anchor down to the signing certificate,
// moving the control time back to the earliest point the chain is still
// known to be reliable.
fn validation_time_sliding<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
    certificates: &[&CertificateToken],
) -> (BlockResult, DateTime<Utc>) {
    let policy = ctx.policy();
    let mut control_time = ctx.current_time();
    let mut chain = Chain::new(VTS).with_token_id(token.id());

    for (position, certificate) in certificates.iter().enumerate().rev() {
        let sub_context = if position == 0 {
            SubContext::SigningCert
        } else {
            SubContext::CaCertificate
        };
        let constraints = policy.certificate_constraints(context, sub_context);
        let latest = ctx.diagnostic().latest_revocation(certificate);

        chain.add(
            constraints.revocation_data_available,
            Check::new(VTS_IRDPFC, VTS_IRDPFC_ANS, || latest.is_some())
                .fails_with(Indication::Indeterminate, Some(SubIndication::NoPoe))
                .token_id(&certificate.id),
        );

        if let Some((entry, revocation)) = latest {
            if entry.is_revoked() {
                if let Some(date) = entry.revocation_date {
                    control_time = control_time.min(date);
                }
            } else {
                let max_age = constraints
                    .revocation_freshness
                    .as_ref()
                    .and_then(|f| f.max_age());
                if !revocation.is_fresh_at(control_time, max_age) {
                    control_time = control_time.min(revocation.this_update);
                }
            }
        }

        let crypto = policy.certificate_cryptographic_constraint(context, sub_context);
        if crypto.level.is_some() {
            let mut sunset = crypto
                .check_signature(&certificate.basic_signature, control_time, &certificate.id)
                .not_after_if_insecure();

            if let Some((_, revocation)) = latest {
                let revocation_sunset = policy
                    .signature_cryptographic_constraint(Context::Revocation)
                    .check_signature(&revocation.basic_signature, control_time, &revocation.id)
                    .not_after_if_insecure();
                sunset = match (sunset, revocation_sunset) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            }

            if let Some(sunset) = sunset {
                control_time = control_time.min(sunset);
            }
        }
    }

    log::debug!("control time of {}: {}", token.id(), control_time.to_rfc3339());
    (chain.finish(), control_time)
}
