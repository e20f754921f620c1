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

//! Signature acceptance validation.

use ades_status_tracker::{message_tags::*, Indication, SubIndication};
use chrono::{DateTime, Utc};

use crate::{
    diagnostic::{Token, TokenType},
    policy::{Context, CryptographicConstraint, MultiValuesConstraint},
    process::{BlockResult, Chain, Check, ValidationContext},
};

/// Runs the acceptance checks with the cryptographic suite evaluated at
/// `time`.
pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
    time: DateTime<Utc>,
) -> BlockResult {
    let constraints = ctx.policy().basic_constraints(context);
    let mut chain = Chain::new(SAV).with_token_id(token.id());

    let signature = ctx
        .diagnostic()
        .signature(token.id())
        .filter(|_| token.token_type() == TokenType::Signature);

    if let Some(signature) = signature {
        let sig_constraints_failure = (
            Indication::Indeterminate,
            Some(SubIndication::SigConstraintsFailure),
        );

        chain.add(
            constraints.structural_validation,
            Check::new(BBB_SAV_ISSV, BBB_SAV_ISSV_ANS, || {
                signature.structurally_valid != Some(false)
            })
            .fails_with(sig_constraints_failure.0, sig_constraints_failure.1),
        );

        chain.add(
            constraints.signing_time,
            Check::new(BBB_SAV_ISQPSTP, BBB_SAV_ISQPSTP_ANS, || {
                signature.claimed_signing_time.is_some()
            })
            .fails_with(sig_constraints_failure.0, sig_constraints_failure.1),
        );

        if let Some(constraint) = &constraints.commitment_type {
            chain.add(
                Some(constraint.level),
                Check::new(BBB_SAV_ISQPCTP, BBB_SAV_ISQPCTP_ANS, || {
                    accepts(constraint, &signature.commitment_types)
                })
                .fails_with(sig_constraints_failure.0, sig_constraints_failure.1)
                .info(signature.commitment_types.join(", ")),
            );
        }

        if let Some(constraint) = &constraints.signer_role {
            chain.add(
                Some(constraint.level),
                Check::new(BBB_SAV_ISQPSRP, BBB_SAV_ISQPSRP_ANS, || {
                    accepts(constraint, &signature.signer_roles)
                })
                .fails_with(sig_constraints_failure.0, sig_constraints_failure.1)
                .info(signature.signer_roles.join(", ")),
            );
        }
    }

    let crypto = ctx.policy().signature_cryptographic_constraint(context);
    add_cryptographic_checks(&mut chain, crypto, token, time);

    chain.finish()
}

/// Adds the checks of the algorithms used by a token: its signature, the
/// digests of its references and the digest of its signing certificate
/// reference.
pub(crate) fn add_cryptographic_checks<T: Token + ?Sized>(
    chain: &mut Chain,
    crypto: &CryptographicConstraint,
    token: &T,
    time: DateTime<Utc>,
) {
    if crypto.level.is_none() {
        return;
    }
    let no_poe = (
        Indication::Indeterminate,
        Some(SubIndication::CryptoConstraintsFailureNoPoe),
    );

    let validation = crypto.check_signature(token.basic_signature(), time, token.id());
    let secure = validation.secure;
    chain.add(
        crypto.level,
        Check::new(ACCM, ACCM_ANS, || secure)
            .fails_with(no_poe.0, no_poe.1)
            .detail(&validation.algorithm),
    );
    chain.set_cryptographic_validation(validation);

    for matcher in token
        .digest_matchers()
        .iter()
        .filter(|m| !m.matcher_type.is_orphan())
    {
        let validation = crypto.check_digest(matcher.digest_algorithm, time, &matcher.describe());
        let secure = validation.secure;
        chain.add(
            crypto.level,
            Check::new(ACCM_DIGEST, ACCM_DIGEST_ANS, || secure)
                .fails_with(no_poe.0, no_poe.1)
                .detail(matcher.describe()),
        );
        chain.set_cryptographic_validation(validation);
    }

    if let Some(reference) = token.signing_certificate_reference() {
        let validation = crypto.check_digest(
            reference.digest_algorithm,
            time,
            "signing certificate reference",
        );
        let secure = validation.secure;
        chain.add(
            crypto.level,
            Check::new(ACCM_SIG_CERT_REF, ACCM_SIG_CERT_REF_ANS, || secure)
                .fails_with(no_poe.0, no_poe.1)
                .detail(&validation.algorithm),
        );
        chain.set_cryptographic_validation(validation);
    }
}

fn accepts(constraint: &MultiValuesConstraint, values: &[String]) -> bool {
    if constraint.values.is_empty() {
        !values.is_empty()
    } else {
        values.iter().any(|v| constraint.values.contains(v))
    }
}
