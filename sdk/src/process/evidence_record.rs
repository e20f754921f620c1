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

//! Evidence record validation.
//!
//! Archive time-stamp renewal rounds are validated oldest first, whatever
//! the order the record lists them in. The time-stamp of a round is judged
//! with the POE provided by the time-stamp of the round that follows it.

use ades_status_tracker::{message_tags::*, Indication, Level, SubIndication};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::EvidenceRecord,
    process::{
        archival, BlockResult, Chain, Check, ConclusionCheck, PoeExtraction, ProofOfExistence,
        ValidationContext,
    },
    Error, Result,
};

/// Result of the validation of one evidence record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecordResult {
    /// The ERV block, with one time-stamp block per validated round.
    pub block: BlockResult,

    /// Time the protected objects are proven to exist at: the time-stamp of
    /// the first round when every round is valid, the current time otherwise.
    pub proof_of_existence: ProofOfExistence,
}

pub(crate) fn execute(
    ctx: &ValidationContext,
    record: &EvidenceRecord,
    poe: &PoeExtraction,
) -> Result<EvidenceRecordResult> {
    if record.digest_matchers.is_empty() {
        return Err(Error::EmptyEvidenceRecord(record.id.clone()));
    }

    let constraints = &ctx.policy().evidence_record;
    let matchers: Vec<_> = record
        .digest_matchers
        .iter()
        .filter(|m| !m.matcher_type.is_orphan())
        .collect();

    let mut chain = Chain::new(ERV).with_token_id(&record.id);

    for matcher in &matchers {
        chain.add(
            constraints.data_object_existence,
            Check::new(ERV_IRDOF, ERV_IRDOF_ANS, || matcher.data_found)
                .fails_with(
                    Indication::Indeterminate,
                    Some(SubIndication::SignedDataNotFound),
                )
                .detail(matcher.describe()),
        );
        if matcher.data_found {
            chain.add(
                constraints.data_object_intact,
                Check::new(ERV_IRDOI, ERV_IRDOI_ANS, || matcher.data_intact)
                    .fails_with(Indication::Failed, Some(SubIndication::HashFailure))
                    .detail(matcher.describe()),
            );
        }
    }

    chain.add(
        constraints.data_object_found,
        Check::new(ERV_ALOROF, ERV_ALOROF_ANS, || {
            matchers.iter().any(|m| m.data_found)
        })
        .fails_with(
            Indication::Indeterminate,
            Some(SubIndication::SignedDataNotFound),
        ),
    );

    chain.add(
        constraints.data_object_group,
        Check::new(ERV_IDGI, ERV_IDGI_ANS, || {
            matchers
                .iter()
                .filter(|m| m.data_found)
                .all(|m| m.data_intact)
        })
        .fails_with(Indication::Failed, Some(SubIndication::HashFailure)),
    );

    let mut timestamps: Vec<_> = record
        .timestamps
        .iter()
        .filter_map(|id| ctx.diagnostic().timestamp(id))
        .collect();
    timestamps.sort_by_key(|ts| ts.production_time);

    let mut all_rounds_valid = !chain.is_terminated();
    for (round, timestamp) in timestamps.iter().enumerate() {
        if chain.is_terminated() {
            all_rounds_valid = false;
            break;
        }

        let mut round_poe = poe.clone();
        if let Some(next) = timestamps.get(round + 1) {
            round_poe.extract_from_timestamp(next);
        }

        let result = archival::validate_timestamp(ctx, timestamp, &round_poe);
        chain.add(
            Some(Level::Fail),
            ConclusionCheck::new(ERV_ITVPC, ERV_ITVPC_ANS, &result.conclusion)
                .token_id(&timestamp.id),
        );
        all_rounds_valid &= result.conclusion.is_passed();
        chain.push_sub_block(result);
    }

    let proof_of_existence = timestamps
        .first()
        .filter(|_| all_rounds_valid)
        .map_or(
            ProofOfExistence {
                time: ctx.current_time(),
                token_id: None,
            },
            |first| ProofOfExistence {
                time: first.production_time,
                token_id: Some(first.id.clone()),
            },
        );

    let crypto = ctx.policy().evidence_record_cryptographic_constraint();
    if crypto.level.is_some() {
        for matcher in &matchers {
            let validation = crypto.check_digest(
                matcher.digest_algorithm,
                proof_of_existence.time,
                &matcher.describe(),
            );
            let secure = validation.secure;
            chain.add(
                crypto.level,
                Check::new(ACCM_DIGEST, ACCM_DIGEST_ANS, || secure)
                    .fails_with(
                        Indication::Indeterminate,
                        Some(SubIndication::CryptoConstraintsFailure),
                    )
                    .detail(matcher.describe()),
            );
            chain.set_cryptographic_validation(validation);
        }
    }

    log::debug!(
        "evidence record {}: {} with POE at {}",
        record.id,
        chain.conclusion().indication,
        proof_of_existence.time.to_rfc3339()
    );

    Ok(EvidenceRecordResult {
        block: chain.finish(),
        proof_of_existence,
    })
}
