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

//! Validation process for signatures and time-stamps with archival data.

use ades_status_tracker::{message_tags::*, Level};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{SignatureToken, TimestampToken},
    policy::Context,
    process::{
        bbb::sav, evidence_record, is_poe_resolvable, psv, BlockResult, Chain, ConclusionCheck,
        EvidenceRecordResult, LtvResult, PoeExtraction, ProofOfExistence, ValidationContext,
    },
    Result,
};

/// Result of the archival validation of a signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchivalResult {
    /// The archival block. Time-stamp, PSV and SAV blocks are nested.
    pub block: BlockResult,

    /// Evidence records covering the signature.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_records: Vec<EvidenceRecordResult>,

    /// Best-signature-time after all archival data was processed.
    pub proof_of_existence: ProofOfExistence,
}

pub(crate) fn execute(
    ctx: &ValidationContext,
    signature: &SignatureToken,
    context: Context,
    ltv: &LtvResult,
    poe: &mut PoeExtraction,
) -> Result<ArchivalResult> {
    let diagnostic = ctx.diagnostic();
    let policy = ctx.policy();
    let mut chain = Chain::new(ARCH).with_token_id(&signature.id);

    let mut evidence_records = Vec::new();
    for record in diagnostic.evidence_records_of(signature) {
        let result = evidence_record::execute(ctx, record, poe)?;
        chain.add(
            policy.evidence_record_valid,
            ConclusionCheck::new(ARCH_IERVPC, ARCH_IERVPC_ANS, &result.block.conclusion)
                .token_id(&record.id),
        );
        if result.block.conclusion.is_passed() {
            poe.extract_from_evidence_record(record, &result.proof_of_existence);
        }
        evidence_records.push(result);
    }

    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(ARCH_LTVV, ARCH_LTVV_ANS, &ltv.block.conclusion)
            .accept(is_poe_resolvable),
    );

    poe.add(&signature.id, ltv.proof_of_existence.clone());

    let mut timestamps = diagnostic.timestamps_of(signature);
    timestamps.sort_by(|a, b| b.production_time.cmp(&a.production_time));

    for timestamp in timestamps {
        let result = validate_timestamp(ctx, timestamp, poe);
        chain.add(
            policy.timestamp_valid,
            ConclusionCheck::new(ARCH_ITVPC, ARCH_ITVPC_ANS, &result.conclusion)
                .token_id(&timestamp.id),
        );
        if result.conclusion.is_passed() {
            poe.extract_from_timestamp(timestamp);
        }
        chain.push_sub_block(result);
    }

    let proof_of_existence = poe
        .lowest_poe(&signature.id)
        .cloned()
        .unwrap_or_else(|| ltv.proof_of_existence.clone());

    if !ltv.block.conclusion.is_passed() && !chain.is_terminated() {
        let psv = psv::execute(ctx, signature, context, &ltv.block.conclusion, poe);
        chain.add(
            Some(Level::Fail),
            ConclusionCheck::new(ARCH_IPSVC, ARCH_IPSVC_ANS, &psv.block.conclusion),
        );
        chain.push_sub_block(psv.block);

        if !chain.is_terminated() {
            let sav = sav::execute(ctx, signature, context, proof_of_existence.time);
            chain.add(
                Some(Level::Fail),
                ConclusionCheck::new(ARCH_ISAVBST, ARCH_ISAVBST_ANS, &sav.conclusion),
            );
            chain.push_sub_block(sav);
        }
    }

    if chain.conclusion().is_passed() {
        let mut conclusion = chain.conclusion().clone();
        conclusion.merge_non_error_messages(&ltv.block.conclusion);
        chain.set_conclusion(conclusion);
    }

    log::debug!(
        "archival validation of {}: {} {:?}",
        signature.id,
        chain.conclusion().indication,
        chain.conclusion().sub_indication
    );

    Ok(ArchivalResult {
        block: chain.finish(),
        evidence_records,
        proof_of_existence,
    })
}

/// Validates a time-stamp with the POE gathered so far: a time-stamp whose
/// basic validation may still be resolved by POE goes through the past
/// signature validation. The PSV block is nested when it ran.
pub(crate) fn validate_timestamp(
    ctx: &ValidationContext,
    timestamp: &TimestampToken,
    poe: &PoeExtraction,
) -> BlockResult {
    let bbb = ctx.bbb(timestamp, Context::Timestamp);
    let mut chain = Chain::new(TSP_ARCH).with_token_id(&timestamp.id);

    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(TSP_ABSV, TSP_ABSV_ANS, &bbb.conclusion).accept(is_poe_resolvable),
    );

    if !bbb.conclusion.is_passed() && !chain.is_terminated() {
        let psv = psv::execute(ctx, timestamp, Context::Timestamp, &bbb.conclusion, poe);
        chain.add(
            Some(Level::Fail),
            ConclusionCheck::new(TSP_IPTVC, TSP_IPTVC_ANS, &psv.block.conclusion),
        );
        chain.push_sub_block(psv.block);
    }

    chain.finish()
}
