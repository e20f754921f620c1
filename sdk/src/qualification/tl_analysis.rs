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

//! Acceptance of a trusted list or list of trusted lists.

use ades_status_tracker::{message_tags::*, Indication, MessageTag, SubIndication};
use chrono::{DateTime, Utc};

use crate::{
    diagnostic::TrustedListStatus,
    policy::TrustedListConstraints,
    process::{BlockResult, Chain, Check},
};

/// Checks freshness, expiration, version and signature of a list.
///
/// `title` is [`TLA`] for a trusted list and [`LOTLA`] for a list of
/// trusted lists.
pub(crate) fn execute(
    title: MessageTag,
    status: &TrustedListStatus,
    constraints: &TrustedListConstraints,
    current_time: DateTime<Utc>,
) -> BlockResult {
    let mut chain = Chain::new(title).with_token_id(&status.url);

    if let Some(freshness) = &constraints.freshness {
        let fresh = match (status.issue_date, freshness.max_age()) {
            (Some(issued), Some(max_age)) => current_time - issued <= max_age,
            (Some(issued), None) => issued <= current_time,
            (None, _) => false,
        };
        chain.add(
            Some(freshness.level),
            Check::new(QUAL_TL_FRESH, QUAL_TL_FRESH_ANS, || fresh)
                .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater)),
        );
    }

    chain.add(
        constraints.not_expired,
        Check::new(QUAL_TL_EXP, QUAL_TL_EXP_ANS, || {
            status.next_update.is_some_and(|next| next >= current_time)
        })
        .fails_with(Indication::Indeterminate, Some(SubIndication::TryLater)),
    );

    if let Some(version) = &constraints.version {
        let actual = status.version;
        chain.add(
            Some(version.level),
            Check::new(QUAL_TL_VERSION, QUAL_TL_VERSION_ANS, || {
                actual == Some(version.value)
            })
            .fails_with(Indication::Failed, Some(SubIndication::FormatFailure))
            .detail(format!(
                "expected {}, found {}",
                version.value,
                actual.map_or_else(|| "none".to_owned(), |v| v.to_string())
            )),
        );
    }

    chain.add(
        constraints.well_signed,
        Check::new(QUAL_TL_WS, QUAL_TL_WS_ANS, || status.well_signed)
            .fails_with(Indication::Failed, Some(SubIndication::SigCryptoFailure)),
    );

    chain.finish()
}
