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

//! Cryptographic verification.

use ades_status_tracker::{message_tags::*, Indication, SubIndication};

use crate::{
    diagnostic::{Token, TokenType},
    policy::Context,
    process::{BlockResult, Chain, Check, ValidationContext},
};

pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
) -> BlockResult {
    let constraints = ctx.policy().basic_constraints(context);
    let mut chain = Chain::new(CV).with_token_id(token.id());

    match token.token_type() {
        TokenType::Signature => {
            for matcher in token
                .digest_matchers()
                .iter()
                .filter(|m| !m.matcher_type.is_orphan())
            {
                chain.add(
                    constraints.reference_data_existence,
                    Check::new(BBB_CV_IRDOF, BBB_CV_IRDOF_ANS, || matcher.data_found)
                        .fails_with(
                            Indication::Indeterminate,
                            Some(SubIndication::SignedDataNotFound),
                        )
                        .detail(matcher.describe()),
                );
                if matcher.data_found {
                    chain.add(
                        constraints.reference_data_intact,
                        Check::new(BBB_CV_IRDOI, BBB_CV_IRDOI_ANS, || matcher.data_intact)
                            .fails_with(Indication::Failed, Some(SubIndication::HashFailure))
                            .detail(matcher.describe()),
                    );
                }
            }
        }
        TokenType::Timestamp => {
            if let Some(timestamp) = ctx.diagnostic().timestamp(token.id()) {
                chain.add(
                    constraints.reference_data_existence,
                    Check::new(BBB_CV_TSP_IRDOF, BBB_CV_TSP_IRDOF_ANS, || {
                        timestamp.message_imprint_data_found
                    })
                    .fails_with(
                        Indication::Indeterminate,
                        Some(SubIndication::SignedDataNotFound),
                    ),
                );
                if timestamp.message_imprint_data_found {
                    chain.add(
                        constraints.reference_data_intact,
                        Check::new(BBB_CV_TSP_IRDOI, BBB_CV_TSP_IRDOI_ANS, || {
                            timestamp.message_imprint_data_intact
                        })
                        .fails_with(Indication::Failed, Some(SubIndication::HashFailure)),
                    );
                }
            }
        }
        TokenType::Revocation => {}
    }

    chain.add(
        constraints.signature_intact,
        Check::new(BBB_CV_ISI, BBB_CV_ISI_ANS, || {
            token.basic_signature().signature_intact
        })
        .fails_with(Indication::Failed, Some(SubIndication::SigCryptoFailure)),
    );

    chain.finish()
}
