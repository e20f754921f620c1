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

//! Identification of the signing certificate.

use ades_status_tracker::{message_tags::*, Indication, Level, SubIndication};

use crate::{
    diagnostic::Token,
    policy::Context,
    process::{BlockResult, Chain, Check, ValidationContext},
};

pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
) -> BlockResult {
    let constraints = ctx.policy().basic_constraints(context);
    let signing_certificate = ctx.diagnostic().signing_certificate(token);
    let reference = token.signing_certificate_reference();
    let not_found = (
        Indication::Indeterminate,
        Some(SubIndication::NoSigningCertificateFound),
    );

    let mut chain = Chain::new(ISC).with_token_id(token.id());

    chain.add(
        Some(Level::Fail),
        Check::new(BBB_ICS_ISCI, BBB_ICS_ISCI_ANS, || {
            signing_certificate.is_some()
        })
        .fails_with(not_found.0, not_found.1),
    );

    chain.add(
        constraints.signing_certificate_attribute_present,
        Check::new(BBB_ICS_ISASCP, BBB_ICS_ISASCP_ANS, || reference.is_some())
            .fails_with(not_found.0, not_found.1),
    );

    if let Some(reference) = reference {
        chain.add(
            constraints.signing_certificate_digest_match,
            Check::new(BBB_ICS_ICDVV, BBB_ICS_ICDVV_ANS, || {
                reference.digest_value_match
            })
            .fails_with(not_found.0, not_found.1),
        );
        chain.add(
            constraints.signing_certificate_issuer_serial_match,
            Check::new(BBB_ICS_AIDNASNE, BBB_ICS_AIDNASNE_ANS, || {
                reference.issuer_serial_match
            })
            .fails_with(not_found.0, not_found.1),
        );
    }

    chain.finish()
}
