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

//! Basic building blocks: the validation of one token in isolation, at the
//! current time.

use ades_status_tracker::{Conclusion, Indication, SubIndication};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::{TimestampType, Token, TokenType},
    policy::Context,
    process::{BlockResult, ValidationContext},
};

pub(crate) mod cv;
pub(crate) mod isc;
pub(crate) mod sav;
pub(crate) mod xcv;

/// The basic building blocks of one token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BbbResult {
    /// Identifier of the token.
    pub id: String,

    /// Context the token was validated in.
    pub context: Context,

    /// Identification of the signing certificate.
    pub isc: BlockResult,

    /// Cryptographic verification.
    pub cv: BlockResult,

    /// X.509 certificate validation. Not run without a signing certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xcv: Option<BlockResult>,

    /// Signature acceptance validation.
    pub sav: BlockResult,

    /// Combined conclusion.
    pub conclusion: Conclusion,
}

pub(crate) fn execute<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    context: Context,
) -> BbbResult {
    let isc = isc::execute(ctx, token, context);
    let cv = cv::execute(ctx, token, context);
    let xcv = isc
        .conclusion
        .is_passed()
        .then(|| xcv::execute(ctx, token, context));
    let sav = sav::execute(ctx, token, context, ctx.current_time());

    let content_timestamps = valid_content_timestamp_times(ctx, token);
    let conclusion = conclude(ctx, token, &isc, &cv, xcv.as_ref(), &sav, &content_timestamps);

    log::debug!(
        "basic building blocks of {}: {} {:?}",
        token.id(),
        conclusion.indication,
        conclusion.sub_indication
    );

    BbbResult {
        id: token.id().to_owned(),
        context,
        isc,
        cv,
        xcv,
        sav,
        conclusion,
    }
}

fn valid_content_timestamp_times<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
) -> Vec<DateTime<Utc>> {
    if token.token_type() != TokenType::Signature {
        return Vec::new();
    }
    let Some(signature) = ctx.diagnostic().signature(token.id()) else {
        return Vec::new();
    };

    ctx.diagnostic()
        .timestamps_of(signature)
        .into_iter()
        .filter(|ts| ts.timestamp_type == TimestampType::ContentTimestamp)
        .filter(|ts| ctx.bbb(*ts, Context::Timestamp).conclusion.is_passed())
        .map(|ts| ts.production_time)
        .collect()
}

// ISC, then CV, then XCV, then SAV. A valid content time-stamp produced
// after the event that made the token indeterminate turns it into a failure.
fn conclude<T: Token + ?Sized>(
    ctx: &ValidationContext,
    token: &T,
    isc: &BlockResult,
    cv: &BlockResult,
    xcv: Option<&BlockResult>,
    sav: &BlockResult,
    content_timestamps: &[DateTime<Utc>],
) -> Conclusion {
    if !isc.conclusion.is_passed() {
        return isc.conclusion.clone();
    }

    if !cv.conclusion.is_passed() {
        return cv.conclusion.clone();
    }

    let after = |date: Option<DateTime<Utc>>| {
        date.is_some_and(|date| content_timestamps.iter().any(|t| *t > date))
    };

    if let Some(xcv) = xcv.filter(|xcv| !xcv.conclusion.is_passed()) {
        let mut conclusion = xcv.conclusion.clone();
        let signing_certificate = ctx.diagnostic().signing_certificate(token);

        if conclusion.is(Indication::Indeterminate, Some(SubIndication::RevokedNoPoe)) {
            let revocation_date = signing_certificate
                .and_then(|c| ctx.diagnostic().latest_revocation(c))
                .and_then(|(entry, _)| entry.revocation_date);
            if after(revocation_date) {
                conclusion.set_indication(Indication::Failed, Some(SubIndication::Revoked));
            }
        } else if conclusion.indication == Indication::Indeterminate
            && matches!(
                conclusion.sub_indication,
                Some(SubIndication::OutOfBoundsNoPoe | SubIndication::OutOfBoundsNotRevoked)
            )
            && after(signing_certificate.map(|c| c.not_after))
        {
            conclusion.set_indication(Indication::Failed, Some(SubIndication::Expired));
        }
        return conclusion;
    }

    if !sav.conclusion.is_passed() {
        let mut conclusion = sav.conclusion.clone();
        let sunset = sav
            .cryptographic_validation
            .as_ref()
            .and_then(|v| v.not_after);
        if conclusion.is(
            Indication::Indeterminate,
            Some(SubIndication::CryptoConstraintsFailureNoPoe),
        ) && after(sunset)
        {
            conclusion.set_indication(
                Indication::Failed,
                Some(SubIndication::CryptoConstraintsFailure),
            );
        }
        return conclusion;
    }

    let mut conclusion = Conclusion::passed();
    for block in [Some(isc), Some(cv), xcv, Some(sav)].into_iter().flatten() {
        conclusion.merge_non_error_messages(&block.conclusion);
    }
    conclusion
}
