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


use chrono::Duration;

use crate::{
    diagnostic::TrustedListStatus,
    message_tags::{QUAL_TL_EXP, QUAL_TL_FRESH, QUAL_TL_VERSION, QUAL_TL_WS, TLA},
    policy::{TimeConstraint, TrustedListConstraints, ValueConstraint},
    qualification::tl_analysis,
    tests::fixtures::{date, validation_time},
    ConstraintStatus, Indication, Level, SubIndication,
};

const URL: &str = "https://tl.example.com/tl-be.xml";

fn strict() -> TrustedListConstraints {
    TrustedListConstraints {
        freshness: Some(TimeConstraint {
            level: Level::Fail,
            max_age_seconds: Some(30 * 24 * 3600),
        }),
        not_expired: Some(Level::Fail),
        version: Some(ValueConstraint {
            level: Level::Fail,
            value: 5,
        }),
        well_signed: Some(Level::Fail),
    }
}

fn status() -> TrustedListStatus {
    TrustedListStatus {
        url: URL.to_owned(),
        lotl: false,
        parent_lotl_url: None,
        country_code: Some("BE".to_owned()),
        issue_date: Some(date(2025, 5, 15)),
        next_update: Some(date(2025, 11, 15)),
        version: Some(5),
        well_signed: true,
    }
}

#[test]
fn current_list_is_accepted() {
    let block = tl_analysis::execute(TLA, &status(), &strict(), validation_time());

    assert!(block.conclusion.is_passed());
    assert_eq!(block.id.as_deref(), Some(URL));
    for key in [QUAL_TL_FRESH, QUAL_TL_EXP, QUAL_TL_VERSION, QUAL_TL_WS] {
        assert_eq!(block.status_of(key.key), Some(ConstraintStatus::Ok), "{}", key.key);
    }
}

#[test]
fn old_list_is_not_fresh() {
    let status = TrustedListStatus {
        issue_date: Some(validation_time() - Duration::days(45)),
        ..status()
    };

    let block = tl_analysis::execute(TLA, &status, &strict(), validation_time());
    assert!(block
        .conclusion
        .is(Indication::Indeterminate, Some(SubIndication::TryLater)));
    assert_eq!(block.status_of(QUAL_TL_FRESH.key), Some(ConstraintStatus::NotOk));
}

#[test]
fn expired_list_should_be_reloaded() {
    let status = TrustedListStatus {
        next_update: Some(date(2025, 5, 31)),
        ..status()
    };

    let block = tl_analysis::execute(TLA, &status, &strict(), validation_time());
    assert!(block
        .conclusion
        .is(Indication::Indeterminate, Some(SubIndication::TryLater)));
    assert_eq!(block.status_of(QUAL_TL_EXP.key), Some(ConstraintStatus::NotOk));
}

#[test]
fn unexpected_version_is_a_format_failure() {
    let status = TrustedListStatus {
        version: Some(4),
        ..status()
    };

    let block = tl_analysis::execute(TLA, &status, &strict(), validation_time());
    assert!(block
        .conclusion
        .is(Indication::Failed, Some(SubIndication::FormatFailure)));
}

#[test]
fn badly_signed_list_is_rejected() {
    let status = TrustedListStatus {
        well_signed: false,
        ..status()
    };

    let block = tl_analysis::execute(TLA, &status, &strict(), validation_time());
    assert!(block
        .conclusion
        .is(Indication::Failed, Some(SubIndication::SigCryptoFailure)));
}

#[test]
fn default_policy_only_warns() {
    let status = TrustedListStatus {
        issue_date: None,
        next_update: None,
        version: None,
        well_signed: false,
        ..status()
    };
    let constraints = crate::ValidationPolicy::default().trusted_list;

    let block = tl_analysis::execute(TLA, &status, &constraints, validation_time());
    assert!(block.conclusion.is_passed());
    assert_eq!(block.conclusion.warnings.len(), 4);
}
