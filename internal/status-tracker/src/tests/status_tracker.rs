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

use crate::{message_tags, ConstraintItem, ConstraintStatus, StatusTracker};

#[test]
fn aggregates_items_in_order() {
    let mut tracker = StatusTracker::default();
    assert!(tracker.is_empty());

    tracker.add(ConstraintItem::new(
        message_tags::BBB_ICS_ISCI,
        ConstraintStatus::Ok,
    ));
    tracker.add(
        ConstraintItem::new(message_tags::BBB_XCV_IRIF, ConstraintStatus::Warning)
            .warning(message_tags::BBB_XCV_IRIF_ANS),
    );
    tracker.add(
        ConstraintItem::new(message_tags::BBB_XCV_ICTIVRSC, ConstraintStatus::NotOk)
            .error(message_tags::BBB_XCV_ICTIVRSC_ANS),
    );

    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.logged_items()[0].name.key, "BBB_ICS_ISCI");
    assert!(tracker.has_error());
    assert_eq!(tracker.filter_errors().count(), 1);
    assert_eq!(tracker.errors().len(), 1);
    assert_eq!(tracker.warnings().len(), 1);
    assert!(tracker.infos().is_empty());

    assert_eq!(
        tracker.status_of("BBB_XCV_IRIF"),
        Some(ConstraintStatus::Warning)
    );
    assert!(!tracker.has_status("BBB_CV_ISI"));
}

#[test]
fn display_lists_items() {
    let mut tracker = StatusTracker::default();
    tracker.add(ConstraintItem::new(
        message_tags::BBB_CV_ISI,
        ConstraintStatus::Ok,
    ));

    let text = tracker.to_string();
    assert!(text.contains("BBB_CV_ISI"));
    assert!(text.starts_with("Ok"));
}
