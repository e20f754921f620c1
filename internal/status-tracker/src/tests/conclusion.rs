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

use crate::{message_tags, Conclusion, Indication, SubIndication};

#[test]
fn default_is_passed() {
    let conclusion = Conclusion::default();
    assert!(conclusion.is_passed());
    assert!(conclusion.sub_indication.is_none());
    assert!(conclusion.errors.is_empty());
}

#[test]
fn messages_are_not_duplicated() {
    let mut conclusion = Conclusion::passed();
    conclusion.add_warning(message_tags::BBB_XCV_IRIF_ANS);
    conclusion.add_warning(message_tags::BBB_XCV_IRIF_ANS);
    conclusion.add_info(message_tags::QUAL_TL_EXP_ANS);

    assert_eq!(conclusion.warnings.len(), 1);
    assert_eq!(conclusion.infos.len(), 1);
}

#[test]
fn merge_copies_all_kinds() {
    let mut other = Conclusion::new(Indication::Indeterminate, Some(SubIndication::TryLater));
    other.add_error(message_tags::BBB_XCV_IRDPFC_ANS);
    other.add_warning(message_tags::BBB_XCV_IRIF_ANS);

    let mut conclusion = Conclusion::passed();
    conclusion.merge_non_error_messages(&other);
    assert!(conclusion.errors.is_empty());
    assert_eq!(conclusion.warnings.len(), 1);

    conclusion.merge_messages(&other);
    assert_eq!(conclusion.errors.len(), 1);
    assert_eq!(conclusion.warnings.len(), 1);

    // Messages never change the indication.
    assert!(conclusion.is_passed());
}

#[test]
fn set_indication_keeps_messages() {
    let mut conclusion = Conclusion::passed();
    conclusion.add_error(message_tags::BBB_CV_ISI_ANS);
    conclusion.set_indication(Indication::Failed, Some(SubIndication::SigCryptoFailure));

    assert!(conclusion.is(Indication::Failed, Some(SubIndication::SigCryptoFailure)));
    assert_eq!(conclusion.errors.len(), 1);
}
