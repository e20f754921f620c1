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


use crate::{
    message_tags::*,
    process::{Chain, Check, ConclusionCheck},
    Conclusion, ConstraintStatus, Indication, Level, SubIndication,
};

#[test]
fn passing_checks_keep_the_block_passed() {
    let mut chain = Chain::new(CV).with_token_id("S-1");
    chain
        .add(Some(Level::Fail), Check::new(BBB_CV_IRDOF, BBB_CV_IRDOF_ANS, || true))
        .add(Some(Level::Fail), Check::new(BBB_CV_ISI, BBB_CV_ISI_ANS, || true));

    let block = chain.finish();
    assert!(block.conclusion.is_passed());
    assert_eq!(block.id.as_deref(), Some("S-1"));
    assert_eq!(block.constraints.len(), 2);
    assert_eq!(block.status_of("BBB_CV_ISI"), Some(ConstraintStatus::Ok));
}

#[test]
fn unset_level_skips_the_check() {
    let mut chain = Chain::new(CV);
    chain.add(None, Check::new(BBB_CV_ISI, BBB_CV_ISI_ANS, || false));

    let block = chain.finish();
    assert!(block.constraints.is_empty());
    assert!(block.conclusion.is_passed());
}

#[test]
fn ignored_check_is_recorded_but_not_evaluated() {
    let mut chain = Chain::new(CV);
    chain.add(
        Some(Level::Ignore),
        Check::new(BBB_CV_ISI, BBB_CV_ISI_ANS, || -> bool { unreachable!("evaluated") }),
    );

    let block = chain.finish();
    assert_eq!(block.status_of("BBB_CV_ISI"), Some(ConstraintStatus::Ignored));
    assert!(block.conclusion.is_passed());
}

#[test]
fn warning_keeps_indication() {
    let mut chain = Chain::new(SAV);
    chain.add(
        Some(Level::Warn),
        Check::new(BBB_SAV_ISQPSTP, BBB_SAV_ISQPSTP_ANS, || false),
    );
    chain.add(
        Some(Level::Inform),
        Check::new(BBB_SAV_ISSV, BBB_SAV_ISSV_ANS, || false),
    );

    assert!(!chain.is_terminated());
    let block = chain.finish();
    assert!(block.conclusion.is_passed());
    assert_eq!(block.conclusion.warnings.len(), 1);
    assert_eq!(block.conclusion.infos.len(), 1);
    assert_eq!(
        block.status_of("BBB_SAV_ISQPSTP"),
        Some(ConstraintStatus::Warning)
    );
    assert_eq!(
        block.status_of("BBB_SAV_ISSV"),
        Some(ConstraintStatus::Information)
    );
}

#[test]
fn failure_terminates_the_chain() {
    let mut chain = Chain::new(CV);
    chain.add(
        Some(Level::Fail),
        Check::new(BBB_CV_IRDOI, BBB_CV_IRDOI_ANS, || false)
            .fails_with(Indication::Failed, Some(SubIndication::HashFailure))
            .detail("document"),
    );
    chain.add(
        Some(Level::Fail),
        Check::new(BBB_CV_ISI, BBB_CV_ISI_ANS, || -> bool { unreachable!("evaluated") }),
    );

    assert!(chain.is_terminated());
    let block = chain.finish();
    assert!(block
        .conclusion
        .is(Indication::Failed, Some(SubIndication::HashFailure)));
    assert_eq!(block.constraints.len(), 1);
    assert_eq!(block.status_of("BBB_CV_IRDOI"), Some(ConstraintStatus::NotOk));
    assert!(block.conclusion.errors[0].value.contains("document"));
}

#[test]
fn default_failure_is_indeterminate() {
    let mut chain = Chain::new(XCV);
    chain.add(
        Some(Level::Fail),
        Check::new(BBB_XCV_CCCBB, BBB_XCV_CCCBB_ANS, || false),
    );

    let conclusion = chain.finish().conclusion;
    assert_eq!(conclusion.indication, Indication::Indeterminate);
    assert!(conclusion.sub_indication.is_none());
}

#[test]
fn nested_failure_carries_errors() {
    let mut nested = Conclusion::new(Indication::Indeterminate, Some(SubIndication::TryLater));
    nested.add_error(BBB_XCV_IRDPFC_ANS);

    let mut chain = Chain::new(XCV);
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(BBB_XCV_SUB, BBB_XCV_SUB_ANS, &nested).token_id("C-SIGNER"),
    );

    let block = chain.finish();
    assert!(block
        .conclusion
        .is(Indication::Indeterminate, Some(SubIndication::TryLater)));
    let keys: Vec<_> = block.conclusion.errors.iter().map(|e| &*e.key).collect();
    assert_eq!(keys, ["BBB_XCV_IRDPFC_ANS", "BBB_XCV_SUB_ANS"]);
    assert_eq!(block.constraints[0].id.as_deref(), Some("C-SIGNER"));
}

#[test]
fn accepted_nested_conclusion_passes() {
    let nested = Conclusion::new(Indication::Indeterminate, Some(SubIndication::RevokedNoPoe));

    let mut chain = Chain::new(LTV);
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(LTV_ABSV, LTV_ABSV_ANS, &nested)
            .accept(crate::process::is_poe_resolvable),
    );
    chain.add(
        Some(Level::Fail),
        ConclusionCheck::new(LTV_IBVCBST, LTV_IBVCBST_ANS, &nested)
            .fails_with(Indication::Failed, None),
    );

    let block = chain.finish();
    assert_eq!(block.status_of("LTV_ABSV"), Some(ConstraintStatus::Ok));
    assert!(block.conclusion.is(Indication::Failed, None));
}
