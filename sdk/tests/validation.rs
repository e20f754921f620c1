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


use ades_validation::{
    qualification::SignatureQualification,
    tsl::{LotlSource, TlValidationJob, TrustedListsSource},
    DocumentValidator, Indication, Result, ValidationPolicy,
};
use chrono::{TimeZone, Utc};

mod common;
use common::{
    diagnostic, lotl, strict_policy, trusted_list, validation_time, AllowListValidator,
    JsonParser, MemoryLoader, LOTL_URL, SIGNATURE, TL_URL,
};

#[test]
fn qualified_signature_with_default_policy() -> Result<()> {
    let reports = DocumentValidator::new(diagnostic()?)
        .with_current_time(validation_time())
        .validate()?;

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Passed);
    assert_eq!(summary.qualification, SignatureQualification::Qesig);
    assert_eq!(
        summary.best_signature_time,
        Utc.with_ymd_and_hms(2025, 5, 30, 9, 13, 2).unwrap()
    );
    assert_eq!(reports.summary.policy_name, ValidationPolicy::default().name);
    assert_eq!(reports.summary.valid_signatures_count(), 1);

    Ok(())
}

#[test]
fn strict_policy_needs_known_trusted_lists() -> Result<()> {
    let policy = ValidationPolicy::from_string(strict_policy(), "toml")?;
    assert_eq!(policy.name, "Strict qualification policy");

    let reports = DocumentValidator::new(diagnostic()?)
        .with_policy(policy)
        .with_current_time(validation_time())
        .validate()?;

    // the signature itself is fine, the trusted lists are unknown
    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Passed);
    assert_eq!(summary.qualification, SignatureQualification::Na);
    assert_eq!(reports.detailed.trusted_lists.len(), 0);

    Ok(())
}

#[test]
fn trusted_lists_from_validation_job() -> Result<()> {
    let loader = MemoryLoader::default();
    loader.serve(LOTL_URL, &lotl());
    loader.serve(TL_URL, &trusted_list());

    let mut job = TlValidationJob::new(
        Box::new(loader.clone()),
        Box::new(JsonParser),
        Box::new(AllowListValidator),
    )
    .with_lotl_source(LotlSource::new(LOTL_URL, vec!["EU-LOTL-SIGNER".to_owned()]))
    .with_trusted_list_source(TrustedListsSource::new());
    job.online_refresh()?;

    let source = job.trusted_list_source().unwrap();
    let reports = DocumentValidator::new(diagnostic()?)
        .with_policy(ValidationPolicy::from_string(strict_policy(), "toml")?)
        .with_current_time(validation_time())
        .with_trusted_lists_source(source)
        .validate()?;

    let signature = &reports.detailed.signatures[0];
    assert_eq!(signature.qualification.qualification, SignatureQualification::Qesig);
    assert!(signature
        .qualification
        .trusted_list_analysis
        .iter()
        .all(|block| block.conclusion.is_passed()));
    assert_eq!(reports.detailed.trusted_lists.len(), 2);

    Ok(())
}

#[test]
fn outdated_trusted_list_loses_qualification() -> Result<()> {
    let loader = MemoryLoader::default();
    loader.serve(LOTL_URL, &lotl());
    let mut outdated = trusted_list();
    outdated["issue_date"] = "2024-11-15T00:00:00Z".into();
    outdated["next_update"] = "2025-05-15T00:00:00Z".into();
    loader.serve(TL_URL, &outdated);

    let mut job = TlValidationJob::new(
        Box::new(loader),
        Box::new(JsonParser),
        Box::new(AllowListValidator),
    )
    .with_lotl_source(LotlSource::new(LOTL_URL, vec!["EU-LOTL-SIGNER".to_owned()]))
    .with_trusted_list_source(TrustedListsSource::new());
    job.online_refresh()?;

    let reports = DocumentValidator::new(diagnostic()?)
        .with_policy(ValidationPolicy::from_string(strict_policy(), "toml")?)
        .with_current_time(validation_time())
        .with_trusted_lists_source(job.trusted_list_source().unwrap())
        .validate()?;

    let summary = reports.summary.signature(SIGNATURE).unwrap();
    assert_eq!(summary.indication, Indication::Passed);
    assert_eq!(summary.qualification, SignatureQualification::Na);

    Ok(())
}

#[test]
fn reports_as_json() -> Result<()> {
    let reports = DocumentValidator::new(diagnostic()?)
        .with_current_time(validation_time())
        .validate()?;

    let json: serde_json::Value = serde_json::from_str(&reports.to_json()?)?;
    assert_eq!(json["summary"]["signatures"][0]["id"], SIGNATURE);
    assert_eq!(json["summary"]["signatures"][0]["indication"], "PASSED");

    Ok(())
}
