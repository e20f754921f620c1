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


use std::io::Write;

use crate::{
    policy::{Context, SubContext},
    Error, Level, ValidationPolicy,
};

#[test]
fn default_policy_levels() {
    let policy = ValidationPolicy::default();

    let signing = policy.certificate_constraints(Context::Signature, SubContext::SigningCert);
    assert_eq!(signing.revocation_data_available, Some(Level::Fail));
    assert_eq!(signing.not_revoked, Some(Level::Fail));

    let tsa = policy.certificate_constraints(Context::Timestamp, SubContext::SigningCert);
    assert_eq!(tsa.revocation_data_available, Some(Level::Warn));

    let ocsp_responder =
        policy.certificate_constraints(Context::Revocation, SubContext::SigningCert);
    assert!(ocsp_responder.revocation_data_available.is_none());

    assert_eq!(policy.timestamp_valid, Some(Level::Warn));
    assert_eq!(policy.trusted_list.version.as_ref().unwrap().value, 5);
}

#[test]
fn counter_signatures_fall_back_to_signature_constraints() {
    let policy = ValidationPolicy::default();
    assert_eq!(
        policy.basic_constraints(Context::CounterSignature),
        policy.basic_constraints(Context::Signature)
    );
}

#[test]
fn json_overrides_defaults() {
    let json = r#"{
        "name": "strict",
        "timestamp_valid": "FAIL",
        "signature": { "signing_time": "FAIL" }
    }"#;
    let policy = ValidationPolicy::from_string(json, "json").unwrap();

    assert_eq!(policy.name, "strict");
    assert_eq!(policy.timestamp_valid, Some(Level::Fail));
    assert_eq!(policy.signature.signing_time, Some(Level::Fail));
    // untouched values keep their default
    assert_eq!(policy.signature.signature_intact, Some(Level::Fail));
    assert_eq!(policy.evidence_record_valid, Some(Level::Warn));
}

#[test]
fn toml_file_is_loaded_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
name = "lenient"

[trusted_list.freshness]
level = "INFORM"
max_age_seconds = 86400
"#
    )
    .unwrap();

    let policy = ValidationPolicy::from_file(file.path()).unwrap();
    assert_eq!(policy.name, "lenient");
    let freshness = policy.trusted_list.freshness.unwrap();
    assert_eq!(freshness.level, Level::Inform);
    assert_eq!(freshness.max_age(), Some(chrono::Duration::days(1)));
}

#[test]
fn unsupported_format() {
    let result = ValidationPolicy::from_string("name: x", "yaml");
    assert!(matches!(result, Err(Error::UnsupportedPolicyFormat(f)) if f == "yaml"));
}

#[test]
fn empty_name_is_rejected() {
    let result = ValidationPolicy::from_string(r#"{ "name": "" }"#, "json");
    assert!(matches!(result, Err(Error::PolicyNotInitialised(_))));
}

#[test]
fn malformed_policy_is_a_parsing_error() {
    let result = ValidationPolicy::from_string("{ not json", "json");
    assert!(matches!(result, Err(Error::PolicyParsing(_))));
}
