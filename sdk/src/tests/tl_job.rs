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


use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use serde_json::json;

use crate::{
    tsl::{
        CacheState, LotlSource, MockDataLoader, MockTrustedListParser,
        MockTrustedListSignatureValidator, TlInfo, TlSource, TlValidationJob,
        TlValidationResult, TrustedList, TrustedListsSource,
    },
    Indication, SubIndication,
};

const LOTL: &str = "https://lotl.example.com/eu-lotl.xml";
const PIVOT_1: &str = "https://lotl.example.com/eu-lotl-pivot-1.xml";
const PIVOT_2: &str = "https://lotl.example.com/eu-lotl-pivot-2.xml";
const TL_BE: &str = "https://tl.example.com/tl-be.xml";
const TL_FR: &str = "https://tl.example.com/tl-fr.xml";

/// Content served by the mock loader, by URL. A missing URL is a download
/// failure.
#[derive(Clone, Default)]
struct Web(Arc<Mutex<HashMap<String, Vec<u8>>>>);

impl Web {
    fn serve(&self, url: &str, list: serde_json::Value) {
        self.0
            .lock()
            .unwrap()
            .insert(url.to_owned(), serde_json::to_vec(&list).unwrap());
    }

    fn take_down(&self, url: &str) {
        self.0.lock().unwrap().remove(url);
    }

    fn loader(&self) -> Box<MockDataLoader> {
        let web = self.clone();
        let mut loader = MockDataLoader::new();
        loader.expect_get().returning(move |url| {
            web.0
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| format!("connection refused: {url}").into())
        });
        Box::new(loader)
    }
}

fn parser(calls: Arc<AtomicUsize>) -> Box<MockTrustedListParser> {
    let mut parser = MockTrustedListParser::new();
    parser.expect_parse().returning(move |content| {
        calls.fetch_add(1, Ordering::SeqCst);
        serde_json::from_slice(content).map_err(Into::into)
    });
    Box::new(parser)
}

/// Signatures are valid when at least one signing certificate is allowed.
/// Every call is recorded as (territory of the list, allowed certificates).
fn validator(
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
) -> Box<MockTrustedListSignatureValidator> {
    let mut validator = MockTrustedListSignatureValidator::new();
    validator
        .expect_validate()
        .returning(move |content: &[u8], certificates: &[String]| {
            let list: TrustedList = serde_json::from_slice(content)?;
            calls
                .lock()
                .unwrap()
                .push((list.territory.unwrap_or_default(), certificates.to_vec()));
            let valid = !certificates.is_empty();
            Ok(TlValidationResult {
                indication: if valid {
                    Indication::Passed
                } else {
                    Indication::Indeterminate
                },
                sub_indication: (!valid).then_some(SubIndication::NoSigningCertificateFound),
                signing_certificate: certificates.first().cloned(),
                signing_time: None,
            })
        });
    Box::new(validator)
}

fn trusted_list(territory: &str) -> serde_json::Value {
    json!({
        "territory": territory,
        "issue_date": "2025-05-15T00:00:00Z",
        "next_update": "2025-11-15T00:00:00Z",
        "version": 5,
    })
}

fn lotl(pointers: &[(&str, &str)], pivots: &[&str]) -> serde_json::Value {
    json!({
        "territory": "EU",
        "version": 5,
        "tsl_pointers": pointers
            .iter()
            .map(|(location, territory)| json!({
                "location": location,
                "territory": territory,
                "certificates": [format!("{territory}-signer")],
            }))
            .collect::<Vec<_>>(),
        "pivot_urls": pivots,
    })
}

struct Fixture {
    web: Web,
    parsed: Arc<AtomicUsize>,
    validated: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            web: Web::default(),
            parsed: Arc::default(),
            validated: Arc::default(),
        }
    }

    fn job(&self) -> TlValidationJob {
        TlValidationJob::new(
            self.web.loader(),
            parser(self.parsed.clone()),
            validator(self.validated.clone()),
        )
    }

    fn validated_territories(&self) -> Vec<String> {
        let mut territories: Vec<String> = self
            .validated
            .lock()
            .unwrap()
            .iter()
            .map(|(territory, _)| territory.clone())
            .collect();
        territories.sort();
        territories
    }
}

#[test]
fn without_source_entries_stay_desynchronized() {
    let fixture = Fixture::new();
    fixture.web.serve(TL_BE, trusted_list("BE"));
    let mut job = fixture
        .job()
        .with_tl_source(TlSource::new(TL_BE, vec!["BE-signer".to_owned()]));

    job.online_refresh().unwrap();

    let summary = job.summary();
    let info = summary.tl_info(TL_BE).unwrap();
    assert_eq!(info.download_cache_info.state, CacheState::Desynchronized);
    assert_eq!(info.parsing_cache_info.state, CacheState::Desynchronized);
    assert_eq!(info.validation_cache_info.state, CacheState::Desynchronized);
    assert!(info.validation_cache_info.result.as_ref().unwrap().indication.is_passed());
    assert!(job.trusted_list_source().is_none());
}

#[test]
fn refresh_publishes_to_source() {
    let fixture = Fixture::new();
    fixture.web.serve(TL_BE, trusted_list("BE"));
    let mut job = fixture
        .job()
        .with_tl_source(TlSource::new(TL_BE, vec!["BE-signer".to_owned()]))
        .with_trusted_list_source(TrustedListsSource::new());

    job.online_refresh().unwrap();

    let source = job.trusted_list_source().unwrap();
    assert!(source.last_synchronization().is_some());
    assert_eq!(
        source.trusted_list(TL_BE).and_then(|l| l.territory.as_deref()),
        Some("BE")
    );

    let info = source.summary().unwrap().tl_info(TL_BE).unwrap();
    assert!(info.download_cache_info.is_synchronized());
    assert!(info.parsing_cache_info.is_synchronized());
    assert!(info.validation_cache_info.is_synchronized());
    assert!(info.download_cache_info.last_successful_synchronization_time.is_some());

    let statuses = source.statuses();
    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].well_signed);
    assert_eq!(statuses[0].version, Some(5));
    assert_eq!(statuses[0].country_code.as_deref(), Some("BE"));
}

#[test]
fn unchanged_content_is_not_parsed_again() {
    let fixture = Fixture::new();
    fixture.web.serve(TL_BE, trusted_list("BE"));
    let mut job = fixture
        .job()
        .with_tl_source(TlSource::new(TL_BE, vec!["BE-signer".to_owned()]))
        .with_trusted_list_source(TrustedListsSource::new());

    job.online_refresh().unwrap();
    job.online_refresh().unwrap();
    assert_eq!(fixture.parsed.load(Ordering::SeqCst), 1);
    assert_eq!(fixture.validated.lock().unwrap().len(), 1);

    let mut changed = trusted_list("BE");
    changed["version"] = json!(6);
    fixture.web.serve(TL_BE, changed);
    job.online_refresh().unwrap();

    assert_eq!(fixture.parsed.load(Ordering::SeqCst), 2);
    let source = job.trusted_list_source().unwrap();
    assert_eq!(source.trusted_list(TL_BE).unwrap().version, Some(6));
}

#[test]
fn failed_download_keeps_previous_parsing() {
    let fixture = Fixture::new();
    fixture.web.serve(TL_BE, trusted_list("BE"));
    let mut job = fixture
        .job()
        .with_tl_source(TlSource::new(TL_BE, vec!["BE-signer".to_owned()]))
        .with_trusted_list_source(TrustedListsSource::new());
    job.online_refresh().unwrap();

    fixture.web.take_down(TL_BE);
    job.online_refresh().unwrap();

    let summary = job.summary();
    let info = summary.tl_info(TL_BE).unwrap();
    assert!(info.download_cache_info.is_error());
    assert!(info.download_cache_info.result.is_none());
    assert!(info
        .download_cache_info
        .exception_message
        .as_deref()
        .is_some_and(|m| m.contains("connection refused")));
    assert!(info.parsing_cache_info.is_synchronized());
    assert!(job.trusted_list_source().unwrap().trusted_list(TL_BE).is_some());

    // back online with the same content
    fixture.web.serve(TL_BE, trusted_list("BE"));
    job.online_refresh().unwrap();
    let summary = job.summary();
    let info = summary.tl_info(TL_BE).unwrap();
    assert!(info.download_cache_info.is_synchronized());
    assert!(info.download_cache_info.exception_message.is_none());
}

#[test]
fn unparsable_list_is_an_error() {
    let fixture = Fixture::new();
    fixture.web.serve(TL_BE, json!("not a trusted list"));
    let mut job = fixture
        .job()
        .with_tl_source(TlSource::new(TL_BE, vec!["BE-signer".to_owned()]))
        .with_trusted_list_source(TrustedListsSource::new());

    job.online_refresh().unwrap();

    let summary = job.summary();
    let info = summary.tl_info(TL_BE).unwrap();
    assert!(info.download_cache_info.is_synchronized());
    assert!(info.parsing_cache_info.is_error());
    assert!(info.validation_cache_info.is_error());
    assert!(job.trusted_list_source().unwrap().trusted_lists().is_empty());
}

#[test]
fn lotl_leads_to_followed_territories() {
    let fixture = Fixture::new();
    fixture
        .web
        .serve(LOTL, lotl(&[(TL_BE, "BE"), (TL_FR, "FR")], &[]));
    fixture.web.serve(TL_BE, trusted_list("BE"));
    fixture.web.serve(TL_FR, trusted_list("FR"));

    let mut source = LotlSource::new(LOTL, vec!["EU-signer".to_owned()]);
    source.territories = vec!["BE".to_owned()];
    let mut job = fixture
        .job()
        .with_lotl_source(source)
        .with_trusted_list_source(TrustedListsSource::new());

    job.online_refresh().unwrap();

    assert_eq!(fixture.validated_territories(), ["BE", "EU"]);
    let validated = fixture.validated.lock().unwrap().clone();
    assert!(validated.contains(&("BE".to_owned(), vec!["BE-signer".to_owned()])));

    let summary = job.summary();
    assert_eq!(summary.number_of_processed_lotls(), 1);
    assert_eq!(summary.number_of_processed_tls(), 1);
    assert!(summary.tl_info(TL_FR).is_none());

    let source = job.trusted_list_source().unwrap();
    // the list of trusted lists is not published as a trusted list
    assert_eq!(source.trusted_lists().keys().collect::<Vec<_>>(), [TL_BE]);
    let statuses = source.statuses();
    assert_eq!(statuses.len(), 2);
    assert!(statuses[0].lotl);
    assert_eq!(statuses[1].parent_lotl_url.as_deref(), Some(LOTL));
}

#[test]
fn pivots_chain_signing_certificates() {
    let fixture = Fixture::new();
    let mut current = lotl(&[(TL_BE, "BE")], &[PIVOT_2, PIVOT_1]);
    current["territory"] = json!("EU-current");
    fixture.web.serve(LOTL, current);

    let mut oldest = lotl(&[], &[]);
    oldest["territory"] = json!("EU-pivot-1");
    oldest["announced_certificates"] = json!(["signer-2"]);
    fixture.web.serve(PIVOT_1, oldest);

    let mut newest = lotl(&[], &[]);
    newest["territory"] = json!("EU-pivot-2");
    newest["announced_certificates"] = json!(["signer-3"]);
    fixture.web.serve(PIVOT_2, newest);

    fixture.web.serve(TL_BE, trusted_list("BE"));

    let mut job = fixture
        .job()
        .with_lotl_source(LotlSource::new(LOTL, vec!["signer-1".to_owned()]).with_pivot_support())
        .with_trusted_list_source(TrustedListsSource::new());
    job.online_refresh().unwrap();

    let validated = fixture.validated.lock().unwrap().clone();
    let certificates_of = |territory: &str| {
        validated
            .iter()
            .find(|(t, _)| t == territory)
            .map(|(_, c)| c.clone())
            .unwrap()
    };
    assert_eq!(certificates_of("EU-pivot-1"), ["signer-1"]);
    assert_eq!(certificates_of("EU-pivot-2"), ["signer-2"]);
    assert_eq!(certificates_of("EU-current"), ["signer-3"]);

    let summary = job.summary();
    assert_eq!(summary.lotl_infos[0].pivot_infos.len(), 2);
    let source = job.trusted_list_source().unwrap();
    assert!(source.trusted_list(PIVOT_1).is_none());
    assert!(source.trusted_list(TL_BE).is_some());
}

#[test]
fn lists_no_longer_referenced_are_removed() {
    let fixture = Fixture::new();
    fixture
        .web
        .serve(LOTL, lotl(&[(TL_BE, "BE"), (TL_FR, "FR")], &[]));
    fixture.web.serve(TL_BE, trusted_list("BE"));
    fixture.web.serve(TL_FR, trusted_list("FR"));
    let mut job = fixture
        .job()
        .with_lotl_source(LotlSource::new(LOTL, vec!["EU-signer".to_owned()]))
        .with_trusted_list_source(TrustedListsSource::new());
    job.online_refresh().unwrap();
    assert!(job.trusted_list_source().unwrap().trusted_list(TL_FR).is_some());

    fixture.web.serve(LOTL, lotl(&[(TL_BE, "BE")], &[]));
    job.online_refresh().unwrap();

    let source = job.trusted_list_source().unwrap();
    assert!(source.trusted_list(TL_FR).is_none());
    assert!(source.trusted_list(TL_BE).is_some());
    assert!(job.summary().tl_info(TL_FR).is_none());

    // served again, the list is downloaded and parsed from scratch
    let parsed = fixture.parsed.load(Ordering::SeqCst);
    fixture
        .web
        .serve(LOTL, lotl(&[(TL_BE, "BE"), (TL_FR, "FR")], &[]));
    job.online_refresh().unwrap();
    // the list of trusted lists and the French list
    assert_eq!(fixture.parsed.load(Ordering::SeqCst), parsed + 2);
}

#[test]
fn summary_info_reads_from_json() {
    let info: TlInfo = serde_json::from_value(json!({
        "url": TL_BE,
        "download_cache_info": {
            "state": "ERROR",
            "exception_message": "connection refused",
        },
        "parsing_cache_info": { "state": "REFRESH_NEEDED" },
        "validation_cache_info": {
            "state": "SYNCHRONIZED",
            "last_state_transition_time": "2025-05-31T00:00:00Z",
            "result": { "indication": "PASSED", "signing_certificate": "BE-signer" },
        },
    }))
    .unwrap();

    assert!(info.download_cache_info.is_error());
    assert!(info.download_cache_info.result.is_none());
    assert!(info.parsing_cache_info.is_refresh_needed());
    assert!(info.parsing_cache_info.result.is_none());

    let validation = info.validation_cache_info.result.unwrap();
    assert!(validation.indication.is_passed());
    assert_eq!(validation.signing_certificate.as_deref(), Some("BE-signer"));
}
