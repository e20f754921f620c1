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


#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use ades_validation::{
    tsl::{
        CollaboratorError, DataLoader, TlValidationResult, TrustedList, TrustedListParser,
        TrustedListSignatureValidator,
    },
    DiagnosticData, Indication, Result, SubIndication,
};
use chrono::{DateTime, TimeZone, Utc};

pub const SIGNATURE: &str = "S-CONTRACT";
pub const LOTL_URL: &str = "https://tl.example.com/eu-lotl.xml";
pub const TL_URL: &str = "https://tl.example.com/tl-be.xml";

pub fn validation_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn diagnostic() -> Result<DiagnosticData> {
    DiagnosticData::from_json(include_str!("../fixtures/diagnostic.json"))
}

pub fn strict_policy() -> &'static str {
    include_str!("../fixtures/strict_policy.toml")
}

/// Serves lists from memory. Unknown URLs fail to download.
#[derive(Clone, Default)]
pub struct MemoryLoader {
    content: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryLoader {
    pub fn serve(&self, url: &str, list: &serde_json::Value) {
        self.content
            .lock()
            .unwrap()
            .insert(url.to_owned(), list.to_string().into_bytes());
    }

    pub fn take_down(&self, url: &str) {
        self.content.lock().unwrap().remove(url);
    }
}

impl DataLoader for MemoryLoader {
    fn get(&self, url: &str) -> std::result::Result<Vec<u8>, CollaboratorError> {
        self.content
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| format!("{url}: host unreachable").into())
    }
}

/// Reads lists from their JSON form.
pub struct JsonParser;

impl TrustedListParser for JsonParser {
    fn parse(&self, content: &[u8]) -> std::result::Result<TrustedList, CollaboratorError> {
        Ok(serde_json::from_slice(content)?)
    }
}

/// Accepts every list signed by one of the allowed certificates, which it
/// takes on trust.
pub struct AllowListValidator;

impl TrustedListSignatureValidator for AllowListValidator {
    fn validate(
        &self,
        _content: &[u8],
        signing_certificates: &[String],
    ) -> std::result::Result<TlValidationResult, CollaboratorError> {
        let signer = signing_certificates.first().cloned();
        Ok(TlValidationResult {
            indication: if signer.is_some() {
                Indication::Passed
            } else {
                Indication::Indeterminate
            },
            sub_indication: signer
                .is_none()
                .then_some(SubIndication::NoSigningCertificateFound),
            signing_certificate: signer,
            signing_time: None,
        })
    }
}

pub fn lotl() -> serde_json::Value {
    serde_json::json!({
        "territory": "EU",
        "issue_date": "2025-05-10T00:00:00Z",
        "next_update": "2025-11-10T00:00:00Z",
        "version": 5,
        "tsl_pointers": [
            {
                "location": TL_URL,
                "territory": "BE",
                "certificates": ["BE-TL-SIGNER"]
            }
        ]
    })
}

pub fn trusted_list() -> serde_json::Value {
    serde_json::json!({
        "territory": "BE",
        "issue_date": "2025-05-15T00:00:00Z",
        "next_update": "2025-11-15T00:00:00Z",
        "version": 5,
        "sequence_number": 71
    })
}
