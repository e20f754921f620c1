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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tsl::TlInfo;

/// Status of a trusted list or list of trusted lists, as known to the
/// validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustedListStatus {
    /// URL of the list.
    pub url: String,

    /// The list is a list of trusted lists.
    #[serde(default)]
    pub lotl: bool,

    /// URL of the list of trusted lists pointing to this list.
    #[serde(default)]
    pub parent_lotl_url: Option<String>,

    /// Territory of the list.
    #[serde(default)]
    pub country_code: Option<String>,

    /// `ListIssueDateTime` of the list.
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,

    /// `NextUpdate` of the list.
    #[serde(default)]
    pub next_update: Option<DateTime<Utc>>,

    /// `TSLVersionIdentifier` of the list.
    #[serde(default)]
    pub version: Option<u32>,

    /// The signature of the list was validated successfully.
    #[serde(default)]
    pub well_signed: bool,
}

impl TrustedListStatus {
    /// Builds the status of a list from the information gathered by the
    /// trusted list validation job.
    pub fn from_info(info: &TlInfo, lotl: bool, parent_lotl_url: Option<&str>) -> Self {
        let parsing = info.parsing_cache_info.result.as_ref();
        let validation = info.validation_cache_info.result.as_ref();
        Self {
            url: info.url.clone(),
            lotl,
            parent_lotl_url: parent_lotl_url.map(str::to_owned),
            country_code: parsing.and_then(|p| p.territory.clone()),
            issue_date: parsing.and_then(|p| p.issue_date),
            next_update: parsing.and_then(|p| p.next_update),
            version: parsing.and_then(|p| p.version),
            well_signed: validation.is_some_and(|v| v.indication.is_passed()),
        }
    }
}
