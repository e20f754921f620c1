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

//! Where trusted lists come from, and where the job publishes them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::TrustedListStatus,
    tsl::{TlValidationJobSummary, TrustedList},
};

/// A list of trusted lists to follow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotlSource {
    /// Location of the list.
    pub url: String,

    /// Identifiers of the certificates allowed to sign the list.
    pub signing_certificates: Vec<String>,

    /// Follow the pivots announced by the list.
    pub pivot_support: bool,

    /// Only follow the trusted lists of these territories. All are
    /// followed when empty.
    pub territories: Vec<String>,
}

impl LotlSource {
    /// A source for the list at `url`, signed by one of `signing_certificates`.
    pub fn new<S: Into<String>>(url: S, signing_certificates: Vec<String>) -> Self {
        Self {
            url: url.into(),
            signing_certificates,
            ..Default::default()
        }
    }

    /// Enables pivot support.
    pub fn with_pivot_support(mut self) -> Self {
        self.pivot_support = true;
        self
    }

    pub(crate) fn follows(&self, territory: Option<&str>) -> bool {
        self.territories.is_empty()
            || territory.is_some_and(|t| self.territories.iter().any(|c| c == t))
    }
}

/// A trusted list followed on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlSource {
    /// Location of the list.
    pub url: String,

    /// Identifiers of the certificates allowed to sign the list.
    pub signing_certificates: Vec<String>,
}

impl TlSource {
    /// A source for the list at `url`, signed by one of `signing_certificates`.
    pub fn new<S: Into<String>>(url: S, signing_certificates: Vec<String>) -> Self {
        Self {
            url: url.into(),
            signing_certificates,
        }
    }
}

/// Trusted lists published by the last synchronization of a job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustedListsSource {
    lists: BTreeMap<String, TrustedList>,
    summary: Option<TlValidationJobSummary>,
    last_synchronization: Option<DateTime<Utc>>,
}

impl TrustedListsSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn publish(
        &mut self,
        lists: BTreeMap<String, TrustedList>,
        summary: TlValidationJobSummary,
        time: DateTime<Utc>,
    ) {
        self.lists = lists;
        self.summary = Some(summary);
        self.last_synchronization = Some(time);
    }

    /// Published trusted lists, by URL.
    pub fn trusted_lists(&self) -> &BTreeMap<String, TrustedList> {
        &self.lists
    }

    /// The published trusted list at `url`.
    pub fn trusted_list(&self, url: &str) -> Option<&TrustedList> {
        self.lists.get(url)
    }

    /// Summary of the job run that was published.
    pub fn summary(&self) -> Option<&TlValidationJobSummary> {
        self.summary.as_ref()
    }

    /// When the source was last synchronized.
    pub fn last_synchronization(&self) -> Option<DateTime<Utc>> {
        self.last_synchronization
    }

    /// Status records of every published list, as consumed by the
    /// qualification of signatures.
    pub fn statuses(&self) -> Vec<TrustedListStatus> {
        self.summary
            .as_ref()
            .map(TlValidationJobSummary::statuses)
            .unwrap_or_default()
    }
}
