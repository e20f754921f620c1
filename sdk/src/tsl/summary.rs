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

//! Read-only summary of a trusted list validation job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::TrustedListStatus,
    tsl::{CacheState, CachedEntry, DownloadResult, TlValidationResult, TrustedList},
};

/// State of one cache entry at the time the summary was taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheInfo<R> {
    /// State of the entry.
    pub state: CacheState,

    /// When the state was reached.
    pub last_state_transition_time: Option<DateTime<Utc>>,

    /// When the entry was last synchronized.
    #[serde(default)]
    pub last_successful_synchronization_time: Option<DateTime<Utc>>,

    /// Message of the recorded error.
    #[serde(default)]
    pub exception_message: Option<String>,

    /// Full description of the recorded error.
    #[serde(default)]
    pub exception_stack_trace: Option<String>,

    /// First occurrence of the recorded error.
    #[serde(default)]
    pub exception_first_occurrence: Option<DateTime<Utc>>,

    /// Last occurrence of the recorded error.
    #[serde(default)]
    pub exception_last_occurrence: Option<DateTime<Utc>>,

    /// The cached result.
    pub result: Option<R>,
}

impl<R: Clone> CacheInfo<R> {
    pub(crate) fn from_entry(entry: Option<&CachedEntry<R>>) -> Self {
        let Some(entry) = entry else {
            return Self {
                state: CacheState::RefreshNeeded,
                last_state_transition_time: None,
                last_successful_synchronization_time: None,
                exception_message: None,
                exception_stack_trace: None,
                exception_first_occurrence: None,
                exception_last_occurrence: None,
                result: None,
            };
        };

        let context = entry.context();
        let exception = context.exception();
        Self {
            state: context.current_state(),
            last_state_transition_time: Some(context.last_state_transition_time()),
            last_successful_synchronization_time: context.last_successful_synchronization_time(),
            exception_message: exception.map(|e| e.message.clone()),
            exception_stack_trace: exception.map(|e| e.stack_trace.clone()),
            exception_first_occurrence: exception.map(|e| e.first_occurrence),
            exception_last_occurrence: exception.map(|e| e.last_occurrence),
            result: entry.result().cloned(),
        }
    }
}

impl<R> CacheInfo<R> {
    #[allow(missing_docs)]
    pub fn is_refresh_needed(&self) -> bool {
        self.state == CacheState::RefreshNeeded
    }

    #[allow(missing_docs)]
    pub fn is_desynchronized(&self) -> bool {
        self.state == CacheState::Desynchronized
    }

    #[allow(missing_docs)]
    pub fn is_synchronized(&self) -> bool {
        self.state == CacheState::Synchronized
    }

    #[allow(missing_docs)]
    pub fn is_error(&self) -> bool {
        self.state == CacheState::Error
    }
}

/// Cache states of one list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TlInfo {
    /// Location of the list.
    pub url: String,

    /// State of the download.
    pub download_cache_info: CacheInfo<DownloadResult>,

    /// State of the parsing.
    pub parsing_cache_info: CacheInfo<TrustedList>,

    /// State of the signature validation.
    pub validation_cache_info: CacheInfo<TlValidationResult>,
}

/// Cache states of a list of trusted lists and of the lists it led to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotlInfo {
    /// The list of trusted lists itself.
    pub info: TlInfo,

    /// The trusted lists it points to.
    pub tl_infos: Vec<TlInfo>,

    /// Its pivots, most recent first.
    pub pivot_infos: Vec<TlInfo>,
}

/// Summary of a trusted list validation job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TlValidationJobSummary {
    /// Followed lists of trusted lists.
    pub lotl_infos: Vec<LotlInfo>,

    /// Trusted lists followed on their own.
    pub other_tl_infos: Vec<TlInfo>,
}

impl TlValidationJobSummary {
    /// Number of lists of trusted lists.
    pub fn number_of_processed_lotls(&self) -> usize {
        self.lotl_infos.len()
    }

    /// Number of trusted lists, from lists of trusted lists or on their own.
    pub fn number_of_processed_tls(&self) -> usize {
        self.other_tl_infos.len()
            + self.lotl_infos.iter().map(|l| l.tl_infos.len()).sum::<usize>()
    }

    /// Finds the info of the list at `url`.
    pub fn tl_info(&self, url: &str) -> Option<&TlInfo> {
        self.lotl_infos
            .iter()
            .flat_map(|l| {
                std::iter::once(&l.info)
                    .chain(l.tl_infos.iter())
                    .chain(l.pivot_infos.iter())
            })
            .chain(self.other_tl_infos.iter())
            .find(|info| info.url == url)
    }

    /// Status records of every list of trusted lists and trusted list.
    pub fn statuses(&self) -> Vec<TrustedListStatus> {
        let mut statuses = Vec::new();
        for lotl in &self.lotl_infos {
            statuses.push(TrustedListStatus::from_info(&lotl.info, true, None));
            for tl in &lotl.tl_infos {
                let parent = Some(lotl.info.url.as_str());
                statuses.push(TrustedListStatus::from_info(tl, false, parent));
            }
        }
        for tl in &self.other_tl_infos {
            statuses.push(TrustedListStatus::from_info(tl, false, None));
        }
        statuses
    }
}
