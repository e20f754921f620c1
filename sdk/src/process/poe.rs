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

//! Proof-of-existence bookkeeping.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{DiagnosticData, EvidenceRecord, TimestampToken, Token};

/// Asserts that an object existed at `time`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofOfExistence {
    /// Time of existence.
    pub time: DateTime<Utc>,

    /// Time-stamp or evidence record providing the proof. `None` for the
    /// current time of the validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// The set of known POEs, per object id.
///
/// The set only grows during a validation run. Callers needing a
/// speculative extension work on a clone.
#[derive(Clone, Debug)]
pub struct PoeExtraction {
    current_time: DateTime<Utc>,
    poes: HashMap<String, Vec<ProofOfExistence>>,
}

impl PoeExtraction {
    /// Creates an empty set for a run at `current_time`.
    pub fn new(current_time: DateTime<Utc>) -> Self {
        Self {
            current_time,
            poes: HashMap::new(),
        }
    }

    /// Creates a set where every token of the diagnostic data has a POE at
    /// the current time.
    pub fn init(diagnostic: &DiagnosticData, current_time: DateTime<Utc>) -> Self {
        let mut poe = Self::new(current_time);
        let ids = diagnostic
            .signatures
            .iter()
            .map(|s| s.id.as_str())
            .chain(diagnostic.certificates.iter().map(|c| c.id.as_str()))
            .chain(diagnostic.revocations.iter().map(|r| r.id.as_str()))
            .chain(diagnostic.timestamps.iter().map(|t| t.id.as_str()))
            .chain(diagnostic.evidence_records.iter().map(|e| e.id.as_str()));
        for id in ids {
            poe.add(
                id,
                ProofOfExistence {
                    time: current_time,
                    token_id: None,
                },
            );
        }
        poe
    }

    /// Current time of the run.
    pub fn current_time(&self) -> DateTime<Utc> {
        self.current_time
    }

    /// Adds a POE for an object.
    pub fn add(&mut self, id: &str, poe: ProofOfExistence) {
        let entries = self.poes.entry(id.to_owned()).or_default();
        if !entries.contains(&poe) {
            entries.push(poe);
        }
    }

    /// Adds a POE at the time-stamp's production time for every object it
    /// covers.
    pub fn extract_from_timestamp(&mut self, timestamp: &TimestampToken) {
        for object in &timestamp.timestamped_objects {
            self.add(
                &object.id,
                ProofOfExistence {
                    time: timestamp.production_time,
                    token_id: Some(timestamp.id.clone()),
                },
            );
        }
    }

    /// Adds `poe`, proven by the evidence record, for every object the
    /// record protects.
    pub fn extract_from_evidence_record(
        &mut self,
        record: &EvidenceRecord,
        poe: &ProofOfExistence,
    ) {
        for object in &record.covered_objects {
            self.add(&object.id, poe.clone());
        }
    }

    /// Copies every POE of `other` into this set.
    pub fn merge(&mut self, other: &PoeExtraction) {
        for (id, poes) in &other.poes {
            for poe in poes {
                self.add(id, poe.clone());
            }
        }
    }

    /// Returns the earliest POE of an object.
    pub fn lowest_poe(&self, id: &str) -> Option<&ProofOfExistence> {
        self.poes
            .get(id)
            .and_then(|poes| poes.iter().min_by_key(|poe| poe.time))
    }

    /// Returns the time of the earliest POE of an object, or the current
    /// time when none is known.
    pub fn lowest_poe_time(&self, id: &str) -> DateTime<Utc> {
        self.lowest_poe(id)
            .map_or(self.current_time, |poe| poe.time)
    }

    /// Returns the time of the earliest POE of a token.
    pub fn lowest_poe_time_of<T: Token + ?Sized>(&self, token: &T) -> DateTime<Utc> {
        self.lowest_poe_time(token.id())
    }

    /// Returns `true` if the object has a POE at or before `control_time`.
    pub fn is_poe_exists(&self, id: &str, control_time: DateTime<Utc>) -> bool {
        self.poes
            .get(id)
            .is_some_and(|poes| poes.iter().any(|poe| poe.time <= control_time))
    }

    /// Returns `true` if the object has a POE within `[from, to]`.
    pub fn is_poe_exists_in_range(&self, id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.poes
            .get(id)
            .is_some_and(|poes| poes.iter().any(|poe| from <= poe.time && poe.time <= to))
    }

    /// All POEs of an object.
    pub fn poes_of(&self, id: &str) -> &[ProofOfExistence] {
        self.poes.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}
