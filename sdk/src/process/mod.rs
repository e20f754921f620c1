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

//! The ETSI EN 319 102-1 validation processes.
//!
//! Every process reads the [`DiagnosticData`] and the [`ValidationPolicy`]
//! through a [`ValidationContext`] built once per validation run. Results of
//! the basic building blocks are memoized in that context so that each
//! token goes through them only once per run.

use std::{cell::RefCell, collections::HashMap};

use ades_status_tracker::{Conclusion, Indication, SubIndication};
use chrono::{DateTime, Utc};

use crate::{
    diagnostic::{DiagnosticData, Token},
    policy::{Context, PolicyValidate, ValidationPolicy},
    Result,
};

pub(crate) mod archival;
pub(crate) mod bbb;
mod chain;
pub(crate) mod evidence_record;
pub(crate) mod ltv;
pub(crate) mod pcv;
mod poe;
pub(crate) mod psv;

pub use archival::ArchivalResult;
pub use bbb::BbbResult;
pub use chain::{BlockResult, Chain, ChainItem, Check, ConclusionCheck};
pub use evidence_record::EvidenceRecordResult;
pub use ltv::LtvResult;
pub use pcv::PcvResult;
pub use poe::{PoeExtraction, ProofOfExistence};
pub use psv::PsvResult;

/// State shared by the processes of one validation run.
pub struct ValidationContext<'a> {
    diagnostic: &'a DiagnosticData,
    policy: &'a ValidationPolicy,
    current_time: DateTime<Utc>,
    bbbs: RefCell<HashMap<String, BbbResult>>,
}

impl<'a> ValidationContext<'a> {
    /// Creates the context of a run, after checking that the policy and the
    /// diagnostic data can drive a validation.
    pub fn new(
        diagnostic: &'a DiagnosticData,
        policy: &'a ValidationPolicy,
        current_time: DateTime<Utc>,
    ) -> Result<Self> {
        policy.validate()?;
        diagnostic.validate()?;
        Ok(Self {
            diagnostic,
            policy,
            current_time,
            bbbs: RefCell::new(HashMap::new()),
        })
    }

    /// The diagnostic data of the run.
    pub fn diagnostic(&self) -> &'a DiagnosticData {
        self.diagnostic
    }

    /// The policy of the run.
    pub fn policy(&self) -> &'a ValidationPolicy {
        self.policy
    }

    /// The time the run validates at.
    pub fn current_time(&self) -> DateTime<Utc> {
        self.current_time
    }

    /// Runs the basic building blocks for a token, or returns the result of
    /// an earlier run for the same token.
    pub fn bbb<T: Token + ?Sized>(&self, token: &T, context: Context) -> BbbResult {
        if let Some(result) = self.bbbs.borrow().get(token.id()) {
            return result.clone();
        }

        let result = bbb::execute(self, token, context);
        self.bbbs
            .borrow_mut()
            .insert(token.id().to_owned(), result.clone());
        result
    }

    /// All basic building block results computed so far, by token id.
    pub fn bbb_results(&self) -> Vec<BbbResult> {
        let mut results: Vec<BbbResult> = self.bbbs.borrow().values().cloned().collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }
}

/// Returns `true` for conclusions that POE may still turn into a pass.
pub fn is_poe_resolvable(conclusion: &Conclusion) -> bool {
    if conclusion.is_passed() {
        return true;
    }
    conclusion.indication == Indication::Indeterminate
        && matches!(
            conclusion.sub_indication,
            Some(
                SubIndication::RevokedNoPoe
                    | SubIndication::RevokedCaNoPoe
                    | SubIndication::OutOfBoundsNoPoe
                    | SubIndication::OutOfBoundsNotRevoked
                    | SubIndication::CryptoConstraintsFailureNoPoe
                    | SubIndication::RevocationOutOfBoundsNoPoe
                    | SubIndication::TryLater
            )
        )
}
