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

//! Validation reports.

use ades_status_tracker::{Indication, Message, SubIndication};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    process::{ArchivalResult, BbbResult, BlockResult, LtvResult},
    qualification::{SignatureQualification, SignatureQualificationResult},
    Result,
};

/// Detailed validation of one signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureReport {
    /// Identifier of the signature.
    pub id: String,

    /// The signature is a counter signature.
    #[serde(default)]
    pub counter_signature: bool,

    /// Basic building blocks of the signature.
    pub basic_building_blocks: BbbResult,

    /// Validation with long-term validation data.
    pub long_term_validation: LtvResult,

    /// Validation with archival data, including evidence records.
    pub archival_data_validation: ArchivalResult,

    /// Qualification of the signature.
    pub qualification: SignatureQualificationResult,

    /// Final indication.
    pub indication: Indication,

    /// Final sub-indication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Best-signature-time.
    pub best_signature_time: DateTime<Utc>,
}

/// Detailed validation of one time-stamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimestampReport {
    /// Identifier of the time-stamp.
    pub id: String,

    /// Production time of the time-stamp.
    pub production_time: DateTime<Utc>,

    /// Basic building blocks of the time-stamp.
    pub basic_building_blocks: BbbResult,

    /// Validation of the time-stamp with archival data.
    pub archival_data_validation: BlockResult,
}

/// Every block computed by a validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailedReport {
    /// The time the run validated at.
    pub validation_time: DateTime<Utc>,

    /// Name of the policy used.
    pub policy_name: String,

    /// Reports of the signatures.
    pub signatures: Vec<SignatureReport>,

    /// Reports of the time-stamps.
    pub timestamps: Vec<TimestampReport>,

    /// Basic building blocks of every token validated during the run.
    pub basic_building_blocks: Vec<BbbResult>,

    /// Analysis of every trusted list known to the run.
    pub trusted_lists: Vec<BlockResult>,
}

impl DetailedReport {
    /// Report of the signature `id`.
    pub fn signature(&self, id: &str) -> Option<&SignatureReport> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Report of the time-stamp `id`.
    pub fn timestamp(&self, id: &str) -> Option<&TimestampReport> {
        self.timestamps.iter().find(|t| t.id == id)
    }

    /// Basic building blocks of the token `id`.
    pub fn basic_building_blocks(&self, id: &str) -> Option<&BbbResult> {
        self.basic_building_blocks.iter().find(|b| b.id == id)
    }
}

/// Outcome of one signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureSummary {
    /// Identifier of the signature.
    pub id: String,

    /// Final indication.
    pub indication: Indication,

    /// Final sub-indication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Qualification of the signature.
    pub qualification: SignatureQualification,

    /// Best-signature-time.
    pub best_signature_time: DateTime<Utc>,

    /// Errors explaining a non-passed indication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Message>,

    /// Warnings raised during the validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Message>,

    /// Information raised during the validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infos: Vec<Message>,
}

/// Flattened outcome of a validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// The time the run validated at.
    pub validation_time: DateTime<Utc>,

    /// Name of the policy used.
    pub policy_name: String,

    /// Outcome of every signature.
    pub signatures: Vec<SignatureSummary>,
}

impl ValidationSummary {
    /// Flattens a detailed report.
    pub fn from_detailed(detailed: &DetailedReport) -> Self {
        let signatures = detailed
            .signatures
            .iter()
            .map(|s| {
                let conclusion = &s.archival_data_validation.block.conclusion;
                SignatureSummary {
                    id: s.id.clone(),
                    indication: s.indication,
                    sub_indication: s.sub_indication,
                    qualification: s.qualification.qualification,
                    best_signature_time: s.best_signature_time,
                    errors: conclusion.errors.clone(),
                    warnings: conclusion.warnings.clone(),
                    infos: conclusion.infos.clone(),
                }
            })
            .collect();

        Self {
            validation_time: detailed.validation_time,
            policy_name: detailed.policy_name.clone(),
            signatures,
        }
    }

    /// Outcome of the signature `id`.
    pub fn signature(&self, id: &str) -> Option<&SignatureSummary> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Returns `true` if the signature `id` exists and passed.
    pub fn is_valid(&self, id: &str) -> bool {
        self.signature(id).is_some_and(|s| s.indication.is_passed())
    }

    /// Number of signatures.
    pub fn signatures_count(&self) -> usize {
        self.signatures.len()
    }

    /// Number of signatures that passed.
    pub fn valid_signatures_count(&self) -> usize {
        self.signatures
            .iter()
            .filter(|s| s.indication.is_passed())
            .count()
    }
}

/// The reports of one validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reports {
    /// Every block computed.
    pub detailed: DetailedReport,

    /// Flattened outcome.
    pub summary: ValidationSummary,
}

impl Reports {
    pub(crate) fn new(detailed: DetailedReport) -> Self {
        let summary = ValidationSummary::from_detailed(&detailed);
        Self { detailed, summary }
    }

    /// Serializes the reports to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
