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

//! Validation of all the signatures of a document.

use ades_status_tracker::message_tags::{LOTLA, TLA};
use chrono::{DateTime, Utc};

use crate::{
    diagnostic::DiagnosticData,
    internal::time::utc_now,
    policy::{Context, ValidationPolicy},
    process::{archival, ltv, PoeExtraction, ValidationContext},
    qualification::{signature, tl_analysis},
    report::{DetailedReport, Reports, SignatureReport, TimestampReport},
    tsl::TrustedListsSource,
    Result,
};

/// Validates the signatures described by a [`DiagnosticData`].
///
/// # Example
///
/// ```no_run
/// use ades_validation::{DiagnosticData, DocumentValidator};
///
/// # fn main() -> ades_validation::Result<()> {
/// let diagnostic = DiagnosticData::from_json(&std::fs::read_to_string("diagnostic.json")?)?;
/// let reports = DocumentValidator::new(diagnostic).validate()?;
/// println!("{}", reports.to_json()?);
/// # Ok(())
/// # }
/// ```
pub struct DocumentValidator {
    diagnostic: DiagnosticData,
    policy: ValidationPolicy,
    current_time: Option<DateTime<Utc>>,
}

impl DocumentValidator {
    /// Creates a validator using the default policy.
    pub fn new(diagnostic: DiagnosticData) -> Self {
        Self {
            diagnostic,
            policy: ValidationPolicy::default(),
            current_time: None,
        }
    }

    /// Validates with `policy`.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates as of `time` instead of now.
    pub fn with_current_time(mut self, time: DateTime<Utc>) -> Self {
        self.current_time = Some(time);
        self
    }

    /// Takes the status of the trusted lists from `source`. Statuses already
    /// present in the diagnostic data for the same URL are replaced.
    pub fn with_trusted_lists_source(mut self, source: &TrustedListsSource) -> Self {
        for status in source.statuses() {
            self.diagnostic.trusted_lists.retain(|s| s.url != status.url);
            self.diagnostic.trusted_lists.push(status);
        }
        self
    }

    /// Runs the validation.
    ///
    /// Fails only when the policy or the diagnostic data cannot drive a
    /// validation. Signatures that do not validate are reported in the
    /// returned [`Reports`].
    pub fn validate(&self) -> Result<Reports> {
        let current_time = self.current_time.unwrap_or_else(utc_now);
        let ctx = ValidationContext::new(&self.diagnostic, &self.policy, current_time)?;
        let mut poe = PoeExtraction::init(&self.diagnostic, current_time);

        let mut signatures = Vec::new();
        for token in &self.diagnostic.signatures {
            let context = if token.counter_signature {
                Context::CounterSignature
            } else {
                Context::Signature
            };

            let basic_building_blocks = ctx.bbb(token, context);
            let long_term_validation = ltv::execute(&ctx, token, context, &mut poe);
            let archival_data_validation =
                archival::execute(&ctx, token, context, &long_term_validation, &mut poe)?;

            let conclusion = &archival_data_validation.block.conclusion;
            let best_signature_time = archival_data_validation.proof_of_existence.time;
            let qualification =
                signature::execute(&ctx, token, conclusion, best_signature_time);

            log::info!(
                "signature {}: {}{} ({})",
                token.id,
                conclusion.indication.as_str(),
                conclusion
                    .sub_indication
                    .map(|s| format!("/{}", s.as_str()))
                    .unwrap_or_default(),
                qualification.qualification
            );

            signatures.push(SignatureReport {
                id: token.id.clone(),
                counter_signature: token.counter_signature,
                indication: conclusion.indication,
                sub_indication: conclusion.sub_indication,
                best_signature_time,
                basic_building_blocks,
                long_term_validation,
                archival_data_validation,
                qualification,
            });
        }

        let timestamps = self
            .diagnostic
            .timestamps
            .iter()
            .map(|token| TimestampReport {
                id: token.id.clone(),
                production_time: token.production_time,
                basic_building_blocks: ctx.bbb(token, Context::Timestamp),
                archival_data_validation: archival::validate_timestamp(&ctx, token, &poe),
            })
            .collect();

        let trusted_lists = self
            .diagnostic
            .trusted_lists
            .iter()
            .map(|status| {
                let title = if status.lotl { LOTLA } else { TLA };
                tl_analysis::execute(title, status, &self.policy.trusted_list, current_time)
            })
            .collect();

        Ok(Reports::new(DetailedReport {
            validation_time: current_time,
            policy_name: self.policy.name.clone(),
            signatures,
            timestamps,
            basic_building_blocks: ctx.bbb_results(),
            trusted_lists,
        }))
    }
}
