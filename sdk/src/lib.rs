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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! This library validates AdES signatures following ETSI EN 319 102-1 and
//! determines their eIDAS qualification from trusted lists.
//!
//! The input is a [`DiagnosticData`] graph of signatures, certificates,
//! revocation data, time-stamps and evidence records produced by a parsing
//! stage. The output is a set of [`Reports`]: a detailed report with one
//! block per validation process and a flattened summary.
//!
//! # Example: Validating signatures
//!
//! ```no_run
//! # use ades_validation::Result;
//! use ades_validation::{DiagnosticData, DocumentValidator, ValidationPolicy};
//!
//! # fn main() -> Result<()> {
//! let diagnostic = DiagnosticData::from_json(&std::fs::read_to_string("diagnostic.json")?)?;
//! let policy = ValidationPolicy::from_file("policy.toml")?;
//!
//! let reports = DocumentValidator::new(diagnostic)
//!     .with_policy(policy)
//!     .validate()?;
//!
//! for signature in &reports.summary.signatures {
//!     println!("{}: {:?} {}", signature.id, signature.indication, signature.qualification);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Keeping trusted lists up to date
//!
//! A [`TlValidationJob`](tsl::TlValidationJob) downloads, parses and
//! validates trusted lists through the [`DataLoader`](tsl::DataLoader),
//! [`TrustedListParser`](tsl::TrustedListParser) and
//! [`TrustedListSignatureValidator`](tsl::TrustedListSignatureValidator)
//! collaborators, and publishes them to a
//! [`TrustedListsSource`](tsl::TrustedListsSource) that a
//! [`DocumentValidator`] can then consume.

pub use ades_status_tracker::{
    message_tags, Conclusion, ConstraintItem, ConstraintStatus, Indication, Level, Message,
    MessageTag, SubIndication,
};

pub mod diagnostic;
pub use diagnostic::DiagnosticData;

mod error;
pub use error::{Error, Result};

pub mod extension;

pub(crate) mod internal;

pub mod policy;
pub use policy::ValidationPolicy;

pub mod process;

pub mod qualification;

pub mod report;
pub use report::{DetailedReport, Reports, ValidationSummary};

pub mod tsl;

mod validator;
pub use validator::DocumentValidator;

#[cfg(test)]
pub(crate) mod tests;
