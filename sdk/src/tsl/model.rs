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

//! Parsed trusted list model.

use ades_status_tracker::{Indication, SubIndication};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `Svcstatus/granted`.
pub const SERVICE_STATUS_GRANTED: &str =
    "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/granted";

/// Pre-eIDAS statuses equivalent to granted.
pub const PRE_EIDAS_GRANTED_STATUSES: [&str; 3] = [
    "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/undersupervision",
    "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/supervisionincessation",
    "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/accredited",
];

/// `Svctype/CA/QC`.
pub const SERVICE_TYPE_CA_QC: &str = "http://uri.etsi.org/TrstSvc/Svctype/CA/QC";

/// One period of a trusted service's status history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Status URI.
    pub status: String,

    /// Start of the period.
    pub start_date: DateTime<Utc>,

    /// End of the period; `None` for the current status.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Qualifier URIs (`Qualifications` extension).
    #[serde(default)]
    pub qualifiers: Vec<String>,

    /// Additional service information URIs.
    #[serde(default)]
    pub additional_service_info: Vec<String>,
}

impl ServiceStatus {
    /// Returns `true` if `time` falls within the period.
    pub fn covers(&self, time: DateTime<Utc>) -> bool {
        self.start_date <= time && self.end_date.map_or(true, |end| time < end)
    }

    /// Returns `true` for the granted status and its pre-eIDAS equivalents.
    pub fn is_granted(&self) -> bool {
        self.status == SERVICE_STATUS_GRANTED
            || PRE_EIDAS_GRANTED_STATUSES.contains(&self.status.as_str())
    }
}

/// A trust service published in a trusted list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustedService {
    /// Name of the trust service provider.
    #[serde(default)]
    pub tsp_name: String,

    /// Name of the service.
    #[serde(default)]
    pub service_name: String,

    /// Service type URI.
    pub service_type: String,

    /// Status history, in any order.
    #[serde(default)]
    pub status_history: Vec<ServiceStatus>,
}

impl TrustedService {
    /// Returns the status period covering `time`.
    pub fn status_at(&self, time: DateTime<Utc>) -> Option<&ServiceStatus> {
        self.status_history.iter().find(|s| s.covers(time))
    }

    /// Returns `true` for CA/QC services.
    pub fn is_ca_qc(&self) -> bool {
        self.service_type == SERVICE_TYPE_CA_QC
    }
}

/// A pointer from a list of trusted lists to another list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherTslPointer {
    /// Location of the pointed list.
    pub location: String,

    /// Territory of the pointed list.
    pub territory: Option<String>,

    /// Identifiers of the certificates allowed to sign the pointed list.
    pub certificates: Vec<String>,
}

/// Content of a parsed trusted list or list of trusted lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedList {
    /// Territory of the list.
    pub territory: Option<String>,

    /// `ListIssueDateTime`.
    pub issue_date: Option<DateTime<Utc>>,

    /// `NextUpdate`.
    pub next_update: Option<DateTime<Utc>>,

    /// `TSLVersionIdentifier`.
    pub version: Option<u32>,

    /// `TSLSequenceNumber`.
    pub sequence_number: Option<u32>,

    /// Trust services, empty for a list of trusted lists.
    pub services: Vec<TrustedService>,

    /// Pointers to trusted lists, for a list of trusted lists.
    pub tsl_pointers: Vec<OtherTslPointer>,

    /// Locations of the previous versions (pivots) of a list of trusted
    /// lists, most recent first.
    pub pivot_urls: Vec<String>,

    /// Certificates announced by a list of trusted lists for its own next
    /// version.
    pub announced_certificates: Vec<String>,
}

/// Content downloaded for a list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadResult {
    /// Raw content of the list.
    #[serde(skip)]
    pub content: Vec<u8>,

    /// Base64 SHA-256 digest of the content.
    pub digest: String,
}

/// Outcome of the validation of a list's signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TlValidationResult {
    /// Indication of the signature validation.
    pub indication: Indication,

    /// Reason of a non-passed indication.
    #[serde(default)]
    pub sub_indication: Option<SubIndication>,

    /// Identifier of the certificate that signed the list.
    #[serde(default)]
    pub signing_certificate: Option<String>,

    /// Claimed signing time.
    #[serde(default)]
    pub signing_time: Option<DateTime<Utc>>,
}
