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

//! Filters narrowing the trusted services that may qualify a certificate.

use chrono::{DateTime, Utc};

use crate::{
    diagnostic::{CertificateToken, TrustedServiceRef},
    qualification::{certificate, CertificateType},
};

const ASI_FOR_ESIGNATURES: &str =
    "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSignatures";
const ASI_FOR_ESEALS: &str = "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForeSeals";
const ASI_FOR_WSA: &str =
    "http://uri.etsi.org/TrstSvc/TrustedList/SvcInfoExt/ForWebSiteAuthentication";

/// Narrows a list of candidate services.
pub trait TrustedServiceFilter {
    /// Returns the services passing the filter, in input order.
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef>;
}

/// Keeps services with a status period covering the given time.
pub struct ServiceByDateFilter {
    /// The time the status must cover.
    pub time: DateTime<Utc>,
}

impl TrustedServiceFilter for ServiceByDateFilter {
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef> {
        services
            .into_iter()
            .filter(|s| s.service.status_at(self.time).is_some())
            .collect()
    }
}

/// Keeps CA/QC services.
pub struct CaQcFilter;

impl TrustedServiceFilter for CaQcFilter {
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef> {
        services.into_iter().filter(|s| s.service.is_ca_qc()).collect()
    }
}

/// Keeps services whose additional service information covers the
/// certificate type. Services without additional service information
/// cover every type.
pub struct CertificateTypeFilter {
    /// The time the status is read at.
    pub time: DateTime<Utc>,

    /// Type declared by the certificate.
    pub certificate_type: CertificateType,
}

impl TrustedServiceFilter for CertificateTypeFilter {
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef> {
        services
            .into_iter()
            .filter(|s| {
                let Some(status) = s.service.status_at(self.time) else {
                    return false;
                };
                let covered: Vec<CertificateType> = status
                    .additional_service_info
                    .iter()
                    .filter_map(|uri| match uri.as_str() {
                        ASI_FOR_ESIGNATURES => Some(CertificateType::Esign),
                        ASI_FOR_ESEALS => Some(CertificateType::Eseal),
                        ASI_FOR_WSA => Some(CertificateType::Wsa),
                        _ => None,
                    })
                    .collect();
                covered.is_empty()
                    || self.certificate_type == CertificateType::Unknown
                    || covered.contains(&self.certificate_type)
            })
            .collect()
    }
}

/// Keeps services whose status at the given time is granted.
pub struct GrantedStatusFilter {
    /// The time the status is read at.
    pub time: DateTime<Utc>,
}

impl TrustedServiceFilter for GrantedStatusFilter {
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef> {
        services
            .into_iter()
            .filter(|s| s.service.status_at(self.time).is_some_and(|st| st.is_granted()))
            .collect()
    }
}

/// Keeps a single service when all candidates give the certificate the
/// same qualification, and none when they disagree.
pub struct UniqueServiceFilter<'c> {
    /// The certificate being qualified.
    pub certificate: &'c CertificateToken,

    /// The time the qualification is computed at.
    pub time: DateTime<Utc>,
}

impl TrustedServiceFilter for UniqueServiceFilter<'_> {
    fn filter<'a>(&self, services: Vec<&'a TrustedServiceRef>) -> Vec<&'a TrustedServiceRef> {
        let mut qualifications = services.iter().map(|s| {
            certificate::qualification_with_service(self.certificate, s, self.time)
        });

        let Some(first) = qualifications.next() else {
            return Vec::new();
        };
        if qualifications.all(|q| q == first) {
            services.into_iter().take(1).collect()
        } else {
            log::debug!(
                "conflicting qualifications for certificate {}",
                self.certificate.id
            );
            Vec::new()
        }
    }
}
