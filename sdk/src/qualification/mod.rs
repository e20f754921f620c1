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

//! Trusted list driven qualification of certificates and signatures.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub(crate) mod certificate;
mod filter;
mod matrix;
pub(crate) mod signature;
pub(crate) mod tl_analysis;

pub use certificate::CertQualificationResult;
pub use filter::{
    CaQcFilter, CertificateTypeFilter, GrantedStatusFilter, ServiceByDateFilter,
    TrustedServiceFilter, UniqueServiceFilter,
};
pub use matrix::{certificate_qualification, signature_qualification};
pub use signature::SignatureQualificationResult;

/// Qualification of a certificate at a given time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateQualification {
    /// Qualified certificate for electronic signatures on a QSCD.
    QcForEsigQscd,
    /// Qualified certificate for electronic signatures.
    QcForEsig,
    /// Qualified certificate for electronic seals on a QSCD.
    QcForEsealQscd,
    /// Qualified certificate for electronic seals.
    QcForEseal,
    /// Qualified certificate for website authentication.
    QcForWsa,
    /// Certificate for electronic signatures.
    CertForEsig,
    /// Certificate for electronic seals.
    CertForEseal,
    /// Certificate for website authentication.
    CertForWsa,
    /// Not applicable.
    Na,
}

impl CertificateQualification {
    /// All values, in declaration order.
    pub const ALL: [CertificateQualification; 9] = [
        Self::QcForEsigQscd,
        Self::QcForEsig,
        Self::QcForEsealQscd,
        Self::QcForEseal,
        Self::QcForWsa,
        Self::CertForEsig,
        Self::CertForEseal,
        Self::CertForWsa,
        Self::Na,
    ];

    /// Returns `true` for qualified certificates.
    pub fn is_qc(self) -> bool {
        matches!(
            self,
            Self::QcForEsigQscd
                | Self::QcForEsig
                | Self::QcForEsealQscd
                | Self::QcForEseal
                | Self::QcForWsa
        )
    }

    /// Returns `true` for qualified certificates on a QSCD.
    pub fn is_qscd(self) -> bool {
        matches!(self, Self::QcForEsigQscd | Self::QcForEsealQscd)
    }

    /// Returns the type of the certificate.
    pub fn certificate_type(self) -> CertificateType {
        match self {
            Self::QcForEsigQscd | Self::QcForEsig | Self::CertForEsig => CertificateType::Esign,
            Self::QcForEsealQscd | Self::QcForEseal | Self::CertForEseal => {
                CertificateType::Eseal
            }
            Self::QcForWsa | Self::CertForWsa => CertificateType::Wsa,
            Self::Na => CertificateType::Unknown,
        }
    }
}

/// Qualification of a signature or seal.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureQualification {
    Qesig,
    Qeseal,
    AdesigQc,
    AdesealQc,
    Adesig,
    Adeseal,
    IndeterminateQesig,
    IndeterminateQeseal,
    IndeterminateAdesigQc,
    IndeterminateAdesealQc,
    IndeterminateAdesig,
    IndeterminateAdeseal,
    NotAdesQcQscd,
    NotAdesQc,
    NotAdes,
    Na,
}

impl SignatureQualification {
    /// Returns the usual label of the qualification.
    pub fn label(self) -> &'static str {
        match self {
            Self::Qesig => "QESig",
            Self::Qeseal => "QESeal",
            Self::AdesigQc => "AdESig-QC",
            Self::AdesealQc => "AdESeal-QC",
            Self::Adesig => "AdESig",
            Self::Adeseal => "AdESeal",
            Self::IndeterminateQesig => "Indeterminate QESig",
            Self::IndeterminateQeseal => "Indeterminate QESeal",
            Self::IndeterminateAdesigQc => "Indeterminate AdESig-QC",
            Self::IndeterminateAdesealQc => "Indeterminate AdESeal-QC",
            Self::IndeterminateAdesig => "Indeterminate AdESig",
            Self::IndeterminateAdeseal => "Indeterminate AdESeal",
            Self::NotAdesQcQscd => "Not AdES but QC with QSCD",
            Self::NotAdesQc => "Not AdES but QC",
            Self::NotAdes => "Not AdES",
            Self::Na => "N/A",
        }
    }
}

impl Display for SignatureQualification {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Purpose a certificate was issued for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateType {
    /// Electronic signatures.
    Esign,
    /// Electronic seals.
    Eseal,
    /// Website authentication.
    Wsa,
    /// Not determined.
    Unknown,
}
