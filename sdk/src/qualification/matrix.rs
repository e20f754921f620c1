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

use ades_status_tracker::Indication;

use crate::qualification::{CertificateQualification, CertificateType, SignatureQualification};

/// Combines the qualified status, the type and the QSCD status of a
/// certificate.
pub fn certificate_qualification(
    qc: bool,
    certificate_type: CertificateType,
    qscd: bool,
) -> CertificateQualification {
    use CertificateQualification::*;

    match (qc, certificate_type) {
        (_, CertificateType::Unknown) => Na,
        (false, CertificateType::Esign) => CertForEsig,
        (false, CertificateType::Eseal) => CertForEseal,
        (false, CertificateType::Wsa) => CertForWsa,
        (true, CertificateType::Esign) if qscd => QcForEsigQscd,
        (true, CertificateType::Esign) => QcForEsig,
        (true, CertificateType::Eseal) if qscd => QcForEsealQscd,
        (true, CertificateType::Eseal) => QcForEseal,
        (true, CertificateType::Wsa) => QcForWsa,
    }
}

/// Combines the AdES validation indication of a signature with the
/// qualification of its signing certificate at signing time.
///
/// `TOTAL_PASSED` and `TOTAL_FAILED` are read as `PASSED` and `FAILED`.
pub fn signature_qualification(
    indication: Indication,
    qualification: CertificateQualification,
) -> SignatureQualification {
    use CertificateQualification as Cq;
    use SignatureQualification::*;

    match indication {
        Indication::Failed | Indication::TotalFailed => match qualification {
            Cq::QcForEsigQscd | Cq::QcForEsealQscd => NotAdesQcQscd,
            Cq::QcForEsig | Cq::QcForEseal | Cq::QcForWsa => NotAdesQc,
            Cq::CertForEsig | Cq::CertForEseal | Cq::CertForWsa | Cq::Na => NotAdes,
        },
        Indication::Passed | Indication::TotalPassed => match qualification {
            Cq::QcForEsigQscd => Qesig,
            Cq::QcForEsig => AdesigQc,
            Cq::QcForEsealQscd => Qeseal,
            Cq::QcForEseal => AdesealQc,
            Cq::CertForEsig => Adesig,
            Cq::CertForEseal => Adeseal,
            Cq::QcForWsa | Cq::CertForWsa | Cq::Na => Na,
        },
        Indication::Indeterminate => match qualification {
            Cq::QcForEsigQscd => IndeterminateQesig,
            Cq::QcForEsig => IndeterminateAdesigQc,
            Cq::QcForEsealQscd => IndeterminateQeseal,
            Cq::QcForEseal => IndeterminateAdesealQc,
            Cq::CertForEsig => IndeterminateAdesig,
            Cq::CertForEseal => IndeterminateAdeseal,
            Cq::QcForWsa | Cq::CertForWsa | Cq::Na => Na,
        },
    }
}
