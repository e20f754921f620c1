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

//! Catalogue of the message tags used by the validation processes.
//!
//! Every check tag names the question a chain item answers. The matching
//! `_ANS` tag carries the text recorded when the answer is negative. Block
//! tags name whole validation blocks.
//!
//! See ETSI EN 319 102-1 for the processes these checks belong to.

#![allow(missing_docs)]

use crate::MessageTag;

// -- block titles --

pub const BBB: MessageTag = MessageTag::new("BBB", "Basic building blocks");
pub const ISC: MessageTag = MessageTag::new("ISC", "Identification of the signing certificate");
pub const CV: MessageTag = MessageTag::new("CV", "Cryptographic verification");
pub const XCV: MessageTag = MessageTag::new("XCV", "X509 certificate validation");
pub const SUB_XCV: MessageTag = MessageTag::new("SUB_XCV", "Certificate validation");
pub const SAV: MessageTag = MessageTag::new("SAV", "Signature acceptance validation");
pub const PCV: MessageTag = MessageTag::new("PCV", "Past certificate validation");
pub const VTS: MessageTag = MessageTag::new("VTS", "Validation time sliding");
pub const PSV: MessageTag = MessageTag::new("PSV", "Past signature validation");
pub const LTV: MessageTag = MessageTag::new(
    "LTV",
    "Validation process for signatures with time and signatures with long-term validation data",
);
pub const ARCH: MessageTag = MessageTag::new(
    "ARCH",
    "Validation process for signatures with archival data",
);
pub const TSP_ARCH: MessageTag = MessageTag::new(
    "TSP_ARCH",
    "Validation process for time-stamps with archival data",
);
pub const ERV: MessageTag = MessageTag::new("ERV", "Evidence record validation");
pub const TLA: MessageTag = MessageTag::new("TLA", "Trusted list analysis");
pub const LOTLA: MessageTag = MessageTag::new("LOTLA", "List of trusted lists analysis");
pub const CERT_QUAL_ISSUANCE: MessageTag = MessageTag::new(
    "CERT_QUAL_ISSUANCE",
    "Certificate qualification at certificate issuance time",
);
pub const CERT_QUAL_SIGNING: MessageTag = MessageTag::new(
    "CERT_QUAL_SIGNING",
    "Certificate qualification at best-signature-time",
);
pub const SIG_QUAL: MessageTag = MessageTag::new("SIG_QUAL", "Signature qualification");

// -- identification of the signing certificate --

/// Checks that the signing certificate was located among the certificates
/// of the diagnostic data.
pub const BBB_ICS_ISCI: MessageTag = MessageTag::new(
    "BBB_ICS_ISCI",
    "Is there an identified candidate for the signing certificate?",
);
pub const BBB_ICS_ISCI_ANS: MessageTag = MessageTag::new(
    "BBB_ICS_ISCI_ANS",
    "There is no candidate for the signing certificate!",
);
pub const BBB_ICS_ISASCP: MessageTag = MessageTag::new(
    "BBB_ICS_ISASCP",
    "Is the signed attribute: 'signing-certificate' present?",
);
pub const BBB_ICS_ISASCP_ANS: MessageTag = MessageTag::new(
    "BBB_ICS_ISASCP_ANS",
    "The signed attribute: 'signing-certificate' is absent!",
);
pub const BBB_ICS_ICDVV: MessageTag = MessageTag::new(
    "BBB_ICS_ICDVV",
    "Is the certificate's digest value valid?",
);
pub const BBB_ICS_ICDVV_ANS: MessageTag = MessageTag::new(
    "BBB_ICS_ICDVV_ANS",
    "The signing certificate digest value does not match!",
);
pub const BBB_ICS_AIDNASNE: MessageTag = MessageTag::new(
    "BBB_ICS_AIDNASNE",
    "Are the issuer distinguished name and the serial number equal?",
);
pub const BBB_ICS_AIDNASNE_ANS: MessageTag = MessageTag::new(
    "BBB_ICS_AIDNASNE_ANS",
    "The 'issuer-serial' attribute is absent or does not match!",
);

// -- cryptographic verification --

pub const BBB_CV_IRDOF: MessageTag =
    MessageTag::new("BBB_CV_IRDOF", "Is the reference data object found?");
pub const BBB_CV_IRDOF_ANS: MessageTag = MessageTag::new(
    "BBB_CV_IRDOF_ANS",
    "The reference data object is not found!",
);
pub const BBB_CV_IRDOI: MessageTag =
    MessageTag::new("BBB_CV_IRDOI", "Is the reference data object intact?");
pub const BBB_CV_IRDOI_ANS: MessageTag = MessageTag::new(
    "BBB_CV_IRDOI_ANS",
    "The reference data object is not intact!",
);
pub const BBB_CV_TSP_IRDOF: MessageTag =
    MessageTag::new("BBB_CV_TSP_IRDOF", "Is the message imprint data found?");
pub const BBB_CV_TSP_IRDOF_ANS: MessageTag = MessageTag::new(
    "BBB_CV_TSP_IRDOF_ANS",
    "The time-stamp message imprint data is not found!",
);
pub const BBB_CV_TSP_IRDOI: MessageTag =
    MessageTag::new("BBB_CV_TSP_IRDOI", "Is the message imprint data intact?");
pub const BBB_CV_TSP_IRDOI_ANS: MessageTag = MessageTag::new(
    "BBB_CV_TSP_IRDOI_ANS",
    "The time-stamp message imprint data is not intact!",
);

/// Checks the raw signature value against the signer's public key.
pub const BBB_CV_ISI: MessageTag = MessageTag::new("BBB_CV_ISI", "Is the signature intact?");
pub const BBB_CV_ISI_ANS: MessageTag =
    MessageTag::new("BBB_CV_ISI_ANS", "The signature is not intact!");

// -- x509 certificate validation --

pub const BBB_XCV_CCCBB: MessageTag = MessageTag::new(
    "BBB_XCV_CCCBB",
    "Can the certificate chain be built till a trust anchor?",
);
pub const BBB_XCV_CCCBB_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_CCCBB_ANS",
    "The certificate chain is not trusted, it does not contain a trust anchor.",
);
pub const BBB_XCV_SUB: MessageTag = MessageTag::new(
    "BBB_XCV_SUB",
    "Is the certificate validation conclusive?",
);
pub const BBB_XCV_SUB_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_SUB_ANS",
    "The certificate validation is not conclusive!",
);
pub const BBB_XCV_ICSI: MessageTag =
    MessageTag::new("BBB_XCV_ICSI", "Is the certificate's signature intact?");
pub const BBB_XCV_ICSI_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_ICSI_ANS",
    "The certificate's signature is not intact!",
);
pub const BBB_XCV_IRDPFC: MessageTag = MessageTag::new(
    "BBB_XCV_IRDPFC",
    "Is the revocation data present for the certificate?",
);
pub const BBB_XCV_IRDPFC_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_IRDPFC_ANS",
    "No revocation data for the certificate!",
);
pub const BBB_XCV_IRIF: MessageTag = MessageTag::new(
    "BBB_XCV_IRIF",
    "Is the revocation information fresh for the certificate?",
);
pub const BBB_XCV_IRIF_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_IRIF_ANS",
    "The revocation information is not considered as 'fresh'.",
);
pub const BBB_XCV_ISCR: MessageTag =
    MessageTag::new("BBB_XCV_ISCR", "Is the certificate not revoked?");
pub const BBB_XCV_ISCR_ANS: MessageTag =
    MessageTag::new("BBB_XCV_ISCR_ANS", "The certificate is revoked!");
pub const BBB_XCV_ISCOH: MessageTag =
    MessageTag::new("BBB_XCV_ISCOH", "Is the certificate not on hold?");
pub const BBB_XCV_ISCOH_ANS: MessageTag =
    MessageTag::new("BBB_XCV_ISCOH_ANS", "The certificate is on hold!");
pub const BBB_XCV_ICTIVRSC: MessageTag = MessageTag::new(
    "BBB_XCV_ICTIVRSC",
    "Is the current time in the validity range of the certificate?",
);
pub const BBB_XCV_ICTIVRSC_ANS: MessageTag = MessageTag::new(
    "BBB_XCV_ICTIVRSC_ANS",
    "The current time is not in the validity range of the certificate!",
);

// -- cryptographic constraints --

/// Checks an algorithm and key length against the policy's cryptographic
/// suite at a given time. The concerned material is appended as a detail.
pub const ACCM: MessageTag = MessageTag::new(
    "ACCM",
    "Are the cryptographic constraints met for the signature?",
);
pub const ACCM_ANS: MessageTag = MessageTag::new(
    "ACCM_ANS",
    "The cryptographic constraints are not met for the signature!",
);
pub const ACCM_CERT: MessageTag = MessageTag::new(
    "ACCM_CERT",
    "Are the cryptographic constraints met for the certificate?",
);
pub const ACCM_CERT_ANS: MessageTag = MessageTag::new(
    "ACCM_CERT_ANS",
    "The cryptographic constraints are not met for the certificate!",
);
pub const ACCM_DIGEST: MessageTag = MessageTag::new(
    "ACCM_DIGEST",
    "Are the cryptographic constraints met for the reference data object digest?",
);
pub const ACCM_DIGEST_ANS: MessageTag = MessageTag::new(
    "ACCM_DIGEST_ANS",
    "The digest algorithm of the reference data object is not reliable!",
);
pub const ACCM_SIG_CERT_REF: MessageTag = MessageTag::new(
    "ACCM_SIG_CERT_REF",
    "Are the cryptographic constraints met for the signing certificate reference?",
);
pub const ACCM_SIG_CERT_REF_ANS: MessageTag = MessageTag::new(
    "ACCM_SIG_CERT_REF_ANS",
    "The digest algorithm of the signing certificate reference is not reliable!",
);
pub const ACCM_REV: MessageTag = MessageTag::new(
    "ACCM_REV",
    "Are the cryptographic constraints met for the revocation data?",
);
pub const ACCM_REV_ANS: MessageTag = MessageTag::new(
    "ACCM_REV_ANS",
    "The cryptographic constraints are not met for the revocation data!",
);

// -- signature acceptance validation --

pub const BBB_SAV_ISSV: MessageTag =
    MessageTag::new("BBB_SAV_ISSV", "Is the structure of the signature valid?");
pub const BBB_SAV_ISSV_ANS: MessageTag = MessageTag::new(
    "BBB_SAV_ISSV_ANS",
    "The structure of the signature is not valid!",
);
pub const BBB_SAV_ISQPSTP: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPSTP",
    "Is the signed qualifying property: 'signing-time' present?",
);
pub const BBB_SAV_ISQPSTP_ANS: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPSTP_ANS",
    "The signed qualifying property: 'signing-time' is not present!",
);
pub const BBB_SAV_ISQPCTP: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPCTP",
    "Is the signed qualifying property: 'commitment-type-indication' acceptable?",
);
pub const BBB_SAV_ISQPCTP_ANS: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPCTP_ANS",
    "The signed qualifying property: 'commitment-type-indication' is absent or not acceptable!",
);
pub const BBB_SAV_ISQPSRP: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPSRP",
    "Is the signed qualifying property: 'signer-role' acceptable?",
);
pub const BBB_SAV_ISQPSRP_ANS: MessageTag = MessageTag::new(
    "BBB_SAV_ISQPSRP_ANS",
    "The signed qualifying property: 'signer-role' is absent or not acceptable!",
);

// -- past certificate validation --

pub const PCV_ICCBTA: MessageTag = MessageTag::new(
    "PCV_ICCBTA",
    "Can the certificate chain be built till a trust anchor at control time?",
);
pub const PCV_ICCBTA_ANS: MessageTag = MessageTag::new(
    "PCV_ICCBTA_ANS",
    "The certificate chain does not contain a trust anchor!",
);
pub const PCV_IVTSC: MessageTag = MessageTag::new(
    "PCV_IVTSC",
    "Is the validation time sliding process conclusive?",
);
pub const PCV_IVTSC_ANS: MessageTag = MessageTag::new(
    "PCV_IVTSC_ANS",
    "The validation time sliding process is not conclusive!",
);
pub const VTS_IRDPFC: MessageTag = MessageTag::new(
    "VTS_IRDPFC",
    "Is the revocation data present for the certificate?",
);
pub const VTS_IRDPFC_ANS: MessageTag = MessageTag::new(
    "VTS_IRDPFC_ANS",
    "No revocation data was found for the certificate!",
);

// -- past signature validation --

pub const PSV_IPCVA: MessageTag = MessageTag::new(
    "PSV_IPCVA",
    "Is the result of the past certificate validation process acceptable?",
);
pub const PSV_IPCVA_ANS: MessageTag = MessageTag::new(
    "PSV_IPCVA_ANS",
    "The result of the past certificate validation process is not acceptable!",
);
pub const PSV_IPSVC: MessageTag = MessageTag::new(
    "PSV_IPSVC",
    "Is there a POE of the signature value at (or before) control-time?",
);
pub const PSV_IPSVC_ANS: MessageTag = MessageTag::new(
    "PSV_IPSVC_ANS",
    "No POE of the signature value was found at control-time!",
);
pub const PSV_ITPOSVAOBCT: MessageTag = MessageTag::new(
    "PSV_ITPOSVAOBCT",
    "Is the best-signature-time after the issuance date of the signing certificate?",
);
pub const PSV_ITPOSVAOBCT_ANS: MessageTag = MessageTag::new(
    "PSV_ITPOSVAOBCT_ANS",
    "The best-signature-time is before the issuance date of the signing certificate!",
);
pub const PSV_IBSTBCE: MessageTag = MessageTag::new(
    "PSV_IBSTBCE",
    "Is the best-signature-time before the expiration date of the signing certificate?",
);
pub const PSV_IBSTBCE_ANS: MessageTag = MessageTag::new(
    "PSV_IBSTBCE_ANS",
    "The best-signature-time is not before the expiration date of the signing certificate!",
);
pub const PSV_IBSTBRD: MessageTag = MessageTag::new(
    "PSV_IBSTBRD",
    "Is the best-signature-time before the revocation date of the signing certificate?",
);
pub const PSV_IBSTBRD_ANS: MessageTag = MessageTag::new(
    "PSV_IBSTBRD_ANS",
    "The best-signature-time is not before the revocation date of the signing certificate!",
);
pub const PSV_IBSTBCARD: MessageTag = MessageTag::new(
    "PSV_IBSTBCARD",
    "Is the best-signature-time before the revocation date of the CA certificate?",
);
pub const PSV_IBSTBCARD_ANS: MessageTag = MessageTag::new(
    "PSV_IBSTBCARD_ANS",
    "The best-signature-time is not before the revocation date of the CA certificate!",
);
pub const PSV_IRDFBST: MessageTag = MessageTag::new(
    "PSV_IRDFBST",
    "Is the revocation data fresh at the best-signature-time?",
);
pub const PSV_IRDFBST_ANS: MessageTag = MessageTag::new(
    "PSV_IRDFBST_ANS",
    "The revocation data is not fresh at the best-signature-time!",
);
pub const PSV_ICTIC: MessageTag = MessageTag::new(
    "PSV_ICTIC",
    "Is the current time indication resolvable with the available POE?",
);
pub const PSV_ICTIC_ANS: MessageTag = MessageTag::new(
    "PSV_ICTIC_ANS",
    "The current time indication cannot be resolved with the available POE!",
);
pub const PSV_IRDPOE: MessageTag = MessageTag::new(
    "PSV_IRDPOE",
    "Is there a POE of the signing certificate revocation data within the issuer validity range?",
);
pub const PSV_IRDPOE_ANS: MessageTag = MessageTag::new(
    "PSV_IRDPOE_ANS",
    "No POE was found for the signing certificate revocation data within the issuer validity range!",
);

// -- long-term and archival validation --

pub const LTV_ABSV: MessageTag = MessageTag::new(
    "LTV_ABSV",
    "Is the result of the basic validation process acceptable?",
);
pub const LTV_ABSV_ANS: MessageTag = MessageTag::new(
    "LTV_ABSV_ANS",
    "The result of the basic validation process is not acceptable to continue the process!",
);
pub const LTV_ITVPC: MessageTag = MessageTag::new(
    "LTV_ITVPC",
    "Is the result of the time-stamp validation process conclusive?",
);
pub const LTV_ITVPC_ANS: MessageTag = MessageTag::new(
    "LTV_ITVPC_ANS",
    "The result of the time-stamp validation process is not conclusive!",
);
pub const LTV_IRDABST: MessageTag = MessageTag::new(
    "LTV_IRDABST",
    "Is the revocation date of the signing certificate after the best-signature-time?",
);
pub const LTV_IRDABST_ANS: MessageTag = MessageTag::new(
    "LTV_IRDABST_ANS",
    "The revocation date of the signing certificate is not after the best-signature-time!",
);
pub const LTV_IBSTBCE: MessageTag = MessageTag::new(
    "LTV_IBSTBCE",
    "Is the best-signature-time before the expiration date of the signing certificate?",
);
pub const LTV_IBSTBCE_ANS: MessageTag = MessageTag::new(
    "LTV_IBSTBCE_ANS",
    "The best-signature-time is not before the expiration date of the signing certificate!",
);
pub const LTV_IARBST: MessageTag = MessageTag::new(
    "LTV_IARBST",
    "Are the algorithms used reliable at the best-signature-time?",
);
pub const LTV_IARBST_ANS: MessageTag = MessageTag::new(
    "LTV_IARBST_ANS",
    "The algorithms used are not reliable at the best-signature-time!",
);
pub const LTV_IBVCBST: MessageTag = MessageTag::new(
    "LTV_IBVCBST",
    "Is the basic validation conclusive at the best-signature-time?",
);
pub const LTV_IBVCBST_ANS: MessageTag = MessageTag::new(
    "LTV_IBVCBST_ANS",
    "The basic validation is not conclusive at the best-signature-time!",
);
pub const ARCH_IERVPC: MessageTag = MessageTag::new(
    "ARCH_IERVPC",
    "Is the result of the evidence record validation process conclusive?",
);
pub const ARCH_IERVPC_ANS: MessageTag = MessageTag::new(
    "ARCH_IERVPC_ANS",
    "The result of the evidence record validation process is not conclusive!",
);
pub const ARCH_LTVV: MessageTag = MessageTag::new(
    "ARCH_LTVV",
    "Is the result of the long-term validation process acceptable?",
);
pub const ARCH_LTVV_ANS: MessageTag = MessageTag::new(
    "ARCH_LTVV_ANS",
    "The result of the long-term validation process is not acceptable to continue the process!",
);
pub const ARCH_ITVPC: MessageTag = MessageTag::new(
    "ARCH_ITVPC",
    "Is the result of the time-stamp validation process conclusive?",
);
pub const ARCH_ITVPC_ANS: MessageTag = MessageTag::new(
    "ARCH_ITVPC_ANS",
    "The result of the time-stamp validation process is not conclusive!",
);
pub const ARCH_IPSVC: MessageTag = MessageTag::new(
    "ARCH_IPSVC",
    "Is the past signature validation process conclusive?",
);
pub const ARCH_IPSVC_ANS: MessageTag = MessageTag::new(
    "ARCH_IPSVC_ANS",
    "The past signature validation process is not conclusive!",
);
pub const ARCH_ISAVBST: MessageTag = MessageTag::new(
    "ARCH_ISAVBST",
    "Is the signature acceptance validation conclusive at the best-signature-time?",
);
pub const ARCH_ISAVBST_ANS: MessageTag = MessageTag::new(
    "ARCH_ISAVBST_ANS",
    "The signature acceptance validation is not conclusive at the best-signature-time!",
);
pub const TSP_ABSV: MessageTag = MessageTag::new(
    "TSP_ABSV",
    "Is the result of the basic time-stamp validation process acceptable?",
);
pub const TSP_ABSV_ANS: MessageTag = MessageTag::new(
    "TSP_ABSV_ANS",
    "The result of the basic time-stamp validation process is not acceptable!",
);
pub const TSP_IPTVC: MessageTag = MessageTag::new(
    "TSP_IPTVC",
    "Is the past time-stamp validation process conclusive?",
);
pub const TSP_IPTVC_ANS: MessageTag = MessageTag::new(
    "TSP_IPTVC_ANS",
    "The past time-stamp validation process is not conclusive!",
);

// -- evidence records --

pub const ERV_IRDOF: MessageTag =
    MessageTag::new("ERV_IRDOF", "Is the reference data object found?");
pub const ERV_IRDOF_ANS: MessageTag = MessageTag::new(
    "ERV_IRDOF_ANS",
    "The reference data object is not found!",
);
pub const ERV_IRDOI: MessageTag =
    MessageTag::new("ERV_IRDOI", "Is the reference data object intact?");
pub const ERV_IRDOI_ANS: MessageTag = MessageTag::new(
    "ERV_IRDOI_ANS",
    "The reference data object is not intact!",
);
pub const ERV_ALOROF: MessageTag = MessageTag::new(
    "ERV_ALOROF",
    "Is at least one reference data object found?",
);
pub const ERV_ALOROF_ANS: MessageTag = MessageTag::new(
    "ERV_ALOROF_ANS",
    "No reference data object is found!",
);
pub const ERV_IDGI: MessageTag = MessageTag::new(
    "ERV_IDGI",
    "Are all found data objects of the group intact?",
);
pub const ERV_IDGI_ANS: MessageTag = MessageTag::new(
    "ERV_IDGI_ANS",
    "The data object group is not intact!",
);
pub const ERV_ITVPC: MessageTag = MessageTag::new(
    "ERV_ITVPC",
    "Is the time-stamp validation process conclusive?",
);
pub const ERV_ITVPC_ANS: MessageTag = MessageTag::new(
    "ERV_ITVPC_ANS",
    "The time-stamp validation process is not conclusive!",
);

// -- trusted lists --

pub const QUAL_TL_FRESH: MessageTag =
    MessageTag::new("QUAL_TL_FRESH", "Is the trusted list fresh?");
pub const QUAL_TL_FRESH_ANS: MessageTag =
    MessageTag::new("QUAL_TL_FRESH_ANS", "The trusted list is not considered as fresh!");
pub const QUAL_TL_EXP: MessageTag =
    MessageTag::new("QUAL_TL_EXP", "Is the trusted list not expired?");
pub const QUAL_TL_EXP_ANS: MessageTag =
    MessageTag::new("QUAL_TL_EXP_ANS", "The trusted list is expired!");
pub const QUAL_TL_VERSION: MessageTag = MessageTag::new(
    "QUAL_TL_VERSION",
    "Is the trusted list version acceptable?",
);
pub const QUAL_TL_VERSION_ANS: MessageTag = MessageTag::new(
    "QUAL_TL_VERSION_ANS",
    "The trusted list version is not acceptable!",
);
pub const QUAL_TL_WS: MessageTag =
    MessageTag::new("QUAL_TL_WS", "Is the trusted list well signed?");
pub const QUAL_TL_WS_ANS: MessageTag =
    MessageTag::new("QUAL_TL_WS_ANS", "The trusted list is not well signed!");

// -- certificate qualification --

pub const QUAL_HAS_TS_AT_TIME: MessageTag = MessageTag::new(
    "QUAL_HAS_TS_AT_TIME",
    "Is the certificate related to a trust service at the time?",
);
pub const QUAL_HAS_TS_AT_TIME_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_TS_AT_TIME_ANS",
    "The certificate is not related to a trust service at the time!",
);
pub const QUAL_HAS_CAQC: MessageTag = MessageTag::new(
    "QUAL_HAS_CAQC",
    "Is the certificate related to a CA/QC?",
);
pub const QUAL_HAS_CAQC_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_CAQC_ANS",
    "The certificate is not related to a CA/QC!",
);
pub const QUAL_HAS_CERT_TYPE_COVERAGE: MessageTag = MessageTag::new(
    "QUAL_HAS_CERT_TYPE_COVERAGE",
    "Is the certificate type covered by a trust service?",
);
pub const QUAL_HAS_CERT_TYPE_COVERAGE_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_CERT_TYPE_COVERAGE_ANS",
    "The certificate type is not covered by any trust service!",
);
pub const QUAL_TL_SERV_CONS: MessageTag = MessageTag::new(
    "QUAL_TL_SERV_CONS",
    "Is the trust service consistent?",
);
pub const QUAL_TL_SERV_CONS_ANS: MessageTag = MessageTag::new(
    "QUAL_TL_SERV_CONS_ANS",
    "The trust service is not consistent!",
);
pub const QUAL_HAS_CONSISTENT: MessageTag = MessageTag::new(
    "QUAL_HAS_CONSISTENT",
    "Do the trust services agree on the certificate qualification?",
);
pub const QUAL_HAS_CONSISTENT_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_CONSISTENT_ANS",
    "The trust services do not agree on the certificate qualification!",
);
pub const QUAL_HAS_GRANTED_AT: MessageTag = MessageTag::new(
    "QUAL_HAS_GRANTED_AT",
    "Is the certificate related to a trust service with a granted status at the time?",
);
pub const QUAL_HAS_GRANTED_AT_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_GRANTED_AT_ANS",
    "The certificate is not related to a granted trust service at the time!",
);
pub const QUAL_UNIQUE_SERVICE: MessageTag = MessageTag::new(
    "QUAL_UNIQUE_SERVICE",
    "Is a unique trust service selected?",
);
pub const QUAL_UNIQUE_SERVICE_ANS: MessageTag = MessageTag::new(
    "QUAL_UNIQUE_SERVICE_ANS",
    "Unable to select a unique trust service!",
);
pub const QUAL_VALID_CAQC: MessageTag = MessageTag::new(
    "QUAL_VALID_CAQC",
    "Is the selected trust service a granted CA/QC?",
);
pub const QUAL_VALID_CAQC_ANS: MessageTag = MessageTag::new(
    "QUAL_VALID_CAQC_ANS",
    "The selected trust service is not a granted CA/QC!",
);
pub const QUAL_IS_QC: MessageTag = MessageTag::new(
    "QUAL_IS_QC",
    "Is the certificate qualified at the time?",
);
pub const QUAL_IS_QC_ANS: MessageTag = MessageTag::new(
    "QUAL_IS_QC_ANS",
    "The certificate is not qualified at the time!",
);
pub const QUAL_IS_TYPE: MessageTag = MessageTag::new(
    "QUAL_IS_TYPE",
    "Is the certificate type unambiguously identified at the time?",
);
pub const QUAL_IS_TYPE_ANS: MessageTag = MessageTag::new(
    "QUAL_IS_TYPE_ANS",
    "The certificate type is not unambiguously identified at the time!",
);
pub const QUAL_IS_QSCD: MessageTag = MessageTag::new(
    "QUAL_IS_QSCD",
    "Is the private key on a QSCD at the time?",
);
pub const QUAL_IS_QSCD_ANS: MessageTag = MessageTag::new(
    "QUAL_IS_QSCD_ANS",
    "The private key is not on a QSCD at the time!",
);

// -- signature qualification --

pub const QUAL_IS_ADES: MessageTag = MessageTag::new(
    "QUAL_IS_ADES",
    "Is the signature/seal an acceptable AdES digital signature (ETSI EN 319 102-1)?",
);
pub const QUAL_IS_ADES_ANS: MessageTag = MessageTag::new(
    "QUAL_IS_ADES_ANS",
    "The signature/seal is not a valid AdES digital signature!",
);
pub const QUAL_IS_ADES_IND: MessageTag = MessageTag::new(
    "QUAL_IS_ADES_IND",
    "The signature/seal is an INDETERMINATE AdES digital signature!",
);
pub const QUAL_TRUSTED_LIST_REACHED: MessageTag = MessageTag::new(
    "QUAL_TRUSTED_LIST_REACHED",
    "Is the certificate path trusted by a trusted list?",
);
pub const QUAL_TRUSTED_LIST_REACHED_ANS: MessageTag = MessageTag::new(
    "QUAL_TRUSTED_LIST_REACHED_ANS",
    "The certificate path is not trusted by any trusted list!",
);
pub const QUAL_LOTL_ACCEPT: MessageTag = MessageTag::new(
    "QUAL_LOTL_ACCEPT",
    "Is the list of trusted lists acceptable?",
);
pub const QUAL_LOTL_ACCEPT_ANS: MessageTag = MessageTag::new(
    "QUAL_LOTL_ACCEPT_ANS",
    "The list of trusted lists is not acceptable!",
);
pub const QUAL_TL_ACCEPT: MessageTag =
    MessageTag::new("QUAL_TL_ACCEPT", "Is the trusted list acceptable?");
pub const QUAL_TL_ACCEPT_ANS: MessageTag =
    MessageTag::new("QUAL_TL_ACCEPT_ANS", "The trusted list is not acceptable!");
pub const QUAL_HAS_ACCEPTABLE_TL: MessageTag = MessageTag::new(
    "QUAL_HAS_ACCEPTABLE_TL",
    "Is an acceptable trusted list found for the certificate?",
);
pub const QUAL_HAS_ACCEPTABLE_TL_ANS: MessageTag = MessageTag::new(
    "QUAL_HAS_ACCEPTABLE_TL_ANS",
    "No acceptable trusted list was found for the certificate!",
);
pub const QUAL_QC_AT_ST: MessageTag = MessageTag::new(
    "QUAL_QC_AT_ST",
    "Is the certificate qualified at the best-signature-time?",
);
pub const QUAL_QC_AT_ST_ANS: MessageTag = MessageTag::new(
    "QUAL_QC_AT_ST_ANS",
    "The certificate is not qualified at the best-signature-time!",
);
pub const QUAL_TYPE_AT_ST: MessageTag = MessageTag::new(
    "QUAL_TYPE_AT_ST",
    "Is the certificate type identified at the best-signature-time?",
);
pub const QUAL_TYPE_AT_ST_ANS: MessageTag = MessageTag::new(
    "QUAL_TYPE_AT_ST_ANS",
    "The certificate type is not identified at the best-signature-time!",
);
pub const QUAL_QC_AT_CC: MessageTag = MessageTag::new(
    "QUAL_QC_AT_CC",
    "Is the certificate qualified at issuance time?",
);
pub const QUAL_QC_AT_CC_ANS: MessageTag = MessageTag::new(
    "QUAL_QC_AT_CC_ANS",
    "The certificate is not qualified at issuance time!",
);
pub const QUAL_QSCD_AT_ST: MessageTag = MessageTag::new(
    "QUAL_QSCD_AT_ST",
    "Is the private key on a QSCD at the best-signature-time?",
);
pub const QUAL_QSCD_AT_ST_ANS: MessageTag = MessageTag::new(
    "QUAL_QSCD_AT_ST_ANS",
    "The private key is not on a QSCD at the best-signature-time!",
);
