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

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::diagnostic::{DigestMatcher, SigningCertificateReference};

/// Digest algorithms known to the cryptographic constraints.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    #[serde(rename = "SHA3_256")]
    Sha3_256,
    #[serde(rename = "SHA3_384")]
    Sha3_384,
    #[serde(rename = "SHA3_512")]
    Sha3_512,
    Ripemd160,
}

impl DigestAlgorithm {
    /// Returns the usual name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_256 => "SHA3_256",
            Self::Sha3_384 => "SHA3_384",
            Self::Sha3_512 => "SHA3_512",
            Self::Ripemd160 => "RIPEMD160",
        }
    }
}

impl Display for DigestAlgorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature (encryption) algorithms known to the cryptographic
/// constraints.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncryptionAlgorithm {
    Rsa,
    RsaSsaPss,
    Dsa,
    Ecdsa,
    #[serde(rename = "EDDSA")]
    EdDsa,
}

impl EncryptionAlgorithm {
    /// Returns the usual name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::RsaSsaPss => "RSA_SSA_PSS",
            Self::Dsa => "DSA",
            Self::Ecdsa => "ECDSA",
            Self::EdDsa => "EDDSA",
        }
    }
}

impl Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cryptographic attributes of a token's signature, populated by the
/// signature parsing stage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSignature {
    /// Digest algorithm of the signature.
    pub digest_algorithm: Option<DigestAlgorithm>,

    /// Encryption algorithm of the signature.
    pub encryption_algorithm: Option<EncryptionAlgorithm>,

    /// Length in bits of the signer's public key.
    pub key_length: Option<u32>,

    /// The signature value matches the signed data.
    pub signature_intact: bool,

    /// The signature value is intact and the signed data was found.
    pub signature_valid: bool,
}

impl BasicSignature {
    /// Describes the algorithm combination, for messages.
    pub fn describe(&self) -> String {
        let encryption = self
            .encryption_algorithm
            .map(EncryptionAlgorithm::name)
            .unwrap_or("?");
        let digest = self.digest_algorithm.map(DigestAlgorithm::name).unwrap_or("?");
        match self.key_length {
            Some(len) => format!("{encryption}{len} with {digest}"),
            None => format!("{encryption} with {digest}"),
        }
    }
}

/// Kinds of tokens that go through the basic building blocks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// A signature or counter-signature.
    Signature,

    /// A time-stamp token.
    Timestamp,

    /// A CRL or OCSP response.
    Revocation,
}

/// Common view over the tokens validated by the basic building blocks.
pub trait Token {
    /// Identifier of the token.
    fn id(&self) -> &str;

    /// Kind of token.
    fn token_type(&self) -> TokenType;

    /// Cryptographic attributes of the token's signature.
    fn basic_signature(&self) -> &BasicSignature;

    /// Identifier of the certificate that signed the token, if identified.
    fn signing_certificate(&self) -> Option<&str>;

    /// Certificate chain of the token, signing certificate first.
    fn certificate_chain(&self) -> &[String];

    /// The signed reference to the signing certificate, if the token
    /// carries one.
    fn signing_certificate_reference(&self) -> Option<&SigningCertificateReference> {
        None
    }

    /// References from the token to the data it signs.
    fn digest_matchers(&self) -> &[DigestMatcher] {
        &[]
    }
}
