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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{BasicSignature, DigestAlgorithm, Token, TokenType};

/// A time-stamp token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimestampToken {
    /// Identifier of the time-stamp.
    pub id: String,

    /// Role of the time-stamp in the signature.
    pub timestamp_type: TimestampType,

    /// `genTime` of the time-stamp.
    pub production_time: DateTime<Utc>,

    /// The data covered by the message imprint was found.
    #[serde(default)]
    pub message_imprint_data_found: bool,

    /// The message imprint matches the covered data.
    #[serde(default)]
    pub message_imprint_data_intact: bool,

    /// Digest algorithm of the message imprint.
    #[serde(default)]
    pub message_imprint_digest_algorithm: Option<DigestAlgorithm>,

    /// Cryptographic attributes of the token's signature.
    #[serde(default)]
    pub basic_signature: BasicSignature,

    /// Identifier of the time-stamping unit certificate.
    #[serde(default)]
    pub signing_certificate: Option<String>,

    /// Certificate chain of the TSU, signing certificate first.
    #[serde(default)]
    pub certificate_chain: Vec<String>,

    /// Objects covered by the time-stamp.
    #[serde(default)]
    pub timestamped_objects: Vec<TimestampedObject>,
}

impl TimestampToken {
    /// Returns `true` if the time-stamp covers the object with the given id.
    pub fn covers(&self, id: &str) -> bool {
        self.timestamped_objects.iter().any(|o| o.id == id)
    }
}

impl Token for TimestampToken {
    fn id(&self) -> &str {
        &self.id
    }

    fn token_type(&self) -> TokenType {
        TokenType::Timestamp
    }

    fn basic_signature(&self) -> &BasicSignature {
        &self.basic_signature
    }

    fn signing_certificate(&self) -> Option<&str> {
        self.signing_certificate.as_deref()
    }

    fn certificate_chain(&self) -> &[String] {
        &self.certificate_chain
    }
}

/// Roles of a time-stamp.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampType {
    /// Covers the signed content before signing.
    ContentTimestamp,

    /// Covers the signature value.
    SignatureTimestamp,

    /// Covers validation data references.
    ValidationDataTimestamp,

    /// Covers the signature and all its validation data.
    ArchiveTimestamp,

    /// Archive time-stamp inside an evidence record.
    EvidenceRecordTimestamp,
}

/// An object covered by a time-stamp or an evidence record.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TimestampedObject {
    /// Identifier of the covered token or data object.
    pub id: String,

    /// Kind of the covered object.
    pub category: TimestampedObjectType,
}

impl TimestampedObject {
    /// Creates a new covered-object reference.
    pub fn new<S: Into<String>>(id: S, category: TimestampedObjectType) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

/// Kinds of covered objects.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampedObjectType {
    Signature,
    Certificate,
    Revocation,
    Timestamp,
    EvidenceRecord,
    SignedData,
}
