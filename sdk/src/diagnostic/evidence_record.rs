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

use serde::{Deserialize, Serialize};

use crate::diagnostic::{DigestMatcher, TimestampedObject};

/// An RFC 4998 evidence record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Identifier of the evidence record.
    pub id: String,

    /// Hashes of the protected data objects.
    #[serde(default)]
    pub digest_matchers: Vec<DigestMatcher>,

    /// Archive time-stamps, one per renewal round, oldest first.
    #[serde(default)]
    pub timestamps: Vec<String>,

    /// Objects protected by the evidence record.
    #[serde(default)]
    pub covered_objects: Vec<TimestampedObject>,
}
