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

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{BasicSignature, Token, TokenType};

/// A CRL or an OCSP response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevocationToken {
    /// Identifier of the revocation token.
    pub id: String,

    /// CRL or OCSP.
    pub revocation_type: RevocationType,

    /// Production date (OCSP `producedAt`, CRL `thisUpdate`).
    pub production_date: DateTime<Utc>,

    /// `thisUpdate` of the revocation data.
    pub this_update: DateTime<Utc>,

    /// `nextUpdate` of the revocation data.
    #[serde(default)]
    pub next_update: Option<DateTime<Utc>>,

    /// Cryptographic attributes of the token's signature.
    #[serde(default)]
    pub basic_signature: BasicSignature,

    /// Identifier of the CRL issuer or OCSP responder certificate.
    #[serde(default)]
    pub signing_certificate: Option<String>,

    /// Certificate chain of the issuer, issuer certificate first.
    #[serde(default)]
    pub certificate_chain: Vec<String>,
}

impl RevocationToken {
    /// Returns `true` if the revocation data is fresh at `control_time`.
    ///
    /// With `max_freshness` the data must have been issued no longer than
    /// that before `control_time`. Without it, the window is the distance
    /// between `thisUpdate` and `nextUpdate`, or zero when there is no
    /// `nextUpdate`.
    pub fn is_fresh_at(
        &self,
        control_time: DateTime<Utc>,
        max_freshness: Option<Duration>,
    ) -> bool {
        let window = max_freshness
            .or_else(|| self.next_update.map(|next| next - self.this_update))
            .unwrap_or_else(Duration::zero);
        self.this_update + window >= control_time
    }
}

impl Token for RevocationToken {
    fn id(&self) -> &str {
        &self.id
    }

    fn token_type(&self) -> TokenType {
        TokenType::Revocation
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

/// Kinds of revocation data.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationType {
    Crl,
    Ocsp,
}
