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

use crate::{Error, Result};

/// State of a cache entry.
///
/// Entries start in [`CacheState::RefreshNeeded`]. [`CacheState::ToBeDeleted`]
/// is terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CacheState {
    /// The cached result must be recomputed.
    RefreshNeeded,

    /// The cached result is up to date but not yet published.
    Desynchronized,

    /// The cached result is published.
    Synchronized,

    /// The last attempt to compute the result failed.
    Error,

    /// The entry is no longer referenced and will be removed.
    ToBeDeleted,
}

impl CacheState {
    /// Returns the standard name of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RefreshNeeded => "REFRESH_NEEDED",
            Self::Desynchronized => "DESYNCHRONIZED",
            Self::Synchronized => "SYNCHRONIZED",
            Self::Error => "ERROR",
            Self::ToBeDeleted => "TO_BE_DELETED",
        }
    }

    /// Checks a transition from `self` to `to`.
    ///
    /// Returns `Ok(false)` when the transition is defined but leaves the
    /// state unchanged.
    pub(crate) fn check_transition(self, to: CacheState) -> Result<bool> {
        let allowed = match (self, to) {
            (Self::ToBeDeleted, _) => false,
            (Self::Desynchronized | Self::Error, Self::Synchronized) => true,
            (Self::RefreshNeeded | Self::Synchronized | Self::Error, Self::Desynchronized) => {
                true
            }
            (Self::Synchronized | Self::Desynchronized | Self::Error, Self::RefreshNeeded) => {
                true
            }
            (_, Self::Error | Self::ToBeDeleted) => true,
            (from, to) if from == to => return Ok(false),
            _ => false,
        };

        if allowed {
            Ok(self != to)
        } else {
            Err(Error::IllegalStateTransition { from: self, to })
        }
    }
}

impl Display for CacheState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
