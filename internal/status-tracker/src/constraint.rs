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

use crate::{ConstraintStatus, Message};

/// Record of one evaluated constraint within a validation block.
///
/// ## Example
///
/// ```
/// # use ades_status_tracker::{message_tags, ConstraintItem, ConstraintStatus};
/// let item = ConstraintItem::new(message_tags::BBB_CV_ISI, ConstraintStatus::NotOk)
///     .error(message_tags::BBB_CV_ISI_ANS)
///     .token_id("S-1");
///
/// assert_eq!(item.name.key, "BBB_CV_ISI");
/// assert!(item.is_failure());
/// assert_eq!(item.id.as_deref(), Some("S-1"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConstraintItem {
    /// Name of the check.
    pub name: Message,

    /// Outcome of the check.
    pub status: ConstraintStatus,

    /// Error recorded for a failure at FAIL level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Message>,

    /// Warning recorded for a failure at WARN level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<Message>,

    /// Information recorded for a failure at INFORM level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Message>,

    /// Identifier of the token or object the check was run against, if it
    /// differs from the block's own token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free text describing the values that were compared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl ConstraintItem {
    /// Creates an item with only a name and a status.
    pub fn new<M: Into<Message>>(name: M, status: ConstraintStatus) -> Self {
        Self {
            name: name.into(),
            status,
            error: None,
            warning: None,
            info: None,
            id: None,
            additional_info: None,
        }
    }

    /// Attaches an error message.
    pub fn error<M: Into<Message>>(self, message: M) -> Self {
        Self {
            error: Some(message.into()),
            ..self
        }
    }

    /// Attaches a warning message.
    pub fn warning<M: Into<Message>>(self, message: M) -> Self {
        Self {
            warning: Some(message.into()),
            ..self
        }
    }

    /// Attaches an information message.
    pub fn info<M: Into<Message>>(self, message: M) -> Self {
        Self {
            info: Some(message.into()),
            ..self
        }
    }

    /// Names the token the check refers to.
    pub fn token_id<S: Into<String>>(self, id: S) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Attaches free-text details.
    pub fn additional_info(self, info: Option<String>) -> Self {
        Self {
            additional_info: info,
            ..self
        }
    }

    /// Returns `true` if the check failed at FAIL level.
    pub fn is_failure(&self) -> bool {
        self.status == ConstraintStatus::NotOk
    }
}
