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

use crate::{Indication, Message, SubIndication};

/// Result of a validation block.
///
/// A non-passed conclusion carries either a sub-indication or at least one
/// error explaining it. Warnings and information never change the
/// indication.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    /// Main indication.
    pub indication: Indication,

    /// Reason code, absent for passed conclusions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Errors that led to a non-passed indication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Message>,

    /// Warnings collected while reaching the indication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Message>,

    /// Information collected while reaching the indication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infos: Vec<Message>,
}

impl Conclusion {
    /// Creates a conclusion with no messages.
    pub fn new(indication: Indication, sub_indication: Option<SubIndication>) -> Self {
        Self {
            indication,
            sub_indication,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    /// Creates a passed conclusion.
    pub fn passed() -> Self {
        Self::new(Indication::Passed, None)
    }

    /// Returns `true` if the indication is passed.
    pub fn is_passed(&self) -> bool {
        self.indication.is_passed()
    }

    /// Returns `true` if the indication and sub-indication equal the given
    /// pair.
    pub fn is(&self, indication: Indication, sub_indication: Option<SubIndication>) -> bool {
        self.indication == indication && self.sub_indication == sub_indication
    }

    /// Replaces indication and sub-indication, keeping the messages.
    pub fn set_indication(
        &mut self,
        indication: Indication,
        sub_indication: Option<SubIndication>,
    ) {
        self.indication = indication;
        self.sub_indication = sub_indication;
    }

    /// Adds an error message unless an equal one is already present.
    pub fn add_error<M: Into<Message>>(&mut self, message: M) {
        push_unique(&mut self.errors, message.into());
    }

    /// Adds a warning message unless an equal one is already present.
    pub fn add_warning<M: Into<Message>>(&mut self, message: M) {
        push_unique(&mut self.warnings, message.into());
    }

    /// Adds an information message unless an equal one is already present.
    pub fn add_info<M: Into<Message>>(&mut self, message: M) {
        push_unique(&mut self.infos, message.into());
    }

    /// Copies all messages of `other` into this conclusion.
    pub fn merge_messages(&mut self, other: &Conclusion) {
        for m in &other.errors {
            self.add_error(m.clone());
        }
        self.merge_non_error_messages(other);
    }

    /// Copies warnings and information of `other` into this conclusion.
    pub fn merge_non_error_messages(&mut self, other: &Conclusion) {
        for m in &other.warnings {
            self.add_warning(m.clone());
        }
        for m in &other.infos {
            self.add_info(m.clone());
        }
    }
}

impl Default for Conclusion {
    fn default() -> Self {
        Self::passed()
    }
}

fn push_unique(messages: &mut Vec<Message>, message: Message) {
    if !messages.contains(&message) {
        messages.push(message);
    }
}
