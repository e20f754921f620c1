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

//! Ordered constraint evaluation.
//!
//! A [`Chain`] records one [`ConstraintItem`] per evaluated [`ChainItem`]
//! and derives the conclusion of its block. Items are evaluated in the order
//! they are added. Once an item fails at [`Level::Fail`] the chain is
//! terminated: its conclusion takes the item's failed indication and every
//! item added afterwards is dropped without being processed.

use std::fmt::Display;

use ades_status_tracker::{
    Conclusion, ConstraintItem, ConstraintStatus, Indication, Level, Message, MessageTag,
    StatusTracker, SubIndication,
};
use serde::{Deserialize, Serialize};

use crate::policy::CryptographicValidation;

/// A single named check.
pub trait ChainItem {
    /// Runs the check. Returns `true` when the constraint is satisfied.
    fn process(&self) -> bool;

    /// Name of the check.
    fn message_tag(&self) -> MessageTag;

    /// Message recorded when the check fails.
    fn error_message_tag(&self) -> MessageTag;

    /// Indication given to the chain when the check fails at FAIL level.
    fn failed_indication(&self) -> Indication;

    /// Sub-indication given to the chain when the check fails at FAIL level.
    fn failed_sub_indication(&self) -> Option<SubIndication>;

    /// Details appended to the failure message.
    fn error_detail(&self) -> Option<String> {
        None
    }

    /// Free text describing the compared values.
    fn additional_info(&self) -> Option<String> {
        None
    }

    /// Identifier of the object the check is about, when it is not the
    /// block's own token.
    fn token_id(&self) -> Option<String> {
        None
    }

    /// Conclusion of a nested block whose errors are carried over when the
    /// check fails.
    fn nested_conclusion(&self) -> Option<&Conclusion> {
        None
    }
}

/// A [`ChainItem`] evaluating a closure.
pub struct Check<F> {
    tag: MessageTag,
    error: MessageTag,
    indication: Indication,
    sub_indication: Option<SubIndication>,
    detail: Option<String>,
    info: Option<String>,
    id: Option<String>,
    condition: F,
}

impl<F: Fn() -> bool> Check<F> {
    /// Creates a check failing with INDETERMINATE and no sub-indication.
    pub fn new(tag: MessageTag, error: MessageTag, condition: F) -> Self {
        Self {
            tag,
            error,
            indication: Indication::Indeterminate,
            sub_indication: None,
            detail: None,
            info: None,
            id: None,
            condition,
        }
    }

    /// Sets the indication and sub-indication of a FAIL level failure.
    pub fn fails_with(self, indication: Indication, sub_indication: Option<SubIndication>) -> Self {
        Self {
            indication,
            sub_indication,
            ..self
        }
    }

    /// Appends details to the failure message.
    pub fn detail<D: Display>(self, detail: D) -> Self {
        Self {
            detail: Some(detail.to_string()),
            ..self
        }
    }

    /// Attaches free-text information to the recorded item.
    pub fn info<S: Into<String>>(self, info: S) -> Self {
        Self {
            info: Some(info.into()),
            ..self
        }
    }

    /// Names the object the check is about.
    pub fn token_id<S: Into<String>>(self, id: S) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }
}

impl<F: Fn() -> bool> ChainItem for Check<F> {
    fn process(&self) -> bool {
        (self.condition)()
    }

    fn message_tag(&self) -> MessageTag {
        self.tag
    }

    fn error_message_tag(&self) -> MessageTag {
        self.error
    }

    fn failed_indication(&self) -> Indication {
        self.indication
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        self.sub_indication
    }

    fn error_detail(&self) -> Option<String> {
        self.detail.clone()
    }

    fn additional_info(&self) -> Option<String> {
        self.info.clone()
    }

    fn token_id(&self) -> Option<String> {
        self.id.clone()
    }
}

/// A [`ChainItem`] accepting the conclusion of a nested block.
///
/// By default the check passes when the nested conclusion is passed, and a
/// failure carries over the nested indication, sub-indication and errors.
pub struct ConclusionCheck<'a> {
    tag: MessageTag,
    error: MessageTag,
    conclusion: &'a Conclusion,
    accept: fn(&Conclusion) -> bool,
    indication: Option<(Indication, Option<SubIndication>)>,
    id: Option<String>,
}

impl<'a> ConclusionCheck<'a> {
    /// Creates a check on a nested conclusion.
    pub fn new(tag: MessageTag, error: MessageTag, conclusion: &'a Conclusion) -> Self {
        Self {
            tag,
            error,
            conclusion,
            accept: Conclusion::is_passed,
            indication: None,
            id: None,
        }
    }

    /// Replaces the predicate deciding whether the nested conclusion is
    /// acceptable.
    pub fn accept(self, accept: fn(&Conclusion) -> bool) -> Self {
        Self { accept, ..self }
    }

    /// Fails with a fixed indication instead of the nested one.
    pub fn fails_with(self, indication: Indication, sub_indication: Option<SubIndication>) -> Self {
        Self {
            indication: Some((indication, sub_indication)),
            ..self
        }
    }

    /// Names the object the nested block validated.
    pub fn token_id<S: Into<String>>(self, id: S) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }
}

impl ChainItem for ConclusionCheck<'_> {
    fn process(&self) -> bool {
        (self.accept)(self.conclusion)
    }

    fn message_tag(&self) -> MessageTag {
        self.tag
    }

    fn error_message_tag(&self) -> MessageTag {
        self.error
    }

    fn failed_indication(&self) -> Indication {
        self.indication
            .map_or(self.conclusion.indication, |(indication, _)| indication)
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        self.indication
            .map_or(self.conclusion.sub_indication, |(_, sub)| sub)
    }

    fn additional_info(&self) -> Option<String> {
        let conclusion = self.conclusion;
        Some(match conclusion.sub_indication {
            Some(sub) => format!("{} / {sub}", conclusion.indication),
            None => conclusion.indication.to_string(),
        })
    }

    fn token_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn nested_conclusion(&self) -> Option<&Conclusion> {
        Some(self.conclusion)
    }
}

/// The recorded outcome of one validation block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockResult {
    /// Title of the block.
    pub title: Message,

    /// Identifier of the token the block validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Checks in evaluation order.
    pub constraints: Vec<ConstraintItem>,

    /// Conclusion of the block.
    pub conclusion: Conclusion,

    /// Nested blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_blocks: Vec<BlockResult>,

    /// Result of the cryptographic checks run by the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cryptographic_validation: Option<CryptographicValidation>,
}

impl BlockResult {
    /// Returns the status recorded for a check, if it ran.
    pub fn status_of(&self, key: &str) -> Option<ConstraintStatus> {
        self.constraints
            .iter()
            .find(|item| item.name.key == key)
            .map(|item| item.status)
    }

    /// Returns the first nested block with the given title key.
    pub fn sub_block(&self, key: &str) -> Option<&BlockResult> {
        self.sub_blocks.iter().find(|b| b.title.key == key)
    }
}

/// Builder and evaluator of one validation block.
pub struct Chain {
    title: MessageTag,
    id: Option<String>,
    tracker: StatusTracker,
    conclusion: Conclusion,
    terminated: bool,
    sub_blocks: Vec<BlockResult>,
    cryptographic_validation: Option<CryptographicValidation>,
}

impl Chain {
    /// Starts a new block with a passed conclusion.
    pub fn new(title: MessageTag) -> Self {
        Self {
            title,
            id: None,
            tracker: StatusTracker::default(),
            conclusion: Conclusion::passed(),
            terminated: false,
            sub_blocks: Vec::new(),
            cryptographic_validation: None,
        }
    }

    /// Names the token the block validates.
    pub fn with_token_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Evaluates an item at the given level and records it.
    ///
    /// A `None` level skips the item entirely. Nothing is evaluated once the
    /// chain is terminated.
    pub fn add<I: ChainItem>(&mut self, level: Option<Level>, item: I) -> &mut Self {
        let Some(level) = level else {
            return self;
        };
        if self.terminated {
            return self;
        }

        let tag = item.message_tag();
        let base = ConstraintItem::new(tag, ConstraintStatus::Ok)
            .additional_info(item.additional_info());
        let base = match item.token_id() {
            Some(id) => base.token_id(id),
            None => base,
        };

        if level == Level::Ignore {
            self.tracker.add(ConstraintItem {
                status: ConstraintStatus::Ignored,
                ..base
            });
            return self;
        }

        if item.process() {
            self.tracker.add(base);
            return self;
        }

        let message = match item.error_detail() {
            Some(detail) => item.error_message_tag().with_detail(detail),
            None => item.error_message_tag().into(),
        };

        match level {
            Level::Fail => {
                log::debug!("{} failed in block {}", tag.key, self.title.key);
                self.conclusion
                    .set_indication(item.failed_indication(), item.failed_sub_indication());
                if let Some(nested) = item.nested_conclusion() {
                    for error in &nested.errors {
                        self.conclusion.add_error(error.clone());
                    }
                }
                self.conclusion.add_error(message.clone());
                self.tracker.add(ConstraintItem {
                    status: ConstraintStatus::NotOk,
                    ..base.error(message)
                });
                self.terminated = true;
            }
            Level::Warn => {
                self.conclusion.add_warning(message.clone());
                self.tracker.add(ConstraintItem {
                    status: ConstraintStatus::Warning,
                    ..base.warning(message)
                });
            }
            Level::Inform => {
                self.conclusion.add_info(message.clone());
                self.tracker.add(ConstraintItem {
                    status: ConstraintStatus::Information,
                    ..base.info(message)
                });
            }
            Level::Ignore => {}
        }
        self
    }

    /// Returns `true` once an item failed at FAIL level.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Current conclusion of the block.
    pub fn conclusion(&self) -> &Conclusion {
        &self.conclusion
    }

    /// Replaces the conclusion, for blocks that derive it from their
    /// nested blocks.
    pub fn set_conclusion(&mut self, conclusion: Conclusion) {
        self.conclusion = conclusion;
    }

    /// Records the checks made so far.
    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    /// Attaches a nested block.
    pub fn push_sub_block(&mut self, block: BlockResult) {
        self.sub_blocks.push(block);
    }

    /// Attaches the result of a cryptographic check. The first failing
    /// result is kept over passing ones.
    pub fn set_cryptographic_validation(&mut self, validation: CryptographicValidation) {
        let keep_current = self
            .cryptographic_validation
            .as_ref()
            .is_some_and(|current| !current.secure);
        if !keep_current {
            self.cryptographic_validation = Some(validation);
        }
    }

    /// Closes the block.
    pub fn finish(self) -> BlockResult {
        BlockResult {
            title: self.title.into(),
            id: self.id,
            constraints: self.tracker.into_items(),
            conclusion: self.conclusion,
            sub_blocks: self.sub_blocks,
            cryptographic_validation: self.cryptographic_validation,
        }
    }
}
