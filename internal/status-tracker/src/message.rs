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

use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A static key/text pair naming a check or the outcome of a check.
///
/// Error tags conventionally carry the key of their check with an `_ANS`
/// suffix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MessageTag {
    /// Stable identifier of the message.
    pub key: &'static str,

    /// Human-readable English text.
    pub text: &'static str,
}

impl MessageTag {
    /// Creates a new tag.
    pub const fn new(key: &'static str, text: &'static str) -> Self {
        Self { key, text }
    }

    /// Creates a message from this tag with a detail appended to the text.
    pub fn with_detail<D: Display>(&self, detail: D) -> Message {
        Message {
            key: Cow::Borrowed(self.key),
            value: Cow::Owned(format!("{} [{detail}]", self.text)),
        }
    }
}

/// A message attached to a constraint item or a conclusion.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Stable identifier of the message.
    pub key: Cow<'static, str>,

    /// Human-readable text.
    pub value: Cow<'static, str>,
}

impl Message {
    /// Creates a message from arbitrary key and text.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<MessageTag> for Message {
    fn from(tag: MessageTag) -> Self {
        Self {
            key: Cow::Borrowed(tag.key),
            value: Cow::Borrowed(tag.text),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
