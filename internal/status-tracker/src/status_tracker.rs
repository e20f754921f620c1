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

use serde::Serialize;

use crate::{ConstraintItem, ConstraintStatus, Message};

/// A `StatusTracker` aggregates the constraint items recorded while one
/// validation block runs.
///
/// Items are kept in evaluation order. The tracker never decides an
/// indication by itself; it only answers questions about what was recorded.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StatusTracker {
    logged_items: Vec<ConstraintItem>,
}

impl StatusTracker {
    /// Return the current list of recorded items.
    pub fn logged_items(&self) -> &[ConstraintItem] {
        &self.logged_items
    }

    /// Consume the tracker, returning the recorded items.
    pub fn into_items(self) -> Vec<ConstraintItem> {
        self.logged_items
    }

    /// Record a new item.
    pub fn add(&mut self, item: ConstraintItem) {
        self.logged_items.push(item);
    }

    /// Return the items that failed at FAIL level.
    pub fn filter_errors(&self) -> impl Iterator<Item = &ConstraintItem> {
        self.logged_items.iter().filter(|item| item.is_failure())
    }

    /// Returns `true` if any item failed at FAIL level.
    pub fn has_error(&self) -> bool {
        self.filter_errors().next().is_some()
    }

    /// Returns the status of the first item recorded under the given key.
    pub fn status_of(&self, key: &str) -> Option<ConstraintStatus> {
        self.logged_items
            .iter()
            .find(|item| item.name.key == key)
            .map(|item| item.status)
    }

    /// Returns `true` if an item was recorded under the given key.
    pub fn has_status(&self, key: &str) -> bool {
        self.status_of(key).is_some()
    }

    /// Collect the error messages of all recorded items.
    pub fn errors(&self) -> Vec<Message> {
        self.logged_items
            .iter()
            .filter_map(|item| item.error.clone())
            .collect()
    }

    /// Collect the warning messages of all recorded items.
    pub fn warnings(&self) -> Vec<Message> {
        self.logged_items
            .iter()
            .filter_map(|item| item.warning.clone())
            .collect()
    }

    /// Collect the information messages of all recorded items.
    pub fn infos(&self) -> Vec<Message> {
        self.logged_items
            .iter()
            .filter_map(|item| item.info.clone())
            .collect()
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.logged_items.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.logged_items.is_empty()
    }
}

impl Display for StatusTracker {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for item in &self.logged_items {
            writeln!(f, "{:?} {}", item.status, item.name)?;
        }
        Ok(())
    }
}
