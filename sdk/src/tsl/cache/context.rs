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

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{internal::time::utc_now, tsl::CacheState, Result};

/// An error recorded by a cache entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CachedException {
    /// Message of the error.
    pub message: String,

    /// Full description of the error, used to recognize repeated errors.
    pub stack_trace: String,

    /// When the error was first recorded.
    pub first_occurrence: DateTime<Utc>,

    /// When the error was last recorded.
    pub last_occurrence: DateTime<Utc>,
}

impl CachedException {
    /// Records `error` now.
    pub fn new<E: std::error::Error + Debug + ?Sized>(error: &E) -> Self {
        let now = utc_now();
        Self {
            message: error.to_string(),
            stack_trace: format!("{error:?}"),
            first_occurrence: now,
            last_occurrence: now,
        }
    }

    /// Records an error known only by its message.
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        let now = utc_now();
        Self {
            stack_trace: message.clone(),
            message,
            first_occurrence: now,
            last_occurrence: now,
        }
    }
}

/// State of one cache entry and the time it was reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheContext {
    state: CacheState,
    last_state_transition_time: DateTime<Utc>,
    last_successful_synchronization_time: Option<DateTime<Utc>>,
    exception: Option<CachedException>,
}

impl Default for CacheContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheContext {
    /// Creates a context in [`CacheState::RefreshNeeded`].
    pub fn new() -> Self {
        Self {
            state: CacheState::RefreshNeeded,
            last_state_transition_time: utc_now(),
            last_successful_synchronization_time: None,
            exception: None,
        }
    }

    /// Moves to `state`.
    ///
    /// Transitions to the current state change nothing. Any actual change
    /// stamps the transition time and forgets the recorded error.
    pub fn state(&mut self, state: CacheState) -> Result<()> {
        if self.state.check_transition(state)? {
            log::trace!("cache state {} -> {}", self.state, state);
            self.state = state;
            self.last_state_transition_time = utc_now();
            self.exception = None;
        }
        Ok(())
    }

    /// Moves to [`CacheState::Synchronized`].
    pub fn sync(&mut self) -> Result<()> {
        self.state(CacheState::Synchronized)?;
        self.last_successful_synchronization_time = Some(self.last_state_transition_time);
        Ok(())
    }

    /// Moves to [`CacheState::Desynchronized`].
    pub fn desync(&mut self) -> Result<()> {
        self.state(CacheState::Desynchronized)
    }

    /// Moves to [`CacheState::RefreshNeeded`].
    pub fn refresh_needed(&mut self) -> Result<()> {
        self.state(CacheState::RefreshNeeded)
    }

    /// Moves to [`CacheState::ToBeDeleted`].
    pub fn to_be_deleted(&mut self) -> Result<()> {
        self.state(CacheState::ToBeDeleted)
    }

    /// Moves to [`CacheState::Error`] and records `exception`.
    ///
    /// When the entry is already in error with the same stack trace, only
    /// the last occurrence date of the recorded error is updated.
    pub fn error(&mut self, exception: CachedException) -> Result<()> {
        if let Some(current) = self
            .exception
            .as_mut()
            .filter(|e| e.stack_trace == exception.stack_trace)
        {
            if self.state == CacheState::Error {
                current.last_occurrence = exception.last_occurrence;
                return Ok(());
            }
        }

        self.state.check_transition(CacheState::Error)?;
        log::trace!("cache state {} -> {}", self.state, CacheState::Error);
        self.state = CacheState::Error;
        self.last_state_transition_time = utc_now();
        self.exception = Some(exception);
        Ok(())
    }

    /// Current state.
    pub fn current_state(&self) -> CacheState {
        self.state
    }

    /// When the current state was reached.
    pub fn last_state_transition_time(&self) -> DateTime<Utc> {
        self.last_state_transition_time
    }

    /// When the entry was last synchronized.
    pub fn last_successful_synchronization_time(&self) -> Option<DateTime<Utc>> {
        self.last_successful_synchronization_time
    }

    /// The recorded error, in [`CacheState::Error`] only.
    pub fn exception(&self) -> Option<&CachedException> {
        self.exception.as_ref()
    }

    #[allow(missing_docs)]
    pub fn is_refresh_needed(&self) -> bool {
        self.state == CacheState::RefreshNeeded
    }

    #[allow(missing_docs)]
    pub fn is_desynchronized(&self) -> bool {
        self.state == CacheState::Desynchronized
    }

    #[allow(missing_docs)]
    pub fn is_synchronized(&self) -> bool {
        self.state == CacheState::Synchronized
    }

    #[allow(missing_docs)]
    pub fn is_error(&self) -> bool {
        self.state == CacheState::Error
    }

    #[allow(missing_docs)]
    pub fn is_to_be_deleted(&self) -> bool {
        self.state == CacheState::ToBeDeleted
    }
}
