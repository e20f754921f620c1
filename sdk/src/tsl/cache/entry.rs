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

use crate::{
    tsl::{CacheContext, CachedException},
    Result,
};

/// A cached result and the state of its computation.
#[derive(Clone, Debug)]
pub struct CachedEntry<R> {
    context: CacheContext,
    result: Option<R>,
}

impl<R> Default for CachedEntry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CachedEntry<R> {
    /// Creates an empty entry that needs a refresh.
    pub fn new() -> Self {
        Self {
            context: CacheContext::new(),
            result: None,
        }
    }

    /// Stores a new result, to be synchronized later.
    pub fn update(&mut self, result: R) -> Result<()> {
        self.context.desync()?;
        self.result = Some(result);
        Ok(())
    }

    /// Marks the result as published.
    pub fn sync(&mut self) -> Result<()> {
        self.context.sync()
    }

    /// Requests a new computation of the result.
    pub fn expire(&mut self) -> Result<()> {
        self.context.refresh_needed()
    }

    /// Records a failed computation. The previous result is dropped.
    pub fn error(&mut self, exception: CachedException) -> Result<()> {
        self.context.error(exception)?;
        self.result = None;
        Ok(())
    }

    /// Marks the entry for removal.
    pub fn to_be_deleted(&mut self) -> Result<()> {
        self.context.to_be_deleted()
    }

    /// State of the entry.
    pub fn context(&self) -> &CacheContext {
        &self.context
    }

    /// The cached result, if any.
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Returns `true` if no result is cached.
    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }
}
