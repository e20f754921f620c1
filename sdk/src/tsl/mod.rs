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

//! Trusted lists: model, caches and the validation job keeping them fresh.

mod cache;
mod job;
mod model;
mod source;
mod summary;

pub use cache::{Cache, CacheContext, CacheKey, CacheState, CachedEntry, CachedException};
#[cfg(test)]
pub(crate) use job::{MockDataLoader, MockTrustedListParser, MockTrustedListSignatureValidator};
pub use job::{
    CollaboratorError, DataLoader, TlValidationJob, TrustedListParser,
    TrustedListSignatureValidator,
};
pub use model::{
    DownloadResult, OtherTslPointer, ServiceStatus, TlValidationResult, TrustedList,
    TrustedService, PRE_EIDAS_GRANTED_STATUSES, SERVICE_STATUS_GRANTED, SERVICE_TYPE_CA_QC,
};
pub use source::{LotlSource, TlSource, TrustedListsSource};
pub use summary::{CacheInfo, LotlInfo, TlInfo, TlValidationJobSummary};
