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

//! The trusted list validation job.
//!
//! A refresh downloads every followed list, parses and validates what
//! changed, publishes the result to the [`TrustedListsSource`] when one is
//! configured and finally drops the cache entries of lists that are no
//! longer referenced.

use std::{collections::BTreeMap, collections::BTreeSet, thread};

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

use crate::{
    internal::time::utc_now,
    tsl::{
        Cache, CacheInfo, CacheKey, CachedEntry, CachedException, DownloadResult, LotlInfo,
        LotlSource, TlInfo, TlSource, TlValidationJobSummary, TlValidationResult, TrustedList,
        TrustedListsSource,
    },
    Error, Result,
};

/// Error reported by a collaborator of the job.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Fetches the content of a list.
#[cfg_attr(test, mockall::automock)]
pub trait DataLoader: Send + Sync {
    /// Returns the bytes found at `url`.
    fn get(&self, url: &str) -> std::result::Result<Vec<u8>, CollaboratorError>;
}

/// Turns downloaded content into a [`TrustedList`].
#[cfg_attr(test, mockall::automock)]
pub trait TrustedListParser: Send + Sync {
    /// Parses a trusted list or list of trusted lists.
    fn parse(&self, content: &[u8]) -> std::result::Result<TrustedList, CollaboratorError>;
}

/// Validates the signature of a list.
#[cfg_attr(test, mockall::automock)]
pub trait TrustedListSignatureValidator: Send + Sync {
    /// Validates the signature of `content` against the allowed signing
    /// certificates.
    fn validate(
        &self,
        content: &[u8],
        signing_certificates: &[String],
    ) -> std::result::Result<TlValidationResult, CollaboratorError>;
}

fn sync_if_desynchronized<R>(entry: &mut CachedEntry<R>) -> Result<()> {
    if entry.context().is_desynchronized() {
        entry.sync()
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
struct LotlRun {
    url: String,
    tl_urls: Vec<String>,
    pivot_urls: Vec<String>,
}

/// Keeps trusted lists and lists of trusted lists up to date.
pub struct TlValidationJob {
    lotl_sources: Vec<LotlSource>,
    tl_sources: Vec<TlSource>,
    loader: Box<dyn DataLoader>,
    parser: Box<dyn TrustedListParser>,
    validator: Box<dyn TrustedListSignatureValidator>,
    download_cache: Cache<DownloadResult>,
    parsing_cache: Cache<TrustedList>,
    validation_cache: Cache<TlValidationResult>,
    trusted_list_source: Option<TrustedListsSource>,
    last_run: Vec<LotlRun>,
}

impl TlValidationJob {
    /// Creates a job following no list yet.
    pub fn new(
        loader: Box<dyn DataLoader>,
        parser: Box<dyn TrustedListParser>,
        validator: Box<dyn TrustedListSignatureValidator>,
    ) -> Self {
        Self {
            lotl_sources: Vec::new(),
            tl_sources: Vec::new(),
            loader,
            parser,
            validator,
            download_cache: Cache::new(),
            parsing_cache: Cache::new(),
            validation_cache: Cache::new(),
            trusted_list_source: None,
            last_run: Vec::new(),
        }
    }

    /// Follows a list of trusted lists.
    pub fn with_lotl_source(mut self, source: LotlSource) -> Self {
        self.lotl_sources.push(source);
        self
    }

    /// Follows a trusted list on its own.
    pub fn with_tl_source(mut self, source: TlSource) -> Self {
        self.tl_sources.push(source);
        self
    }

    /// Publishes refreshed lists to `source`. Without a source the caches
    /// are never synchronized.
    pub fn with_trusted_list_source(mut self, source: TrustedListsSource) -> Self {
        self.trusted_list_source = Some(source);
        self
    }

    /// The source the job publishes to.
    pub fn trusted_list_source(&self) -> Option<&TrustedListsSource> {
        self.trusted_list_source.as_ref()
    }

    /// Downloads, parses and validates every followed list, then publishes
    /// and cleans up.
    ///
    /// Failures to download, parse or validate a list are recorded in the
    /// caches. Errors returned here are illegal cache transitions.
    pub fn online_refresh(&mut self) -> Result<()> {
        log::info!(
            "refreshing {} list(s) of trusted lists and {} trusted list(s)",
            self.lotl_sources.len(),
            self.tl_sources.len()
        );

        let tl_jobs: Vec<(String, Vec<String>)> = self
            .tl_sources
            .iter()
            .map(|s| (s.url.clone(), s.signing_certificates.clone()))
            .collect();
        self.refresh_all(&tl_jobs)?;

        let mut runs = Vec::new();
        for source in &self.lotl_sources {
            runs.push(self.refresh_lotl(source)?);
        }
        self.last_run = runs;

        self.synchronize()?;
        self.clean()
    }

    /// Summary of the caches for the lists of the last refresh.
    pub fn summary(&self) -> TlValidationJobSummary {
        TlValidationJobSummary {
            lotl_infos: self
                .last_run
                .iter()
                .map(|run| LotlInfo {
                    info: self.tl_info(&run.url),
                    tl_infos: run.tl_urls.iter().map(|u| self.tl_info(u)).collect(),
                    pivot_infos: run.pivot_urls.iter().map(|u| self.tl_info(u)).collect(),
                })
                .collect(),
            other_tl_infos: self.tl_sources.iter().map(|s| self.tl_info(&s.url)).collect(),
        }
    }

    fn tl_info(&self, url: &str) -> TlInfo {
        let key = CacheKey::from_url(url);
        TlInfo {
            url: url.to_owned(),
            download_cache_info: CacheInfo::from_entry(self.download_cache.snapshot(&key).as_ref()),
            parsing_cache_info: CacheInfo::from_entry(self.parsing_cache.snapshot(&key).as_ref()),
            validation_cache_info: CacheInfo::from_entry(
                self.validation_cache.snapshot(&key).as_ref(),
            ),
        }
    }

    fn refresh_lotl(&self, source: &LotlSource) -> Result<LotlRun> {
        let key = CacheKey::from_url(&source.url);
        self.download(&source.url, &key)?;
        self.parse(&key)?;

        let mut run = LotlRun {
            url: source.url.clone(),
            ..Default::default()
        };
        let Some(lotl) = self.parsing_cache.result(&key) else {
            log::warn!("list of trusted lists {} is not available", source.url);
            self.validate(&key, &source.signing_certificates)?;
            return Ok(run);
        };

        let mut certificates = source.signing_certificates.clone();
        if source.pivot_support {
            // oldest pivot first, each one announcing the signers of the next
            for pivot_url in lotl.pivot_urls.iter().rev() {
                let pivot = self.refresh(pivot_url, &certificates)?;
                if let Some(announced) = pivot
                    .map(|p| p.announced_certificates)
                    .filter(|c| !c.is_empty())
                {
                    certificates = announced;
                }
            }
            run.pivot_urls = lotl.pivot_urls.clone();
        }
        self.validate(&key, &certificates)?;

        let tl_jobs: Vec<(String, Vec<String>)> = lotl
            .tsl_pointers
            .iter()
            .filter(|p| source.follows(p.territory.as_deref()))
            .map(|p| (p.location.clone(), p.certificates.clone()))
            .collect();
        self.refresh_all(&tl_jobs)?;
        run.tl_urls = tl_jobs.into_iter().map(|(url, _)| url).collect();

        Ok(run)
    }

    // One thread per list; entries of different lists never share a lock.
    fn refresh_all(&self, jobs: &[(String, Vec<String>)]) -> Result<()> {
        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .iter()
                .map(|(url, certificates)| {
                    (url, scope.spawn(move || self.refresh(url, certificates)))
                })
                .collect();

            handles.into_iter().try_for_each(|(url, handle)| {
                handle
                    .join()
                    .map_err(|_| Error::RefreshAborted(url.clone()))?
                    .map(|_| ())
            })
        })
    }

    fn refresh(&self, url: &str, signing_certificates: &[String]) -> Result<Option<TrustedList>> {
        let key = CacheKey::from_url(url);
        self.download(url, &key)?;
        self.parse(&key)?;
        self.validate(&key, signing_certificates)?;
        Ok(self.parsing_cache.result(&key))
    }

    fn download(&self, url: &str, key: &CacheKey) -> Result<()> {
        let content = match self.loader.get(url) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("unable to download {url}: {err}");
                return self.download_cache.error(key, CachedException::new(&*err));
            }
        };

        let digest = general_purpose::STANDARD.encode(Sha256::digest(&content));
        if self
            .download_cache
            .result(key)
            .is_some_and(|previous| previous.digest == digest)
        {
            log::debug!("{url} is unchanged");
            return Ok(());
        }

        log::info!("{url} changed, parsing and validation expired");
        self.download_cache
            .update(key, DownloadResult { content, digest })?;
        self.parsing_cache.expire(key)?;
        self.validation_cache.expire(key)
    }

    fn parse(&self, key: &CacheKey) -> Result<()> {
        if !self.parsing_cache.is_refresh_needed(key) {
            return Ok(());
        }
        let Some(download) = self.download_cache.result(key) else {
            return Ok(());
        };

        match self.parser.parse(&download.content) {
            Ok(list) => self.parsing_cache.update(key, list),
            Err(err) => {
                log::warn!("unable to parse {key}: {err}");
                self.parsing_cache.error(key, CachedException::new(&*err))
            }
        }
    }

    fn validate(&self, key: &CacheKey, signing_certificates: &[String]) -> Result<()> {
        if !self.validation_cache.is_refresh_needed(key) {
            return Ok(());
        }
        let Some(download) = self.download_cache.result(key) else {
            return Ok(());
        };

        match self.validator.validate(&download.content, signing_certificates) {
            Ok(result) => {
                log::debug!("signature of {key}: {}", result.indication.as_str());
                self.validation_cache.update(key, result)
            }
            Err(err) => {
                log::warn!("unable to validate {key}: {err}");
                self.validation_cache.error(key, CachedException::new(&*err))
            }
        }
    }

    fn referenced_urls(&self) -> BTreeSet<&str> {
        self.last_run
            .iter()
            .flat_map(|run| {
                std::iter::once(run.url.as_str())
                    .chain(run.tl_urls.iter().map(String::as_str))
                    .chain(run.pivot_urls.iter().map(String::as_str))
            })
            .chain(self.tl_sources.iter().map(|s| s.url.as_str()))
            .collect()
    }

    fn synchronize(&mut self) -> Result<()> {
        if self.trusted_list_source.is_none() {
            log::info!("no trusted list source configured, caches stay desynchronized");
            return Ok(());
        }

        let urls: Vec<String> = self.referenced_urls().into_iter().map(str::to_owned).collect();
        for url in &urls {
            let key = CacheKey::from_url(url);
            self.download_cache.with_entry(&key, sync_if_desynchronized)?;
            self.parsing_cache.with_entry(&key, sync_if_desynchronized)?;
            self.validation_cache.with_entry(&key, sync_if_desynchronized)?;
        }

        let lotl_urls: BTreeSet<&str> = self.last_run.iter().map(|r| r.url.as_str()).collect();
        let pivot_urls: BTreeSet<&str> = self
            .last_run
            .iter()
            .flat_map(|r| r.pivot_urls.iter().map(String::as_str))
            .collect();
        let lists: BTreeMap<String, TrustedList> = urls
            .iter()
            .filter(|u| !lotl_urls.contains(u.as_str()) && !pivot_urls.contains(u.as_str()))
            .filter_map(|u| {
                self.parsing_cache
                    .result(&CacheKey::from_url(u))
                    .map(|list| (u.clone(), list))
            })
            .collect();

        let summary = self.summary();
        log::info!("publishing {} trusted list(s)", lists.len());
        if let Some(source) = self.trusted_list_source.as_mut() {
            source.publish(lists, summary, utc_now());
        }
        Ok(())
    }

    fn clean(&self) -> Result<()> {
        let referenced: BTreeSet<CacheKey> = self
            .referenced_urls()
            .into_iter()
            .map(CacheKey::from_url)
            .collect();

        for key in self.download_cache.keys() {
            if referenced.contains(&key) {
                continue;
            }
            log::info!("removing unreferenced entry {key}");
            self.download_cache.to_be_deleted(&key)?;
            self.download_cache.remove(&key);
        }
        for key in self.parsing_cache.keys() {
            if !referenced.contains(&key) {
                self.parsing_cache.to_be_deleted(&key)?;
                self.parsing_cache.remove(&key);
            }
        }
        for key in self.validation_cache.keys() {
            if !referenced.contains(&key) {
                self.validation_cache.to_be_deleted(&key)?;
                self.validation_cache.remove(&key);
            }
        }
        Ok(())
    }
}
