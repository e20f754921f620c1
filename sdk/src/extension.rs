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

//! Augmentation of signatures to a target baseline level.
//!
//! Each level adds data on top of the previous one, so extending to a
//! level runs the steps of every lower level first. Steps are independent
//! [`ExtensionStage`]s registered in an [`ExtensionPipeline`].

use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    io::{Cursor, Read},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::{diagnostic::DigestAlgorithm, Error, Result};

/// Baseline signature levels.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum SignatureLevel {
    /// Basic signature.
    #[serde(rename = "B")]
    BaselineB,

    /// With a signature time-stamp.
    #[serde(rename = "T")]
    BaselineT,

    /// With long-term validation data.
    #[serde(rename = "LT")]
    BaselineLt,

    /// With an archive time-stamp.
    #[serde(rename = "LTA")]
    BaselineLta,
}

impl SignatureLevel {
    /// Steps needed to reach the level from a B-level signature, in order.
    pub fn steps(self) -> &'static [ExtensionStep] {
        static ALL: [ExtensionStep; 3] = [
            ExtensionStep::SignatureTimestamp,
            ExtensionStep::ValidationData,
            ExtensionStep::ArchiveTimestamp,
        ];
        match self {
            Self::BaselineB => &[],
            Self::BaselineT => &ALL[..1],
            Self::BaselineLt => &ALL[..2],
            Self::BaselineLta => &ALL,
        }
    }
}

/// One step of an extension.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionStep {
    /// Adds a time-stamp over the signature value.
    SignatureTimestamp,

    /// Adds certificates and revocation data.
    ValidationData,

    /// Adds a time-stamp over the signature and its validation data.
    ArchiveTimestamp,
}

impl Display for ExtensionStep {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::SignatureTimestamp => "signature time-stamp",
            Self::ValidationData => "validation data",
            Self::ArchiveTimestamp => "archive time-stamp",
        })
    }
}

/// A document signed or covered by a signature.
pub trait Document: Debug + Send + Sync {
    /// Name of the document, if known.
    fn name(&self) -> Option<&str>;

    /// Returns `true` if [`Document::open_stream`] gives access to the content.
    fn supports_streaming(&self) -> bool;

    /// Opens the content. `None` for documents only known by their digest.
    fn open_stream(&self) -> Option<Box<dyn Read + '_>>;

    /// Digest of the content with `algorithm`, if it can be obtained.
    fn digest(&self, algorithm: DigestAlgorithm) -> Option<Vec<u8>>;
}

fn compute_digest(algorithm: DigestAlgorithm, data: &[u8]) -> Option<Vec<u8>> {
    match algorithm {
        DigestAlgorithm::Sha224 => Some(Sha224::digest(data).to_vec()),
        DigestAlgorithm::Sha256 => Some(Sha256::digest(data).to_vec()),
        DigestAlgorithm::Sha384 => Some(Sha384::digest(data).to_vec()),
        DigestAlgorithm::Sha512 => Some(Sha512::digest(data).to_vec()),
        _ => None,
    }
}

/// A document held in memory.
#[derive(Clone, Debug)]
pub struct InMemoryDocument {
    name: Option<String>,
    bytes: Vec<u8>,
}

impl InMemoryDocument {
    /// Wraps `bytes`.
    pub fn new(bytes: Vec<u8>, name: Option<String>) -> Self {
        Self { name, bytes }
    }
}

impl Document for InMemoryDocument {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn supports_streaming(&self) -> bool {
        true
    }

    fn open_stream(&self) -> Option<Box<dyn Read + '_>> {
        Some(Box::new(Cursor::new(self.bytes.as_slice())))
    }

    fn digest(&self, algorithm: DigestAlgorithm) -> Option<Vec<u8>> {
        compute_digest(algorithm, &self.bytes)
    }
}

/// A document only known by its digests.
#[derive(Clone, Debug, Default)]
pub struct DigestDocument {
    name: Option<String>,
    digests: HashMap<DigestAlgorithm, Vec<u8>>,
}

impl DigestDocument {
    /// A document named `name` with no digest yet.
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            digests: HashMap::new(),
        }
    }

    /// Adds the digest computed with `algorithm`.
    pub fn with_digest(mut self, algorithm: DigestAlgorithm, digest: Vec<u8>) -> Self {
        self.digests.insert(algorithm, digest);
        self
    }
}

impl Document for DigestDocument {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn supports_streaming(&self) -> bool {
        false
    }

    fn open_stream(&self) -> Option<Box<dyn Read + '_>> {
        None
    }

    fn digest(&self, algorithm: DigestAlgorithm) -> Option<Vec<u8>> {
        self.digests.get(&algorithm).cloned()
    }
}

/// A signature being extended.
#[derive(Clone, Debug)]
pub struct SignedDocument {
    /// Encoded signature.
    pub content: Vec<u8>,

    /// Documents covered by a detached signature.
    pub detached_contents: Vec<Arc<dyn Document>>,

    /// Steps already applied, in order.
    pub applied_steps: Vec<ExtensionStep>,
}

impl SignedDocument {
    /// A B-level signature.
    pub fn new(content: Vec<u8>) -> Self {
        Self {
            content,
            detached_contents: Vec::new(),
            applied_steps: Vec::new(),
        }
    }

    /// Adds a detached document.
    pub fn with_detached_content(mut self, document: Arc<dyn Document>) -> Self {
        self.detached_contents.push(document);
        self
    }

    /// The highest level whose steps are all applied.
    pub fn level(&self) -> SignatureLevel {
        [
            SignatureLevel::BaselineLta,
            SignatureLevel::BaselineLt,
            SignatureLevel::BaselineT,
        ]
        .into_iter()
        .find(|level| self.applied_steps.starts_with(level.steps()))
        .unwrap_or(SignatureLevel::BaselineB)
    }
}

/// Applies one [`ExtensionStep`].
pub trait ExtensionStage: Send + Sync {
    /// The step implemented.
    fn step(&self) -> ExtensionStep;

    /// Returns the extended signature. Must not depend on anything but its
    /// input.
    fn extend(&self, document: SignedDocument) -> Result<SignedDocument>;
}

/// Extends signatures with registered stages.
#[derive(Default)]
pub struct ExtensionPipeline {
    stages: HashMap<ExtensionStep, Box<dyn ExtensionStage>>,
}

impl ExtensionPipeline {
    /// Creates a pipeline with no stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `stage`, replacing the stage of the same step.
    pub fn with_stage(mut self, stage: Box<dyn ExtensionStage>) -> Self {
        self.stages.insert(stage.step(), stage);
        self
    }

    /// Extends `document` to `target`. Steps already applied are skipped.
    pub fn extend(
        &self,
        mut document: SignedDocument,
        target: SignatureLevel,
    ) -> Result<SignedDocument> {
        for (index, step) in target.steps().iter().enumerate() {
            if document.applied_steps.get(index) == Some(step) {
                continue;
            }
            if document.applied_steps.len() != index {
                return Err(Error::ExtensionFailed {
                    stage: "pipeline",
                    reason: format!(
                        "steps {:?} cannot be extended to {target:?}",
                        document.applied_steps
                    ),
                });
            }

            let stage = self
                .stages
                .get(step)
                .ok_or_else(|| Error::MissingExtensionStage(step.to_string()))?;
            log::debug!("applying {step}");
            document = stage.extend(document)?;
            document.applied_steps.push(*step);
        }
        Ok(document)
    }
}
