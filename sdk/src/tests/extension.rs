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


use std::{io::Read, sync::Arc};

use crate::{
    diagnostic::DigestAlgorithm,
    extension::{
        DigestDocument, Document, ExtensionPipeline, ExtensionStage, ExtensionStep,
        InMemoryDocument, SignatureLevel, SignedDocument,
    },
    Error, Result,
};

struct AppendStage(ExtensionStep, &'static [u8]);

impl ExtensionStage for AppendStage {
    fn step(&self) -> ExtensionStep {
        self.0
    }

    fn extend(&self, mut document: SignedDocument) -> Result<SignedDocument> {
        document.content.extend_from_slice(self.1);
        Ok(document)
    }
}

struct FailingStage;

impl ExtensionStage for FailingStage {
    fn step(&self) -> ExtensionStep {
        ExtensionStep::ValidationData
    }

    fn extend(&self, _document: SignedDocument) -> Result<SignedDocument> {
        Err(Error::ExtensionFailed {
            stage: "validation data",
            reason: "no revocation data".to_owned(),
        })
    }
}

fn full_pipeline() -> ExtensionPipeline {
    ExtensionPipeline::new()
        .with_stage(Box::new(AppendStage(ExtensionStep::SignatureTimestamp, b"+T")))
        .with_stage(Box::new(AppendStage(ExtensionStep::ValidationData, b"+LT")))
        .with_stage(Box::new(AppendStage(ExtensionStep::ArchiveTimestamp, b"+LTA")))
}

#[test]
fn levels_accumulate_steps() {
    assert!(SignatureLevel::BaselineB.steps().is_empty());
    assert_eq!(
        SignatureLevel::BaselineLt.steps(),
        &[ExtensionStep::SignatureTimestamp, ExtensionStep::ValidationData]
    );
    assert_eq!(SignatureLevel::BaselineLta.steps().len(), 3);
    assert!(SignatureLevel::BaselineT < SignatureLevel::BaselineLta);
}

#[test]
fn level_of_signed_document() {
    let mut document = SignedDocument::new(b"sig".to_vec());
    assert_eq!(document.level(), SignatureLevel::BaselineB);

    document.applied_steps = vec![
        ExtensionStep::SignatureTimestamp,
        ExtensionStep::ValidationData,
    ];
    assert_eq!(document.level(), SignatureLevel::BaselineLt);

    document.applied_steps = vec![ExtensionStep::ValidationData];
    assert_eq!(document.level(), SignatureLevel::BaselineB);
}

#[test]
fn extends_through_every_lower_level() {
    let extended = full_pipeline()
        .extend(SignedDocument::new(b"sig".to_vec()), SignatureLevel::BaselineLta)
        .unwrap();

    assert_eq!(extended.content, b"sig+T+LT+LTA");
    assert_eq!(extended.level(), SignatureLevel::BaselineLta);
}

#[test]
fn applied_steps_are_skipped() {
    let t_level = full_pipeline()
        .extend(SignedDocument::new(b"sig".to_vec()), SignatureLevel::BaselineT)
        .unwrap();
    let extended = full_pipeline()
        .extend(t_level, SignatureLevel::BaselineLt)
        .unwrap();

    assert_eq!(extended.content, b"sig+T+LT");

    // extending to a lower level changes nothing
    let same = full_pipeline()
        .extend(extended.clone(), SignatureLevel::BaselineT)
        .unwrap();
    assert_eq!(same.content, extended.content);
}

#[test]
fn missing_stage_is_reported() {
    let pipeline = ExtensionPipeline::new().with_stage(Box::new(AppendStage(
        ExtensionStep::SignatureTimestamp,
        b"+T",
    )));

    let result = pipeline.extend(SignedDocument::new(Vec::new()), SignatureLevel::BaselineLta);
    assert!(matches!(
        result,
        Err(Error::MissingExtensionStage(step)) if step == "validation data"
    ));
}

#[test]
fn stage_failure_is_propagated() {
    let pipeline = full_pipeline().with_stage(Box::new(FailingStage));

    let result = pipeline.extend(SignedDocument::new(Vec::new()), SignatureLevel::BaselineLt);
    assert!(matches!(
        result,
        Err(Error::ExtensionFailed { stage: "validation data", .. })
    ));
}

#[test]
fn out_of_order_steps_cannot_be_extended() {
    let mut document = SignedDocument::new(Vec::new());
    document.applied_steps = vec![ExtensionStep::ValidationData];

    let result = full_pipeline().extend(document, SignatureLevel::BaselineLta);
    assert!(matches!(
        result,
        Err(Error::ExtensionFailed { stage: "pipeline", .. })
    ));
}

#[test]
fn in_memory_document_streams_and_digests() {
    let document = InMemoryDocument::new(b"abc".to_vec(), Some("abc.txt".to_owned()));

    assert_eq!(document.name(), Some("abc.txt"));
    assert!(document.supports_streaming());

    let mut content = Vec::new();
    document
        .open_stream()
        .unwrap()
        .read_to_end(&mut content)
        .unwrap();
    assert_eq!(content, b"abc");

    assert_eq!(
        hex::encode(document.digest(DigestAlgorithm::Sha256).unwrap()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(document.digest(DigestAlgorithm::Sha1).is_none());
}

#[test]
fn digest_document_only_knows_its_digests() {
    let digest = vec![0xAB; 32];
    let document: Arc<dyn Document> = Arc::new(
        DigestDocument::new(None).with_digest(DigestAlgorithm::Sha256, digest.clone()),
    );

    assert!(!document.supports_streaming());
    assert!(document.open_stream().is_none());
    assert_eq!(document.digest(DigestAlgorithm::Sha256), Some(digest));
    assert!(document.digest(DigestAlgorithm::Sha512).is_none());

    let signed = SignedDocument::new(Vec::new()).with_detached_content(document);
    assert_eq!(signed.detached_contents.len(), 1);
}
