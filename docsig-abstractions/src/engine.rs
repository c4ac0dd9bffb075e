// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Abstract contract of the external cryptographic verification engine.
//!
//! The validation core never performs certificate-chain building, revocation
//! checks, or low-level signature-bytes verification itself. An engine
//! implementation does, and reports back per-signature intel through the
//! types in this module. The core then classifies, refines, and aggregates
//! those results.
//!
//! Engines must distinguish a content-malformed condition (the submitted
//! bytes are not a well-formed container/signature) from an internal failure;
//! the core maps the former to a client-visible malformed-document fault and
//! the latter to a fatal service fault.

use serde::Serialize;

use crate::algorithm::DigestAlgorithm;
use crate::document::{SignatureFile, ValidationDocument};
use crate::indication::{Indication, SubIndication};

/// Engine-side failure classification.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The submitted content does not parse as the expected container or
    /// signature structure.
    #[error("container content is malformed: {0}")]
    Malformed(String),

    /// Any other failure during verification. Treated as a server defect,
    /// never as an input problem.
    #[error("verification engine failure: {0}")]
    Internal(String),
}

/// The (algorithm, value) pair a signature declares it covers for a named
/// data object. Produced once per signature verification pass; read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestReference {
    /// Logical data object name the reference points at.
    pub name: String,
    pub algorithm: DigestAlgorithm,
    /// Decoded digest bytes.
    pub digest: Vec<u8>,
}

impl DigestReference {
    pub fn new(name: impl Into<String>, algorithm: DigestAlgorithm, digest: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            algorithm,
            digest,
        }
    }
}

/// Description of which part of a document a signature covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureScope {
    pub name: String,
    pub scope: String,
    pub content: String,
    /// Base64 digest of the covered object, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_algo: Option<DigestAlgorithm>,
}

/// Signer subject fields extracted from the signing certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDistinguishedName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Raw per-signature verification outcome reported by the engine.
///
/// One value per signature, fully populated by the engine before the core
/// touches it. In hashcode mode the digest references drive the
/// signature-to-data binding check; in container mode the engine fills the
/// signature scopes itself.
#[derive(Debug, Clone)]
pub struct SignatureIntel {
    pub id: String,
    pub claimed_signing_time: Option<String>,
    pub best_signature_time: Option<String>,
    pub signature_format: String,
    pub signature_level: Option<String>,
    pub signed_by: Option<String>,
    pub subject_distinguished_name: Option<SubjectDistinguishedName>,
    pub indication: Indication,
    pub sub_indication: Option<SubIndication>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub digest_references: Vec<DigestReference>,
    pub signature_scopes: Vec<SignatureScope>,
}

impl SignatureIntel {
    /// Minimal intel with the given verdict; the rest is filled in by the
    /// engine as it learns more about the signature.
    pub fn new(id: impl Into<String>, indication: Indication) -> Self {
        Self {
            id: id.into(),
            claimed_signing_time: None,
            best_signature_time: None,
            signature_format: String::new(),
            signature_level: None,
            signed_by: None,
            subject_distinguished_name: None,
            indication,
            sub_indication: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            digest_references: Vec::new(),
            signature_scopes: Vec::new(),
        }
    }
}

/// Verification outcome for an independent timestamp token.
#[derive(Debug, Clone)]
pub struct TimestampIntel {
    pub indication: Indication,
    pub signed_by: Option<String>,
    pub signed_time: Option<String>,
    pub errors: Vec<String>,
}

/// Structural summary of a parsed container, used by the router's
/// declared-type versus actual-content checks.
#[derive(Debug, Clone, Default)]
pub struct ContainerSummary {
    /// Names of the data objects packaged in the container.
    pub data_file_names: Vec<String>,
}

/// Whole-container verification output.
#[derive(Debug, Clone)]
pub struct VerificationVerdict {
    pub signatures: Vec<SignatureIntel>,
    pub timestamp_tokens: Vec<TimestampIntel>,
    /// Container signature form (e.g. `ASiC-E`), when the format has one.
    pub signature_form: Option<String>,
    /// Document-level warnings that are not tied to one signature.
    pub warnings: Vec<String>,
}

/// External cryptographic verification engine.
///
/// Implementations must be safe to call concurrently; the core performs no
/// locking around them in steady state.
pub trait ValidationEngine: Send + Sync {
    /// Parse the container enough to describe its structure, without
    /// verifying anything.
    fn inspect(&self, bytes: &[u8]) -> Result<ContainerSummary, EngineError>;

    /// Verify every signature in a submitted container.
    fn verify_container(
        &self,
        document: &ValidationDocument,
    ) -> Result<VerificationVerdict, EngineError>;

    /// Verify one detached signature file (hashcode mode). The engine reports
    /// the cryptographic outcome and the digest references the signature
    /// covers; it cannot check the signature-to-data binding itself because
    /// the data is not present.
    fn verify_signature(&self, signature: &SignatureFile) -> Result<SignatureIntel, EngineError>;
}
