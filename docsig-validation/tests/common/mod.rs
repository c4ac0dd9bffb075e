// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

//! Shared helpers for the `docsig-validation` integration tests.
//!
//! The suites drive the core through a configurable stub engine so routing,
//! policy resolution, digest matching and aggregation can be exercised
//! without any real cryptography.

use docsig_abstractions::{
    ContainerSummary, Datafile, DigestAlgorithm, DigestReference, EngineError, Indication,
    SignatureFile, SignatureIntel, ValidationDocument, ValidationEngine, VerificationVerdict,
};
use sha2::{Digest, Sha256};

pub fn sha256(bytes: &[u8]) -> Vec<u8> {
    let mut h = Sha256::new();
    h.update(bytes);
    h.finalize().to_vec()
}

/// Failure mode a stub call should simulate.
#[derive(Debug, Copy, Clone)]
pub enum StubFailure {
    Malformed,
    Internal,
}

impl StubFailure {
    fn to_error(self) -> EngineError {
        match self {
            Self::Malformed => EngineError::Malformed("stubbed parse failure".to_string()),
            Self::Internal => EngineError::Internal("stubbed engine crash".to_string()),
        }
    }
}

/// Configurable `ValidationEngine` stand-in.
#[derive(Default)]
pub struct StubEngine {
    /// Data object names `inspect` reports for ZIP content.
    pub data_file_names: Vec<String>,
    pub inspect_failure: Option<StubFailure>,
    pub container_verdict: Option<VerificationVerdict>,
    pub container_failure: Option<StubFailure>,
    /// Intel returned for every `verify_signature` call.
    pub signature_intel: Option<SignatureIntel>,
    pub signature_failure: Option<StubFailure>,
}

impl ValidationEngine for StubEngine {
    fn inspect(&self, _bytes: &[u8]) -> Result<ContainerSummary, EngineError> {
        if let Some(failure) = self.inspect_failure {
            return Err(failure.to_error());
        }
        Ok(ContainerSummary {
            data_file_names: self.data_file_names.clone(),
        })
    }

    fn verify_container(
        &self,
        _document: &ValidationDocument,
    ) -> Result<VerificationVerdict, EngineError> {
        if let Some(failure) = self.container_failure {
            return Err(failure.to_error());
        }
        Ok(self.container_verdict.clone().unwrap_or(VerificationVerdict {
            signatures: Vec::new(),
            timestamp_tokens: Vec::new(),
            signature_form: None,
            warnings: Vec::new(),
        }))
    }

    fn verify_signature(&self, _signature: &SignatureFile) -> Result<SignatureIntel, EngineError> {
        if let Some(failure) = self.signature_failure {
            return Err(failure.to_error());
        }
        Ok(self
            .signature_intel
            .clone()
            .unwrap_or_else(|| passed_intel("S0", Vec::new())))
    }
}

/// Intel for a cryptographically valid XAdES signature covering the given
/// digest references.
pub fn passed_intel(id: &str, references: Vec<DigestReference>) -> SignatureIntel {
    let mut intel = SignatureIntel::new(id, Indication::TotalPassed);
    intel.signature_format = "XAdES_BASELINE_LT".to_string();
    intel.signature_level = Some("QESIG".to_string());
    intel.signed_by = Some("SMITH,JOHN,38001085718".to_string());
    intel.claimed_signing_time = Some("2024-05-21T11:20:03Z".to_string());
    intel.best_signature_time = Some("2024-05-21T11:20:05Z".to_string());
    intel.digest_references = references;
    intel
}

pub fn reference(name: &str, data: &[u8]) -> DigestReference {
    DigestReference::new(name, DigestAlgorithm::Sha256, sha256(data))
}

pub fn datafile(name: &str, hash: Vec<u8>) -> Datafile {
    Datafile::new(name, hash, DigestAlgorithm::Sha256)
}

pub fn signature_file(datafiles: Vec<Datafile>) -> SignatureFile {
    SignatureFile {
        signature: b"<ds:Signature/>".to_vec(),
        datafiles,
    }
}

// Minimal content fixtures for the router's magic sniffing.

pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF".to_vec()
}

pub fn zip_bytes() -> Vec<u8> {
    b"PK\x03\x04container-payload".to_vec()
}

pub fn ddoc_bytes() -> Vec<u8> {
    b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<SignedDoc format=\"DIGIDOC-XML\" version=\"1.3\"/>".to_vec()
}
