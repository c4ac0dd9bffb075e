// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the docsig crates.
//!
//! This crate exists to prevent circular dependencies across:
//! - the validation core (`docsig-validation`)
//! - cryptographic engine implementations (DSS-style container engines, and
//!   any future container-format providers)
//!
//! It is intentionally kept small and stable: request datatypes, the outcome
//! classification model, and the abstract contract of the external
//! verification engine. Nothing in here performs cryptography.

pub mod algorithm;
pub mod document;
pub mod engine;
pub mod indication;

pub use algorithm::{DigestAlgorithm, UnsupportedAlgorithmError};

pub use document::{
    Datafile, DocumentType, SignatureFile, UnsupportedTypeError, ValidationDocument,
};

pub use engine::{
    ContainerSummary, DigestReference, EngineError, SignatureIntel, SignatureScope,
    SubjectDistinguishedName, TimestampIntel, ValidationEngine, VerificationVerdict,
};

pub use indication::{Indication, SubIndication};
