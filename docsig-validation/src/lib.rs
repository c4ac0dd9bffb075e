// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Validation core for signed electronic document containers.
//!
//! This crate turns heterogeneous signed containers (ASiC-style BDOC, legacy
//! DDOC, PDF with embedded signatures, XROAD transport wrappers) and detached
//! hashcode-mode signatures into one normalized, protocol-agnostic validation
//! report. It owns:
//!
//! 1) routing a document to the correct verification path while detecting
//!    declared-type versus actual-content mismatches,
//! 2) resolving a named signature policy against a per-format registry,
//! 3) the purely digest-based signature-to-data binding check used when raw
//!    document bytes are not supplied (hashcode mode),
//! 4) aggregating per-signature outcomes into a document-level conclusion
//!    with strict counting invariants, and
//! 5) wrapping the conclusion into Simple / Detailed / Diagnostic reports.
//!
//! Cryptographic verification itself is delegated to an external engine
//! behind the `docsig_abstractions::ValidationEngine` contract.
//!
//! Most callers should construct a [`ValidationService`] and use
//! [`ValidationService::validate`] or [`ValidationService::validate_hashcode`].

pub mod conclusion;
pub mod error;
pub mod hashcode;
pub mod policy;
pub mod report;
pub mod router;
pub mod service;

pub use conclusion::{
    aggregate, overall_validity, ErrorItem, Info, OverallValidity, SignatureValidationData,
    TimeStampTokenValidationData, ValidatedDocument, ValidationConclusion, ValidationWarning,
    WarningItem,
};
pub use error::ValidationError;
pub use hashcode::{
    match_datafiles, refine_intel, DigestMatch, REFERENCE_NOT_FOUND_MESSAGE,
    REFERENCE_NOT_INTACT_MESSAGE,
};
pub use policy::{PolicyRegistry, SignaturePolicy};
pub use report::{Report, ReportBuilder, ReportType, UnsupportedReportTypeError};
pub use router::{route, VerificationPath, XROAD_SENTINEL_FILE};
pub use service::{HashcodeValidationRequest, ValidationService};
