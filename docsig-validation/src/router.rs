// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Document routing: declared type versus actual content.
//!
//! The router sniffs the submitted bytes, compares the result against the
//! declared document type and selects the downstream verification path. Any
//! mismatch is terminal: the document is rejected as malformed, never
//! partially verified.
//!
//! The XROAD transport wrapper is an ASiC container distinguishable only by
//! its sentinel data object `message.xml`. A container carrying the sentinel
//! must be rejected when routed to any other verifier even if the bytes
//! otherwise parse; this is an anti-spoofing check, not a parser limitation.

use docsig_abstractions::{DocumentType, EngineError, ValidationDocument, ValidationEngine};
use log::error;

use crate::error::ValidationError;

/// Internal data object name that tags the XROAD transport wrapper.
pub const XROAD_SENTINEL_FILE: &str = "message.xml";

/// Downstream verification path selected by the router.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerificationPath {
    /// PDF with embedded PAdES signatures.
    Pades,
    /// ASiC-based BDOC container (XAdES time-mark/time-stamp signatures).
    AsicTimemark,
    /// Legacy XML-based DDOC container.
    DdocXml,
    /// XROAD transport wrapper.
    Xroad,
}

/// Sniffed content classification, from magic bytes only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ContentKind {
    Pdf,
    Zip,
    Xml,
    Unknown,
}

fn sniff(bytes: &[u8]) -> ContentKind {
    if bytes.starts_with(b"%PDF-") {
        return ContentKind::Pdf;
    }
    if bytes.starts_with(b"PK\x03\x04") {
        return ContentKind::Zip;
    }
    // XML declaration or a bare root element, after an optional UTF-8 BOM
    // and leading whitespace.
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let trimmed = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|i| &body[i..])
        .unwrap_or(&[]);
    if trimmed.starts_with(b"<") {
        return ContentKind::Xml;
    }
    ContentKind::Unknown
}

/// Reject DDOC content that carries document type declarations or entity
/// definitions before it ever reaches an XML parser.
fn guard_against_xml_entities(name: &str, bytes: &[u8]) -> Result<(), ValidationError> {
    let text = String::from_utf8_lossy(bytes);
    if text.contains("<!DOCTYPE") || text.contains("<!ENTITY") {
        error!("document {name} contains XML entity declarations, rejecting");
        return Err(ValidationError::MalformedDocument);
    }
    Ok(())
}

fn map_inspect_error(name: &str, err: EngineError) -> ValidationError {
    match err {
        EngineError::Malformed(cause) => {
            error!("unable to create container from document {name}: {cause}");
            ValidationError::MalformedDocument
        }
        internal @ EngineError::Internal(_) => ValidationError::ServiceFailure {
            service: "DocumentRouter",
            source: internal,
        },
    }
}

/// Select the verification path for a submitted container.
///
/// Fails with [`ValidationError::MalformedDocument`] when the declared type
/// does not match the sniffed content or the sentinel check trips. The
/// underlying cause is logged, not echoed.
pub fn route<E: ValidationEngine>(
    document: &ValidationDocument,
    engine: &E,
) -> Result<VerificationPath, ValidationError> {
    let name = document.name.as_str();
    let Some(bytes) = document.bytes.as_deref() else {
        error!("document {name} has no content to route");
        return Err(ValidationError::MalformedDocument);
    };

    let kind = sniff(bytes);
    match (document.document_type, kind) {
        (DocumentType::Pdf, ContentKind::Pdf) => Ok(VerificationPath::Pades),

        (DocumentType::Ddoc, ContentKind::Xml) => {
            guard_against_xml_entities(name, bytes)?;
            Ok(VerificationPath::DdocXml)
        }

        (DocumentType::Bdoc, ContentKind::Zip) => {
            let summary = engine
                .inspect(bytes)
                .map_err(|e| map_inspect_error(name, e))?;
            if summary
                .data_file_names
                .iter()
                .any(|n| n == XROAD_SENTINEL_FILE)
            {
                error!("XROAD container {name} passed to BDOC validator");
                return Err(ValidationError::MalformedDocument);
            }
            Ok(VerificationPath::AsicTimemark)
        }

        (DocumentType::Xroad, ContentKind::Zip) => {
            let summary = engine
                .inspect(bytes)
                .map_err(|e| map_inspect_error(name, e))?;
            if summary
                .data_file_names
                .iter()
                .any(|n| n == XROAD_SENTINEL_FILE)
            {
                Ok(VerificationPath::Xroad)
            } else {
                error!("document {name} declared XROAD but carries no {XROAD_SENTINEL_FILE}");
                Err(ValidationError::MalformedDocument)
            }
        }

        (declared, actual) => {
            error!("document {name} declared {declared} but content sniffed as {actual:?}");
            Err(ValidationError::MalformedDocument)
        }
    }
}
