// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Request-side datatypes.
//!
//! A [`ValidationDocument`] describes one submitted container; a
//! [`SignatureFile`] describes one submitted signature in hashcode mode,
//! together with the [`Datafile`] digests the caller claims it covers.
//! All of these are created once per request and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::algorithm::DigestAlgorithm;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("documentType = {0} is unsupported")]
pub struct UnsupportedTypeError(pub String);

/// Declared document type of a submitted container.
///
/// The enumeration is closed; identifiers are matched exactly as the client
/// declares them (`PDF`, `XROAD`, `BDOC`, `DDOC`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Pdf,
    Xroad,
    Bdoc,
    Ddoc,
}

impl DocumentType {
    /// All supported identifiers, in declaration order.
    pub const ALL: [DocumentType; 4] = [Self::Pdf, Self::Xroad, Self::Bdoc, Self::Ddoc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Xroad => "XROAD",
            Self::Bdoc => "BDOC",
            Self::Ddoc => "DDOC",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = UnsupportedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF" => Ok(Self::Pdf),
            "XROAD" => Ok(Self::Xroad),
            "BDOC" => Ok(Self::Bdoc),
            "DDOC" => Ok(Self::Ddoc),
            _ => Err(UnsupportedTypeError(s.to_string())),
        }
    }
}

/// One submitted document, scoped to a single validation request.
#[derive(Debug, Clone)]
pub struct ValidationDocument {
    /// Declared file name (used for reporting and diagnostics only).
    pub name: String,
    /// Raw container bytes. Absent in hashcode mode, where only digests of
    /// the signed data are supplied.
    pub bytes: Option<Vec<u8>>,
    /// Declared container type.
    pub document_type: DocumentType,
    /// Declared mime type, if the client sent one.
    pub mime_type: Option<String>,
    /// Requested signature policy name; `None` selects the format default.
    pub signature_policy: Option<String>,
}

impl ValidationDocument {
    pub fn new(name: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            name: name.into(),
            bytes: None,
            document_type,
            mime_type: None,
            signature_policy: None,
        }
    }

    pub fn with_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.bytes = Some(bytes);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_signature_policy(mut self, policy: impl Into<String>) -> Self {
        self.signature_policy = Some(policy.into());
        self
    }
}

/// One submitted signature plus the datafile claims it should cover.
#[derive(Debug, Clone)]
pub struct SignatureFile {
    /// Raw signature bytes (decoded signature-file content).
    pub signature: Vec<u8>,
    /// Caller-declared datafile digests. Duplicate filenames are legal and
    /// resolved positionally, first occurrence wins.
    pub datafiles: Vec<Datafile>,
}

impl SignatureFile {
    pub fn new(signature: Vec<u8>) -> Self {
        Self {
            signature,
            datafiles: Vec::new(),
        }
    }

    pub fn with_datafile(mut self, datafile: Datafile) -> Self {
        self.datafiles.push(datafile);
        self
    }
}

/// A caller-declared (filename, digest, algorithm) claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datafile {
    pub filename: String,
    /// Decoded digest bytes.
    pub hash: Vec<u8>,
    pub hash_algo: DigestAlgorithm,
}

impl Datafile {
    pub fn new(filename: impl Into<String>, hash: Vec<u8>, hash_algo: DigestAlgorithm) -> Self {
        Self {
            filename: filename.into(),
            hash,
            hash_algo,
        }
    }

    /// Build a datafile claim from a base64-carried digest, as hashes arrive
    /// on the wire. A value that does not decode is a client input fault and
    /// must be rejected before validation starts.
    pub fn from_base64(
        filename: impl Into<String>,
        hash_base64: &str,
        hash_algo: DigestAlgorithm,
    ) -> Result<Self, base64::DecodeError> {
        Ok(Self::new(filename, BASE64.decode(hash_base64)?, hash_algo))
    }
}
