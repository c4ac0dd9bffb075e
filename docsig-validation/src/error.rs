// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error taxonomy of the validation core.
//!
//! Three categories, surfaced differently:
//! - client-input faults carry a precise, reproducible message (including the
//!   exact list of available policies),
//! - malformed-document faults surface one fixed generic message while the
//!   underlying cause stays in the server log,
//! - service faults are the only category that represents a server defect.
//!
//! Digest mismatches and missing signed data are never errors; they become
//! ordinary indication values in the report.

use docsig_abstractions::EngineError;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    /// The requested policy name is not registered for the document format.
    /// Client fault; the message enumerates the available names in registry
    /// order.
    #[error("Invalid signature policy: {requested}; Available abstractPolicies: [{}]", .available.join(", "))]
    InvalidPolicy {
        requested: String,
        available: Vec<String>,
    },

    /// The declared document type is outside the supported enumeration.
    /// Client fault naming the offending value.
    #[error("documentType = {0} is unsupported")]
    UnsupportedType(String),

    /// Declared type does not match actual content, the container fails
    /// structural parsing, or the transport-wrapper sentinel check tripped.
    /// The cause is logged server-side, never echoed to the caller.
    #[error("Document malformed or not matching documentType")]
    MalformedDocument,

    /// Unexpected failure inside the cryptographic engine. A genuine server
    /// defect, logged with full context.
    #[error("validation service failure in {service}")]
    ServiceFailure {
        service: &'static str,
        #[source]
        source: EngineError,
    },
}

impl ValidationError {
    /// True for faults the caller can fix by correcting the request.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidPolicy { .. } | Self::UnsupportedType(_) | Self::MalformedDocument
        )
    }
}
