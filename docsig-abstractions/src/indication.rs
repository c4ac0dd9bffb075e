// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Standardized per-signature outcome classification.
//!
//! [`Indication`] is the coarse verdict for one signature; [`SubIndication`]
//! refines it with a reason code when the verdict is not `TOTAL_PASSED`.
//! Engine-reported reason codes that the core does not interpret are passed
//! through unchanged via [`SubIndication::Other`].

use std::fmt;

use serde::{Serialize, Serializer};

/// Coarse outcome for a single signature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indication {
    TotalPassed,
    TotalFailed,
    Indeterminate,
}

impl Indication {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalPassed => "TOTAL_PASSED",
            Self::TotalFailed => "TOTAL_FAILED",
            Self::Indeterminate => "INDETERMINATE",
        }
    }
}

impl fmt::Display for Indication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refining reason code, only meaningful when the indication is not
/// `TOTAL_PASSED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubIndication {
    /// A digest the signature covers does not match the signed data.
    HashFailure,
    /// The signed data object a signature references was not found.
    SignedDataNotFound,
    /// Any other engine-reported reason, passed through unchanged.
    Other(String),
}

impl SubIndication {
    pub fn as_str(&self) -> &str {
        match self {
            Self::HashFailure => "HASH_FAILURE",
            Self::SignedDataNotFound => "SIGNED_DATA_NOT_FOUND",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for SubIndication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SubIndication {
    fn from(code: &str) -> Self {
        match code {
            "HASH_FAILURE" => Self::HashFailure,
            "SIGNED_DATA_NOT_FOUND" => Self::SignedDataNotFound,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for SubIndication {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
