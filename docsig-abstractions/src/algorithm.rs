// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Digest algorithm identifiers accepted in validation requests.
//!
//! The set is closed: it mirrors the algorithms a signature's digest
//! references may legitimately use. Names are matched case-insensitively
//! (`sha256` and `SHA256` are the same algorithm); everything downstream
//! compares the typed value, so the normalization happens exactly once,
//! at parse time.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("hash algorithm = {0} is unsupported")]
pub struct UnsupportedAlgorithmError(pub String);

/// Supported digest algorithm identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DigestAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
    Md2,
    Md5,
}

impl DigestAlgorithm {
    /// Canonical (uppercase) identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Ripemd160 => "RIPEMD160",
            Self::Md2 => "MD2",
            Self::Md5 => "MD5",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnsupportedAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA224" => Ok(Self::Sha224),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            "RIPEMD160" => Ok(Self::Ripemd160),
            "MD2" => Ok(Self::Md2),
            "MD5" => Ok(Self::Md5),
            _ => Err(UnsupportedAlgorithmError(s.to_string())),
        }
    }
}
