// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature policy resolution.
//!
//! Every supported document format carries an ordered list of named policies
//! and one designated default. Formats that do not support policy selection
//! (legacy DDOC, the XROAD wrapper) always validate under their single fixed
//! policy and ignore any requested name.
//!
//! The registry is built once at startup and treated as immutable for the
//! process lifetime; `resolve` is read-only and safe to call concurrently.
//!
//! Lookup is exact and case-sensitive. Case-insensitive matching has been
//! discussed but is deliberately not the baseline behavior.

use std::collections::HashMap;

use docsig_abstractions::DocumentType;
use serde::Serialize;

use crate::error::ValidationError;

/// A named, versioned rule set governing which signature and certificate
/// properties are required for a signature to be considered valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePolicy {
    pub policy_name: String,
    pub policy_description: String,
    pub policy_url: String,
}

impl SignaturePolicy {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            policy_name: name.into(),
            policy_description: description.into(),
            policy_url: url.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct FormatPolicies {
    /// Registry order is the order reported in the invalid-policy message.
    policies: Vec<SignaturePolicy>,
    default_index: usize,
    /// When false the format ignores the requested name entirely.
    selectable: bool,
}

/// Per-format policy registry with deterministic defaults.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    formats: HashMap<DocumentType, FormatPolicies>,
}

pub const POLICY_ADES_NAME: &str = "POLv3";
pub const POLICY_QES_NAME: &str = "POLv4";

fn ades_policy() -> SignaturePolicy {
    SignaturePolicy::new(
        POLICY_ADES_NAME,
        "Policy for validating Electronic Signatures and Electronic Seals regardless of the \
         legal type of the signature or seal, i.e. the fulfillment of advanced electronic \
         signature requirements is sufficient.",
        "https://open-eid.github.io/docsig/policy/POLv3",
    )
}

fn qes_policy() -> SignaturePolicy {
    SignaturePolicy::new(
        POLICY_QES_NAME,
        "Policy for validating Qualified Electronic Signatures and Qualified Electronic \
         Seals. Signatures and seals not fulfilling the qualification requirements are \
         reported with a warning.",
        "https://open-eid.github.io/docsig/policy/POLv4",
    )
}

impl PolicyRegistry {
    /// Empty registry. Formats must be registered before the service starts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock configuration: AdES and QES policies for the selectable formats
    /// (QES is the default), a single fixed QES policy for the formats that
    /// do not support policy selection.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for format in [DocumentType::Pdf, DocumentType::Bdoc] {
            registry.register(format, vec![ades_policy(), qes_policy()], 1, true);
        }
        for format in [DocumentType::Ddoc, DocumentType::Xroad] {
            registry.register(format, vec![qes_policy()], 0, false);
        }
        registry
    }

    /// Register the policy list for a format.
    ///
    /// Panics when `default_index` is out of bounds or `policies` is empty:
    /// a registry that cannot produce a default is a configuration defect,
    /// not a runtime input problem.
    pub fn register(
        &mut self,
        format: DocumentType,
        policies: Vec<SignaturePolicy>,
        default_index: usize,
        selectable: bool,
    ) {
        assert!(
            default_index < policies.len(),
            "default policy index {default_index} out of bounds for {format}"
        );
        self.formats.insert(
            format,
            FormatPolicies {
                policies,
                default_index,
                selectable,
            },
        );
    }

    /// Resolve the requested policy name for a format.
    ///
    /// `None` always yields the format default. A non-selectable format
    /// yields its fixed policy regardless of the requested name. Otherwise
    /// the name is looked up exactly; a miss enumerates the available names.
    pub fn resolve(
        &self,
        format: DocumentType,
        requested: Option<&str>,
    ) -> Result<&SignaturePolicy, ValidationError> {
        let entry = self
            .formats
            .get(&format)
            .ok_or_else(|| ValidationError::UnsupportedType(format.to_string()))?;

        if !entry.selectable {
            return Ok(&entry.policies[entry.default_index]);
        }

        let Some(name) = requested else {
            return Ok(&entry.policies[entry.default_index]);
        };

        entry
            .policies
            .iter()
            .find(|p| p.policy_name == name)
            .ok_or_else(|| ValidationError::InvalidPolicy {
                requested: name.to_string(),
                available: entry
                    .policies
                    .iter()
                    .map(|p| p.policy_name.clone())
                    .collect(),
            })
    }

    /// Names available for a format, in registry order.
    pub fn available(&self, format: DocumentType) -> Vec<&str> {
        self.formats
            .get(&format)
            .map(|e| e.policies.iter().map(|p| p.policy_name.as_str()).collect())
            .unwrap_or_default()
    }
}
