// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Report-side result model and the conclusion aggregator.
//!
//! `aggregate` combines per-signature outcomes into one
//! [`ValidationConclusion`] with strict counting invariants:
//! `validSignaturesCount <= signaturesCount`, both non-negative, computed
//! from the same signature list so the invariant holds by construction.
//! Each call produces a fresh, independent value; nothing is mutated after
//! the aggregator returns.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use docsig_abstractions::{
    DigestAlgorithm, Indication, SignatureIntel, SignatureScope, SubIndication,
    SubjectDistinguishedName, TimestampIntel,
};
use serde::Serialize;

use crate::policy::SignaturePolicy;

/// Validation level reported for every conclusion.
pub const VALIDATION_LEVEL_ARCHIVAL_DATA: &str = "ARCHIVAL_DATA";

/// Descriptor of the document the conclusion is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedDocument {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_algo: Option<DigestAlgorithm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorItem {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningItem {
    pub content: String,
}

/// Document-level warning not tied to one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub content: String,
}

/// Additional signature timing info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub best_signature_time: String,
}

/// Finalized validation outcome for one signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureValidationData {
    pub id: String,
    pub signature_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_distinguished_name: Option<SubjectDistinguishedName>,
    pub indication: Indication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signature_scopes: Vec<SignatureScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_signing_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
}

impl SignatureValidationData {
    pub fn is_valid(&self) -> bool {
        self.indication == Indication::TotalPassed
    }
}

/// Finalized validation outcome for an independent timestamp token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStampTokenValidationData {
    pub indication: Indication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

/// Document-level aggregate conclusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConclusion {
    pub validation_time: String,
    pub validation_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_form: Option<String>,
    pub policy: SignaturePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_document: Option<ValidatedDocument>,
    pub signatures: Vec<SignatureValidationData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time_stamp_tokens: Vec<TimeStampTokenValidationData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_warnings: Vec<ValidationWarning>,
    pub signatures_count: u32,
    pub valid_signatures_count: u32,
}

impl ValidationConclusion {
    /// Document-level validity as simple consumers read it.
    pub fn overall_validity(&self) -> OverallValidity {
        overall_validity(
            Some(self.valid_signatures_count),
            Some(self.signatures_count),
        )
    }
}

/// Document-level validity classification.
///
/// `CountsUnavailable` is deliberately distinct: a report whose counts cannot
/// be read back is neither valid nor provably invalid, and collapsing it into
/// `Invalid` hides a data defect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverallValidity {
    Valid,
    Invalid,
    CountsUnavailable,
}

/// Classify overall validity from (possibly absent) signature counts.
///
/// `Valid` requires every signature to have passed and at least one
/// signature to exist; zero signatures is never `Valid`.
pub fn overall_validity(valid: Option<u32>, total: Option<u32>) -> OverallValidity {
    match (valid, total) {
        (Some(valid), Some(total)) if valid == total && total > 0 => OverallValidity::Valid,
        (Some(_), Some(_)) => OverallValidity::Invalid,
        _ => OverallValidity::CountsUnavailable,
    }
}

/// Combine per-signature results into a fresh conclusion.
pub fn aggregate(
    validated_document: Option<ValidatedDocument>,
    signature_form: Option<String>,
    policy: SignaturePolicy,
    signatures: Vec<SignatureValidationData>,
    timestamp_tokens: Vec<TimeStampTokenValidationData>,
    warnings: Vec<ValidationWarning>,
) -> ValidationConclusion {
    let signatures_count = signatures.len() as u32;
    let valid_signatures_count = signatures.iter().filter(|s| s.is_valid()).count() as u32;

    ValidationConclusion {
        validation_time: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        validation_level: VALIDATION_LEVEL_ARCHIVAL_DATA.to_string(),
        signature_form,
        policy,
        validated_document,
        signatures,
        time_stamp_tokens: timestamp_tokens,
        validation_warnings: warnings,
        signatures_count,
        valid_signatures_count,
    }
}

/// Build the report-side signature entry from engine intel.
///
/// Used by both verification modes; hashcode mode refines the intel first.
pub fn signature_data_from_intel(intel: SignatureIntel) -> SignatureValidationData {
    SignatureValidationData {
        id: intel.id,
        signature_format: intel.signature_format,
        signature_level: intel.signature_level,
        signed_by: intel.signed_by,
        subject_distinguished_name: intel.subject_distinguished_name,
        indication: intel.indication,
        sub_indication: intel.sub_indication,
        errors: intel
            .errors
            .into_iter()
            .map(|content| ErrorItem { content })
            .collect(),
        warnings: intel
            .warnings
            .into_iter()
            .map(|content| WarningItem { content })
            .collect(),
        signature_scopes: intel.signature_scopes,
        claimed_signing_time: intel.claimed_signing_time,
        info: intel
            .best_signature_time
            .map(|best_signature_time| Info {
                best_signature_time,
            }),
    }
}

/// Build the report-side timestamp entry from engine intel.
pub fn timestamp_data_from_intel(intel: TimestampIntel) -> TimeStampTokenValidationData {
    TimeStampTokenValidationData {
        indication: intel.indication,
        signed_by: intel.signed_by,
        signed_time: intel.signed_time,
        errors: intel
            .errors
            .into_iter()
            .map(|content| ErrorItem { content })
            .collect(),
    }
}

/// Hashcode-mode signature scopes, derived from the digest references the
/// signature covers.
pub fn scopes_from_references(
    references: &[docsig_abstractions::DigestReference],
) -> Vec<SignatureScope> {
    references
        .iter()
        .map(|r| SignatureScope {
            name: r.name.clone(),
            scope: "FullSignatureScope".to_string(),
            content: "Digest of the document content".to_string(),
            hash: Some(BASE64.encode(&r.digest)),
            hash_algo: Some(r.algorithm),
        })
        .collect()
}
