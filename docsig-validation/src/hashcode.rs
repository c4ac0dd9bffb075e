// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Hashcode-mode signature-to-data binding.
//!
//! In hashcode mode the caller supplies only digests of the signed data, not
//! the data itself. For each signature, the matcher decides whether the
//! caller's datafile claims correspond to the digest references the signature
//! actually covers, and whether the digest bytes match.
//!
//! Match resolution is per-datafile-to-its-corresponding-reference: an
//! unrelated claim without any matching reference never blocks a later claim
//! from matching correctly, but a claim whose corresponding reference carries
//! different digest bytes forces a mismatch that later claims cannot undo.
//!
//! The matcher never errors; its outcomes become indication values.

use docsig_abstractions::{Datafile, DigestReference, Indication, SignatureIntel, SubIndication};
use log::debug;

/// Refinement error reported when a claimed data object has no corresponding
/// digest reference in the signature.
pub const REFERENCE_NOT_FOUND_MESSAGE: &str = "The reference data object(s) is not found!";
/// Refinement error reported when a corresponding reference exists but the
/// digest bytes differ.
pub const REFERENCE_NOT_INTACT_MESSAGE: &str = "The reference data object(s) is not intact!";

/// Outcome of matching one signature's datafile claims against its digest
/// references.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigestMatch {
    /// At least one claim matches its reference byte-for-byte and no claim
    /// contradicts its reference.
    Matched,
    /// No claim corresponds to any reference (or no claims were submitted).
    NotFound,
    /// A corresponding reference was found but the digest bytes differ.
    Mismatch,
}

/// Match the submitted datafile claims against the digest references a
/// signature declares it covers.
///
/// The matching key is (filename, algorithm); algorithm identifiers were
/// normalized case-insensitively at parse time. Duplicate filenames are
/// resolved positionally, first occurrence wins.
pub fn match_datafiles(datafiles: &[Datafile], references: &[DigestReference]) -> DigestMatch {
    let mut matched = false;
    let mut mismatched = false;
    let mut seen: Vec<(&str, _)> = Vec::new();

    for datafile in datafiles {
        let key = (datafile.filename.as_str(), datafile.hash_algo);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let reference = references
            .iter()
            .find(|r| r.name == datafile.filename && r.algorithm == datafile.hash_algo);
        match reference {
            Some(r) if r.digest == datafile.hash => matched = true,
            Some(r) => {
                debug!(
                    "digest mismatch for {}: claimed {}, signature covers {}",
                    datafile.filename,
                    hex::encode(&datafile.hash),
                    hex::encode(&r.digest)
                );
                mismatched = true;
            }
            None => {}
        }
    }

    if mismatched {
        DigestMatch::Mismatch
    } else if matched {
        DigestMatch::Matched
    } else {
        DigestMatch::NotFound
    }
}

/// Refine an engine-reported signature outcome with the binding check.
///
/// `Matched` leaves the engine's cryptographic indication untouched;
/// `NotFound` and `Mismatch` override it with the corresponding indication,
/// sub-indication and error text.
pub fn refine_intel(mut intel: SignatureIntel, datafiles: &[Datafile]) -> SignatureIntel {
    match match_datafiles(datafiles, &intel.digest_references) {
        DigestMatch::Matched => intel,
        DigestMatch::NotFound => {
            intel.indication = Indication::Indeterminate;
            intel.sub_indication = Some(SubIndication::SignedDataNotFound);
            intel.errors.push(REFERENCE_NOT_FOUND_MESSAGE.to_string());
            intel
        }
        DigestMatch::Mismatch => {
            intel.indication = Indication::TotalFailed;
            intel.sub_indication = Some(SubIndication::HashFailure);
            intel.errors.push(REFERENCE_NOT_INTACT_MESSAGE.to_string());
            intel
        }
    }
}
