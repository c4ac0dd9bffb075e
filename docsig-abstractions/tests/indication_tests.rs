// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the outcome classification model.

use docsig_abstractions::{Indication, SubIndication};

#[test]
fn indication_serializes_to_standard_identifiers() {
    assert_eq!(
        serde_json::to_string(&Indication::TotalPassed).unwrap(),
        "\"TOTAL_PASSED\""
    );
    assert_eq!(
        serde_json::to_string(&Indication::TotalFailed).unwrap(),
        "\"TOTAL_FAILED\""
    );
    assert_eq!(
        serde_json::to_string(&Indication::Indeterminate).unwrap(),
        "\"INDETERMINATE\""
    );
}

#[test]
fn sub_indication_known_codes_round_trip() {
    assert_eq!(SubIndication::from("HASH_FAILURE"), SubIndication::HashFailure);
    assert_eq!(
        SubIndication::from("SIGNED_DATA_NOT_FOUND"),
        SubIndication::SignedDataNotFound
    );
    assert_eq!(SubIndication::HashFailure.as_str(), "HASH_FAILURE");
}

#[test]
fn sub_indication_passes_engine_codes_through_unchanged() {
    let other = SubIndication::from("NO_CERTIFICATE_CHAIN_FOUND");
    assert_eq!(other, SubIndication::Other("NO_CERTIFICATE_CHAIN_FOUND".to_string()));
    assert_eq!(
        serde_json::to_string(&other).unwrap(),
        "\"NO_CERTIFICATE_CHAIN_FOUND\""
    );
}
