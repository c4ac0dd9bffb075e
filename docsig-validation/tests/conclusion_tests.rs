// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Aggregation counting invariants and the overall-validity classification.

mod common;

use common::passed_intel;
use docsig_abstractions::{DocumentType, Indication, SubIndication};
use docsig_validation::conclusion::{
    aggregate, overall_validity, signature_data_from_intel, OverallValidity,
};
use docsig_validation::{PolicyRegistry, SignatureValidationData};

fn qes_policy() -> docsig_validation::SignaturePolicy {
    PolicyRegistry::with_defaults()
        .resolve(DocumentType::Bdoc, None)
        .unwrap()
        .clone()
}

fn passed(id: &str) -> SignatureValidationData {
    signature_data_from_intel(passed_intel(id, Vec::new()))
}

fn failed(id: &str) -> SignatureValidationData {
    let mut intel = passed_intel(id, Vec::new());
    intel.indication = Indication::TotalFailed;
    intel.sub_indication = Some(SubIndication::HashFailure);
    signature_data_from_intel(intel)
}

#[test]
fn counts_are_computed_from_the_signature_list() {
    let conclusion = aggregate(
        None,
        None,
        qes_policy(),
        vec![passed("S0"), failed("S1"), passed("S2")],
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(conclusion.signatures_count, 3);
    assert_eq!(conclusion.valid_signatures_count, 2);
    assert!(conclusion.valid_signatures_count <= conclusion.signatures_count);
}

#[test]
fn indeterminate_and_failed_signatures_count_toward_total_only() {
    let mut intel = passed_intel("S0", Vec::new());
    intel.indication = Indication::Indeterminate;
    intel.sub_indication = Some(SubIndication::SignedDataNotFound);

    let conclusion = aggregate(
        None,
        None,
        qes_policy(),
        vec![signature_data_from_intel(intel)],
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(conclusion.signatures_count, 1);
    assert_eq!(conclusion.valid_signatures_count, 0);
}

#[test]
fn single_passed_signature_is_valid_overall() {
    let conclusion = aggregate(
        None,
        None,
        qes_policy(),
        vec![passed("S0")],
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(conclusion.overall_validity(), OverallValidity::Valid);
}

#[test]
fn single_failed_signature_is_invalid_overall() {
    let conclusion = aggregate(
        None,
        None,
        qes_policy(),
        vec![failed("S0")],
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(conclusion.overall_validity(), OverallValidity::Invalid);
}

#[test]
fn zero_signatures_is_never_valid() {
    let conclusion = aggregate(None, None, qes_policy(), Vec::new(), Vec::new(), Vec::new());
    assert_eq!(conclusion.signatures_count, 0);
    assert_eq!(conclusion.overall_validity(), OverallValidity::Invalid);
}

#[test]
fn absent_counts_classify_as_counts_unavailable() {
    // Deliberately distinct from Invalid; see the classifier docs.
    assert_eq!(
        overall_validity(None, None),
        OverallValidity::CountsUnavailable
    );
    assert_eq!(
        overall_validity(Some(1), None),
        OverallValidity::CountsUnavailable
    );
    assert_eq!(
        overall_validity(None, Some(1)),
        OverallValidity::CountsUnavailable
    );
}

#[test]
fn classifier_truth_table() {
    assert_eq!(overall_validity(Some(1), Some(1)), OverallValidity::Valid);
    assert_eq!(overall_validity(Some(0), Some(1)), OverallValidity::Invalid);
    assert_eq!(overall_validity(Some(0), Some(0)), OverallValidity::Invalid);
    assert_eq!(overall_validity(Some(2), Some(3)), OverallValidity::Invalid);
}

#[test]
fn each_call_produces_an_independent_conclusion() {
    let a = aggregate(
        None,
        None,
        qes_policy(),
        vec![passed("S0")],
        Vec::new(),
        Vec::new(),
    );
    let b = aggregate(
        None,
        None,
        qes_policy(),
        vec![passed("S0")],
        Vec::new(),
        Vec::new(),
    );
    // Fresh values: equal field-wise apart from the timestamp, and mutating
    // one cannot affect the other.
    assert_eq!(a.signatures, b.signatures);
    assert_eq!(a.policy, b.policy);
}

#[test]
fn conclusion_carries_validation_level_and_time() {
    let conclusion = aggregate(None, None, qes_policy(), Vec::new(), Vec::new(), Vec::new());
    assert_eq!(conclusion.validation_level, "ARCHIVAL_DATA");
    assert!(conclusion.validation_time.ends_with('Z'));
}
