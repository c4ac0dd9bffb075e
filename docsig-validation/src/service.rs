// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Validation orchestration facade.
//!
//! One request maps to one synchronous computation: resolve the policy,
//! route the document, hand verification to the external engine, refine and
//! aggregate the results, wrap the requested report flavor. The service keeps
//! no per-request state; configuration (the policy registry) is read-only
//! after construction, so concurrent calls never contend.

use docsig_abstractions::{
    DocumentType, EngineError, SignatureFile, ValidationDocument, ValidationEngine,
};
use log::error;

use crate::conclusion::{
    aggregate, scopes_from_references, signature_data_from_intel, timestamp_data_from_intel,
    ValidatedDocument, ValidationWarning,
};
use crate::error::ValidationError;
use crate::hashcode::refine_intel;
use crate::policy::{PolicyRegistry, SignaturePolicy};
use crate::report::{Report, ReportBuilder, ReportType};
use crate::router::route;

/// One hashcode-mode validation request: detached signatures plus the digest
/// claims of the data they should cover.
#[derive(Debug, Clone)]
pub struct HashcodeValidationRequest {
    pub signature_files: Vec<SignatureFile>,
    /// Requested policy name; `None` selects the default.
    pub signature_policy: Option<String>,
    pub report_type: ReportType,
}

/// Validation service over an external cryptographic engine.
pub struct ValidationService<E> {
    engine: E,
    policies: PolicyRegistry,
}

impl<E: ValidationEngine> ValidationService<E> {
    pub fn new(engine: E, policies: PolicyRegistry) -> Self {
        Self { engine, policies }
    }

    /// Validate a submitted container document.
    pub fn validate(
        &self,
        document: &ValidationDocument,
        report_type: ReportType,
    ) -> Result<Report, ValidationError> {
        let policy = self
            .policies
            .resolve(document.document_type, document.signature_policy.as_deref())?
            .clone();

        route(document, &self.engine)?;

        let verdict = self
            .engine
            .verify_container(document)
            .map_err(|e| map_engine_error(&document.name, e))?;

        let conclusion = aggregate(
            Some(ValidatedDocument {
                filename: document.name.clone(),
                file_hash: None,
                hash_algo: None,
            }),
            verdict.signature_form,
            policy,
            verdict
                .signatures
                .into_iter()
                .map(signature_data_from_intel)
                .collect(),
            verdict
                .timestamp_tokens
                .into_iter()
                .map(timestamp_data_from_intel)
                .collect(),
            verdict
                .warnings
                .into_iter()
                .map(|content| ValidationWarning { content })
                .collect(),
        );

        Ok(ReportBuilder::new(conclusion).build(report_type))
    }

    /// Validate detached signatures against caller-supplied digests.
    ///
    /// The engine reports the cryptographic outcome per signature; the digest
    /// matcher then refines it with the signature-to-data binding check.
    pub fn validate_hashcode(
        &self,
        request: &HashcodeValidationRequest,
    ) -> Result<Report, ValidationError> {
        // Hashcode-mode signatures are XAdES, which resolves against the
        // ASiC/BDOC policy set.
        let policy = self
            .policies
            .resolve(DocumentType::Bdoc, request.signature_policy.as_deref())?
            .clone();

        let mut signatures = Vec::with_capacity(request.signature_files.len());
        for signature_file in &request.signature_files {
            let mut intel = self
                .engine
                .verify_signature(signature_file)
                .map_err(|e| map_engine_error("hashcode signature", e))?;

            // A signature submitted with no datafile claims reports no scopes.
            intel.signature_scopes = if signature_file.datafiles.is_empty() {
                Vec::new()
            } else {
                scopes_from_references(&intel.digest_references)
            };

            let refined = refine_intel(intel, &signature_file.datafiles);
            signatures.push(signature_data_from_intel(refined));
        }

        let conclusion = aggregate(None, None, policy, signatures, Vec::new(), Vec::new());
        Ok(ReportBuilder::new(conclusion).build(request.report_type))
    }

    /// Resolve a policy without running a validation, mirroring what
    /// `validate` will use.
    pub fn resolve_policy(
        &self,
        format: DocumentType,
        requested: Option<&str>,
    ) -> Result<&SignaturePolicy, ValidationError> {
        self.policies.resolve(format, requested)
    }
}

/// Classify an engine failure per the error taxonomy: content-malformed maps
/// to the client-visible malformed-document fault, anything else is a fatal
/// service fault.
fn map_engine_error(document_name: &str, err: EngineError) -> ValidationError {
    match err {
        EngineError::Malformed(cause) => {
            error!("unable to verify document {document_name}: {cause}");
            ValidationError::MalformedDocument
        }
        internal @ EngineError::Internal(_) => {
            error!("an error occurred when validating document {document_name}: {internal}");
            ValidationError::ServiceFailure {
                service: "ValidationService",
                source: internal,
            }
        }
    }
}
