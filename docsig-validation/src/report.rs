// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Report variants wrapping a validation conclusion.
//!
//! Every report carries exactly one [`ValidationConclusion`]; the variant
//! decides which extra section, if any, rides along: the detailed
//! validation-process trace or the diagnostic data. Both extras are opaque
//! payloads produced by the engine; the core never inspects them. An unset
//! payload serializes as an absent field, not an empty placeholder.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::conclusion::ValidationConclusion;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("reportType = {0} is unsupported")]
pub struct UnsupportedReportTypeError(pub String);

/// Requested report flavor. Parsed case-insensitively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportType {
    Simple,
    Detailed,
    Diagnostic,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Detailed => "Detailed",
            Self::Diagnostic => "Diagnostic",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = UnsupportedReportTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SIMPLE" => Ok(Self::Simple),
            "DETAILED" => Ok(Self::Detailed),
            "DIAGNOSTIC" => Ok(Self::Diagnostic),
            _ => Err(UnsupportedReportTypeError(s.to_string())),
        }
    }
}

/// A finished validation report.
///
/// The variant shape guarantees at most one extra section per report: Simple
/// carries none, Detailed may carry the process trace, Diagnostic may carry
/// the diagnostic data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    #[serde(rename_all = "camelCase")]
    Simple {
        validation_conclusion: ValidationConclusion,
    },
    #[serde(rename_all = "camelCase")]
    Detailed {
        validation_conclusion: ValidationConclusion,
        #[serde(skip_serializing_if = "Option::is_none")]
        validation_process: Option<Value>,
    },
    #[serde(rename_all = "camelCase")]
    Diagnostic {
        validation_conclusion: ValidationConclusion,
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnostic_data: Option<Value>,
    },
}

impl Report {
    /// The conclusion every variant wraps.
    pub fn conclusion(&self) -> &ValidationConclusion {
        match self {
            Self::Simple {
                validation_conclusion,
            }
            | Self::Detailed {
                validation_conclusion,
                ..
            }
            | Self::Diagnostic {
                validation_conclusion,
                ..
            } => validation_conclusion,
        }
    }
}

/// Builds one report variant from a conclusion and optional opaque payloads.
///
/// Selection happens once, at build time; payloads that do not belong to the
/// selected variant are dropped.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    conclusion: ValidationConclusion,
    validation_process: Option<Value>,
    diagnostic_data: Option<Value>,
}

impl ReportBuilder {
    pub fn new(conclusion: ValidationConclusion) -> Self {
        Self {
            conclusion,
            validation_process: None,
            diagnostic_data: None,
        }
    }

    /// Attach the detailed validation-process trace.
    pub fn with_validation_process(mut self, payload: Value) -> Self {
        self.validation_process = Some(payload);
        self
    }

    /// Attach the diagnostic data payload.
    pub fn with_diagnostic_data(mut self, payload: Value) -> Self {
        self.diagnostic_data = Some(payload);
        self
    }

    pub fn build(self, report_type: ReportType) -> Report {
        match report_type {
            ReportType::Simple => Report::Simple {
                validation_conclusion: self.conclusion,
            },
            ReportType::Detailed => Report::Detailed {
                validation_conclusion: self.conclusion,
                validation_process: self.validation_process,
            },
            ReportType::Diagnostic => Report::Diagnostic {
                validation_conclusion: self.conclusion,
                diagnostic_data: self.diagnostic_data,
            },
        }
    }
}
