// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation verdicts and machine-readable submission flags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Machine-readable identifier for a specific validation concern.
///
/// Flags are attached to a submission independent of whether they block
/// it; reviewers see every triggered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFlag {
    MissingDescription,
    ShortDescription,
    MissingPhoto,
    ExcessiveQuantity,
    DuplicateSubmission,
    FutureDate,
    SuspiciousPattern,
    #[serde(rename = "missing_location_for_outdoor")]
    MissingLocation,
}

/// Display severity of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationFlag {
    /// Wire/display identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFlag::MissingDescription => "missing_description",
            ValidationFlag::ShortDescription => "short_description",
            ValidationFlag::MissingPhoto => "missing_photo",
            ValidationFlag::ExcessiveQuantity => "excessive_quantity",
            ValidationFlag::DuplicateSubmission => "duplicate_submission",
            ValidationFlag::FutureDate => "future_date",
            ValidationFlag::SuspiciousPattern => "suspicious_pattern",
            ValidationFlag::MissingLocation => "missing_location_for_outdoor",
        }
    }

    /// Severity shown alongside the flag. Only the blocking checks are
    /// error-class; everything else is advisory.
    pub fn severity(&self) -> FlagSeverity {
        match self {
            ValidationFlag::MissingDescription | ValidationFlag::FutureDate => FlagSeverity::Error,
            _ => FlagSeverity::Warning,
        }
    }

    /// Short human-readable description for reviewer UIs.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationFlag::MissingDescription => "Missing description",
            ValidationFlag::ShortDescription => "Description too short",
            ValidationFlag::MissingPhoto => "No photo proof",
            ValidationFlag::ExcessiveQuantity => "Unusually high quantity",
            ValidationFlag::DuplicateSubmission => "Possible duplicate",
            ValidationFlag::FutureDate => "Future date not allowed",
            ValidationFlag::SuspiciousPattern => "Unusual submission pattern",
            ValidationFlag::MissingLocation => "Location recommended",
        }
    }

    /// Whether this flag elevates the submission to manual review.
    pub fn requires_review(&self) -> bool {
        matches!(
            self,
            ValidationFlag::ExcessiveQuantity
                | ValidationFlag::SuspiciousPattern
                | ValidationFlag::DuplicateSubmission
        )
    }
}

impl std::fmt::Display for ValidationFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one submission attempt. Produced per attempt,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// False only when blocking errors are present
    pub is_valid: bool,
    /// Blocking messages; submission must not proceed
    pub errors: Vec<String>,
    /// Advisory messages shown to the submitter
    pub warnings: Vec<String>,
    /// Every triggered flag, regardless of severity
    pub flags: Vec<ValidationFlag>,
    /// True when any flag warrants extra reviewer attention
    pub requires_review: bool,
}

/// Result of the lightweight required-fields pre-check, keyed by form
/// field name for inline display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredFieldsCheck {
    pub is_valid: bool,
    pub field_errors: BTreeMap<String, String>,
}
