// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end scenarios for the submission validator.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use ecotrack_core::{
    ActivityTypeRegistry, FlagSeverity, ImpactCalculator, SubmissionValidator, ValidationFlag,
};

mod common;
use common::{approved, date, submission};

fn validator() -> SubmissionValidator {
    SubmissionValidator::new(Arc::new(ActivityTypeRegistry::seed()))
}

fn pinned_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_empty_description_and_future_date_are_two_errors() {
    let mut candidate = submission("recycling", "", 10.0, date(2024, 3, 16));
    candidate.description = String::new();

    let verdict = validator().validate_at(&candidate, &[], pinned_now());

    assert!(!verdict.is_valid);
    assert_eq!(verdict.errors.len(), 2);
    assert!(verdict.flags.contains(&ValidationFlag::MissingDescription));
    assert!(verdict.flags.contains(&ValidationFlag::FutureDate));
}

#[test]
fn test_excessive_quantity_flags_but_does_not_block() {
    let candidate = submission(
        "recycling",
        "Cleared out the office paper archive",
        150.0, // ceiling for recycling is 100
        date(2024, 3, 14),
    );

    let verdict = validator().validate_at(&candidate, &[], pinned_now());

    assert!(verdict.is_valid);
    assert!(verdict.flags.contains(&ValidationFlag::ExcessiveQuantity));
    assert!(verdict.requires_review);
}

#[test]
fn test_location_flag_applies_to_outdoor_types_only() {
    let mut cycling = submission(
        "cycling",
        "Commuted by bike all week instead of driving",
        40.0,
        date(2024, 3, 14),
    );
    cycling.location = None;

    let verdict = validator().validate_at(&cycling, &[], pinned_now());
    assert!(verdict.flags.contains(&ValidationFlag::MissingLocation));

    let mut recycling = submission(
        "recycling",
        "Sorted a week of household paper and glass",
        10.0,
        date(2024, 3, 14),
    );
    recycling.location = None;

    let verdict = validator().validate_at(&recycling, &[], pinned_now());
    assert!(!verdict.flags.contains(&ValidationFlag::MissingLocation));
}

#[test]
fn test_duplicate_history_elevates_review() {
    let history = vec![approved(
        "old",
        "u1",
        "recycling",
        5.0,
        12.5,
        25.0,
        date(2024, 3, 14),
    )];
    let candidate = submission(
        "recycling",
        "Second batch of glass from the storage room",
        8.0,
        date(2024, 3, 14),
    );

    let verdict = validator().validate_at(&candidate, &history, pinned_now());

    assert!(verdict.is_valid);
    assert!(verdict.flags.contains(&ValidationFlag::DuplicateSubmission));
    assert!(verdict.requires_review);
}

#[test]
fn test_flags_carry_severity_and_description_for_display() {
    let mut candidate = submission("cycling", "Bike", 150.0, date(2024, 3, 16));
    candidate.location = None;
    candidate.photo_attached = false;

    let verdict = validator().validate_at(&candidate, &[], pinned_now());

    // short_description, missing_photo, excessive_quantity, future_date,
    // missing_location_for_outdoor
    assert_eq!(verdict.flags.len(), 5);
    for flag in &verdict.flags {
        assert!(!flag.description().is_empty());
    }
    let severities: Vec<FlagSeverity> = verdict.flags.iter().map(|f| f.severity()).collect();
    assert!(severities.contains(&FlagSeverity::Error)); // future_date
    assert!(severities.contains(&FlagSeverity::Warning));
}

#[test]
fn test_submission_pipeline_produces_complete_record() {
    // Form submission -> validator -> calculator, as the submission UI
    // wires it together.
    let registry = Arc::new(ActivityTypeRegistry::seed());
    let validator = SubmissionValidator::new(Arc::clone(&registry));
    let calculator = ImpactCalculator::new(registry);

    let candidate = submission(
        "recycling",
        "Sorted a week of household paper and glass",
        15.0,
        date(2024, 3, 14),
    );

    let check = validator.required_fields(&candidate);
    assert!(check.is_valid);

    let verdict = validator.validate_at(&candidate, &[], pinned_now());
    assert!(verdict.is_valid);

    let (co2_saved, impact_score) = calculator.compute_for_submission(&candidate);
    assert_eq!(co2_saved, 37.5);
    assert_eq!(impact_score, 75.0);
}

#[test]
fn test_verdict_serializes_with_wire_flag_ids() {
    let mut candidate = submission("cycling", "Bike", 10.0, date(2024, 3, 14));
    candidate.location = None;

    let verdict = validator().validate_at(&candidate, &[], pinned_now());
    let json = serde_json::to_string(&verdict).unwrap();

    assert!(json.contains("missing_location_for_outdoor"));
    assert!(json.contains("short_description"));
}
