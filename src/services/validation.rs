// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission validation service.
//!
//! Inspects a candidate submission together with the submitter's history
//! and produces a structured verdict: blocking errors, advisory warnings,
//! and machine-readable flags for the reviewer. Validation failures are
//! returned as data, never as `Err` — a bad submission is an expected
//! outcome, and the calling UI decides what to block or display.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{
    ActivityRecord, ActivitySubmission, RequiredFieldsCheck, ValidationFlag, ValidationVerdict,
};
use crate::registry::ActivityTypeRegistry;

/// Descriptions shorter than this draw a warning.
const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Submissions dated within the trailing week at or above this count
/// look automated and get flagged for review.
const SUSPICIOUS_WEEKLY_COUNT: usize = 20;

/// Activity types where a location is expected.
const OUTDOOR_ACTIVITIES: &[&str] = &[
    "tree_planting",
    "volunteering",
    "cycling",
    "public_transport",
];

/// Screens submissions before they reach a human reviewer.
pub struct SubmissionValidator {
    registry: Arc<ActivityTypeRegistry>,
}

impl SubmissionValidator {
    pub fn new(registry: Arc<ActivityTypeRegistry>) -> Self {
        Self { registry }
    }

    /// Validate a submission against the wall clock.
    pub fn validate(
        &self,
        submission: &ActivitySubmission,
        existing: &[ActivityRecord],
    ) -> ValidationVerdict {
        self.validate_at(submission, existing, Utc::now())
    }

    /// Validate a submission with an explicit "now" so tests can pin the
    /// future-date and frequency windows.
    ///
    /// All checks run unconditionally; each contributes independently to
    /// the errors/warnings/flags lists. `existing` is the submitter's own
    /// activity history, used for the duplicate and frequency checks.
    pub fn validate_at(
        &self,
        submission: &ActivitySubmission,
        existing: &[ActivityRecord],
        now: DateTime<Utc>,
    ) -> ValidationVerdict {
        let mut flags = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        let description = submission.description.trim();
        if description.is_empty() {
            flags.push(ValidationFlag::MissingDescription);
            errors.push("Description is required".to_string());
        } else if description.chars().count() < MIN_DESCRIPTION_LENGTH {
            flags.push(ValidationFlag::ShortDescription);
            warnings.push("Description is very short. Please provide more details.".to_string());
        }

        let has_photo = submission
            .photo_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
            || submission.photo_attached;
        if !has_photo {
            flags.push(ValidationFlag::MissingPhoto);
            warnings.push("Consider adding a photo as proof of your activity.".to_string());
        }

        let amount = submission.amount();
        if amount > self.registry.daily_ceiling(&submission.activity_type) {
            flags.push(ValidationFlag::ExcessiveQuantity);
            warnings.push(format!(
                "The quantity ({}) seems unusually high for a single day. Please verify.",
                amount
            ));
        }

        let today = now.date_naive();
        if let Some(date) = submission.activity_date {
            if date > today {
                flags.push(ValidationFlag::FutureDate);
                errors.push("Activity date cannot be in the future.".to_string());
            }

            let duplicate = existing.iter().any(|a| {
                a.activity_type == submission.activity_type && a.activity_date == date
            });
            if duplicate {
                flags.push(ValidationFlag::DuplicateSubmission);
                warnings
                    .push("You already have a similar activity logged for this date.".to_string());
            }
        }

        let week_ago = today - Duration::days(7);
        let recent = existing
            .iter()
            .filter(|a| a.activity_date > week_ago)
            .count();
        if recent >= SUSPICIOUS_WEEKLY_COUNT {
            flags.push(ValidationFlag::SuspiciousPattern);
            warnings.push("High submission frequency detected. Manager review recommended.".to_string());
        }

        if OUTDOOR_ACTIVITIES.contains(&submission.activity_type.as_str())
            && submission.location.as_deref().map_or(true, str::is_empty)
        {
            flags.push(ValidationFlag::MissingLocation);
            warnings.push("Location is recommended for outdoor activities.".to_string());
        }

        let requires_review = flags.iter().any(|f| f.requires_review());
        ValidationVerdict {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            flags,
            requires_review,
        }
    }

    /// Lightweight pre-check run before the full validator, keyed by form
    /// field name for inline display. Independent of the flag system.
    pub fn required_fields(&self, submission: &ActivitySubmission) -> RequiredFieldsCheck {
        let mut field_errors = BTreeMap::new();

        if submission.activity_type.is_empty() {
            field_errors.insert(
                "activity_type".to_string(),
                "Please select an activity type".to_string(),
            );
        }
        if submission.description.trim().is_empty() {
            field_errors.insert(
                "description".to_string(),
                "Description is required".to_string(),
            );
        }
        if submission.amount() <= 0.0 {
            field_errors.insert(
                "quantity".to_string(),
                "Please enter a valid quantity/hours".to_string(),
            );
        }
        if submission.activity_date.is_none() {
            field_errors.insert(
                "activity_date".to_string(),
                "Please select a date".to_string(),
            );
        }

        RequiredFieldsCheck {
            is_valid: field_errors.is_empty(),
            field_errors,
        }
    }
}
