// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use ecotrack_core::{ActivityRecord, ActivityStatus, ActivitySubmission};

/// Build a calendar date; panics on invalid input (test fixtures only).
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a stored record with the given status and pre-computed figures.
#[allow(dead_code)]
#[allow(clippy::too_many_arguments)]
pub fn record(
    id: &str,
    user_id: &str,
    activity_type: &str,
    quantity: f64,
    co2_saved: f64,
    impact_score: f64,
    activity_date: NaiveDate,
    status: ActivityStatus,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        activity_type: activity_type.to_string(),
        description: format!("Test activity {}", id),
        quantity: Some(quantity),
        hours: None,
        activity_date,
        location: None,
        photo_url: None,
        status,
        co2_saved: Some(co2_saved),
        impact_score: Some(impact_score),
        validation_flags: Vec::new(),
        reviewer_comment: None,
        reviewed_at: None,
    }
}

/// Shorthand for an approved record.
#[allow(dead_code)]
pub fn approved(
    id: &str,
    user_id: &str,
    activity_type: &str,
    quantity: f64,
    co2_saved: f64,
    impact_score: f64,
    activity_date: NaiveDate,
) -> ActivityRecord {
    record(
        id,
        user_id,
        activity_type,
        quantity,
        co2_saved,
        impact_score,
        activity_date,
        ActivityStatus::Approved,
    )
}

/// Build a well-formed submission candidate.
#[allow(dead_code)]
pub fn submission(
    activity_type: &str,
    description: &str,
    quantity: f64,
    activity_date: NaiveDate,
) -> ActivitySubmission {
    ActivitySubmission {
        activity_type: activity_type.to_string(),
        description: description.to_string(),
        quantity: Some(quantity),
        hours: None,
        activity_date: Some(activity_date),
        location: Some("HQ".to_string()),
        photo_url: None,
        photo_attached: true,
    }
}
