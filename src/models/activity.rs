// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity records and submission candidates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::verdict::ValidationFlag;

/// Review lifecycle of a stored activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Approved,
    Rejected,
    /// Catch-all for unrecognized status strings in stored data so one
    /// corrupt record cannot fail a whole dashboard batch. Never counts
    /// as approved.
    #[serde(other)]
    Unknown,
}

/// Stored activity record.
///
/// Created by an employee submission, then transitioned to approved or
/// rejected by a reviewer. `co2_saved` and `impact_score` are computed
/// at submission time; only approved records count toward aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    /// Submitting user (owner)
    pub user_id: String,
    /// Key into the activity type registry
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    /// Amount in the activity type's unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Alias for quantity, used by older records when the unit is hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    /// Calendar date the activity took place
    pub activity_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub status: ActivityStatus,
    /// kg CO₂ saved, computed at submission time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_saved: Option<f64>,
    /// Impact score, computed at submission time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
    /// Flags attached by the validator at submission time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_flags: Vec<ValidationFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comment: Option<String>,
    /// Review timestamp (ISO 8601), set by the approval workflow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
}

impl ActivityRecord {
    /// Quantity with the hours alias applied; 0 when neither is present.
    pub fn amount(&self) -> f64 {
        self.quantity.or(self.hours).unwrap_or(0.0)
    }

    pub fn is_approved(&self) -> bool {
        self.status == ActivityStatus::Approved
    }
}

/// Candidate activity as it arrives from the submission form, before
/// validation and impact computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitySubmission {
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Photo staged in the form but not yet uploaded
    #[serde(default)]
    pub photo_attached: bool,
}

impl ActivitySubmission {
    /// Quantity with the hours alias applied; 0 when neither is present.
    pub fn amount(&self) -> f64 {
        self.quantity.or(self.hours).unwrap_or(0.0)
    }
}
