// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! EcoTrack core: impact calculation and submission validation.
//!
//! Pure computation over in-memory activity data: converts raw activity
//! submissions into CO₂-saved and impact-score figures, aggregates
//! approved activities into dashboard totals, per-type breakdowns, and
//! monthly trends, and screens submissions for problems before a human
//! reviews them.
//!
//! Persistence, auth, and rendering live in the surrounding services;
//! this crate only turns records into numbers and flags. Nothing here
//! does I/O beyond optionally loading the activity type registry from a
//! JSON file, and nothing throws on bad data — unknown types and
//! malformed records degrade to neutral defaults so dashboards keep
//! rendering.

pub mod format;
pub mod models;
pub mod registry;
pub mod services;

pub use models::{
    ActivityRecord, ActivityStatus, ActivitySubmission, FlagSeverity, MonthlyTrendPoint,
    RequiredFieldsCheck, TypeStats, UserTotals, ValidationFlag, ValidationVerdict,
};
pub use registry::{ActivityTypeDefinition, ActivityTypeRegistry, RegistryError, Unit};
pub use services::{ImpactCalculator, SubmissionValidator};
