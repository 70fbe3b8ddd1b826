// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod stats;
pub mod verdict;

pub use activity::{ActivityRecord, ActivityStatus, ActivitySubmission};
pub use stats::{MonthlyTrendPoint, TypeStats, UserTotals};
pub use verdict::{FlagSeverity, RequiredFieldsCheck, ValidationFlag, ValidationVerdict};
