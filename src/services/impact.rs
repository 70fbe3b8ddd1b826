// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Impact calculation service.
//!
//! Converts submissions into CO₂/impact figures and aggregates stored
//! activities into dashboard totals, per-type breakdowns, monthly trends,
//! and leaderboard rankings. Every operation is pure and tolerant of
//! partial data: unknown activity types fall back to registry defaults
//! and malformed records contribute zero instead of failing the whole
//! aggregate, so dashboards render even over imperfect history.

use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    ActivityRecord, ActivitySubmission, MonthlyTrendPoint, TypeStats, UserTotals,
};
use crate::registry::{ActivityTypeRegistry, Unit};

/// Computes per-activity and aggregate impact figures.
pub struct ImpactCalculator {
    registry: Arc<ActivityTypeRegistry>,
}

impl ImpactCalculator {
    pub fn new(registry: Arc<ActivityTypeRegistry>) -> Self {
        Self { registry }
    }

    /// kg CO₂ saved by a single activity, rounded to 2 decimal places.
    ///
    /// Unknown types use factor 0. Quantity is taken as-is; rejecting
    /// invalid quantities is the validator's job.
    pub fn co2_saved(&self, activity_type: &str, quantity: f64) -> f64 {
        round2(self.registry.co2_factor(activity_type) * quantity)
    }

    /// Impact score for a single activity, rounded to 1 decimal place.
    ///
    /// Unknown types use weight 1.
    pub fn impact_score(&self, activity_type: &str, quantity: f64) -> f64 {
        round1(self.registry.impact_weight(activity_type) * quantity)
    }

    /// Computed (co2_saved, impact_score) pair for a submission, merged
    /// into the record before it is handed to storage.
    pub fn compute_for_submission(&self, submission: &ActivitySubmission) -> (f64, f64) {
        let amount = submission.amount();
        (
            self.co2_saved(&submission.activity_type, amount),
            self.impact_score(&submission.activity_type, amount),
        )
    }

    /// Total hours over approved activities whose type is measured in
    /// hours. Other types contribute zero regardless of quantity.
    pub fn total_csr_hours(&self, activities: &[ActivityRecord]) -> f64 {
        activities
            .iter()
            .filter(|a| a.is_approved())
            .filter(|a| self.registry.unit(&a.activity_type) == Some(Unit::Hours))
            .map(|a| a.amount())
            .sum()
    }

    /// Sum of stored `co2_saved` over approved activities.
    pub fn total_co2_saved(&self, activities: &[ActivityRecord]) -> f64 {
        activities
            .iter()
            .filter(|a| a.is_approved())
            .map(|a| a.co2_saved.unwrap_or(0.0))
            .sum()
    }

    /// Sum of stored `impact_score` over approved activities.
    pub fn total_impact_score(&self, activities: &[ActivityRecord]) -> f64 {
        activities
            .iter()
            .filter(|a| a.is_approved())
            .map(|a| a.impact_score.unwrap_or(0.0))
            .sum()
    }

    /// Per-type breakdown over approved activities.
    ///
    /// Every registered type gets an entry, all-zero when nothing was
    /// logged for it; activities of unregistered types are skipped.
    pub fn stats_by_type(&self, activities: &[ActivityRecord]) -> HashMap<String, TypeStats> {
        let mut stats: HashMap<String, TypeStats> = self
            .registry
            .definitions()
            .map(|(id, _)| (id.to_string(), TypeStats::default()))
            .collect();

        for activity in activities.iter().filter(|a| a.is_approved()) {
            if let Some(entry) = stats.get_mut(&activity.activity_type) {
                entry.count += 1;
                entry.total_quantity += activity.amount();
                entry.total_co2 += activity.co2_saved.unwrap_or(0.0);
                entry.total_impact += activity.impact_score.unwrap_or(0.0);
            }
        }

        stats
    }

    /// Trend points for the `months_back` calendar months ending at the
    /// current month, oldest first.
    pub fn monthly_trends(
        &self,
        activities: &[ActivityRecord],
        months_back: u32,
    ) -> Vec<MonthlyTrendPoint> {
        self.monthly_trends_at(activities, months_back, Utc::now())
    }

    /// Trend points for the `months_back` calendar months ending at `now`,
    /// oldest first. Months with no qualifying activities appear with
    /// all-zero fields.
    pub fn monthly_trends_at(
        &self,
        activities: &[ActivityRecord],
        months_back: u32,
        now: DateTime<Utc>,
    ) -> Vec<MonthlyTrendPoint> {
        let today = now.date_naive();
        let mut trends = Vec::with_capacity(months_back as usize);

        for back in (0..months_back).rev() {
            let (year, month) = shift_month(today.year(), today.month(), back);

            let monthly: Vec<&ActivityRecord> = activities
                .iter()
                .filter(|a| {
                    a.is_approved()
                        && a.activity_date.year() == year
                        && a.activity_date.month() == month
                })
                .collect();

            trends.push(MonthlyTrendPoint {
                month: month_abbrev(month).to_string(),
                year,
                activity_count: monthly.len() as u32,
                co2_saved: monthly.iter().map(|a| a.co2_saved.unwrap_or(0.0)).sum(),
                impact_score: monthly.iter().map(|a| a.impact_score.unwrap_or(0.0)).sum(),
                csr_hours: monthly
                    .iter()
                    .filter(|a| self.registry.unit(&a.activity_type) == Some(Unit::Hours))
                    .map(|a| a.amount())
                    .sum(),
            });
        }

        trends
    }

    /// Approved per-user totals ranked by impact score, highest first.
    /// Ties break on user id so the ordering is deterministic.
    pub fn leaderboard(&self, activities: &[ActivityRecord]) -> Vec<UserTotals> {
        let mut by_user: HashMap<&str, UserTotals> = HashMap::new();

        for activity in activities.iter().filter(|a| a.is_approved()) {
            let entry = by_user
                .entry(activity.user_id.as_str())
                .or_insert_with(|| UserTotals {
                    user_id: activity.user_id.clone(),
                    activity_count: 0,
                    co2_saved: 0.0,
                    impact_score: 0.0,
                });
            entry.activity_count += 1;
            entry.co2_saved += activity.co2_saved.unwrap_or(0.0);
            entry.impact_score += activity.impact_score.unwrap_or(0.0);
        }

        let mut totals: Vec<UserTotals> = by_user.into_values().collect();
        totals.sort_by(|a, b| {
            b.impact_score
                .partial_cmp(&a.impact_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        totals
    }
}

/// Round to 2 decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Walk `back` calendar months from year/month.
fn shift_month(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
