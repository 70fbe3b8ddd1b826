//! Aggregate figures produced by the impact calculator for dashboards
//! and reports.

use serde::{Deserialize, Serialize};

/// Totals for one activity type over approved activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeStats {
    /// Number of approved activities of this type
    pub count: u32,
    /// Sum of quantities (in the type's unit)
    pub total_quantity: f64,
    /// Sum of kg CO₂ saved
    pub total_co2: f64,
    /// Sum of impact scores
    pub total_impact: f64,
}

/// One month in a trend window.
///
/// Months with no qualifying activities still appear, with all-zero
/// fields, so chart axes stay continuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Short English month name ("Jan".."Dec")
    pub month: String,
    pub year: i32,
    /// Number of approved activities in the month
    pub activity_count: u32,
    /// kg CO₂ saved in the month
    pub co2_saved: f64,
    /// Impact score earned in the month
    pub impact_score: f64,
    /// Hours logged for hours-based activity types
    pub csr_hours: f64,
}

/// Per-user approved totals for leaderboard ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTotals {
    pub user_id: String,
    pub activity_count: u32,
    pub co2_saved: f64,
    pub impact_score: f64,
}
