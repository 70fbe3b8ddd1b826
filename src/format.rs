// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for display formatting.

/// Format a CO₂ amount (kg) for display, switching to tonnes at 1000 kg.
pub fn format_co2(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}t", value / 1000.0)
    } else {
        format!("{:.1}kg", value)
    }
}

/// Format a count with K/M suffixes for dashboard tiles.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}
