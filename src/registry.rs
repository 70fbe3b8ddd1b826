// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity type registry: per-type conversion factors and display metadata.
//!
//! The registry is configuration data, loaded (or seeded) once at startup
//! and immutable afterwards. Lookups never fail: an unknown activity type
//! falls back to neutral defaults (CO₂ factor 0, impact weight 1) so a
//! single bad record cannot take down aggregate reporting. Unknown lookups
//! are counted and logged so data-quality problems stay visible.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ceiling applied to types with no entry in the daily-ceiling table.
pub const DEFAULT_DAILY_CEILING: f64 = 100.0;

/// Unit of measure for an activity type's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Hours,
    Kg,
    #[serde(rename = "kWh")]
    KWh,
    Liters,
    Trees,
    Km,
    Sheets,
    Uses,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Unit::Hours => "hours",
            Unit::Kg => "kg",
            Unit::KWh => "kWh",
            Unit::Liters => "liters",
            Unit::Trees => "trees",
            Unit::Km => "km",
            Unit::Sheets => "sheets",
            Unit::Uses => "uses",
        };
        f.write_str(s)
    }
}

/// Static definition of one activity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTypeDefinition {
    /// Human-readable name
    pub label: String,
    /// Unit the quantity is measured in
    pub unit: Unit,
    /// kg CO₂ avoided per unit of quantity (0 for types with no direct CO₂ effect)
    #[serde(default)]
    pub co2_factor: f64,
    /// Scoring multiplier per unit of quantity
    #[serde(default = "default_impact_weight")]
    pub impact_weight: f64,
    /// Icon name for the UI, passed through untouched
    #[serde(default)]
    pub icon: String,
    /// Display color, passed through untouched
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

fn default_impact_weight() -> f64 {
    1.0
}

/// On-disk registry format.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    types: HashMap<String, ActivityTypeDefinition>,
    #[serde(default)]
    daily_ceilings: HashMap<String, f64>,
}

/// Immutable lookup table for activity type definitions and validation
/// ceilings. Shared via `Arc` between the calculator and the validator.
#[derive(Debug)]
pub struct ActivityTypeRegistry {
    types: HashMap<String, ActivityTypeDefinition>,
    daily_ceilings: HashMap<String, f64>,
    unknown_lookups: AtomicU64,
}

impl ActivityTypeRegistry {
    /// Load registry definitions from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| RegistryError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load registry definitions from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(json_data)
            .map_err(|e| RegistryError::ParseError(e.to_string()))?;

        for (id, def) in &file.types {
            if def.co2_factor < 0.0 || !def.co2_factor.is_finite() {
                return Err(RegistryError::InvalidDefinition {
                    activity_type: id.clone(),
                    reason: format!("co2_factor must be non-negative, got {}", def.co2_factor),
                });
            }
            if def.impact_weight <= 0.0 || !def.impact_weight.is_finite() {
                return Err(RegistryError::InvalidDefinition {
                    activity_type: id.clone(),
                    reason: format!("impact_weight must be positive, got {}", def.impact_weight),
                });
            }
        }

        tracing::info!(count = file.types.len(), "Loaded activity types");
        Ok(Self {
            types: file.types,
            daily_ceilings: file.daily_ceilings,
            unknown_lookups: AtomicU64::new(0),
        })
    }

    /// The built-in activity catalog.
    pub fn seed() -> Self {
        let mut types = HashMap::new();
        let mut def = |id: &str,
                       label: &str,
                       unit: Unit,
                       co2_factor: f64,
                       impact_weight: f64,
                       icon: &str,
                       color: &str,
                       description: &str| {
            types.insert(
                id.to_string(),
                ActivityTypeDefinition {
                    label: label.to_string(),
                    unit,
                    co2_factor,
                    impact_weight,
                    icon: icon.to_string(),
                    color: color.to_string(),
                    description: description.to_string(),
                },
            );
        };

        def(
            "volunteering",
            "Volunteering",
            Unit::Hours,
            0.0,
            10.0,
            "VolunteerActivism",
            "#8b5cf6",
            "Community service and volunteer work",
        );
        def(
            "recycling",
            "Recycling",
            Unit::Kg,
            2.5,
            5.0,
            "Recycling",
            "#10b981",
            "Recycling materials (paper, plastic, glass, metal)",
        );
        def(
            "energy_saving",
            "Energy Saving",
            Unit::KWh,
            0.5,
            8.0,
            "BoltOutlined",
            "#f59e0b",
            "Reducing electricity consumption",
        );
        def(
            "water_saving",
            "Water Conservation",
            Unit::Liters,
            0.3,
            4.0,
            "WaterDrop",
            "#3b82f6",
            "Reducing water usage",
        );
        def(
            "tree_planting",
            "Tree Planting",
            Unit::Trees,
            22.0,
            15.0,
            "Park",
            "#059669",
            "Planting trees and vegetation",
        );
        def(
            "composting",
            "Composting",
            Unit::Kg,
            0.5,
            4.0,
            "Compost",
            "#84cc16",
            "Composting organic waste",
        );
        def(
            "public_transport",
            "Public Transport",
            Unit::Km,
            0.15,
            3.0,
            "DirectionsBus",
            "#6366f1",
            "Using public transportation instead of driving",
        );
        def(
            "cycling",
            "Cycling/Walking",
            Unit::Km,
            0.21,
            5.0,
            "DirectionsBike",
            "#ec4899",
            "Cycling or walking instead of driving",
        );
        def(
            "carpooling",
            "Carpooling",
            Unit::Km,
            0.1,
            3.0,
            "Groups",
            "#14b8a6",
            "Sharing rides with colleagues",
        );
        def(
            "paperless",
            "Paperless Initiative",
            Unit::Sheets,
            0.01,
            2.0,
            "Description",
            "#0ea5e9",
            "Reducing paper usage",
        );
        def(
            "reusable_items",
            "Reusable Items",
            Unit::Uses,
            0.5,
            3.0,
            "ShoppingBag",
            "#f97316",
            "Using reusable bags, bottles, containers",
        );
        def(
            "food_waste_reduction",
            "Food Waste Reduction",
            Unit::Kg,
            2.5,
            6.0,
            "NoFood",
            "#ef4444",
            "Reducing food waste",
        );
        def(
            "renewable_energy",
            "Renewable Energy",
            Unit::KWh,
            0.4,
            7.0,
            "SolarPower",
            "#fbbf24",
            "Using renewable energy sources",
        );
        def(
            "education",
            "Sustainability Education",
            Unit::Hours,
            0.0,
            8.0,
            "School",
            "#a855f7",
            "Teaching or learning about sustainability",
        );
        drop(def);

        let daily_ceilings = [
            ("recycling", 100.0),
            ("energy_saving", 500.0),
            ("water_saving", 1000.0),
            ("tree_planting", 50.0),
            ("composting", 50.0),
            ("public_transport", 200.0),
            ("cycling", 100.0),
            ("carpooling", 200.0),
            ("paperless", 1000.0),
            ("reusable_items", 50.0),
            ("food_waste_reduction", 50.0),
            ("renewable_energy", 500.0),
            ("volunteering", 12.0),
            ("education", 8.0),
        ]
        .into_iter()
        .map(|(id, ceiling)| (id.to_string(), ceiling))
        .collect();

        Self {
            types,
            daily_ceilings,
            unknown_lookups: AtomicU64::new(0),
        }
    }

    /// Look up a definition, counting unknown types.
    fn lookup(&self, activity_type: &str) -> Option<&ActivityTypeDefinition> {
        let def = self.types.get(activity_type);
        if def.is_none() {
            self.unknown_lookups.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(activity_type, "Unknown activity type, using defaults");
        }
        def
    }

    /// Definition for a type, if registered.
    pub fn get(&self, activity_type: &str) -> Option<&ActivityTypeDefinition> {
        self.types.get(activity_type)
    }

    /// kg CO₂ saved per unit of quantity. Unknown types contribute nothing.
    pub fn co2_factor(&self, activity_type: &str) -> f64 {
        self.lookup(activity_type).map_or(0.0, |d| d.co2_factor)
    }

    /// Impact score per unit of quantity. Unknown types score quantity as-is.
    pub fn impact_weight(&self, activity_type: &str) -> f64 {
        self.lookup(activity_type).map_or(1.0, |d| d.impact_weight)
    }

    /// Unit of measure for a type, if registered.
    pub fn unit(&self, activity_type: &str) -> Option<Unit> {
        self.types.get(activity_type).map(|d| d.unit)
    }

    /// Maximum plausible single-day quantity for a type.
    pub fn daily_ceiling(&self, activity_type: &str) -> f64 {
        self.daily_ceilings
            .get(activity_type)
            .copied()
            .unwrap_or(DEFAULT_DAILY_CEILING)
    }

    /// Iterate all registered types.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &ActivityTypeDefinition)> {
        self.types.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// How many lookups hit an unregistered type since construction.
    pub fn unknown_lookups(&self) -> u64 {
        self.unknown_lookups.load(Ordering::Relaxed)
    }
}

/// Errors from registry loading.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse registry JSON: {0}")]
    ParseError(String),

    #[error("Invalid definition for '{activity_type}': {reason}")]
    InvalidDefinition {
        activity_type: String,
        reason: String,
    },
}
