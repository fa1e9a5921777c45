// ABOUTME: Planner configuration: energy algorithm, macro defaults, and reference tables
// ABOUTME: Explicitly constructed, validated once, then shared read-only by every calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `energy` - BMR coefficients, energy algorithm selection, training bonuses
//! - `macros` - Default per-kilogram coefficients and rest-day protein policy
//! - `reference_tables` - Meal ratio sets and food density tables
//!
//! A [`PlannerConfig`] is built by the caller (defaults, environment, or a
//! file) and injected into the planner; there is no process-wide singleton.

pub mod energy;
pub mod error;
pub mod macros;
pub mod reference_tables;

pub use energy::{BmrConfig, EnergyConfig, TrainingBonusConfig};
pub use error::ConfigError;
pub use macros::MacroConfig;
pub use reference_tables::{MealRatioTables, ReferenceTables, ShareTotals};

use serde::{Deserialize, Serialize};

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Energy expenditure settings
    #[serde(default)]
    pub energy: EnergyConfig,
    /// Macro target defaults
    #[serde(default)]
    pub macros: MacroConfig,
    /// Meal ratios and food densities
    #[serde(default)]
    pub reference_tables: ReferenceTables,
}

impl PlannerConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found across energy, macro, and
    /// reference table settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.macros.validate()?;
        self.reference_tables.validate()
    }

    /// Replace the reference tables
    #[must_use]
    pub fn with_reference_tables(mut self, tables: ReferenceTables) -> Self {
        self.reference_tables = tables;
        self
    }
}
