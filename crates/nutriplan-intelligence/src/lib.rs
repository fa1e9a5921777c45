// ABOUTME: Nutrition calculation engine: energy, macro targets, meal distribution, food portions
// ABOUTME: Extracted from the main crate so the pure stages compile and test independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Intelligence
//!
//! The calculation engine behind a nutrition plan. Each stage is a pure
//! function of its inputs plus the injected [`config::ReferenceTables`]:
//!
//! ```text
//! Profile -> energy_model -> macro_targets -> meal_distribution -> food_portions
//! ```
//!
//! No stage performs I/O or touches shared mutable state, so concurrent
//! invocations for different profiles need no synchronization.

/// Engine configuration (energy algorithm, macro defaults, reference tables)
pub mod config;

/// BMR, maintenance energy, and training/rest day totals
pub mod energy_model;

/// Reference-food portion resolution for meal targets
pub mod food_portions;

/// Daily carbohydrate, protein, and fat targets
pub mod macro_targets;

/// Allocation of daily targets across meals
pub mod meal_distribution;

pub use config::{ConfigError, EnergyConfig, MacroConfig, PlannerConfig, ReferenceTables};
pub use energy_model::compute_energy_profile;
pub use food_portions::{resolve_meal_portions, resolve_portion, PortionError};
pub use macro_targets::{compute_day_targets, compute_macro_targets, fat_target_grams};
pub use meal_distribution::distribute_meals;

/// Round half away from zero to a non-negative whole number
///
/// Every stage rounds at the point of computation; negative inputs clamp to zero.
pub(crate) fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
