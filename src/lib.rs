// ABOUTME: Main library entry point for the Nutriplan nutrition planning engine
// ABOUTME: Wires configuration, logging, and the planner facade over the calculation crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Personalized daily nutrition planning. From a body profile the planner
//! derives energy expenditure, daily macronutrient targets for training and
//! rest days, their split across meals, and portions of reference foods that
//! meet each meal's targets.
//!
//! ## Architecture
//!
//! - **`nutriplan-core`**: error types, domain models, nutrition constants
//! - **`nutriplan-intelligence`**: the pure calculation stages and their configuration
//! - **this crate**: configuration loading, logging, the planner facade, and the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan::config::PlannerConfig;
//! use nutriplan::models::{ExperienceLevel, Gender, Profile};
//! use nutriplan::planner::NutritionPlanner;
//!
//! # fn main() -> nutriplan::errors::AppResult<()> {
//! let planner = NutritionPlanner::new(PlannerConfig::default())?;
//! let profile = Profile {
//!     gender: Gender::Female,
//!     height_cm: 165.0,
//!     weight_kg: 58.0,
//!     age_years: 31,
//!     experience_level: ExperienceLevel::Intermediate,
//!     aerobic_expenditure_kcal: 150.0,
//! };
//! let plan = planner.compute_full_plan(&profile, &planner.default_coefficients())?;
//! println!("training day: {} kcal", plan.energy.training_day_total);
//! # Ok(())
//! # }
//! ```

/// Planner configuration loading from environment variables and table files
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Planner facade, two-phase session, and batch planning
pub mod planner;

/// Domain models re-exported from `nutriplan-core`
pub mod models {
    pub use nutriplan_core::models::*;
}

/// Calculation stages re-exported from `nutriplan-intelligence`
pub mod intelligence {
    pub use nutriplan_intelligence::{
        compute_day_targets, compute_energy_profile, compute_macro_targets, distribute_meals,
        energy_model, fat_target_grams, food_portions, resolve_meal_portions, resolve_portion,
        PortionError,
    };
}
