// ABOUTME: Configuration management: planner settings from defaults, environment, and table files
// ABOUTME: Produces a validated PlannerConfig that the planner receives by injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Nutriplan
//!
//! - **Environment**: `NUTRIPLAN_*` overrides for algorithm selection and macro coefficients
//! - **Tables**: reference table files in JSON or YAML
//!
//! Loading order is defaults, then a table file (if `NUTRIPLAN_TABLES_PATH`
//! names one), then scalar environment overrides. The result is validated
//! once; invalid configuration never reaches the planner.

/// Environment variable overrides
pub mod environment;

/// Reference table files (JSON or YAML)
pub mod tables_file;

pub use environment::{apply_env_overrides, load, load_with};
pub use tables_file::{load_reference_tables, TableFileFormat};

pub use nutriplan_intelligence::config::{
    BmrConfig, ConfigError, EnergyConfig, MacroConfig, MealRatioTables, PlannerConfig,
    ReferenceTables, ShareTotals, TrainingBonusConfig,
};
