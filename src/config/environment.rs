// ABOUTME: Environment configuration: NUTRIPLAN_* variables layered over planner defaults
// ABOUTME: Variable lookup is injectable so overrides can be tested without touching the process env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based planner configuration

use super::tables_file::load_reference_tables;
use crate::errors::{AppError, AppResult};
use nutriplan_core::models::EnergyAlgorithm;
use nutriplan_intelligence::config::{ConfigError, PlannerConfig};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Energy algorithm (`adjusted_division` or `unadjusted_multiplication`)
pub const ENERGY_ALGORITHM: &str = "NUTRIPLAN_ENERGY_ALGORITHM";
/// Path to a JSON or YAML reference table file
pub const TABLES_PATH: &str = "NUTRIPLAN_TABLES_PATH";
/// Default training-day carbohydrate grams per kg
pub const TRAINING_CARBS_PER_KG: &str = "NUTRIPLAN_TRAINING_CARBS_PER_KG";
/// Default training-day protein grams per kg
pub const TRAINING_PROTEIN_PER_KG: &str = "NUTRIPLAN_TRAINING_PROTEIN_PER_KG";
/// Default rest-day carbohydrate grams per kg
pub const REST_CARBS_PER_KG: &str = "NUTRIPLAN_REST_CARBS_PER_KG";
/// Default rest-day protein grams per kg
pub const REST_PROTEIN_PER_KG: &str = "NUTRIPLAN_REST_PROTEIN_PER_KG";
/// Copy training-day protein grams to rest days (`true`/`false`)
pub const REST_PROTEIN_MIRRORS_TRAINING: &str = "NUTRIPLAN_REST_PROTEIN_MIRRORS_TRAINING";

/// Load planner configuration from the process environment
///
/// # Errors
///
/// Returns an error if a variable fails to parse, the table file cannot be
/// read or parsed, or the resulting configuration fails validation.
pub fn load() -> AppResult<PlannerConfig> {
    load_with(|key| env::var(key).ok())
}

/// Load planner configuration using `lookup` for variable values
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with<F>(lookup: F) -> AppResult<PlannerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    info!("Loading planner configuration");

    let mut config = PlannerConfig::default();
    if let Some(path) = lookup(TABLES_PATH).filter(|p| !p.trim().is_empty()) {
        config.reference_tables = load_reference_tables(Path::new(&path))?;
    }

    let config = apply_env_overrides(config, &lookup)?;
    config.validate()?;

    debug!(
        algorithm = %config.energy.algorithm,
        rest_protein_mirrors_training = config.macros.rest_protein_mirrors_training,
        training_meals = config.reference_tables.meal_ratios.training.len(),
        rest_meals = config.reference_tables.meal_ratios.rest.len(),
        "Planner configuration loaded"
    );
    Ok(config)
}

/// Apply scalar `NUTRIPLAN_*` overrides to an existing configuration
///
/// Unset variables leave the corresponding field untouched. The table path
/// is not handled here; see [`load_with`].
///
/// # Errors
///
/// Returns `CONFIG_INVALID` naming the variable if a value fails to parse.
pub fn apply_env_overrides<F>(mut config: PlannerConfig, lookup: F) -> AppResult<PlannerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENERGY_ALGORITHM) {
        config.energy.algorithm = EnergyAlgorithm::from_str(&value).map_err(|e| {
            AppError::from(ConfigError::Parse(format!("{ENERGY_ALGORITHM}: {}", e.message)))
        })?;
    }

    let coefficients = &mut config.macros.default_coefficients;
    for (key, slot) in [
        (TRAINING_CARBS_PER_KG, &mut coefficients.training.carbs_per_kg),
        (TRAINING_PROTEIN_PER_KG, &mut coefficients.training.protein_per_kg),
        (REST_CARBS_PER_KG, &mut coefficients.rest.carbs_per_kg),
        (REST_PROTEIN_PER_KG, &mut coefficients.rest.protein_per_kg),
    ] {
        if let Some(value) = lookup(key) {
            *slot = parse_value::<f64>(key, &value)?;
        }
    }

    if let Some(value) = lookup(REST_PROTEIN_MIRRORS_TRAINING) {
        config.macros.rest_protein_mirrors_training =
            parse_bool(REST_PROTEIN_MIRRORS_TRAINING, &value)?;
    }

    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{key}: cannot parse '{value}'")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!(
            "{key}: expected true or false, got '{value}'"
        ))),
    }
}
