// ABOUTME: Command implementations for the nutriplan CLI
// ABOUTME: Each command builds a planner from the loaded configuration and prints its result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, OutputFormat};
use nutriplan::config::{tables_file, PlannerConfig};
use nutriplan::errors::{AppError, AppResult, ErrorResponse};
use nutriplan::models::{DayCoefficients, NutritionPlan, Profile};
use nutriplan::planner::{NutritionPlanner, PlanRequest};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Print the energy summary for a profile
pub fn base(config: PlannerConfig, profile: &Profile, format: OutputFormat) -> AppResult<()> {
    let planner = NutritionPlanner::new(config)?;
    let energy = planner.compute_energy_profile(profile)?;
    display::print(&energy, format, display::energy_text)
}

/// Print the full plan for a profile
pub fn plan(
    config: PlannerConfig,
    profile: &Profile,
    coefficients: &DayCoefficients,
    format: OutputFormat,
) -> AppResult<()> {
    let planner = NutritionPlanner::new(config)?;
    let plan = planner.compute_full_plan(profile, coefficients)?;
    display::print(&plan, format, display::plan_text)
}

/// Outcome of one batch request
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// Position in the request file
    pub index: usize,
    /// Plan, when the request succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<NutritionPlan>,
    /// Error, when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// Plan every request in a file
///
/// All results are printed; the command fails afterwards if any request failed.
pub fn batch(config: PlannerConfig, path: &Path, format: OutputFormat) -> AppResult<()> {
    let requests: Vec<PlanRequest> = tables_file::read_file(path)?;
    info!(path = %path.display(), requests = requests.len(), "Read batch requests");

    let planner = NutritionPlanner::new(config)?;
    let entries: Vec<BatchEntry> = planner
        .plan_batch(&requests)
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(plan) => BatchEntry {
                index,
                plan: Some(plan),
                error: None,
            },
            Err(e) => BatchEntry {
                index,
                plan: None,
                error: Some(e.into()),
            },
        })
        .collect();

    display::print(entries.as_slice(), format, display::batch_text)?;

    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();
    if failed > 0 {
        return Err(AppError::invalid_input(format!(
            "{failed} of {} batch requests failed",
            entries.len()
        )));
    }
    Ok(())
}

/// Print the reference tables in effect
pub fn tables(config: &PlannerConfig, format: OutputFormat) -> AppResult<()> {
    display::print(&config.reference_tables, format, display::tables_text)
}
