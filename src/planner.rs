// ABOUTME: Planner facade chaining energy, macro, meal, and portion stages into a full plan
// ABOUTME: Provides a phase-ordered session for interactive callers and parallel batch planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Planner
//!
//! [`NutritionPlanner`] owns a validated [`PlannerConfig`] and exposes the two
//! calculation phases:
//!
//! 1. [`NutritionPlanner::compute_energy_profile`]: BMI, BMR, maintenance
//!    energy, and day totals
//! 2. [`NutritionPlanner::compute_full_plan`]: macro targets, meal split, and
//!    food portions for both day types
//!
//! Both are pure given the configuration, so repeated calls with the same
//! inputs return identical plans and a shared planner can serve many threads.
//! Interactive callers that run the phases as separate user actions use a
//! [`PlanSession`], which refuses phase 2 until phase 1 has succeeded.

use crate::errors::{AppError, AppResult};
use nutriplan_core::models::{
    DayCoefficients, DayPlan, DayType, EnergyProfile, MacroTargets, NutritionPlan, Profile,
};
use nutriplan_intelligence::config::PlannerConfig;
use nutriplan_intelligence::{
    compute_day_targets, compute_energy_profile, distribute_meals, resolve_meal_portions,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// One entry of a batch planning request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Person to plan for
    pub profile: Profile,
    /// Per-kilogram coefficients, configuration defaults when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<DayCoefficients>,
}

/// Entry point for plan calculations
#[derive(Debug, Clone)]
pub struct NutritionPlanner {
    config: Arc<PlannerConfig>,
}

impl NutritionPlanner {
    /// Create a planner from a configuration
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the configuration fails validation.
    pub fn new(config: PlannerConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Coefficients from the configuration, for callers that supply none
    #[must_use]
    pub fn default_coefficients(&self) -> DayCoefficients {
        self.config.macros.default_coefficients
    }

    /// Phase 1: energy expenditure for a profile
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an invalid profile.
    pub fn compute_energy_profile(&self, profile: &Profile) -> AppResult<EnergyProfile> {
        compute_energy_profile(profile, &self.config.energy)
    }

    /// Phase 2: complete plan for both day types
    ///
    /// Runs phase 1 internally; use a [`PlanSession`] to reuse an earlier
    /// phase 1 result.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an invalid profile or `VALUE_OUT_OF_RANGE`
    /// for a negative coefficient.
    #[instrument(skip_all, fields(gender = %profile.gender, weight_kg = profile.weight_kg))]
    pub fn compute_full_plan(
        &self,
        profile: &Profile,
        coefficients: &DayCoefficients,
    ) -> AppResult<NutritionPlan> {
        coefficients.validate()?;
        let energy = self.compute_energy_profile(profile)?;
        Ok(self.assemble_plan(profile, energy, coefficients))
    }

    /// Plan many independent requests in parallel
    ///
    /// Results keep request order; one failing request does not affect the
    /// others.
    #[must_use]
    pub fn plan_batch(&self, requests: &[PlanRequest]) -> Vec<AppResult<NutritionPlan>> {
        let defaults = self.default_coefficients();
        let results: Vec<AppResult<NutritionPlan>> = requests
            .par_iter()
            .map(|request| {
                let coefficients = request.coefficients.unwrap_or(defaults);
                self.compute_full_plan(&request.profile, &coefficients)
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(requests = requests.len(), failed, "Batch planning complete");
        results
    }

    /// Start a two-phase session
    #[must_use]
    pub fn session(&self) -> PlanSession<'_> {
        PlanSession {
            planner: self,
            base: None,
        }
    }

    fn assemble_plan(
        &self,
        profile: &Profile,
        energy: EnergyProfile,
        coefficients: &DayCoefficients,
    ) -> NutritionPlan {
        let targets = compute_day_targets(profile, coefficients, &self.config.macros);
        let plan = NutritionPlan {
            profile: *profile,
            energy,
            coefficients: *coefficients,
            training: self.plan_day(DayType::Training, *targets.for_day(DayType::Training)),
            rest: self.plan_day(DayType::Rest, *targets.for_day(DayType::Rest)),
        };

        let skipped = plan.training.skipped().count() + plan.rest.skipped().count();
        info!(
            training_day_total = plan.energy.training_day_total,
            rest_day_total = plan.energy.rest_day_total,
            skipped_foods = skipped,
            "Nutrition plan computed"
        );
        plan
    }

    fn plan_day(&self, day_type: DayType, targets: MacroTargets) -> DayPlan {
        let tables = &self.config.reference_tables;
        let meals: Vec<_> = distribute_meals(&targets, tables.meal_ratios(day_type))
            .iter()
            .map(|meal| resolve_meal_portions(meal, tables))
            .collect();

        debug!(day_type = %day_type, meals = meals.len(), "Planned day");

        DayPlan {
            day_type,
            targets,
            macro_energy_kcal: targets.energy_kcal(),
            macro_percentages: targets.percentages(),
            meals,
        }
    }
}

/// Phase-ordered planning for one profile
///
/// Holds the phase 1 result so phase 2 can be rerun with different
/// coefficients without recomputing energy figures.
#[derive(Debug)]
pub struct PlanSession<'a> {
    planner: &'a NutritionPlanner,
    base: Option<(Profile, EnergyProfile)>,
}

impl PlanSession<'_> {
    /// Run phase 1 and remember the result
    ///
    /// A failed call clears any earlier result.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an invalid profile.
    pub fn compute_base(&mut self, profile: &Profile) -> AppResult<EnergyProfile> {
        self.base = None;
        let energy = self.planner.compute_energy_profile(profile)?;
        self.base = Some((*profile, energy));
        Ok(energy)
    }

    /// Phase 1 result, if any
    #[must_use]
    pub fn energy_profile(&self) -> Option<&EnergyProfile> {
        self.base.as_ref().map(|(_, energy)| energy)
    }

    /// Run phase 2 for the profile from [`PlanSession::compute_base`]
    ///
    /// # Errors
    ///
    /// Returns `MISSING_PREREQUISITE` if phase 1 has not succeeded, or
    /// `VALUE_OUT_OF_RANGE` for a negative coefficient.
    pub fn compute_full_plan(&self, coefficients: &DayCoefficients) -> AppResult<NutritionPlan> {
        let (profile, energy) = self.base.as_ref().ok_or_else(|| {
            AppError::missing_prerequisite(
                "Energy profile not computed: call compute_base before compute_full_plan",
            )
        })?;
        coefficients.validate()?;
        Ok(self.planner.assemble_plan(profile, *energy, coefficients))
    }

    /// Forget the phase 1 result
    pub fn reset(&mut self) {
        self.base = None;
    }
}
