// ABOUTME: Energy expenditure model: BMR, maintenance energy, and training/rest day totals
// ABOUTME: Algorithm-selectable (division vs multiplication) with rounding at every step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! Derives the energy side of a plan from a [`Profile`]:
//!
//! 1. BMR from a Mifflin-St Jeor style equation, rounded to whole kcal
//! 2. Maintenance energy from the rounded BMR via the configured [`EnergyAlgorithm`]
//! 3. Training and rest day totals from maintenance, the experience-level
//!    bonus, and aerobic expenditure
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! [`EnergyAlgorithm`]: nutriplan_core::models::EnergyAlgorithm

use crate::config::{BmrConfig, EnergyConfig};
use crate::round_non_negative;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{EnergyProfile, Profile};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Maintenance energy and the two day totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTotals {
    /// Energy without training (kcal)
    pub maintenance_energy: u32,
    /// Training day total (kcal)
    pub training_day_total: u32,
    /// Rest day total (kcal)
    pub rest_day_total: u32,
}

/// Calculate unrounded basal metabolic rate
///
/// Formula: BMR = `weight_coef` x kg + `height_coef` x cm + `age_coef` x years + gender constant
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(profile: &Profile, config: &BmrConfig) -> f64 {
    let weight_component = config.weight_coef * profile.weight_kg;
    let height_component = config.height_coef * profile.height_cm;
    let age_component = config.age_coef * f64::from(profile.age_years);

    weight_component + height_component + age_component + config.gender_constant(profile.gender)
}

/// Derive maintenance energy and day totals from a rounded BMR
///
/// Each figure is rounded as soon as it is computed, so the day totals are
/// built on the rounded maintenance energy.
#[must_use]
pub fn derive_energy_totals(
    bmr: u32,
    training_calorie_bonus: u32,
    aerobic_expenditure_kcal: f64,
    config: &EnergyConfig,
) -> EnergyTotals {
    let algorithm = config.algorithm;
    let maintenance_energy = round_non_negative(
        algorithm.maintenance_from_bmr(f64::from(bmr), config.adjustment_factor),
    );

    let rest_base = f64::from(maintenance_energy) + aerobic_expenditure_kcal;
    let training_base = rest_base + f64::from(training_calorie_bonus);

    EnergyTotals {
        maintenance_energy,
        training_day_total: round_non_negative(
            algorithm.scale_day_total(training_base, config.day_total_factor),
        ),
        rest_day_total: round_non_negative(
            algorithm.scale_day_total(rest_base, config.day_total_factor),
        ),
    }
}

/// Compute the full energy profile for a person
///
/// # Errors
///
/// Returns `INVALID_INPUT` if the profile fails validation (non-positive
/// height, weight, or age) or if it yields a non-positive BMR. Nothing is
/// computed for an invalid profile.
pub fn compute_energy_profile(profile: &Profile, config: &EnergyConfig) -> AppResult<EnergyProfile> {
    profile.validate()?;

    let raw_bmr = calculate_bmr(profile, &config.bmr);
    let bmr = raw_bmr.round();
    if bmr < 1.0 {
        return Err(AppError::invalid_input(format!(
            "Invalid profile: basal metabolic rate must be positive, got {raw_bmr:.2}"
        ))
        .with_details(json!({ "field": "bmr", "value": raw_bmr })));
    }
    let bmr = bmr as u32;

    let training_calorie_bonus = config.training_bonus.for_level(profile.experience_level);
    let totals = derive_energy_totals(
        bmr,
        training_calorie_bonus,
        profile.aerobic_expenditure_kcal,
        config,
    );

    debug!(
        algorithm = %config.algorithm,
        raw_bmr,
        bmr,
        maintenance_energy = totals.maintenance_energy,
        training_day_total = totals.training_day_total,
        rest_day_total = totals.rest_day_total,
        "Computed energy profile"
    );

    Ok(EnergyProfile {
        bmi: profile.bmi(),
        bmr,
        maintenance_energy: totals.maintenance_energy,
        training_calorie_bonus,
        aerobic_expenditure_kcal: profile.aerobic_expenditure_kcal,
        training_day_total: totals.training_day_total,
        rest_day_total: totals.rest_day_total,
        algorithm: config.algorithm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{EnergyAlgorithm, ExperienceLevel, Gender};

    fn profile(gender: Gender) -> Profile {
        Profile {
            gender,
            height_cm: 175.0,
            weight_kg: 70.0,
            age_years: 25,
            experience_level: ExperienceLevel::Novice,
            aerobic_expenditure_kcal: 0.0,
        }
    }

    #[test]
    fn test_bmr_gender_constants() {
        let config = BmrConfig::default();
        // 699.3 + 1093.75 - 123 + 5
        let male = calculate_bmr(&profile(Gender::Male), &config);
        let female = calculate_bmr(&profile(Gender::Female), &config);
        assert!((male - 1675.05).abs() < 1e-6);
        assert!((female - 1509.05).abs() < 1e-6);
    }

    #[test]
    fn test_totals_from_rounded_bmr() {
        let totals = derive_energy_totals(1495, 150, 0.0, &EnergyConfig::default());
        assert_eq!(totals.maintenance_energy, 2136);
        assert_eq!(totals.training_day_total, 1463);
        assert_eq!(totals.rest_day_total, 1367);
    }

    #[test]
    fn test_multiplication_variant_skips_day_factor() {
        let config = EnergyConfig::default().with_algorithm(EnergyAlgorithm::UnadjustedMultiplication);
        let totals = derive_energy_totals(1500, 200, 100.0, &config);
        assert_eq!(totals.maintenance_energy, 1050);
        assert_eq!(totals.training_day_total, 1350);
        assert_eq!(totals.rest_day_total, 1150);
    }

    #[test]
    fn test_invalid_profile_rejected_before_calculation() {
        let bad = Profile {
            weight_kg: 0.0,
            ..profile(Gender::Male)
        };
        assert!(compute_energy_profile(&bad, &EnergyConfig::default()).is_err());
    }

    #[test]
    fn test_non_positive_bmr_rejected() {
        // Tiny, very old profile drives the equation below zero
        let bad = Profile {
            gender: Gender::Female,
            height_cm: 1.0,
            weight_kg: 1.0,
            age_years: 100,
            ..profile(Gender::Female)
        };
        assert!(compute_energy_profile(&bad, &EnergyConfig::default()).is_err());
    }
}
