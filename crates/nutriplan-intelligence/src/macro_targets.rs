// ABOUTME: Daily macronutrient targets from body weight and per-kilogram coefficients
// ABOUTME: Fat follows a gender and weight step function instead of a per-kilogram ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Model
//!
//! Carbohydrate and protein grams scale with body weight; fat is a fixed
//! daily amount picked from [`nutriplan_core::constants::fat_targets`].
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>

use crate::config::MacroConfig;
use crate::round_non_negative;
use nutriplan_core::constants::fat_targets::{
    FEMALE_GRAMS, MALE_GRAMS, MALE_HEAVY_GRAMS, MALE_HEAVY_THRESHOLD_KG,
};
use nutriplan_core::models::{
    DayCoefficients, DayMacroTargets, Gender, MacroCoefficients, MacroTargets, Profile,
};
use tracing::debug;

/// Daily fat target in grams
///
/// Males above 120 kg get 70 g, other males 60 g, females 50 g.
#[must_use]
pub fn fat_target_grams(gender: Gender, weight_kg: f64) -> u32 {
    match gender {
        Gender::Male if weight_kg > MALE_HEAVY_THRESHOLD_KG => MALE_HEAVY_GRAMS,
        Gender::Male => MALE_GRAMS,
        Gender::Female => FEMALE_GRAMS,
    }
}

/// Macro targets for one day type
#[must_use]
pub fn compute_macro_targets(profile: &Profile, coefficients: &MacroCoefficients) -> MacroTargets {
    MacroTargets {
        carbs_grams: round_non_negative(profile.weight_kg * coefficients.carbs_per_kg),
        protein_grams: round_non_negative(profile.weight_kg * coefficients.protein_per_kg),
        fat_grams: fat_target_grams(profile.gender, profile.weight_kg),
    }
}

/// Macro targets for both day types
///
/// With `rest_protein_mirrors_training` set, the rest day copies the
/// training-day protein grams and ignores the rest protein coefficient.
#[must_use]
pub fn compute_day_targets(
    profile: &Profile,
    coefficients: &DayCoefficients,
    config: &MacroConfig,
) -> DayMacroTargets {
    let training = compute_macro_targets(profile, &coefficients.training);
    let mut rest = compute_macro_targets(profile, &coefficients.rest);
    if config.rest_protein_mirrors_training {
        rest.protein_grams = training.protein_grams;
    }

    debug!(
        training_carbs = training.carbs_grams,
        training_protein = training.protein_grams,
        rest_carbs = rest.carbs_grams,
        rest_protein = rest.protein_grams,
        fat = training.fat_grams,
        "Computed daily macro targets"
    );

    DayMacroTargets { training, rest }
}
