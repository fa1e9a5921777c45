// ABOUTME: Structured plan output: per-meal portions, per-day breakdowns, and the full plan
// ABOUTME: These are the values handed to presentation callers for rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    DayCoefficients, DayType, EnergyProfile, MacroPercentages, MacroTargets, MealTarget,
    PortionRecommendation, Profile, SkippedFood,
};
use serde::{Deserialize, Serialize};

/// One meal's targets and the food portions that meet them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Carbohydrate and protein targets for the meal
    pub target: MealTarget,
    /// Portions of every carbohydrate staple
    pub staples: Vec<PortionRecommendation>,
    /// Portions of every protein source
    pub protein_sources: Vec<PortionRecommendation>,
    /// Reference foods that could not be resolved for this meal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFood>,
}

/// Targets and meals for one day type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Day type
    pub day_type: DayType,
    /// Daily macro targets
    pub targets: MacroTargets,
    /// Calories implied by the macro targets (kcal)
    pub macro_energy_kcal: f64,
    /// Calorie split between macronutrients
    pub macro_percentages: MacroPercentages,
    /// Meals in reference-table order
    pub meals: Vec<MealPlan>,
}

impl DayPlan {
    /// Every skipped food across the day's meals
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedFood> {
        self.meals.iter().flat_map(|meal| meal.skipped.iter())
    }
}

/// Complete plan for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    /// Profile the plan was computed for
    pub profile: Profile,
    /// Energy expenditure figures
    pub energy: EnergyProfile,
    /// Coefficients the macro targets were derived from
    pub coefficients: DayCoefficients,
    /// Training-day breakdown
    pub training: DayPlan,
    /// Rest-day breakdown
    pub rest: DayPlan,
}

impl NutritionPlan {
    /// Breakdown for one day type
    #[must_use]
    pub const fn day(&self, day_type: DayType) -> &DayPlan {
        match day_type {
            DayType::Training => &self.training,
            DayType::Rest => &self.rest,
        }
    }
}
