// ABOUTME: Reference tables: per-day meal ratio sets and carbohydrate/protein food densities
// ABOUTME: Editable domain data injected into the engine; defaults cover common Asian staples and protein foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference Tables
//!
//! Meal ratio sets are ordered: meals are planned in table order. The
//! training-day set carries a post-workout meal the rest-day set lacks.
//!
//! Shares are not renormalized. A day whose shares sum below 1.0 leaves the
//! remainder unallocated; this is reported in the logs, not corrected.

use super::error::ConfigError;
use nutriplan_core::models::{DayType, FoodReference, MacroRole, MealRatio};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Tolerance for share sums
const SHARE_SUM_EPSILON: f64 = 1e-9;

/// Meal ratio sets for both day types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRatioTables {
    /// Training-day meals
    pub training: Vec<MealRatio>,
    /// Rest-day meals
    pub rest: Vec<MealRatio>,
}

/// Meal ratios plus the food density tables used to size portions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceTables {
    /// Meal ratio set per day type
    pub meal_ratios: MealRatioTables,
    /// Carbohydrate staples
    pub staples: Vec<FoodReference>,
    /// Protein sources
    pub protein_sources: Vec<FoodReference>,
}

/// Sum of carbohydrate and protein shares for one day type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareTotals {
    /// Sum of carbohydrate shares
    pub carbs: f64,
    /// Sum of protein shares
    pub protein: f64,
}

impl ReferenceTables {
    /// Ordered meal ratios for a day type
    #[must_use]
    pub fn meal_ratios(&self, day_type: DayType) -> &[MealRatio] {
        match day_type {
            DayType::Training => &self.meal_ratios.training,
            DayType::Rest => &self.meal_ratios.rest,
        }
    }

    /// Reference foods for a role
    #[must_use]
    pub fn foods(&self, role: MacroRole) -> &[FoodReference] {
        match role {
            MacroRole::Carbohydrate => &self.staples,
            MacroRole::Protein => &self.protein_sources,
        }
    }

    /// Replace the meal ratio set for a day type
    #[must_use]
    pub fn with_meal_ratios(mut self, day_type: DayType, ratios: Vec<MealRatio>) -> Self {
        match day_type {
            DayType::Training => self.meal_ratios.training = ratios,
            DayType::Rest => self.meal_ratios.rest = ratios,
        }
        self
    }

    /// Add a food to the table for a role
    #[must_use]
    pub fn with_food(mut self, role: MacroRole, food: FoodReference) -> Self {
        match role {
            MacroRole::Carbohydrate => self.staples.push(food),
            MacroRole::Protein => self.protein_sources.push(food),
        }
        self
    }

    /// Sum of shares for a day type
    #[must_use]
    pub fn share_totals(&self, day_type: DayType) -> ShareTotals {
        self.meal_ratios(day_type)
            .iter()
            .fold(ShareTotals { carbs: 0.0, protein: 0.0 }, |acc, meal| {
                ShareTotals {
                    carbs: acc.carbs + meal.carbs_share,
                    protein: acc.protein + meal.protein_share,
                }
            })
    }

    /// Validate meal ratios and food densities
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a day has no meals or duplicate meal keys,
    /// a share or ratio falls outside 0.0-1.0, shares over-allocate a day, a
    /// food name is blank or duplicated, or a unit weight is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for day_type in DayType::ALL {
            self.validate_meal_ratios(day_type)?;
        }
        for role in [MacroRole::Carbohydrate, MacroRole::Protein] {
            validate_foods(role, self.foods(role))?;
        }
        Ok(())
    }

    fn validate_meal_ratios(&self, day_type: DayType) -> Result<(), ConfigError> {
        let ratios = self.meal_ratios(day_type);
        if ratios.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "{day_type} meal ratio set is empty"
            )));
        }

        let mut seen = HashSet::new();
        for meal in ratios {
            if meal.meal.trim().is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "{day_type} meal ratio without a meal name"
                )));
            }
            if !seen.insert(meal.meal.as_str()) {
                return Err(ConfigError::InvalidRange(format!(
                    "{day_type} meal '{}' listed more than once",
                    meal.meal
                )));
            }
            for (field, share) in [
                ("carbs_share", meal.carbs_share),
                ("protein_share", meal.protein_share),
            ] {
                if !(0.0..=1.0).contains(&share) {
                    return Err(ConfigError::ValueOutOfRange(format!(
                        "{day_type} meal '{}' {field} must be between 0.0 and 1.0, got {share}",
                        meal.meal
                    )));
                }
            }
        }

        let totals = self.share_totals(day_type);
        for (macro_name, total) in [("carbohydrate", totals.carbs), ("protein", totals.protein)] {
            if total > 1.0 + SHARE_SUM_EPSILON {
                return Err(ConfigError::InvalidWeights(format!(
                    "{day_type} {macro_name} shares sum to {total:.3}, above 1.0"
                )));
            }
            if total < 1.0 - SHARE_SUM_EPSILON {
                warn!(
                    day_type = %day_type,
                    macro_name,
                    share_total = total,
                    "Meal shares leave part of the daily target unallocated"
                );
            }
        }

        Ok(())
    }
}

fn validate_foods(role: MacroRole, foods: &[FoodReference]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for food in foods {
        if food.name.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "{role} reference food without a name"
            )));
        }
        if !seen.insert(food.name.as_str()) {
            return Err(ConfigError::InvalidRange(format!(
                "{role} reference food '{}' listed more than once",
                food.name
            )));
        }
        for (field, ratio) in [
            ("carb_ratio", food.carb_ratio),
            ("protein_ratio", food.protein_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "food '{}' {field} must be between 0.0 and 1.0, got {ratio}",
                    food.name
                )));
            }
        }
        if let Some(unit_weight) = food.unit_weight_grams {
            if !unit_weight.is_finite() || unit_weight <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "food '{}' unit_weight_grams must be positive, got {unit_weight}",
                    food.name
                )));
            }
        }
    }
    Ok(())
}

impl Default for MealRatioTables {
    fn default() -> Self {
        Self {
            training: vec![
                MealRatio::new("breakfast", "Breakfast (pre-workout)", 0.15, 0.20),
                MealRatio::new("post_workout", "Post-workout", 0.35, 0.20),
                MealRatio::new("lunch", "Lunch", 0.20, 0.20),
                MealRatio::new("dinner", "Dinner", 0.20, 0.20),
                MealRatio::new("snacks", "Snacks / late night", 0.10, 0.20),
            ],
            rest: vec![
                MealRatio::new("breakfast", "Breakfast (pre-workout)", 0.15, 0.20),
                MealRatio::new("lunch", "Lunch", 0.40, 0.30),
                MealRatio::new("dinner", "Dinner", 0.35, 0.30),
                MealRatio::new("snacks", "Snacks / late night", 0.10, 0.20),
            ],
        }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            meal_ratios: MealRatioTables::default(),
            staples: vec![
                FoodReference::by_weight("Cooked rice", 0.30, 0.03),
                FoodReference::by_weight("Cooked noodles", 0.23, 0.04),
                FoodReference::by_weight("Steamed bun", 0.50, 0.03),
                FoodReference::by_weight("Dry rice noodles", 0.75, 0.02),
            ],
            protein_sources: vec![
                FoodReference::by_weight("Cooked lean meat", 0.0, 0.25),
                FoodReference::by_unit("Egg", 0.0, 0.12, 50.0),
                FoodReference::by_weight("Protein powder", 0.0, 0.75),
                FoodReference::by_unit("Milk carton", 0.05, 0.036, 250.0),
            ],
        }
    }
}
