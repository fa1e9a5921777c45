// ABOUTME: Day types, per-kilogram macro coefficients, and daily macro targets
// ABOUTME: MacroTargets carries the calorie breakdown implied by carbohydrate, protein, and fat grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Training versus rest day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Strength training day
    Training,
    /// Rest day
    Rest,
}

impl DayType {
    /// Both day types in display order
    pub const ALL: [Self; 2] = [Self::Training, Self::Rest];

    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "training" | "train" => Ok(Self::Training),
            "rest" => Ok(Self::Rest),
            other => Err(AppError::invalid_input(format!(
                "Unknown day type: '{other}'. Valid options: training, rest"
            ))),
        }
    }
}

/// Grams of carbohydrate and protein per kilogram of body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroCoefficients {
    /// Carbohydrate grams per kg
    pub carbs_per_kg: f64,
    /// Protein grams per kg
    pub protein_per_kg: f64,
}

impl MacroCoefficients {
    /// Create a coefficient pair
    #[must_use]
    pub const fn new(carbs_per_kg: f64, protein_per_kg: f64) -> Self {
        Self {
            carbs_per_kg,
            protein_per_kg,
        }
    }

    /// Check that both coefficients are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the offending day type and field.
    pub fn validate(&self, day_type: DayType) -> AppResult<()> {
        for (field, value) in [
            ("carbs_per_kg", self.carbs_per_kg),
            ("protein_per_kg", self.protein_per_kg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::value_out_of_range(format!(
                    "{day_type} {field} must be zero or positive, got {value}"
                ))
                .with_details(json!({ "day_type": day_type, "field": field, "value": value })));
            }
        }
        Ok(())
    }
}

/// Coefficients for both day types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayCoefficients {
    /// Training-day coefficients
    pub training: MacroCoefficients,
    /// Rest-day coefficients
    pub rest: MacroCoefficients,
}

impl DayCoefficients {
    /// Coefficients for one day type
    #[must_use]
    pub const fn for_day(&self, day_type: DayType) -> &MacroCoefficients {
        match day_type {
            DayType::Training => &self.training,
            DayType::Rest => &self.rest,
        }
    }

    /// Validate both coefficient pairs
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> AppResult<()> {
        self.training.validate(DayType::Training)?;
        self.rest.validate(DayType::Rest)
    }
}

/// Daily macronutrient targets for one day type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Carbohydrate grams
    pub carbs_grams: u32,
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
}

impl MacroTargets {
    /// Calories implied by the targets (kcal)
    #[must_use]
    pub fn energy_kcal(&self) -> f64 {
        f64::from(self.fat_grams).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.carbs_grams)
                .mul_add(KCAL_PER_GRAM_CARBS, f64::from(self.protein_grams) * KCAL_PER_GRAM_PROTEIN),
        )
    }

    /// Share of calories contributed by each macronutrient
    #[must_use]
    pub fn percentages(&self) -> MacroPercentages {
        let total = self.energy_kcal();
        if total <= 0.0 {
            return MacroPercentages::default();
        }
        MacroPercentages {
            protein_percent: f64::from(self.protein_grams) * KCAL_PER_GRAM_PROTEIN / total * 100.0,
            carbs_percent: f64::from(self.carbs_grams) * KCAL_PER_GRAM_CARBS / total * 100.0,
            fat_percent: f64::from(self.fat_grams) * KCAL_PER_GRAM_FAT / total * 100.0,
        }
    }
}

/// Macro targets for both day types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMacroTargets {
    /// Training-day targets
    pub training: MacroTargets,
    /// Rest-day targets
    pub rest: MacroTargets,
}

impl DayMacroTargets {
    /// Targets for one day type
    #[must_use]
    pub const fn for_day(&self, day_type: DayType) -> &MacroTargets {
        match day_type {
            DayType::Training => &self.training,
            DayType::Rest => &self.rest,
        }
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}
