// ABOUTME: Energy model configuration: BMR coefficients, algorithm choice, and training bonuses
// ABOUTME: Defaults reproduce the 9.99/6.25/4.92 BMR variant with 0.7 and 0.64 factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::error::ConfigError;
use nutriplan_core::models::{EnergyAlgorithm, ExperienceLevel, Gender};
use serde::{Deserialize, Serialize};

/// Energy expenditure configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnergyConfig {
    /// Maintenance/day-total algorithm
    pub algorithm: EnergyAlgorithm,
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Factor between BMR and maintenance energy (0.7)
    pub adjustment_factor: f64,
    /// Down-adjustment applied to day totals by `AdjustedDivision` (0.64)
    pub day_total_factor: f64,
    /// Strength-training calorie bonus per experience level
    pub training_bonus: TrainingBonusConfig,
}

/// Mifflin-St Jeor style BMR coefficients
///
/// `bmr = weight_coef x kg + height_coef x cm + age_coef x years + gender constant`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (9.99)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-4.92)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

/// Training-day calorie bonus lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingBonusConfig {
    /// Novice bonus (kcal)
    pub novice: u32,
    /// Intermediate bonus (kcal)
    pub intermediate: u32,
    /// Advanced bonus (kcal)
    pub advanced: u32,
}

impl TrainingBonusConfig {
    /// Bonus for an experience level
    #[must_use]
    pub const fn for_level(&self, level: ExperienceLevel) -> u32 {
        match level {
            ExperienceLevel::Novice => self.novice,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
        }
    }
}

impl BmrConfig {
    /// Gender constant
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            Gender::Female => self.female_constant,
        }
    }
}

impl EnergyConfig {
    /// Same configuration with another algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: EnergyAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Validate factors and coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a factor is not strictly
    /// positive or a coefficient is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("adjustment_factor", self.adjustment_factor),
            ("day_total_factor", self.day_total_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "energy {name} must be positive, got {value}"
                )));
            }
        }

        let bmr = &self.bmr;
        for (name, value) in [
            ("weight_coef", bmr.weight_coef),
            ("height_coef", bmr.height_coef),
            ("age_coef", bmr.age_coef),
            ("male_constant", bmr.male_constant),
            ("female_constant", bmr.female_constant),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "bmr {name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            algorithm: EnergyAlgorithm::default(),
            bmr: BmrConfig::default(),
            adjustment_factor: 0.7,
            day_total_factor: 0.64,
            training_bonus: TrainingBonusConfig::default(),
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 9.99,
            height_coef: 6.25,
            age_coef: -4.92,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

impl Default for TrainingBonusConfig {
    fn default() -> Self {
        Self {
            novice: 150,
            intermediate: 200,
            advanced: 250,
        }
    }
}
