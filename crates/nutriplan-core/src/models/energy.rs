// ABOUTME: Energy expenditure algorithms and the derived EnergyProfile
// ABOUTME: Two maintenance-energy variants selectable by configuration (division vs multiplication)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maintenance and day-total energy algorithm
///
/// Two formulas are in circulation for turning BMR into daily energy:
///
/// - `AdjustedDivision`: maintenance = BMR / factor, and both day totals are
///   scaled down by the day-total factor afterwards
/// - `UnadjustedMultiplication`: maintenance = BMR x factor, day totals are the
///   plain sums without further scaling
///
/// Neither is treated as canonical; callers pick one explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnergyAlgorithm {
    /// BMR / factor, day totals x day-total factor
    #[default]
    AdjustedDivision,
    /// BMR x factor, day totals unscaled
    UnadjustedMultiplication,
}

impl EnergyAlgorithm {
    /// Derive maintenance energy from a (rounded) BMR
    #[must_use]
    pub fn maintenance_from_bmr(&self, bmr: f64, adjustment_factor: f64) -> f64 {
        match self {
            Self::AdjustedDivision => bmr / adjustment_factor,
            Self::UnadjustedMultiplication => bmr * adjustment_factor,
        }
    }

    /// Apply the day-total scaling to a summed daily energy figure
    #[must_use]
    pub fn scale_day_total(&self, energy_kcal: f64, day_total_factor: f64) -> f64 {
        match self {
            Self::AdjustedDivision => energy_kcal * day_total_factor,
            Self::UnadjustedMultiplication => energy_kcal,
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AdjustedDivision => "adjusted_division",
            Self::UnadjustedMultiplication => "unadjusted_multiplication",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::AdjustedDivision => {
                "maintenance = BMR / 0.7; day total = (maintenance + bonus + aerobic) x 0.64"
            }
            Self::UnadjustedMultiplication => {
                "maintenance = BMR x 0.7; day total = maintenance + bonus + aerobic"
            }
        }
    }
}

impl fmt::Display for EnergyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnergyAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "adjusted_division" | "division" => Ok(Self::AdjustedDivision),
            "unadjusted_multiplication" | "multiplication" => Ok(Self::UnadjustedMultiplication),
            other => Err(AppError::invalid_input(format!(
                "Unknown energy algorithm: '{other}'. Valid options: adjusted_division, unadjusted_multiplication"
            ))),
        }
    }
}

/// Energy expenditure derived once per profile
///
/// All kcal figures are rounded to whole kilocalories when computed; BMI is
/// informational and kept at one decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyProfile {
    /// Body mass index (one decimal)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Energy needed without training (kcal/day)
    pub maintenance_energy: u32,
    /// Strength-training calorie bonus for the experience level (kcal)
    pub training_calorie_bonus: u32,
    /// Aerobic expenditure echoed from the profile (kcal)
    pub aerobic_expenditure_kcal: f64,
    /// Total energy on a training day (kcal)
    pub training_day_total: u32,
    /// Total energy on a rest day (kcal)
    pub rest_day_total: u32,
    /// Algorithm the figures were computed with
    pub algorithm: EnergyAlgorithm,
}
