// ABOUTME: Macro target configuration: default per-kilogram coefficients per day type
// ABOUTME: Includes the optional rule that rest-day protein mirrors the training-day total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use nutriplan_core::models::{DayCoefficients, DayType, MacroCoefficients};
use serde::{Deserialize, Serialize};

/// Macro target configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MacroConfig {
    /// Coefficients used when the caller supplies none
    pub default_coefficients: DayCoefficients,
    /// Use the training-day protein total on rest days as well
    pub rest_protein_mirrors_training: bool,
}

impl MacroConfig {
    /// Validate the default coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a negative or non-finite coefficient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for day_type in DayType::ALL {
            self.default_coefficients
                .for_day(day_type)
                .validate(day_type)
                .map_err(|e| ConfigError::ValueOutOfRange(e.message))?;
        }
        Ok(())
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            default_coefficients: DayCoefficients {
                training: MacroCoefficients::new(2.6, 1.4),
                rest: MacroCoefficients::new(2.0, 1.4),
            },
            rest_protein_mirrors_training: false,
        }
    }
}
