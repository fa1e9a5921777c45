// ABOUTME: Anthropometric profile model with closed gender and experience enumerations
// ABOUTME: Profile validation rejects non-positive height, weight, and age before any calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Gender for BMR and fat target calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Strength training experience, selects the training-day calorie bonus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Novice,
    /// Some training background
    Intermediate,
    /// Experienced lifter
    Advanced,
}

impl ExperienceLevel {
    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "beginner" => Ok(Self::Novice),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" | "veteran" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: '{other}'. Valid options: novice, intermediate, advanced"
            ))),
        }
    }
}

/// Anthropometric and training inputs for one person
///
/// Values arrive already parsed; [`Profile::validate`] only enforces the
/// domain preconditions the energy model relies on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Training experience
    pub experience_level: ExperienceLevel,
    /// Extra aerobic expenditure on top of maintenance (kcal)
    #[serde(default)]
    pub aerobic_expenditure_kcal: f64,
}

impl Profile {
    /// Check the profile preconditions
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if height, weight or age is not positive, or if
    /// the aerobic expenditure is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(invalid_field("height_cm", self.height_cm, "must be positive"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(invalid_field("weight_kg", self.weight_kg, "must be positive"));
        }
        if self.age_years == 0 {
            return Err(invalid_field(
                "age_years",
                f64::from(self.age_years),
                "must be positive",
            ));
        }
        if !self.aerobic_expenditure_kcal.is_finite() || self.aerobic_expenditure_kcal < 0.0 {
            return Err(invalid_field(
                "aerobic_expenditure_kcal",
                self.aerobic_expenditure_kcal,
                "must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Body mass index rounded to one decimal
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 10.0).round() / 10.0
    }
}

fn invalid_field(field: &str, value: f64, reason: &str) -> AppError {
    AppError::invalid_input(format!("Invalid profile: {field} {reason}, got {value}"))
        .with_details(json!({ "field": field, "value": value }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn profile() -> Profile {
        Profile {
            gender: Gender::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            age_years: 25,
            experience_level: ExperienceLevel::Novice,
            aerobic_expenditure_kcal: 0.0,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        let zero_height = Profile {
            height_cm: 0.0,
            ..profile()
        };
        let negative_weight = Profile {
            weight_kg: -3.0,
            ..profile()
        };
        let zero_age = Profile {
            age_years: 0,
            ..profile()
        };
        let nan_weight = Profile {
            weight_kg: f64::NAN,
            ..profile()
        };

        for bad in [zero_height, negative_weight, zero_age, nan_weight] {
            let err = bad.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_negative_aerobic_rejected() {
        let bad = Profile {
            aerobic_expenditure_kcal: -1.0,
            ..profile()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_bmi_rounded_to_one_decimal() {
        // 70 / 1.75^2 = 22.857...
        assert!((profile().bmi() - 22.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "intermediate".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Intermediate
        );
        assert!("expert".parse::<ExperienceLevel>().is_err());
    }
}
