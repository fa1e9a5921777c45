// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, profile fixtures, and reference table helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use nutriplan::config::PlannerConfig;
use nutriplan::models::{
    DayCoefficients, ExperienceLevel, Gender, MacroCoefficients, Profile,
};
use nutriplan::planner::NutritionPlanner;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Male, 175 cm, 70 kg, 25 years, novice, no aerobic work
pub fn reference_male() -> Profile {
    Profile {
        gender: Gender::Male,
        height_cm: 175.0,
        weight_kg: 70.0,
        age_years: 25,
        experience_level: ExperienceLevel::Novice,
        aerobic_expenditure_kcal: 0.0,
    }
}

/// Female, 165 cm, 58 kg, 31 years, intermediate, 150 kcal aerobic work
pub fn reference_female() -> Profile {
    Profile {
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 58.0,
        age_years: 31,
        experience_level: ExperienceLevel::Intermediate,
        aerobic_expenditure_kcal: 150.0,
    }
}

/// Training 2.6/1.4 g/kg, rest 2.0/1.4 g/kg
pub fn standard_coefficients() -> DayCoefficients {
    DayCoefficients {
        training: MacroCoefficients::new(2.6, 1.4),
        rest: MacroCoefficients::new(2.0, 1.4),
    }
}

/// Planner with the built-in configuration
pub fn default_planner() -> NutritionPlanner {
    init_test_logging();
    NutritionPlanner::new(PlannerConfig::default()).expect("default configuration is valid")
}
