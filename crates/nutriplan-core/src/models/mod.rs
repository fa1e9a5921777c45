// ABOUTME: Core data models for the Nutriplan engine
// ABOUTME: Re-exports Profile, EnergyProfile, MacroTargets, meal and portion structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model is a plain value: created per calculation request, compared by
//! value, and discarded once the caller has read it. All models serialize with
//! serde so callers can render them as JSON, YAML or text.
//!
//! ## Core Models
//!
//! - `Profile`: anthropometric and training inputs
//! - `EnergyProfile`: BMR, maintenance energy and day totals
//! - `MacroTargets`: daily carbohydrate/protein/fat grams for one day type
//! - `MealTarget`: per-meal carbohydrate/protein grams
//! - `PortionRecommendation`: recommended amount of one reference food
//! - `NutritionPlan`: the full two-day breakdown handed to callers

mod energy;
mod food;
mod meal;
mod nutrition;
mod plan;
mod profile;

pub use energy::{EnergyAlgorithm, EnergyProfile};
pub use food::{FoodReference, MacroRole, PortionRecommendation, QuantityKind, SkippedFood};
pub use meal::{MealRatio, MealTarget};
pub use nutrition::{
    DayCoefficients, DayMacroTargets, DayType, MacroCoefficients, MacroPercentages, MacroTargets,
};
pub use plan::{DayPlan, MealPlan, NutritionPlan};
pub use profile::{ExperienceLevel, Gender, Profile};
