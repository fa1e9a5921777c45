// ABOUTME: Food reference densities and portion recommendations
// ABOUTME: Discrete-unit foods (eggs, cartons) carry a unit weight; others are measured in grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macronutrient a food is being resolved against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MacroRole {
    /// Carbohydrate staple (rice, noodles)
    Carbohydrate,
    /// Protein source (meat, eggs, milk)
    Protein,
}

impl MacroRole {
    /// Stable lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Carbohydrate => "carbohydrate",
            Self::Protein => "protein",
        }
    }
}

impl fmt::Display for MacroRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nutrient density of a reference food
///
/// Both ratios are always present; a staple may carry trace protein and a
/// protein source trace carbohydrate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodReference {
    /// Food name
    pub name: String,
    /// Grams of carbohydrate per gram of food (0.0-1.0)
    pub carb_ratio: f64,
    /// Grams of protein per gram of food (0.0-1.0)
    pub protein_ratio: f64,
    /// Weight of one unit in grams, present for discrete-unit foods only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_weight_grams: Option<f64>,
}

impl FoodReference {
    /// Continuously measured food
    pub fn by_weight(name: impl Into<String>, carb_ratio: f64, protein_ratio: f64) -> Self {
        Self {
            name: name.into(),
            carb_ratio,
            protein_ratio,
            unit_weight_grams: None,
        }
    }

    /// Discrete-unit food (egg, carton)
    pub fn by_unit(
        name: impl Into<String>,
        carb_ratio: f64,
        protein_ratio: f64,
        unit_weight_grams: f64,
    ) -> Self {
        Self {
            name: name.into(),
            carb_ratio,
            protein_ratio,
            unit_weight_grams: Some(unit_weight_grams),
        }
    }

    /// Density for the given role
    #[must_use]
    pub const fn ratio_for(&self, role: MacroRole) -> f64 {
        match role {
            MacroRole::Carbohydrate => self.carb_ratio,
            MacroRole::Protein => self.protein_ratio,
        }
    }

    /// Whether the food is counted in whole units
    #[must_use]
    pub const fn is_discrete(&self) -> bool {
        self.unit_weight_grams.is_some()
    }
}

/// How a recommended quantity is measured
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    /// Grams of food
    Grams,
    /// Whole units of food
    Units,
}

/// Recommended amount of one reference food for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortionRecommendation {
    /// Food name
    pub food_name: String,
    /// Macronutrient the portion targets
    pub role: MacroRole,
    /// Grams or unit count, see `quantity_kind`
    pub quantity: u32,
    /// Unit of `quantity`
    pub quantity_kind: QuantityKind,
    /// Unit weight for discrete foods (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_weight_grams: Option<f64>,
    /// Density used for the conversion
    pub ratio: f64,
    /// Nutrient grams actually delivered by the rounded quantity
    pub delivered_grams: u32,
}

/// A reference food left out of a meal's recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedFood {
    /// Meal key
    pub meal_name: String,
    /// Food name
    pub food_name: String,
    /// Role the food was being resolved for
    pub role: MacroRole,
    /// Why it was skipped
    pub reason: String,
}
