// ABOUTME: Meal ratio entries and per-meal macro targets
// ABOUTME: A meal ratio names a meal and the share of each daily macro it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Share of the daily carbohydrate and protein targets assigned to one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRatio {
    /// Stable meal key (e.g. `post_workout`)
    pub meal: String,
    /// Display label, falls back to the key when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fraction of daily carbohydrate (0.0-1.0)
    ///
    /// 0.0 is valid: the meal is still listed but receives no carbohydrate.
    pub carbs_share: f64,
    /// Fraction of daily protein (0.0-1.0)
    ///
    /// 0.0 is valid: the meal is still listed but receives no protein.
    pub protein_share: f64,
}

impl MealRatio {
    /// Create a meal ratio with a display label
    pub fn new(
        meal: impl Into<String>,
        label: impl Into<String>,
        carbs_share: f64,
        protein_share: f64,
    ) -> Self {
        Self {
            meal: meal.into(),
            label: Some(label.into()),
            carbs_share,
            protein_share,
        }
    }

    /// Label for display
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.meal)
    }
}

/// Carbohydrate and protein grams allocated to one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealTarget {
    /// Meal key
    pub meal_name: String,
    /// Display label
    pub label: String,
    /// Carbohydrate grams
    pub carbs_grams: u32,
    /// Protein grams
    pub protein_grams: u32,
}
