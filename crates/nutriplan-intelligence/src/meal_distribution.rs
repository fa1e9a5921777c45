// ABOUTME: Allocates daily carbohydrate and protein targets across the meals of one day type
// ABOUTME: Per-meal rounding is independent; unallocated share remainders stay as slack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::round_non_negative;
use nutriplan_core::models::{MacroTargets, MealRatio, MealTarget};

/// Split daily targets into per-meal targets
///
/// Output order follows `ratios`. Shares are applied as given, without
/// renormalization, and each meal is rounded on its own, so the meal sum
/// can drift from the daily total by up to one gram per meal.
#[must_use]
pub fn distribute_meals(targets: &MacroTargets, ratios: &[MealRatio]) -> Vec<MealTarget> {
    let carbs = f64::from(targets.carbs_grams);
    let protein = f64::from(targets.protein_grams);

    ratios
        .iter()
        .map(|ratio| MealTarget {
            meal_name: ratio.meal.clone(),
            label: ratio.display_label().to_owned(),
            carbs_grams: round_non_negative(carbs * ratio.carbs_share),
            protein_grams: round_non_negative(protein * ratio.protein_share),
        })
        .collect()
}
