// ABOUTME: Converts per-meal gram targets into portions of every configured reference food
// ABOUTME: Continuous foods round to the nearest gram; discrete-unit foods round unit counts up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Portion Resolver
//!
//! Every staple is resolved against the meal's carbohydrate target and every
//! protein source against its protein target, so a meal lists all foods side
//! by side as alternatives.
//!
//! A food whose density for the role is zero cannot meet any target. It is
//! skipped with a warning and reported in [`MealPlan::skipped`] instead of
//! failing the meal.

use crate::config::ReferenceTables;
use crate::round_non_negative;
use nutriplan_core::models::{
    FoodReference, MacroRole, MealPlan, MealTarget, PortionRecommendation, QuantityKind,
    SkippedFood,
};
use thiserror::Error;
use tracing::warn;

/// Slack subtracted before rounding unit counts up, absorbs float noise on exact multiples
const UNIT_COUNT_EPSILON: f64 = 1e-9;

/// Reasons a single food cannot be resolved
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortionError {
    /// The food carries none of the targeted macronutrient
    #[error("food '{food}' has a {role} ratio of {ratio}, cannot size a portion")]
    ZeroRatio {
        /// Food name
        food: String,
        /// Role being resolved
        role: MacroRole,
        /// Offending ratio
        ratio: f64,
    },

    /// Unit weight is zero, negative, or not finite
    #[error("food '{food}' has an invalid unit weight of {unit_weight_grams} g")]
    InvalidUnitWeight {
        /// Food name
        food: String,
        /// Offending unit weight
        unit_weight_grams: f64,
    },

    /// The ratio is so small that the portion does not fit a whole count
    #[error("food '{food}' would need {quantity} {kind:?} to reach the target")]
    QuantityOverflow {
        /// Food name
        food: String,
        /// Quantity before conversion
        quantity: f64,
        /// Grams or units
        kind: QuantityKind,
    },
}

/// Size a portion of one food for a nutrient target
///
/// # Errors
///
/// Returns [`PortionError::ZeroRatio`] if the food's density for `role` is
/// not positive, [`PortionError::InvalidUnitWeight`] for a discrete food
/// with an unusable unit weight, or [`PortionError::QuantityOverflow`] when
/// the portion exceeds `u32::MAX` grams or units.
pub fn resolve_portion(
    target_grams: u32,
    food: &FoodReference,
    role: MacroRole,
) -> Result<PortionRecommendation, PortionError> {
    let ratio = food.ratio_for(role);
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(PortionError::ZeroRatio {
            food: food.name.clone(),
            role,
            ratio,
        });
    }
    let target = f64::from(target_grams);

    let (raw_quantity, quantity_kind, grams_per_quantity) = match food.unit_weight_grams {
        Some(unit_weight_grams) => {
            if !unit_weight_grams.is_finite() || unit_weight_grams <= 0.0 {
                return Err(PortionError::InvalidUnitWeight {
                    food: food.name.clone(),
                    unit_weight_grams,
                });
            }
            let per_unit = ratio * unit_weight_grams;
            let units = (target / per_unit - UNIT_COUNT_EPSILON).max(0.0).ceil();
            (units, QuantityKind::Units, per_unit)
        }
        None => ((target / ratio).round().max(0.0), QuantityKind::Grams, ratio),
    };

    let quantity = whole_quantity(raw_quantity).ok_or_else(|| PortionError::QuantityOverflow {
        food: food.name.clone(),
        quantity: raw_quantity,
        kind: quantity_kind,
    })?;
    let delivered = f64::from(quantity) * grams_per_quantity;

    Ok(PortionRecommendation {
        food_name: food.name.clone(),
        role,
        quantity,
        quantity_kind,
        unit_weight_grams: food.unit_weight_grams,
        ratio,
        delivered_grams: round_non_negative(delivered),
    })
}

/// Whole, non-negative quantity as `u32`; `None` when it does not fit
fn whole_quantity(value: f64) -> Option<u32> {
    (value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value)).then_some(value as u32)
}

/// Resolve every reference food for one meal
///
/// Foods that cannot be resolved are logged and collected in
/// [`MealPlan::skipped`]; the remaining portions are still returned.
#[must_use]
pub fn resolve_meal_portions(target: &MealTarget, tables: &ReferenceTables) -> MealPlan {
    let mut skipped = Vec::new();
    let staples = resolve_role(
        target,
        target.carbs_grams,
        tables.foods(MacroRole::Carbohydrate),
        MacroRole::Carbohydrate,
        &mut skipped,
    );
    let protein_sources = resolve_role(
        target,
        target.protein_grams,
        tables.foods(MacroRole::Protein),
        MacroRole::Protein,
        &mut skipped,
    );

    MealPlan {
        target: target.clone(),
        staples,
        protein_sources,
        skipped,
    }
}

fn resolve_role(
    meal: &MealTarget,
    target_grams: u32,
    foods: &[FoodReference],
    role: MacroRole,
    skipped: &mut Vec<SkippedFood>,
) -> Vec<PortionRecommendation> {
    foods
        .iter()
        .filter_map(|food| match resolve_portion(target_grams, food, role) {
            Ok(portion) => Some(portion),
            Err(e) => {
                warn!(
                    meal = %meal.meal_name,
                    food = %food.name,
                    role = %role,
                    error = %e,
                    "Skipping reference food"
                );
                skipped.push(SkippedFood {
                    meal_name: meal.meal_name.clone(),
                    food_name: food.name.clone(),
                    role,
                    reason: e.to_string(),
                });
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(carbs_grams: u32, protein_grams: u32) -> MealTarget {
        MealTarget {
            meal_name: "lunch".to_owned(),
            label: "Lunch".to_owned(),
            carbs_grams,
            protein_grams,
        }
    }

    #[test]
    fn test_egg_units_round_up() {
        let egg = FoodReference::by_unit("Egg", 0.0, 0.13, 50.0);
        let portion = resolve_portion(20, &egg, MacroRole::Protein).unwrap();
        assert_eq!(portion.quantity, 4);
        assert_eq!(portion.quantity_kind, QuantityKind::Units);
        assert_eq!(portion.delivered_grams, 26);
    }

    #[test]
    fn test_exact_unit_multiple_not_overshot() {
        // 0.12 x 50 = 6 g per egg, 24 g is exactly four eggs
        let egg = FoodReference::by_unit("Egg", 0.0, 0.12, 50.0);
        let portion = resolve_portion(24, &egg, MacroRole::Protein).unwrap();
        assert_eq!(portion.quantity, 4);
        assert_eq!(portion.delivered_grams, 24);
    }

    #[test]
    fn test_continuous_food_in_grams() {
        let rice = FoodReference::by_weight("Cooked rice", 0.30, 0.03);
        let portion = resolve_portion(64, &rice, MacroRole::Carbohydrate).unwrap();
        // 64 / 0.3 = 213.33
        assert_eq!(portion.quantity, 213);
        assert_eq!(portion.quantity_kind, QuantityKind::Grams);
        assert_eq!(portion.delivered_grams, 64);
    }

    #[test]
    fn test_trace_ratio_used_for_its_own_role() {
        // Milk is a protein source with trace carbohydrate; the carb ratio
        // still sizes a carbohydrate portion rather than being assumed zero
        let milk = FoodReference::by_unit("Milk carton", 0.05, 0.036, 250.0);
        let portion = resolve_portion(25, &milk, MacroRole::Carbohydrate).unwrap();
        assert_eq!(portion.quantity, 2);
        assert!((portion.ratio - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_target_yields_zero_quantity() {
        let egg = FoodReference::by_unit("Egg", 0.0, 0.12, 50.0);
        let portion = resolve_portion(0, &egg, MacroRole::Protein).unwrap();
        assert_eq!(portion.quantity, 0);
        assert_eq!(portion.delivered_grams, 0);
    }

    #[test]
    fn test_zero_ratio_is_an_error() {
        let meat = FoodReference::by_weight("Cooked lean meat", 0.0, 0.25);
        let err = resolve_portion(50, &meat, MacroRole::Carbohydrate).unwrap_err();
        assert!(matches!(err, PortionError::ZeroRatio { .. }));
    }

    #[test]
    fn test_invalid_unit_weight_is_an_error() {
        let broken = FoodReference::by_unit("Broken", 0.0, 0.2, 0.0);
        let err = resolve_portion(10, &broken, MacroRole::Protein).unwrap_err();
        assert!(matches!(err, PortionError::InvalidUnitWeight { .. }));
    }

    #[test]
    fn test_vanishing_ratio_is_an_overflow_not_a_saturated_portion() {
        let trace = FoodReference::by_weight("Trace", 1e-9, 0.0);
        let err = resolve_portion(64, &trace, MacroRole::Carbohydrate).unwrap_err();
        assert!(matches!(
            err,
            PortionError::QuantityOverflow {
                kind: QuantityKind::Grams,
                ..
            }
        ));

        let crumb = FoodReference::by_unit("Crumb", 1e-12, 0.0, 1.0);
        let err = resolve_portion(64, &crumb, MacroRole::Carbohydrate).unwrap_err();
        assert!(matches!(
            err,
            PortionError::QuantityOverflow {
                kind: QuantityKind::Units,
                ..
            }
        ));
    }

    #[test]
    fn test_largest_representable_portion_still_resolves() {
        // 64 / 2e-8 = 3.2e9 grams, just under u32::MAX
        let sparse = FoodReference::by_weight("Sparse", 2e-8, 0.0);
        let portion = resolve_portion(64, &sparse, MacroRole::Carbohydrate).unwrap();
        assert_eq!(portion.quantity, 3_200_000_000);
        assert_eq!(portion.delivered_grams, 64);
    }

    #[test]
    fn test_meal_skips_zero_ratio_food_and_keeps_the_rest() {
        let tables = ReferenceTables::default().with_food(
            MacroRole::Carbohydrate,
            FoodReference::by_weight("Olive oil", 0.0, 0.0),
        );
        let plan = resolve_meal_portions(&meal(60, 30), &tables);

        assert_eq!(plan.staples.len(), 4);
        assert_eq!(plan.protein_sources.len(), 4);
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].food_name, "Olive oil");
        assert_eq!(plan.skipped[0].role, MacroRole::Carbohydrate);
    }

    #[test]
    fn test_delivery_bounds_hold_across_targets() {
        let tables = ReferenceTables::default();
        for grams in 0..=150 {
            let plan = resolve_meal_portions(&meal(grams, grams), &tables);
            for portion in plan.staples.iter().chain(plan.protein_sources.iter()) {
                match portion.quantity_kind {
                    QuantityKind::Grams => {
                        assert!(portion.delivered_grams.abs_diff(grams) <= 1, "{portion:?}");
                    }
                    QuantityKind::Units => assert!(portion.delivered_grams >= grams, "{portion:?}"),
                }
            }
        }
    }
}
