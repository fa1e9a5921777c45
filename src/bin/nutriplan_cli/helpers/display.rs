// ABOUTME: Output formatting helpers for the nutriplan CLI
// ABOUTME: Renders energy profiles, plans, batch results, and reference tables as text, JSON, or YAML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::commands::BatchEntry;
use clap::ValueEnum;
use nutriplan::config::ReferenceTables;
use nutriplan::errors::{AppError, AppResult, ErrorCode};
use nutriplan::models::{
    DayPlan, DayType, EnergyProfile, MealPlan, NutritionPlan, PortionRecommendation, QuantityKind,
};
use serde::Serialize;
use std::fmt::{self, Write};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Render `value` in `format` and print it to stdout
pub fn print<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    text: fn(&T) -> Result<String, fmt::Error>,
) -> AppResult<()> {
    let rendered = match format {
        OutputFormat::Text => {
            text(value).map_err(|e| AppError::internal(format!("Text rendering failed: {e}")))?
        }
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| {
            AppError::new(ErrorCode::SerializationError, e.to_string()).with_source(e)
        })?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Energy summary panel
pub fn energy_text(energy: &EnergyProfile) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Energy profile ({})", energy.algorithm)?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "  BMI:                 {:.1}", energy.bmi)?;
    writeln!(out, "  BMR:                 {} kcal", energy.bmr)?;
    writeln!(out, "  Maintenance energy:  {} kcal", energy.maintenance_energy)?;
    writeln!(out, "  Training bonus:      {} kcal", energy.training_calorie_bonus)?;
    writeln!(out, "  Aerobic expenditure: {:.0} kcal", energy.aerobic_expenditure_kcal)?;
    writeln!(out, "  Training day total:  {} kcal", energy.training_day_total)?;
    writeln!(out, "  Rest day total:      {} kcal", energy.rest_day_total)?;
    Ok(out)
}

/// Full plan, one section per day type
pub fn plan_text(plan: &NutritionPlan) -> Result<String, fmt::Error> {
    let mut out = energy_text(&plan.energy)?;
    for day_type in DayType::ALL {
        writeln!(out)?;
        write_day(&mut out, plan.day(day_type))?;
    }
    Ok(out)
}

fn write_day(out: &mut String, day: &DayPlan) -> fmt::Result {
    let title = match day.day_type {
        DayType::Training => "Training day",
        DayType::Rest => "Rest day",
    };
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(
        out,
        "  Carbs {} g | Protein {} g | Fat {} g ({:.0} kcal: {:.0}% / {:.0}% / {:.0}%)",
        day.targets.carbs_grams,
        day.targets.protein_grams,
        day.targets.fat_grams,
        day.macro_energy_kcal,
        day.macro_percentages.carbs_percent,
        day.macro_percentages.protein_percent,
        day.macro_percentages.fat_percent,
    )?;
    for meal in &day.meals {
        write_meal(out, meal)?;
    }
    Ok(())
}

fn write_meal(out: &mut String, meal: &MealPlan) -> fmt::Result {
    writeln!(
        out,
        "\n  {}: carbs {} g, protein {} g",
        meal.target.label, meal.target.carbs_grams, meal.target.protein_grams
    )?;
    if !meal.staples.is_empty() {
        writeln!(out, "    Staples (pick one):")?;
        for portion in &meal.staples {
            writeln!(out, "      {}", portion_text(portion))?;
        }
    }
    if !meal.protein_sources.is_empty() {
        writeln!(out, "    Protein (pick one):")?;
        for portion in &meal.protein_sources {
            writeln!(out, "      {}", portion_text(portion))?;
        }
    }
    for skipped in &meal.skipped {
        writeln!(out, "    skipped {}: {}", skipped.food_name, skipped.reason)?;
    }
    Ok(())
}

fn portion_text(portion: &PortionRecommendation) -> String {
    let amount = match (portion.quantity_kind, portion.unit_weight_grams) {
        (QuantityKind::Units, Some(unit)) => format!("{} x {unit:.0} g", portion.quantity),
        (QuantityKind::Units, None) => format!("{} units", portion.quantity),
        (QuantityKind::Grams, _) => format!("{} g", portion.quantity),
    };
    format!(
        "{:<20} {:>12}  ({} g {})",
        portion.food_name, amount, portion.delivered_grams, portion.role
    )
}

/// Batch results, one plan or error per request
pub fn batch_text(entries: &[BatchEntry]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in entries {
        writeln!(out, "Request #{}", entry.index + 1)?;
        if let Some(plan) = &entry.plan {
            writeln!(out, "{}", plan_text(plan)?)?;
        }
        if let Some(error) = &entry.error {
            writeln!(out, "  error ({:?}): {}\n", error.error.code, error.error.message)?;
        }
    }
    Ok(out)
}

/// Meal ratio sets and food tables
pub fn tables_text(tables: &ReferenceTables) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for day_type in DayType::ALL {
        let totals = tables.share_totals(day_type);
        writeln!(
            out,
            "{day_type} meals (carbs {:.0}%, protein {:.0}% allocated)",
            totals.carbs * 100.0,
            totals.protein * 100.0
        )?;
        for meal in tables.meal_ratios(day_type) {
            writeln!(
                out,
                "  {:<26} carbs {:>3.0}%  protein {:>3.0}%",
                meal.display_label(),
                meal.carbs_share * 100.0,
                meal.protein_share * 100.0
            )?;
        }
        writeln!(out)?;
    }

    for (title, foods) in [
        ("Staples", &tables.staples),
        ("Protein sources", &tables.protein_sources),
    ] {
        writeln!(out, "{title}")?;
        for food in foods {
            let unit = food
                .unit_weight_grams
                .map_or_else(String::new, |g| format!("  per {g:.0} g unit"));
            writeln!(
                out,
                "  {:<20} carbs {:.3}  protein {:.3}{unit}",
                food.name, food.carb_ratio, food.protein_ratio
            )?;
        }
    }
    Ok(out)
}
