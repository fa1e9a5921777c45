// ABOUTME: Nutriplan CLI - computes energy profiles and full nutrition plans from the command line
// ABOUTME: Renders plans as text, JSON, or YAML on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Energy summary (BMI, BMR, maintenance, day totals)
//! nutriplan base --gender male --height 175 --weight 70 --age 25 --experience novice
//!
//! # Full plan with custom coefficients, as JSON
//! nutriplan plan --gender female --height 165 --weight 58 --age 31 \
//!     --training-carbs 3.0 --rest-carbs 2.2 --format json
//!
//! # Many plans at once from a JSON or YAML list of requests
//! nutriplan batch requests.yaml --format json
//!
//! # Show the reference tables in effect
//! nutriplan tables --tables my-foods.yaml --format yaml
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use helpers::display::OutputFormat;
use nutriplan::config::{self, load_reference_tables, PlannerConfig};
use nutriplan::errors::AppResult;
use nutriplan::logging::LoggingConfig;
use nutriplan::models::{
    DayCoefficients, EnergyAlgorithm, ExperienceLevel, Gender, MacroCoefficients, Profile,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "nutriplan",
    version,
    about = "Personalized daily nutrition planning",
    long_about = "Computes energy expenditure, training and rest day macro targets, per-meal splits, and reference food portions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference table file (JSON or YAML), replaces the built-in tables
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Energy algorithm: `adjusted_division` or `unadjusted_multiplication`
    #[arg(long, global = true)]
    algorithm: Option<EnergyAlgorithm>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Energy summary for a profile
    Base {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Full plan: macro targets, meals, and food portions for both day types
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        coefficients: CoefficientArgs,

        /// Use the training-day protein total on rest days
        #[arg(long)]
        mirror_rest_protein: bool,
    },

    /// Plan every request in a JSON or YAML file
    Batch {
        /// File containing a list of `{ profile, coefficients? }` requests
        requests: PathBuf,
    },

    /// Show the reference tables in effect
    Tables,
}

#[derive(Args)]
struct ProfileArgs {
    /// Gender (male, female)
    #[arg(long)]
    gender: Gender,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Training experience (novice, intermediate, advanced)
    #[arg(long, default_value = "novice")]
    experience: ExperienceLevel,

    /// Aerobic expenditure on top of maintenance (kcal)
    #[arg(long, default_value_t = 0.0)]
    aerobic: f64,
}

impl ProfileArgs {
    fn to_profile(&self) -> Profile {
        Profile {
            gender: self.gender,
            height_cm: self.height,
            weight_kg: self.weight,
            age_years: self.age,
            experience_level: self.experience,
            aerobic_expenditure_kcal: self.aerobic,
        }
    }
}

#[derive(Args)]
struct CoefficientArgs {
    /// Training-day carbohydrate grams per kg
    #[arg(long)]
    training_carbs: Option<f64>,

    /// Training-day protein grams per kg
    #[arg(long)]
    training_protein: Option<f64>,

    /// Rest-day carbohydrate grams per kg
    #[arg(long)]
    rest_carbs: Option<f64>,

    /// Rest-day protein grams per kg
    #[arg(long)]
    rest_protein: Option<f64>,
}

impl CoefficientArgs {
    fn resolve(&self, defaults: DayCoefficients) -> DayCoefficients {
        DayCoefficients {
            training: MacroCoefficients::new(
                self.training_carbs.unwrap_or(defaults.training.carbs_per_kg),
                self.training_protein
                    .unwrap_or(defaults.training.protein_per_kg),
            ),
            rest: MacroCoefficients::new(
                self.rest_carbs.unwrap_or(defaults.rest.carbs_per_kg),
                self.rest_protein.unwrap_or(defaults.rest.protein_per_kg),
            ),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: logging not initialized: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(&cli)?;
    let format = cli.format;

    match cli.command {
        Command::Base { profile } => commands::base(config, &profile.to_profile(), format),
        Command::Plan {
            profile,
            coefficients,
            mirror_rest_protein,
        } => {
            let mut config = config;
            config.macros.rest_protein_mirrors_training |= mirror_rest_protein;
            let coefficients = coefficients.resolve(config.macros.default_coefficients);
            commands::plan(config, &profile.to_profile(), &coefficients, format)
        }
        Command::Batch { requests } => commands::batch(config, &requests, format),
        Command::Tables => commands::tables(&config, format),
    }
}

/// Environment configuration with command-line overrides on top
fn load_config(cli: &Cli) -> AppResult<PlannerConfig> {
    let mut config = config::load()?;
    if let Some(path) = &cli.tables {
        config = config.with_reference_tables(load_reference_tables(path)?);
    }
    if let Some(algorithm) = cli.algorithm {
        config.energy.algorithm = algorithm;
    }
    Ok(config)
}
