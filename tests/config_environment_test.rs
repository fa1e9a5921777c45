// ABOUTME: Integration tests for environment and file based planner configuration
// ABOUTME: Covers NUTRIPLAN_* overrides, JSON/YAML table files, and configuration error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use nutriplan::config::environment::{
    ENERGY_ALGORITHM, REST_CARBS_PER_KG, REST_PROTEIN_MIRRORS_TRAINING, TABLES_PATH,
    TRAINING_PROTEIN_PER_KG,
};
use nutriplan::config::{self, load_reference_tables, PlannerConfig, ReferenceTables};
use nutriplan::errors::ErrorCode;
use nutriplan::models::{DayType, EnergyAlgorithm};
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const YAML_TABLES: &str = r"
meal_ratios:
  training:
    - { meal: breakfast, carbs_share: 0.3, protein_share: 0.3 }
    - { meal: post_workout, label: After lifting, carbs_share: 0.4, protein_share: 0.4 }
    - { meal: dinner, carbs_share: 0.3, protein_share: 0.3 }
  rest:
    - { meal: lunch, carbs_share: 0.5, protein_share: 0.5 }
    - { meal: dinner, carbs_share: 0.5, protein_share: 0.5 }
staples:
  - { name: Sweet potato, carb_ratio: 0.2, protein_ratio: 0.016 }
protein_sources:
  - { name: Egg, carb_ratio: 0.0, protein_ratio: 0.13, unit_weight_grams: 50 }
";

#[test]
fn test_defaults_without_variables() {
    init_test_logging();
    let config = config::load_with(lookup(&[])).unwrap();
    assert_eq!(config, PlannerConfig::default());
}

#[test]
fn test_scalar_overrides() {
    let config = config::load_with(lookup(&[
        (ENERGY_ALGORITHM, "unadjusted-multiplication"),
        (TRAINING_PROTEIN_PER_KG, " 2.2 "),
        (REST_CARBS_PER_KG, "1.5"),
        (REST_PROTEIN_MIRRORS_TRAINING, "yes"),
    ]))
    .unwrap();

    assert_eq!(config.energy.algorithm, EnergyAlgorithm::UnadjustedMultiplication);
    let coefficients = config.macros.default_coefficients;
    assert!((coefficients.training.protein_per_kg - 2.2).abs() < 1e-12);
    assert!((coefficients.training.carbs_per_kg - 2.6).abs() < 1e-12);
    assert!((coefficients.rest.carbs_per_kg - 1.5).abs() < 1e-12);
    assert!(config.macros.rest_protein_mirrors_training);
}

#[test]
fn test_bad_override_values() {
    for vars in [
        [(ENERGY_ALGORITHM, "katch_mcardle")],
        [(REST_CARBS_PER_KG, "lots")],
        [(REST_PROTEIN_MIRRORS_TRAINING, "sometimes")],
    ] {
        let err = config::load_with(lookup(&vars)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert_eq!(err.exit_status(), 78);
    }

    // Parses, but fails validation
    let err = config::load_with(lookup(&[(REST_CARBS_PER_KG, "-1")])).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_yaml_tables_file() {
    let file = temp_file(".yaml", YAML_TABLES);
    let tables = load_reference_tables(file.path()).unwrap();

    assert_eq!(tables.meal_ratios(DayType::Training).len(), 3);
    assert_eq!(
        tables.meal_ratios(DayType::Training)[1].display_label(),
        "After lifting"
    );
    assert_eq!(tables.staples[0].name, "Sweet potato");
    assert_eq!(tables.protein_sources[0].unit_weight_grams, Some(50.0));
}

#[test]
fn test_json_tables_file_round_trips_defaults() {
    let json = serde_json::to_string_pretty(&ReferenceTables::default()).unwrap();
    let file = temp_file(".json", &json);
    assert_eq!(
        load_reference_tables(file.path()).unwrap(),
        ReferenceTables::default()
    );
}

#[test]
fn test_tables_file_errors() {
    let malformed = temp_file(".json", "{ \"meal_ratios\": ");
    assert_eq!(
        load_reference_tables(malformed.path()).unwrap_err().code,
        ErrorCode::InvalidFormat
    );

    let over_allocated = temp_file(
        ".yml",
        &YAML_TABLES.replace("meal: dinner, carbs_share: 0.5", "meal: dinner, carbs_share: 0.9"),
    );
    assert_eq!(
        load_reference_tables(over_allocated.path()).unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    let unsupported = temp_file(".toml", "");
    assert_eq!(
        load_reference_tables(unsupported.path()).unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_tables_path_via_lookup() {
    let file = temp_file(".yaml", YAML_TABLES);
    let path = file.path().to_str().unwrap().to_owned();
    let config = config::load_with(lookup(&[(TABLES_PATH, path.as_str())])).unwrap();
    assert_eq!(config.reference_tables.meal_ratios(DayType::Rest).len(), 2);

    let err = config::load_with(lookup(&[(TABLES_PATH, "/nonexistent/tables.yaml")])).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
#[serial]
fn test_load_reads_process_environment() {
    env::set_var(ENERGY_ALGORITHM, "multiplication");
    env::set_var(REST_PROTEIN_MIRRORS_TRAINING, "true");

    let result = config::load();

    env::remove_var(ENERGY_ALGORITHM);
    env::remove_var(REST_PROTEIN_MIRRORS_TRAINING);

    let config = result.unwrap();
    assert_eq!(config.energy.algorithm, EnergyAlgorithm::UnadjustedMultiplication);
    assert!(config.macros.rest_protein_mirrors_training);
}

#[test]
#[serial]
fn test_load_without_environment_uses_defaults() {
    env::remove_var(ENERGY_ALGORITHM);
    env::remove_var(TABLES_PATH);
    let config = config::load().unwrap();
    assert_eq!(config.energy.algorithm, EnergyAlgorithm::AdjustedDivision);
}
