// ABOUTME: Integration tests for the energy model (BMR, maintenance energy, day totals)
// ABOUTME: Covers reference profiles, rounding order, algorithm selection, and profile rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_female, reference_male};
use nutriplan::config::EnergyConfig;
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::compute_energy_profile;
use nutriplan::intelligence::energy_model::{calculate_bmr, derive_energy_totals};
use nutriplan::models::{EnergyAlgorithm, ExperienceLevel, Gender, Profile};

#[test]
fn test_reference_male_profile() {
    init_test_logging();
    let energy = compute_energy_profile(&reference_male(), &EnergyConfig::default()).unwrap();

    // 9.99 x 70 + 6.25 x 175 - 4.92 x 25 + 5 = 1675.05
    assert_eq!(energy.bmr, 1675);
    assert_eq!(energy.maintenance_energy, 2393);
    assert_eq!(energy.training_calorie_bonus, 150);
    assert_eq!(energy.training_day_total, 1628);
    assert_eq!(energy.rest_day_total, 1532);
    assert!((energy.bmi - 22.9).abs() < 1e-9);
    assert_eq!(energy.algorithm, EnergyAlgorithm::AdjustedDivision);
}

#[test]
fn test_reference_female_profile_with_aerobic_work() {
    let energy = compute_energy_profile(&reference_female(), &EnergyConfig::default()).unwrap();

    // 579.42 + 1031.25 - 152.52 - 161 = 1297.15
    assert_eq!(energy.bmr, 1297);
    assert_eq!(energy.maintenance_energy, 1853);
    assert_eq!(energy.training_calorie_bonus, 200);
    // (1853 + 200 + 150) x 0.64 = 1409.92
    assert_eq!(energy.training_day_total, 1410);
    // (1853 + 150) x 0.64 = 1281.92
    assert_eq!(energy.rest_day_total, 1282);
}

#[test]
fn test_day_totals_derive_from_rounded_bmr() {
    let totals = derive_energy_totals(1495, 150, 0.0, &EnergyConfig::default());
    assert_eq!(totals.maintenance_energy, 2136);
    assert_eq!(totals.training_day_total, 1463);
    assert_eq!(totals.rest_day_total, 1367);
}

#[test]
fn test_training_bonus_by_experience() {
    let config = EnergyConfig::default();
    for (level, bonus) in [
        (ExperienceLevel::Novice, 150),
        (ExperienceLevel::Intermediate, 200),
        (ExperienceLevel::Advanced, 250),
    ] {
        let profile = Profile {
            experience_level: level,
            ..reference_male()
        };
        let energy = compute_energy_profile(&profile, &config).unwrap();
        assert_eq!(energy.training_calorie_bonus, bonus);
    }
}

#[test]
fn test_maintenance_and_day_ordering_hold_across_profiles() {
    let config = EnergyConfig::default();
    for gender in [Gender::Male, Gender::Female] {
        for weight in [45.0, 62.5, 80.0, 121.0] {
            for age in [18, 35, 60] {
                for aerobic in [0.0, 300.0] {
                    let profile = Profile {
                        gender,
                        height_cm: 172.0,
                        weight_kg: weight,
                        age_years: age,
                        experience_level: ExperienceLevel::Advanced,
                        aerobic_expenditure_kcal: aerobic,
                    };
                    let energy = compute_energy_profile(&profile, &config).unwrap();

                    let raw = calculate_bmr(&profile, &config.bmr);
                    assert_eq!(f64::from(energy.bmr), raw.round());
                    assert_eq!(
                        f64::from(energy.maintenance_energy),
                        (f64::from(energy.bmr) / 0.7).round()
                    );
                    assert!(energy.training_day_total > energy.rest_day_total);
                }
            }
        }
    }
}

#[test]
fn test_multiplication_algorithm_leaves_day_totals_unscaled() {
    let config = EnergyConfig::default().with_algorithm(EnergyAlgorithm::UnadjustedMultiplication);
    let profile = reference_female();
    let energy = compute_energy_profile(&profile, &config).unwrap();

    assert_eq!(energy.algorithm, EnergyAlgorithm::UnadjustedMultiplication);
    assert!(energy.maintenance_energy < energy.bmr);
    assert_eq!(
        energy.rest_day_total,
        energy.maintenance_energy + 150
    );
    assert_eq!(
        energy.training_day_total,
        energy.rest_day_total + energy.training_calorie_bonus
    );
}

#[test]
fn test_invalid_profiles_rejected() {
    let config = EnergyConfig::default();
    let invalid = [
        Profile {
            height_cm: 0.0,
            ..reference_male()
        },
        Profile {
            weight_kg: -70.0,
            ..reference_male()
        },
        Profile {
            age_years: 0,
            ..reference_male()
        },
    ];
    for profile in invalid {
        let err = compute_energy_profile(&profile, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.exit_status(), 65);
    }
}
