// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure nutrition constants: energy density, fat target steps, service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Daily fat target step function
///
/// The fat target is a three-way step on gender and body weight, not a
/// per-kilogram ratio.
pub mod fat_targets {
    /// Body weight above which males move to the heavy fat target (strictly greater)
    pub const MALE_HEAVY_THRESHOLD_KG: f64 = 120.0;
    /// Fat target for males above the threshold
    pub const MALE_HEAVY_GRAMS: u32 = 70;
    /// Fat target for males at or below the threshold
    pub const MALE_GRAMS: u32 = 60;
    /// Fat target for females, independent of weight
    pub const FEMALE_GRAMS: u32 = 50;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at logging startup
    pub const NUTRIPLAN: &str = "nutriplan";
}
