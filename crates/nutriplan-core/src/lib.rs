// ABOUTME: Core types and constants for the Nutriplan nutrition planning engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the Nutriplan
//! nutrition planning engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition constants (energy per gram, fat target steps)
//! - **models**: Profile, energy, macro, meal, and portion data models

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;

/// Core data models (Profile, `EnergyProfile`, `MacroTargets`, meals, portions)
pub mod models;
