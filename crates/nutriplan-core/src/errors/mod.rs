// ABOUTME: Unified error handling with standard error codes and structured context
// ABOUTME: AppError, ErrorCode, and the serializable ErrorResponse used by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Nutriplan
//! engine. It defines standard error codes and a serializable response format so
//! that every caller (library user, CLI, batch runner) reports failures the same way.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation (e.g. non-positive weight)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data could not be parsed in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value is outside its permitted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// A calculation phase was invoked before the phase it depends on
    #[serde(rename = "MISSING_PREREQUISITE")]
    MissingPrerequisite = 3004,

    // Configuration (6000-6999)
    /// Required configuration (e.g. a reference table file) is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration was found but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for command-line callers (sysexits.h conventions)
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 65,

            // EX_CONFIG
            Self::ConfigMissing | Self::ConfigInvalid => 78,

            // EX_SOFTWARE
            Self::MissingPrerequisite | Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::MissingPrerequisite => "A required earlier calculation step has not been run",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        self.code.exit_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope for machine-readable output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value out of range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid data format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// A dependent calculation phase was invoked too early
    pub fn missing_prerequisite(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingPrerequisite, message)
    }

    /// Configuration missing
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Configuration failed validation
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::InvalidInput.exit_status(), 65);
        assert_eq!(ErrorCode::ConfigInvalid.exit_status(), 78);
        assert_eq!(ErrorCode::MissingPrerequisite.exit_status(), 70);
    }

    #[test]
    fn test_configuration_codes_use_ex_config() {
        for (code, name) in [
            (ErrorCode::ConfigMissing, "\"CONFIG_MISSING\""),
            (ErrorCode::ConfigInvalid, "\"CONFIG_INVALID\""),
        ] {
            assert_eq!(code.exit_status(), 78);
            assert_eq!(serde_json::to_string(&code).unwrap(), name);
        }
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::invalid_input("Weight must be positive");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: Weight must be positive"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::missing_prerequisite("energy profile not computed")
            .with_details(serde_json::json!({ "phase": "full_plan" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("MISSING_PREREQUISITE"));
        assert!(json.contains("full_plan"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::internal("boom"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
