// ABOUTME: Unified error handling re-exported from nutriplan-core
// ABOUTME: Keeps nutriplan::errors as the stable import path for library and CLI callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation returns [`AppResult`]. An [`AppError`] carries an
//! [`ErrorCode`], a message, optional structured details, and the source
//! error. Command-line callers map the code to a process exit status with
//! [`AppError::exit_status`].

pub use nutriplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
pub use nutriplan_intelligence::ConfigError;
