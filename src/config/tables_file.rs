// ABOUTME: Loads reference tables (meal ratios, food densities) from JSON or YAML files
// ABOUTME: File extension selects the format; loaded tables are validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use nutriplan_intelligence::config::ReferenceTables;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFileFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl TableFileFormat {
    /// Detect the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(AppError::invalid_format(format!(
                "Unsupported file type for {}: expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }

    /// Deserialize `contents` in this format
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` with the parser error as source.
    pub fn parse<T: DeserializeOwned>(self, contents: &str) -> AppResult<T> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| {
                AppError::invalid_format(format!("Invalid JSON: {e}")).with_source(e)
            }),
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| {
                AppError::invalid_format(format!("Invalid YAML: {e}")).with_source(e)
            }),
        }
    }
}

/// Read and deserialize a JSON or YAML file
///
/// # Errors
///
/// Returns `CONFIG_MISSING` if the file cannot be read and `INVALID_FORMAT`
/// if it cannot be parsed.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = TableFileFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::config_missing(format!("Cannot read {}: {e}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })?;
    format.parse(&contents)
}

/// Load and validate reference tables from a file
///
/// The file replaces the built-in tables entirely; a file must list both
/// meal ratio sets and both food tables.
///
/// # Errors
///
/// Returns `CONFIG_MISSING`, `INVALID_FORMAT`, or `CONFIG_INVALID` when the
/// tables fail validation.
pub fn load_reference_tables(path: &Path) -> AppResult<ReferenceTables> {
    let tables: ReferenceTables = read_file(path)?;
    tables.validate()?;

    info!(
        path = %path.display(),
        staples = tables.staples.len(),
        protein_sources = tables.protein_sources.len(),
        "Loaded reference tables"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::errors::ErrorCode;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            TableFileFormat::from_path(Path::new("tables.JSON")).unwrap(),
            TableFileFormat::Json
        );
        assert_eq!(
            TableFileFormat::from_path(Path::new("a/b/tables.yml")).unwrap(),
            TableFileFormat::Yaml
        );
        let err = TableFileFormat::from_path(Path::new("tables.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_missing_file_is_config_missing() {
        let err = load_reference_tables(Path::new("/nonexistent/nutriplan/tables.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }
}
