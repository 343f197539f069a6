/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for flag configuration

use std::io;
use thiserror::Error;

use crate::units::UnitError;

/// Errors that can occur while loading or installing flags
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {flag} '{value}'")]
    InvalidUnit {
        flag: &'static str,
        value: String,
        source: UnitError,
    },

    #[error("Flags have already been initialized")]
    AlreadyInitialized,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
