/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Process-wide default units
//!
//! [`Flags`] is a plain immutable value. Readers of trajectories receive it by
//! reference; the optional process global is written at most once, normally at
//! startup, and reads before that see [`Flags::default`].

pub mod errors;

pub use errors::{ConfigError, Result};

use crate::units::{self, Dimension};
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default units and conversion behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Unit that lengths are reported in
    pub length_unit: String,
    /// Unit that times are reported in
    pub time_unit: String,
    /// Whether trajectory readers convert native lengths to `length_unit`
    pub convert_lengths: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            length_unit: "Angstrom".to_string(),
            time_unit: "ps".to_string(),
            convert_lengths: true,
        }
    }
}

impl Flags {
    /// Read flags from a JSON file; missing keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let flags = Self::from_json_str(&text)?;
        log::debug!("loaded flags from {}: {:?}", path.as_ref().display(), flags);
        Ok(flags)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let flags: Flags = serde_json::from_str(text)?;
        flags.validate()?;
        Ok(flags)
    }

    /// Check that the default units name a length and a time
    pub fn validate(&self) -> Result<()> {
        check_unit("length_unit", &self.length_unit, Dimension::Length)?;
        check_unit("time_unit", &self.time_unit, Dimension::Time)
    }

    /// Convert a length in `unit` to the configured length unit
    ///
    /// Returns the value unchanged when `convert_lengths` is off.
    pub fn to_length_unit(&self, value: f64, unit: &str) -> units::Result<f64> {
        if !self.convert_lengths {
            return Ok(value);
        }
        units::convert(value, unit, &self.length_unit)
    }

    /// Convert a time in `unit` to the configured time unit
    pub fn to_time_unit(&self, value: f64, unit: &str) -> units::Result<f64> {
        units::convert(value, unit, &self.time_unit)
    }
}

fn check_unit(flag: &'static str, value: &str, dimension: Dimension) -> Result<()> {
    units::factor(value, dimension).map(|_| ()).map_err(|source| {
        log::warn!("rejecting {} '{}': {}", flag, value, source);
        ConfigError::InvalidUnit {
            flag,
            value: value.to_string(),
            source,
        }
    })
}

static FLAGS: OnceCell<Flags> = OnceCell::new();
static DEFAULT_FLAGS: Lazy<Flags> = Lazy::new(Flags::default);

/// Install the process-wide flags; fails if they were already set
pub fn init(flags: Flags) -> Result<()> {
    flags.validate()?;
    FLAGS
        .set(flags)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    log::info!("flags initialized: {:?}", FLAGS.get());
    Ok(())
}

/// The process-wide flags, or the defaults if none were installed
pub fn flags() -> &'static Flags {
    FLAGS.get().unwrap_or(&DEFAULT_FLAGS)
}
