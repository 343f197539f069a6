/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides a command-line interface for mdunits.

use crate::config::{self, Flags};
use crate::units::{self, Dimension};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Unit conversion for molecular-dynamics quantities
#[derive(Debug, Parser)]
#[command(name = "mdunits", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value between two units of the same dimension
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// List conversion tables
    Units {
        /// Only list one dimension (length, time, energy, force, charge, speed)
        #[arg(short, long)]
        dimension: Option<Dimension>,
        #[arg(long)]
        json: bool,
    },
    /// List physical constants
    Constants {
        #[arg(long)]
        json: bool,
    },
    /// Show the effective default flags
    Flags {
        /// JSON file overriding the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed command and return what should be printed
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Convert { value, from, to } => {
            let result = units::convert(*value, from, to)
                .with_context(|| format!("converting {} {} to {}", value, from, to))?;
            Ok(format!("{} {}", result, to))
        }
        Command::Units { dimension, json } => {
            let dimensions: Vec<Dimension> = match dimension {
                Some(d) => vec![*d],
                None => Dimension::ALL.to_vec(),
            };
            let tables: BTreeMap<String, BTreeMap<&str, f64>> = dimensions
                .into_iter()
                .map(|d| {
                    let table = units::unit_factor(d).iter().map(|(k, v)| (*k, *v)).collect();
                    (d.name().to_string(), table)
                })
                .collect();
            if *json {
                return Ok(serde_json::to_string_pretty(&tables)?);
            }
            let mut out = Vec::new();
            for (name, table) in &tables {
                out.push(format!("[{}]", name));
                for (unit, factor) in table {
                    out.push(format!("  {:<22} {:e}", unit, factor));
                }
            }
            Ok(out.join("\n"))
        }
        Command::Constants { json } => {
            let constants: BTreeMap<&str, f64> =
                units::constants().iter().map(|(k, v)| (*k, *v)).collect();
            if *json {
                return Ok(serde_json::to_string_pretty(&constants)?);
            }
            Ok(constants
                .iter()
                .map(|(name, value)| format!("{:<20} {:e}", name, value))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Flags { config: path, json } => {
            let flags = match path {
                Some(path) => Flags::from_json_file(path)
                    .with_context(|| format!("loading flags from {}", path.display()))?,
                None => config::flags().clone(),
            };
            if *json {
                return Ok(serde_json::to_string_pretty(&flags)?);
            }
            Ok(format!(
                "length_unit     {}\ntime_unit       {}\nconvert_lengths {}",
                flags.length_unit, flags.time_unit, flags.convert_lengths
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("mdunits").chain(args.iter().copied()))?;
        run(&cli)
    }

    #[test]
    fn test_convert_command() {
        assert_eq!(run_args(&["convert", "1", "nm", "A"]).unwrap(), "10 A");
    }

    #[test]
    fn test_convert_command_reports_unknown_unit() {
        let err = run_args(&["convert", "1", "Stone", "nm"]).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown unit: Stone"));
    }

    #[test]
    fn test_units_json_for_one_dimension() {
        let out = run_args(&["units", "--dimension", "time", "--json"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["time"]["ps"], 1.0);
        assert!(parsed.get("length").is_none());
    }

    #[test]
    fn test_default_flags_listing() {
        let out = run_args(&["flags"]).unwrap();
        assert!(out.contains("Angstrom"));
    }
}
