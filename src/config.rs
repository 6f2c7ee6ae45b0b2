/*
config.rs

Copyright 2026 The Amazeing Authors

This file is part of Amazeing.

Amazeing is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Amazeing is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Amazeing. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Parse the maze configuration file into typed settings.
//!
//! The configuration file holds `KEY=VALUE` lines; any other line is
//! ignored. `WIDTH`, `HEIGHT`, `ENTRY`, and `EXIT` are required.
//!
//! ```text
//! WIDTH=20
//! HEIGHT=15
//! ENTRY=0,0
//! EXIT=19,14
//! PERFECT=False
//! ALGO=Prim
//! SEED=42
//! ```

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::maze::cell::Pos;
use crate::maze::generator::Algorithm;
use crate::maze::imperfect::DEFAULT_RATE;

/// Default name of the maze output file.
const DEFAULT_OUTPUT_FILE: &str = "maze.txt";

/// Everything that can be wrong with a maze configuration.
///
/// All the variants are detected before or at the start of the offending
/// operation; nothing is retried internally.
#[derive(Debug)]
pub enum ConfigError {
    /// A required key is missing from the configuration file.
    MissingKey(&'static str),

    /// A value that could not be parsed.
    InvalidValue { key: &'static str, value: String },

    /// A grid dimension is zero.
    InvalidSize { width: usize, height: usize },

    /// The entry or exit lies outside the grid.
    OutOfBounds {
        name: &'static str,
        pos: Pos,
        width: usize,
        height: usize,
    },

    /// The entry or exit lies inside the obstacle region.
    InsideObstacle { name: &'static str, pos: Pos },

    /// The requested carving algorithm is not implemented.
    UnknownAlgorithm(String),

    /// The carver start cell is missing, visited, or an obstacle cell.
    InvalidStart(&'static str),

    /// The configuration file could not be read.
    Io(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingKey(key) => {
                write!(f, "missing configuration key {key}")
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value {value:?} for {key}")
            }
            ConfigError::InvalidSize { width, height } => {
                write!(f, "invalid maze size {width}x{height}")
            }
            ConfigError::OutOfBounds {
                name,
                pos,
                width,
                height,
            } => {
                write!(f, "{name} {pos} is outside the {width}x{height} grid")
            }
            ConfigError::InsideObstacle { name, pos } => {
                write!(f, "{name} {pos} is inside the obstacle region")
            }
            ConfigError::UnknownAlgorithm(name) => {
                write!(f, "algorithm {name} is not implemented")
            }
            ConfigError::InvalidStart(reason) => {
                write!(f, "cannot start carving: {reason}")
            }
            ConfigError::Io(err) => {
                write!(f, "cannot read the configuration file: {err}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

/// Typed maze settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Entry cell.
    pub entry: Pos,

    /// Exit cell.
    pub exit: Pos,

    /// Whether the maze stays perfect. When `false`, the imperfection pass
    /// runs after carving.
    pub perfect: bool,

    /// Carving algorithm. Defaults to DFS when `ALGO` is absent.
    pub algorithm: Algorithm,

    /// Seed for reproducible generation.
    pub seed: Option<u64>,

    /// Fraction of the internal walls the imperfection pass may reopen.
    pub rate: f64,

    /// Where the generated maze is written.
    pub output_file: PathBuf,
}

impl Config {
    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its content is invalid.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration file contents.
    ///
    /// # Errors
    ///
    /// Fails when a required key is missing or a value cannot be parsed.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let defines = split_defines(contents);
        debug!("parsed configuration keys: {:?}", defines.keys());

        let config = Self {
            width: require(&defines, "WIDTH")?,
            height: require(&defines, "HEIGHT")?,
            entry: parse_pos(&defines, "ENTRY")?,
            exit: parse_pos(&defines, "EXIT")?,
            perfect: parse_bool(&defines, "PERFECT")?.unwrap_or(true),
            algorithm: match defines.get("ALGO") {
                Some(name) => Algorithm::from_name(name)?,
                None => Algorithm::default(),
            },
            seed: optional(&defines, "SEED")?,
            rate: parse_rate(&defines)?,
            output_file: defines
                .get("OUTPUT_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE), |value| PathBuf::from(*value)),
        };
        Ok(config)
    }
}

/// Collect the `KEY=VALUE` lines of the file. On repeated keys the last
/// line wins.
fn split_defines(contents: &str) -> HashMap<&str, &str> {
    contents
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim(), value.trim()))
        })
        .collect()
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn require<T: FromStr>(defines: &HashMap<&str, &str>, key: &'static str) -> Result<T, ConfigError> {
    optional(defines, key)?.ok_or(ConfigError::MissingKey(key))
}

fn optional<T: FromStr>(
    defines: &HashMap<&str, &str>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match defines.get(key) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| invalid(key, value)),
    }
}

fn parse_pos(defines: &HashMap<&str, &str>, key: &'static str) -> Result<Pos, ConfigError> {
    let value = defines.get(key).ok_or(ConfigError::MissingKey(key))?;
    let (x, y) = value.split_once(',').ok_or_else(|| invalid(key, value))?;
    let x = x.trim().parse().map_err(|_| invalid(key, value))?;
    let y = y.trim().parse().map_err(|_| invalid(key, value))?;
    Ok(Pos::new(x, y))
}

fn parse_bool(
    defines: &HashMap<&str, &str>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match defines.get(key) {
        None => Ok(None),
        Some(&"True") => Ok(Some(true)),
        Some(&"False") => Ok(Some(false)),
        Some(value) => Err(invalid(key, value)),
    }
}

fn parse_rate(defines: &HashMap<&str, &str>) -> Result<f64, ConfigError> {
    let Some(rate) = optional::<f64>(defines, "RATE")? else {
        return Ok(DEFAULT_RATE);
    };
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(invalid("RATE", &rate.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_configuration_with_defaults() {
        let config = Config::parse("WIDTH=20\nHEIGHT=15\nENTRY=0,0\nEXIT=19,14\n").expect("valid");
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 15);
        assert_eq!(config.entry, Pos::new(0, 0));
        assert_eq!(config.exit, Pos::new(19, 14));
        assert!(config.perfect);
        assert_eq!(config.algorithm, Algorithm::Dfs);
        assert_eq!(config.seed, None);
        assert_eq!(config.rate, DEFAULT_RATE);
        assert_eq!(config.output_file, PathBuf::from("maze.txt"));
    }

    #[test]
    fn full_configuration() {
        let config = Config::parse(
            "WIDTH=9\nHEIGHT=7\nENTRY=0,0\nEXIT=8,6\n\
             PERFECT=False\nALGO=Prim\nSEED=42\nRATE=0.25\nOUTPUT_FILE=out.txt\n",
        )
        .expect("valid");
        assert!(!config.perfect);
        assert_eq!(config.algorithm, Algorithm::Prim);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rate, 0.25);
        assert_eq!(config.output_file, PathBuf::from("out.txt"));
    }

    #[test]
    fn lines_without_an_equal_sign_are_ignored() {
        let config =
            Config::parse("# maze settings\n\nWIDTH=8\nHEIGHT=6\nENTRY=0,0\nEXIT=7,5\n")
                .expect("valid");
        assert_eq!(config.width, 8);
    }

    #[test]
    fn missing_width_is_reported() {
        let err = Config::parse("HEIGHT=5\nENTRY=0,0\nEXIT=4,4\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("WIDTH")));
    }

    #[test]
    fn malformed_entry_is_reported() {
        let err = Config::parse("WIDTH=5\nHEIGHT=5\nENTRY=zero\nEXIT=4,4\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "ENTRY", .. }));
    }

    #[test]
    fn unknown_algorithm_is_reported_with_its_name() {
        let err = Config::parse("WIDTH=5\nHEIGHT=5\nENTRY=0,0\nEXIT=4,4\nALGO=Kruskal\n")
            .unwrap_err();
        match err {
            ConfigError::UnknownAlgorithm(name) => assert_eq!(name, "Kruskal"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rate_outside_the_unit_interval_is_rejected() {
        let err =
            Config::parse("WIDTH=5\nHEIGHT=5\nENTRY=0,0\nEXIT=4,4\nRATE=1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "RATE", .. }));
    }

    #[test]
    fn perfect_accepts_only_the_two_literals() {
        let err =
            Config::parse("WIDTH=5\nHEIGHT=5\nENTRY=0,0\nEXIT=4,4\nPERFECT=no\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "PERFECT", .. }
        ));
    }
}
