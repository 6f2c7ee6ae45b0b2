/*
generator.rs

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

//! Algorithm selection and the configuration-driven generation pipeline.

use log::info;
use strum_macros::Display;

use super::carver::{Carver, run_rng};
use super::dfs::DfsBacktracker;
use super::grid::Grid;
use super::growing_tree::GrowingTree;
use super::imperfect::make_imperfect;
use crate::config::{Config, ConfigError};

/// The supported carving algorithms.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Depth-first iterative backtracker, the default.
    #[default]
    #[strum(serialize = "DFS")]
    Dfs,

    /// Randomized growing-tree variant.
    #[strum(serialize = "Prim")]
    Prim,
}

impl Algorithm {
    /// Resolve an algorithm identifier.
    ///
    /// The match is case-sensitive; unrecognized names are rejected rather
    /// than silently replaced with the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAlgorithm`] naming the rejected
    /// identifier.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "DFS" => Ok(Algorithm::Dfs),
            "Prim" => Ok(Algorithm::Prim),
            _ => Err(ConfigError::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// Carve a maze into the grid with the given algorithm.
///
/// # Errors
///
/// Fails when the grid entry is not a valid start cell.
pub fn carve(grid: &mut Grid, algorithm: Algorithm, seed: Option<u64>) -> Result<(), ConfigError> {
    info!(
        "carving a {}x{} maze with the {algorithm} algorithm",
        grid.width, grid.height
    );
    let mut rng = run_rng(seed);
    let carver: &dyn Carver = match algorithm {
        Algorithm::Dfs => &DfsBacktracker,
        Algorithm::Prim => &GrowingTree,
    };
    carver.carve(grid, &mut rng)
}

/// Carve a maze, resolving the algorithm by name.
///
/// # Errors
///
/// Fails on an unknown algorithm name, leaving the grid untouched, or when
/// the grid entry is not a valid start cell.
pub fn carve_named(grid: &mut Grid, name: &str, seed: Option<u64>) -> Result<(), ConfigError> {
    carve(grid, Algorithm::from_name(name)?, seed)
}

/// Build, carve, and optionally roughen a maze from a parsed configuration.
///
/// # Errors
///
/// Propagates the construction and carving errors.
pub fn generate_maze(config: &Config) -> Result<Grid, ConfigError> {
    let mut grid = Grid::new(config.width, config.height, config.entry, config.exit)?;
    carve(&mut grid, config.algorithm, config.seed)?;
    if !config.perfect {
        make_imperfect(&mut grid, config.rate, config.seed);
    }
    Ok(grid)
}
