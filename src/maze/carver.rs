/*
carver.rs

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

//! The carving capability shared by the maze generation algorithms.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::cell::Pos;
use super::grid::Grid;
use crate::config::ConfigError;

/// Capability to carve a spanning structure over the non-obstacle cells of a
/// grid, starting from its entry cell.
pub trait Carver {
    /// Carve passages into the grid, leaving every cell reachable from the
    /// entry visited.
    ///
    /// # Errors
    ///
    /// Fails with a [`ConfigError`] when the start cell is invalid.
    fn carve(&self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<(), ConfigError>;
}

/// Random source for one generation run.
///
/// Each run owns its generator: seeded runs are reproducible, and concurrent
/// or repeated runs never share random state.
pub(crate) fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Validate the entry cell before carving starts.
///
/// A missing, obstacle, or already visited start cell indicates a malformed
/// configuration and is reported before any wall is touched.
pub(crate) fn checked_start(grid: &Grid) -> Result<Pos, ConfigError> {
    match grid.cell(grid.entry) {
        None => Err(ConfigError::InvalidStart("start cell is outside the grid")),
        Some(cell) if cell.is_obstacle => Err(ConfigError::InvalidStart(
            "start cell is inside the obstacle region",
        )),
        Some(cell) if cell.visited => {
            Err(ConfigError::InvalidStart("start cell was already visited"))
        }
        Some(cell) => Ok(cell.pos),
    }
}
