/*
dfs.rs

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

//! Iterative randomized depth-first backtracker.

use log::debug;
use rand::Rng;
use rand::RngCore;

use super::carver::{Carver, checked_start};
use super::cell::Pos;
use super::grid::Grid;
use crate::config::ConfigError;

/// Classic iterative backtracking carver.
///
/// The carved walls form a spanning tree over the non-obstacle cells
/// reachable from the entry: a perfect maze with exactly one simple path
/// between any two of those cells.
pub struct DfsBacktracker;

impl Carver for DfsBacktracker {
    fn carve(&self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<(), ConfigError> {
        let start = checked_start(grid)?;
        grid.mark_visited(start);
        let mut stack: Vec<Pos> = vec![start];

        while let Some(&current) = stack.last() {
            let neighbors = grid.unvisited_neighbors(current);
            if neighbors.is_empty() {
                // Dead end, backtrack.
                stack.pop();
                continue;
            }
            let (next, direction) = neighbors[rng.random_range(0..neighbors.len())];
            grid.carve_between(current, direction);
            grid.mark_visited(next);
            stack.push(next);
        }
        debug!("depth-first carve from {start} done");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::carver::run_rng;

    #[test]
    fn carve_visits_every_free_cell() {
        let mut grid = Grid::new(6, 4, Pos::new(0, 0), Pos::new(5, 3)).expect("valid grid");
        DfsBacktracker
            .carve(&mut grid, &mut run_rng(Some(1)))
            .expect("carve");
        assert!(grid.cells().all(|cell| cell.visited));
    }

    #[test]
    fn carve_twice_fails_on_the_visited_entry() {
        let mut grid = Grid::new(6, 4, Pos::new(0, 0), Pos::new(5, 3)).expect("valid grid");
        DfsBacktracker
            .carve(&mut grid, &mut run_rng(Some(1)))
            .expect("carve");
        assert!(matches!(
            DfsBacktracker.carve(&mut grid, &mut run_rng(Some(1))),
            Err(ConfigError::InvalidStart(_))
        ));
    }
}
