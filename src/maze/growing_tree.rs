/*
growing_tree.rs

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

//! Randomized growing-tree carver.

use log::debug;
use rand::Rng;
use rand::RngCore;

use super::carver::{Carver, checked_start};
use super::cell::Pos;
use super::grid::Grid;
use crate::config::ConfigError;

/// Prim-style growing-tree carver.
///
/// Unlike textbook Prim, edges are unweighted and a frontier cell is
/// connected to a uniformly random already visited neighbor, not necessarily
/// the one that discovered it. The frontier tolerates duplicates: a cell
/// added by several visited neighbors appears several times and the extra
/// entries are discarded lazily at pop time. Both choices shape the maze
/// texture and are kept deliberately.
pub struct GrowingTree;

impl Carver for GrowingTree {
    fn carve(&self, grid: &mut Grid, rng: &mut dyn RngCore) -> Result<(), ConfigError> {
        let start = checked_start(grid)?;
        grid.mark_visited(start);
        let mut frontier: Vec<Pos> = grid
            .unvisited_neighbors(start)
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();

        while !frontier.is_empty() {
            let picked = frontier.swap_remove(rng.random_range(0..frontier.len()));
            if grid.cell(picked).is_some_and(|cell| cell.visited) {
                // Stale duplicate entry.
                continue;
            }

            // Every frontier entry was appended by a visited neighbor, so
            // there is at least one to connect to.
            let back_links = grid.visited_neighbors(picked);
            if back_links.is_empty() {
                continue;
            }
            let (_, direction) = back_links[rng.random_range(0..back_links.len())];
            grid.carve_between(picked, direction);
            grid.mark_visited(picked);
            frontier.extend(
                grid.unvisited_neighbors(picked)
                    .into_iter()
                    .map(|(pos, _)| pos),
            );
        }
        debug!("growing-tree carve from {start} done");
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
        GrowingTree
            .carve(&mut grid, &mut run_rng(Some(3)))
            .expect("carve");
        assert!(grid.cells().all(|cell| cell.visited));
    }
}
