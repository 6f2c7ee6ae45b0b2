/*
imperfect.rs

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

//! Post-generation pass that reopens a bounded fraction of internal walls.
//!
//! A perfect maze has exactly one path between any two cells. This pass
//! introduces cycles by removing some of the remaining internal walls, while
//! rejecting any removal that would merge passages into a fully open 2x2
//! block of cells. The eligibility test is direction-symmetric: an East wall
//! checks the blocks above and below it, a South wall the blocks to its left
//! and right.

use log::debug;
use rand::seq::SliceRandom;

use super::carver::run_rng;
use super::cell::{Direction, Pos};
use super::grid::Grid;

/// Default fraction of the remaining internal walls to reopen.
pub const DEFAULT_RATE: f64 = 0.10;

/// Reopen up to `floor(internal_walls * rate)` walls, skipping removals that
/// would create a fully open 2x2 area.
///
/// The candidate walls are shuffled with the per-run random source, so the
/// result is reproducible for a given seed. Only wall state is mutated; the
/// visited and obstacle markers are left alone.
pub fn make_imperfect(grid: &mut Grid, rate: f64, seed: Option<u64>) {
    let mut rng = run_rng(seed);
    let mut walls = grid.internal_walls();
    walls.shuffle(&mut rng);

    let target = (walls.len() as f64 * rate).floor() as usize;
    let mut removed: usize = 0;
    for (pos, direction) in walls {
        if removed >= target {
            break;
        }
        if opens_area(grid, pos, direction) {
            continue;
        }
        grid.carve_between(pos, direction);
        removed += 1;
    }
    debug!("imperfection pass reopened {removed} walls (target {target})");
}

/// Whether removing the wall would complete a fully open 2x2 block on either
/// side of it.
fn opens_area(grid: &Grid, pos: Pos, direction: Direction) -> bool {
    let candidate = (pos, direction);
    match direction {
        Direction::East => {
            completes_block(grid, pos, candidate)
                || pos.y > 0 && completes_block(grid, Pos::new(pos.x, pos.y - 1), candidate)
        }
        Direction::South => {
            completes_block(grid, pos, candidate)
                || pos.x > 0 && completes_block(grid, Pos::new(pos.x - 1, pos.y), candidate)
        }
        // Internal walls are enumerated East and South only.
        _ => false,
    }
}

/// Whether the 2x2 block with the given top-left cell would become fully
/// open once `candidate` is removed, which is the case when its other three
/// internal edges are already open.
///
/// A block that reaches outside the grid or touches an obstacle cell can
/// never become fully open.
fn completes_block(grid: &Grid, top_left: Pos, candidate: (Pos, Direction)) -> bool {
    let Pos { x, y } = top_left;
    let corners = [
        Pos::new(x, y),
        Pos::new(x + 1, y),
        Pos::new(x, y + 1),
        Pos::new(x + 1, y + 1),
    ];
    for corner in corners {
        match grid.cell(corner) {
            Some(cell) if !cell.is_obstacle => {}
            _ => return false,
        }
    }

    let edges = [
        (top_left, Direction::East),
        (top_left, Direction::South),
        (Pos::new(x + 1, y), Direction::South),
        (Pos::new(x, y + 1), Direction::East),
    ];
    edges
        .into_iter()
        .filter(|edge| *edge != candidate)
        .all(|(pos, direction)| !grid.has_wall(pos, direction))
}
