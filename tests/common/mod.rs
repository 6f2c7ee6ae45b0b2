/*
mod.rs

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

//! Common test utilities shared across integration tests.

use std::collections::{HashMap, HashSet, VecDeque};

use amazeing::{Direction, Grid, Pos};

/// Assert the wall-symmetry invariant over the whole grid: a cell has a wall
/// toward its neighbor exactly when the neighbor has the facing wall.
pub fn assert_wall_symmetry(grid: &Grid) {
    for cell in grid.cells() {
        for direction in Direction::ALL {
            if let Some(neighbor) = grid.neighbor_pos(cell.pos, direction) {
                assert_eq!(
                    grid.has_wall(cell.pos, direction),
                    grid.has_wall(neighbor, direction.opposite()),
                    "wall mismatch between {} and {neighbor}",
                    cell.pos
                );
            }
        }
    }
}

/// Number of cells outside the obstacle region.
pub fn non_obstacle_count(grid: &Grid) -> usize {
    grid.cells().filter(|cell| !cell.is_obstacle).count()
}

/// Number of open walls between adjacent cells, counting each wall once.
pub fn open_wall_count(grid: &Grid) -> usize {
    let mut count: usize = 0;
    for cell in grid.cells() {
        for direction in [Direction::East, Direction::South] {
            if grid.neighbor_pos(cell.pos, direction).is_some() && !cell.has_wall(direction) {
                count += 1;
            }
        }
    }
    count
}

/// Cells reachable from `from` through open walls, independently of the
/// transient visited markers.
pub fn reachable_cells(grid: &Grid, from: Pos) -> HashSet<Pos> {
    let mut seen: HashSet<Pos> = HashSet::from([from]);
    let mut queue: VecDeque<Pos> = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            if grid.has_wall(current, direction) {
                continue;
            }
            if let Some(next) = grid.neighbor_pos(current, direction) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

/// Reference shortest-path distance in moves, or `None` when unreachable.
/// Plain unweighted BFS, independent of the solver under test.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<usize> {
    let mut distances: HashMap<Pos, usize> = HashMap::from([(from, 0)]);
    let mut queue: VecDeque<Pos> = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        if current == to {
            return Some(distance);
        }
        for direction in Direction::ALL {
            if grid.has_wall(current, direction) {
                continue;
            }
            if let Some(next) = grid.neighbor_pos(current, direction) {
                if !distances.contains_key(&next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

/// Wall masks of all the cells in row-major order, for layout comparisons.
pub fn wall_layout(grid: &Grid) -> Vec<u8> {
    grid.cells().map(|cell| cell.walls).collect()
}
