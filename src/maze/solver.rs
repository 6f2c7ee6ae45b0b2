/*
solver.rs

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

//! Breadth-first shortest path from the entry to the exit.

use log::debug;
use std::collections::{HashMap, VecDeque};
use std::fmt;

use super::cell::{Direction, Pos};
use super::grid::Grid;

/// Shortest walk from the entry to the exit, one direction per traversed
/// open wall, in travel order.
///
/// The `Display` form is the sequence of direction letters, for example
/// `EESSEN`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    moves: Vec<Direction>,
}

impl Path {
    /// Number of moves in the path.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the path contains no move (entry and exit coincide).
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves, entry first.
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for direction in &self.moves {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

/// Find the shortest entry to exit path with a breadth-first search over the
/// open walls.
///
/// Returns `None` when the exit is unreachable, which a carved, connected
/// maze never produces but which remains a legitimate outcome rather than an
/// error. Neighbors are expanded in the fixed North, East, South, West order,
/// so the result is deterministic for a given wall layout: ties between
/// equal-length paths are broken by that order, never at random.
///
/// The transient visited markers are reset and reused; walls and obstacle
/// flags are not touched.
pub fn solve(grid: &mut Grid) -> Option<Path> {
    grid.reset_visited();
    let entry = grid.entry;
    let exit = grid.exit;
    grid.cell(entry)?;
    grid.cell(exit)?;

    grid.mark_visited(entry);
    let mut queue: VecDeque<Pos> = VecDeque::from([entry]);
    let mut parents: HashMap<Pos, (Pos, Direction)> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == exit {
            let path = reconstruct(&parents, entry, exit);
            debug!("found a {}-move path from {entry} to {exit}", path.len());
            return Some(path);
        }
        for direction in Direction::ALL {
            if grid.has_wall(current, direction) {
                continue;
            }
            let Some(neighbor) = grid.neighbor(current, direction) else {
                continue;
            };
            if neighbor.visited {
                continue;
            }
            let neighbor_pos = neighbor.pos;
            grid.mark_visited(neighbor_pos);
            parents.insert(neighbor_pos, (current, direction));
            queue.push_back(neighbor_pos);
        }
    }
    debug!("no path from {entry} to {exit}");
    None
}

/// Walk the parent map backward from the exit and reverse the collected
/// directions into entry to exit order.
fn reconstruct(parents: &HashMap<Pos, (Pos, Direction)>, entry: Pos, exit: Pos) -> Path {
    let mut moves: Vec<Direction> = Vec::new();
    let mut current = exit;
    while current != entry {
        let Some(&(parent, direction)) = parents.get(&current) else {
            break;
        };
        moves.push(direction);
        current = parent;
    }
    moves.reverse();
    Path { moves }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_corridor() {
        let mut grid = Grid::new(4, 1, Pos::new(0, 0), Pos::new(3, 0)).expect("valid grid");
        for x in 0..3 {
            grid.carve_between(Pos::new(x, 0), Direction::East);
        }
        let path = solve(&mut grid).expect("solvable");
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "EEE");
    }

    #[test]
    fn entry_equals_exit() {
        let mut grid = Grid::new(3, 3, Pos::new(1, 1), Pos::new(1, 1)).expect("valid grid");
        let path = solve(&mut grid).expect("solvable");
        assert!(path.is_empty());
    }

    #[test]
    fn fully_walled_grid_has_no_solution() {
        let mut grid = Grid::new(3, 3, Pos::new(0, 0), Pos::new(2, 2)).expect("valid grid");
        assert_eq!(solve(&mut grid), None);
    }

    #[test]
    fn bfs_picks_the_shorter_branch() {
        // Two routes from (0, 0) to (2, 0): straight along the top row, or
        // down and around through the second row.
        let mut grid = Grid::new(3, 2, Pos::new(0, 0), Pos::new(2, 0)).expect("valid grid");
        grid.carve_between(Pos::new(0, 0), Direction::East);
        grid.carve_between(Pos::new(1, 0), Direction::East);
        grid.carve_between(Pos::new(0, 0), Direction::South);
        grid.carve_between(Pos::new(0, 1), Direction::East);
        grid.carve_between(Pos::new(1, 1), Direction::East);
        grid.carve_between(Pos::new(2, 1), Direction::North);
        let path = solve(&mut grid).expect("solvable");
        assert_eq!(path.to_string(), "EE");
    }

    #[test]
    fn solve_can_be_repeated() {
        let mut grid = Grid::new(4, 1, Pos::new(0, 0), Pos::new(3, 0)).expect("valid grid");
        for x in 0..3 {
            grid.carve_between(Pos::new(x, 0), Direction::East);
        }
        let first = solve(&mut grid).expect("solvable");
        let second = solve(&mut grid).expect("solvable");
        assert_eq!(first, second);
    }
}
