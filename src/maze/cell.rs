/*
cell.rs

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

//! Cells, wall directions, and grid coordinates.

use std::fmt;

use strum_macros::Display;

/// Wall mask with all four walls closed.
pub const ALL_WALLS: u8 = 0x0F;

/// Direction of one of the four walls of a cell.
///
/// The discriminant of each variant is its bit in the cell wall mask, so
/// `direction as u8` is the mask bit. The `Display` form is the single
/// letter used in the persisted solution path.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    #[strum(serialize = "N")]
    North = 1,

    #[strum(serialize = "E")]
    East = 2,

    #[strum(serialize = "S")]
    South = 4,

    #[strum(serialize = "W")]
    West = 8,
}

impl Direction {
    /// All the directions, in the fixed order the solver expands neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bit of the direction in the cell wall mask.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Direction of the facing wall on the adjacent cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Offset `(dx, dy)` of the neighbor in this direction. North is up,
    /// toward smaller `y` values.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Coordinates of a cell in the grid. Displayed as `x,y`, the form used for
/// the entry and exit lines of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    /// Create a position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One cell of the maze grid.
///
/// The four walls are stored as a bitmask (bit set = wall closed). A cell
/// starts fully enclosed. The `visited` marker is transient: the carvers set
/// it during generation and the solver resets and reuses it during search.
/// Obstacle cells are immovable pillars: they are created with all walls
/// closed and their mask is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Position of the cell, its identity in the grid.
    pub pos: Pos,

    /// Wall bitmask: bit 0 = North, bit 1 = East, bit 2 = South, bit 3 = West.
    pub walls: u8,

    /// Transient marker used by the carvers and the solver.
    pub visited: bool,

    /// Whether the cell belongs to the fixed obstacle region.
    pub is_obstacle: bool,
}

impl Cell {
    /// Create a fully enclosed, unvisited cell.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            walls: ALL_WALLS,
            visited: false,
            is_obstacle: false,
        }
    }

    /// Whether the cell has a wall in the given direction.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    /// Open the wall in the given direction. Obstacle cells keep their walls.
    ///
    /// Opening a wall on one cell only would break the wall symmetry between
    /// adjacent cells, so this is only reachable through
    /// [`super::grid::Grid::carve_between`].
    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        if !self.is_obstacle {
            self.walls &= !direction.bit();
        }
    }

    /// The wall mask as an uppercase hexadecimal digit, the persisted form
    /// of the cell.
    pub fn hex_digit(&self) -> char {
        b"0123456789ABCDEF"[(self.walls & ALL_WALLS) as usize] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_bits_are_distinct_wall_bits() {
        let mask: u8 = Direction::ALL.iter().map(|d| d.bit()).sum();
        assert_eq!(mask, ALL_WALLS);
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn direction_letters() {
        let letters: String = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(letters, "NESW");
    }

    #[test]
    fn new_cell_is_fully_enclosed() {
        let cell = Cell::new(Pos::new(2, 3));
        assert_eq!(cell.walls, ALL_WALLS);
        assert_eq!(cell.hex_digit(), 'F');
        for direction in Direction::ALL {
            assert!(cell.has_wall(direction));
        }
    }

    #[test]
    fn remove_wall_clears_the_bit() {
        let mut cell = Cell::new(Pos::new(0, 0));
        cell.remove_wall(Direction::East);
        cell.remove_wall(Direction::South);
        assert_eq!(cell.walls, 0x09);
        assert_eq!(cell.hex_digit(), '9');
        assert!(!cell.has_wall(Direction::East));
        assert!(cell.has_wall(Direction::North));
    }

    #[test]
    fn obstacle_cell_keeps_its_walls() {
        let mut cell = Cell::new(Pos::new(0, 0));
        cell.is_obstacle = true;
        cell.remove_wall(Direction::North);
        assert_eq!(cell.walls, ALL_WALLS);
    }

    #[test]
    fn pos_display() {
        assert_eq!(Pos::new(6, 4).to_string(), "6,4");
    }
}
