/*
grid.rs

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

//! The maze grid and its wall-mutation primitives.
//!
//! The grid owns all the cells and is the only place where walls are opened.
//! [`Grid::carve_between`] updates both sides of a wall in one operation, so
//! for any two adjacent cells the wall state always agrees: a cell has a wall
//! toward its neighbor exactly when the neighbor has the facing wall.
//!
//! The fixed obstacle region is stamped at construction time. Obstacle cells
//! keep their four walls forever and are created as visited, so the carvers
//! and the solver skip them without any special casing.

use log::debug;

use super::cell::{ALL_WALLS, Cell, Direction, Pos};
use crate::config::ConfigError;

/// Width of the obstacle footprint.
const PATTERN_WIDTH: usize = 7;

/// Height of the obstacle footprint.
const PATTERN_HEIGHT: usize = 5;

/// Fixed obstacle footprint, stamped centered in the grid (`true` = filled).
/// The stamping is independent of the carving algorithms, so an alternate
/// pattern only requires changing this table.
const OBSTACLE_PATTERN: [[bool; PATTERN_WIDTH]; PATTERN_HEIGHT] = [
    [true, false, false, false, true, true, true],
    [true, false, false, false, false, false, true],
    [true, true, true, false, true, true, true],
    [false, false, true, false, true, false, false],
    [false, false, true, false, true, true, true],
];

/// Rectangular grid of cells with a designated entry and exit.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Entry cell of the maze.
    pub entry: Pos,

    /// Exit cell of the maze.
    pub exit: Pos,

    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid, stamp the obstacle region, and validate
    /// the entry and exit cells.
    ///
    /// # Errors
    ///
    /// Fails when a dimension is zero, or when the entry or exit is out of
    /// bounds or lies on an obstacle cell. Both endpoints are checked here so
    /// that a bad configuration is reported before any carving starts.
    pub fn new(width: usize, height: usize, entry: Pos, exit: Pos) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSize { width, height });
        }

        let mut cells: Vec<Cell> = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Pos::new(x, y)));
            }
        }

        let mut grid = Self {
            width,
            height,
            entry,
            exit,
            cells,
        };
        grid.stamp_obstacles();
        grid.check_endpoint("entry", entry)?;
        grid.check_endpoint("exit", exit)?;
        Ok(grid)
    }

    /// Stamp the obstacle pattern centered in the grid. Grids too small to
    /// embed the pattern are left without any obstacle cell.
    fn stamp_obstacles(&mut self) {
        if self.width < PATTERN_WIDTH || self.height < PATTERN_HEIGHT {
            debug!(
                "grid {}x{} is too small for the obstacle pattern, skipping",
                self.width, self.height
            );
            return;
        }

        let start_x: usize = self.width / 2 - PATTERN_WIDTH / 2;
        let start_y: usize = self.height / 2 - PATTERN_HEIGHT / 2;

        for (py, row) in OBSTACLE_PATTERN.iter().enumerate() {
            for (px, filled) in row.iter().enumerate() {
                if !filled {
                    continue;
                }
                let pos = Pos::new(start_x + px, start_y + py);
                if let Some(cell) = self.cell_mut(pos) {
                    cell.is_obstacle = true;
                    cell.visited = true;
                    cell.walls = ALL_WALLS;
                }
            }
        }
        debug!(
            "obstacle pattern stamped with top-left corner at {},{}",
            start_x, start_y
        );
    }

    fn check_endpoint(&self, name: &'static str, pos: Pos) -> Result<(), ConfigError> {
        match self.cell(pos) {
            None => Err(ConfigError::OutOfBounds {
                name,
                pos,
                width: self.width,
                height: self.height,
            }),
            Some(cell) if cell.is_obstacle => Err(ConfigError::InsideObstacle { name, pos }),
            Some(_) => Ok(()),
        }
    }

    fn index(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }

    /// Cell at the given position, or `None` outside the grid.
    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if pos.x < self.width && pos.y < self.height {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        if pos.x < self.width && pos.y < self.height {
            let index = self.index(pos);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Iterate over all the cells in row-major order.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Position of the neighbor in the given direction, or `None` at the
    /// grid boundary. There is no wraparound.
    pub fn neighbor_pos(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        let (dx, dy) = direction.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        if x < self.width && y < self.height {
            Some(Pos::new(x, y))
        } else {
            None
        }
    }

    /// Neighbor cell in the given direction, or `None` at the grid boundary.
    pub fn neighbor(&self, pos: Pos, direction: Direction) -> Option<&Cell> {
        self.neighbor_pos(pos, direction).and_then(|p| self.cell(p))
    }

    /// Whether the cell at `pos` has a wall in the given direction. Positions
    /// outside the grid count as walled.
    pub fn has_wall(&self, pos: Pos, direction: Direction) -> bool {
        self.cell(pos).is_none_or(|cell| cell.has_wall(direction))
    }

    /// Whether the position belongs to the obstacle region.
    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_obstacle)
    }

    /// In-bounds neighbors that are neither visited nor obstacle cells, with
    /// the direction leading to them.
    pub fn unvisited_neighbors(&self, pos: Pos) -> Vec<(Pos, Direction)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let neighbor = self.neighbor(pos, direction)?;
                (!neighbor.visited && !neighbor.is_obstacle).then_some((neighbor.pos, direction))
            })
            .collect()
    }

    /// In-bounds neighbors that are already visited and are not obstacle
    /// cells, with the direction leading to them.
    pub fn visited_neighbors(&self, pos: Pos) -> Vec<(Pos, Direction)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let neighbor = self.neighbor(pos, direction)?;
                (neighbor.visited && !neighbor.is_obstacle).then_some((neighbor.pos, direction))
            })
            .collect()
    }

    /// Mark the cell at the given position as visited.
    pub fn mark_visited(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = true;
        }
    }

    /// Reset the transient visited marker on every non-obstacle cell.
    /// Obstacle cells stay permanently visited.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_obstacle {
                cell.visited = false;
            }
        }
    }

    /// Open the wall between the cell at `pos` and its neighbor in the given
    /// direction, on both sides at once.
    ///
    /// This is the only sanctioned way to open a passage. The call is a no-op
    /// when either endpoint is an obstacle cell or outside the grid, so the
    /// carvers and the imperfection pass never need obstacle checks of their
    /// own.
    pub fn carve_between(&mut self, pos: Pos, direction: Direction) {
        let Some(cell) = self.cell(pos) else {
            return;
        };
        if cell.is_obstacle {
            return;
        }
        let Some(neighbor_pos) = self.neighbor_pos(pos, direction) else {
            return;
        };
        if self.is_obstacle(neighbor_pos) {
            return;
        }

        let index = self.index(pos);
        self.cells[index].remove_wall(direction);
        let neighbor_index = self.index(neighbor_pos);
        self.cells[neighbor_index].remove_wall(direction.opposite());
    }

    /// Every still-closed wall strictly between two non-obstacle cells.
    ///
    /// Only the East and South directions are considered so that each
    /// physical wall is counted exactly once; the West/North bit on the
    /// neighbor is the same wall.
    pub fn internal_walls(&self) -> Vec<(Pos, Direction)> {
        let mut walls: Vec<(Pos, Direction)> = Vec::new();
        for cell in &self.cells {
            if cell.is_obstacle {
                continue;
            }
            for direction in [Direction::East, Direction::South] {
                match self.neighbor(cell.pos, direction) {
                    Some(neighbor) if !neighbor.is_obstacle => {
                        if cell.has_wall(direction) {
                            walls.push((cell.pos, direction));
                        }
                    }
                    _ => {}
                }
            }
        }
        walls
    }
}
