/*
render.rs

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

//! Static ASCII rendering of the maze.
//!
//! The maze and the optional solution path are drawn read-only, cell by
//! cell: `E` marks the entry, `X` the exit, `#` fills obstacle cells, and
//! `.` marks the cells of the solution path.

use std::collections::HashSet;

use crate::maze::cell::{Direction, Pos};
use crate::maze::grid::Grid;
use crate::maze::solver::Path;

/// Render the maze, and the solution path when given, as ASCII art.
pub fn render_ascii(grid: &Grid, path: Option<&Path>) -> String {
    let on_path = path_cells(grid, path);
    let mut out = String::new();

    // Top border, following the North walls of the first row.
    for x in 0..grid.width {
        out.push_str(if grid.has_wall(Pos::new(x, 0), Direction::North) {
            "+---"
        } else {
            "+   "
        });
    }
    out.push_str("+\n");

    for y in 0..grid.height {
        // West walls and cell interiors.
        for x in 0..grid.width {
            let pos = Pos::new(x, y);
            out.push(if grid.has_wall(pos, Direction::West) {
                '|'
            } else {
                ' '
            });
            out.push_str(cell_content(grid, pos, &on_path));
        }
        out.push_str("|\n");

        // South walls.
        for x in 0..grid.width {
            out.push_str(if grid.has_wall(Pos::new(x, y), Direction::South) {
                "+---"
            } else {
                "+   "
            });
        }
        out.push_str("+\n");
    }
    out
}

fn cell_content(grid: &Grid, pos: Pos, on_path: &HashSet<Pos>) -> &'static str {
    if pos == grid.entry {
        " E "
    } else if pos == grid.exit {
        " X "
    } else if grid.is_obstacle(pos) {
        "###"
    } else if on_path.contains(&pos) {
        " . "
    } else {
        "   "
    }
}

/// Cells traversed by the solution path, entry and exit included.
fn path_cells(grid: &Grid, path: Option<&Path>) -> HashSet<Pos> {
    let mut cells: HashSet<Pos> = HashSet::new();
    let Some(path) = path else {
        return cells;
    };

    let mut pos = grid.entry;
    cells.insert(pos);
    for &direction in path.moves() {
        match grid.neighbor_pos(pos, direction) {
            Some(next) => pos = next,
            None => break,
        }
        cells.insert(pos);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_with_solution() {
        let mut grid = Grid::new(3, 1, Pos::new(0, 0), Pos::new(2, 0)).expect("valid grid");
        grid.carve_between(Pos::new(0, 0), Direction::East);
        grid.carve_between(Pos::new(1, 0), Direction::East);
        let path = crate::maze::solver::solve(&mut grid).expect("solvable");

        let art = render_ascii(&grid, Some(&path));
        let expected = "\
+---+---+---+
| E   .   X |
+---+---+---+
";
        assert_eq!(art, expected);
    }

    #[test]
    fn obstacle_cells_are_filled() {
        let grid = Grid::new(9, 7, Pos::new(0, 0), Pos::new(8, 6)).expect("valid grid");
        let art = render_ascii(&grid, None);
        // (1, 1) is the top-left obstacle cell.
        let row: &str = art.lines().nth(3).expect("row present");
        assert!(row.contains("###"));
    }
}
