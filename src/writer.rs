/*
writer.rs

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

//! Write the generated maze to its persisted text format.
//!
//! The format is the contract every alternate persistence or visualization
//! module honors: one hexadecimal digit per cell encoding the wall bitmask
//! (bit 0 = North, bit 1 = East, bit 2 = South, bit 3 = West), one grid row
//! per line, a blank line, then the entry and exit coordinates as `x,y`.

use log::info;
use std::fs;
use std::io;
use std::path::Path;

use crate::maze::grid::Grid;

/// Render the maze in the persisted text format.
pub fn render_output(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height + 16);
    for (i, cell) in grid.cells().enumerate() {
        out.push(cell.hex_digit());
        if (i + 1) % grid.width == 0 {
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&grid.entry.to_string());
    out.push('\n');
    out.push_str(&grid.exit.to_string());
    out.push('\n');
    out
}

/// Write the maze to the output file.
///
/// # Errors
///
/// Propagates the I/O error when the file cannot be written.
pub fn write_output(grid: &Grid, path: &Path) -> io::Result<()> {
    fs::write(path, render_output(grid))?;
    info!("maze written to {}", path.display());
    Ok(())
}
