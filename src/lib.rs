/*
lib.rs

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

//! Amazeing generates rectangular maze puzzles around a fixed obstacle
//! region, carves them with a selectable randomized algorithm, solves them,
//! and persists the result as a compact text file.

pub mod cli_options;
pub mod config;
pub mod maze;
pub mod render;
pub mod writer;

pub use config::{Config, ConfigError};
pub use maze::cell::{Cell, Direction, Pos};
pub use maze::generator::{Algorithm, carve, carve_named, generate_maze};
pub use maze::grid::Grid;
pub use maze::imperfect::{DEFAULT_RATE, make_imperfect};
pub use maze::solver::{Path, solve};
