/*
maze.rs

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

//! Generate and solve maze puzzles.
//!
//! A maze is a [`grid::Grid`] of [`cell::Cell`] values sharing one
//! invariant: the wall state of two adjacent cells always agrees, because
//! walls are only opened through [`grid::Grid::carve_between`].
//!
//! Generation is a pipeline over a grid that is mutated in place by one
//! stage at a time:
//!
//! * [`grid::Grid::new`] builds the fully walled grid, stamps the fixed
//!   obstacle region in its center, and validates the entry and exit cells.
//! * A [`carver::Carver`] ([`dfs::DfsBacktracker`] or
//!   [`growing_tree::GrowingTree`], selected by
//!   [`generator::Algorithm`]) carves a perfect maze: a spanning tree over
//!   the reachable non-obstacle cells.
//! * [`imperfect::make_imperfect`] optionally reopens a bounded fraction of
//!   the remaining internal walls to introduce cycles.
//! * [`solver::solve`] finds the shortest entry to exit path with a
//!   breadth-first search and returns it as a [`solver::Path`].
//!
//! After solving, the grid and the path are plain read-only data for the
//! output writer and the renderers.

pub mod carver;
pub mod cell;
pub mod dfs;
pub mod generator;
pub mod grid;
pub mod growing_tree;
pub mod imperfect;
pub mod solver;
