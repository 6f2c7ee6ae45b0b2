/*
main.rs

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

use log::info;
use std::process::ExitCode;

use amazeing::config::Config;
use amazeing::maze::generator;
use amazeing::maze::solver;
use amazeing::{cli_options, render, writer};

fn main() -> ExitCode {
    let args = cli_options::parse();

    let config = match Config::from_file(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut grid = match generator::generate_maze(&config) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let solution = solver::solve(&mut grid);
    match &solution {
        Some(path) => info!("solution with {} moves: {path}", path.len()),
        None => eprintln!("no path from {} to {}", grid.entry, grid.exit),
    }

    if let Err(err) = writer::write_output(&grid, &config.output_file) {
        eprintln!("cannot write {}: {err}", config.output_file.display());
        return ExitCode::FAILURE;
    }

    if args.ascii {
        print!("{}", render::render_ascii(&grid, solution.as_ref()));
    }

    ExitCode::SUCCESS
}
