/*
cli_options.rs

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

//! Process command-line options.

use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Generate, solve, and render a maze puzzle from a configuration file.
#[derive(Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Path to the maze configuration file
    pub config: PathBuf,

    /// Print the maze and its solution as ASCII art
    #[arg(short, long, default_value_t = false)]
    pub ascii: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize logging.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}
