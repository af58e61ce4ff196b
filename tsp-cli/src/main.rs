//! A command line interface to *Traveling Salesman Problem* solvers.

#![forbid(unsafe_code)]

mod commands;

use crate::commands::compare::{get_compare_app, run_compare};
use crate::commands::generate::{get_generate_app, run_generate};
use crate::commands::solve::{get_solve_app, run_solve};
use crate::commands::{create_write_buffer, get_app};
use std::process;

fn main() {
    let matches = get_app()
        .subcommand(get_solve_app())
        .subcommand(get_compare_app())
        .subcommand(get_generate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("compare", compare_matches)) => run_compare(compare_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
