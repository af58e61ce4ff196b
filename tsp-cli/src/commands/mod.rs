use clap::{ArgMatches, Command};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;
use tsp_core::prelude::*;

pub mod compare;
pub mod generate;
pub mod solve;

pub(crate) const SEED_ARG_NAME: &str = "seed";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";

pub(crate) fn get_app() -> Command {
    Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Traveling Salesman Problem solvers")
        .subcommand_required(true)
        .arg_required_else_help(true)
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

pub(crate) fn create_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

pub(crate) fn load_graph(matches: &ArgMatches, arg_name: &str) -> Result<Graph, String> {
    let path = matches.get_one::<String>(arg_name).ok_or_else(|| format!("missing argument: '{arg_name}'"))?;

    Graph::load_from_file(path).map_err(|err| format!("cannot read points from '{path}': '{err}'"))
}

pub(crate) fn get_out_file(matches: &ArgMatches) -> Result<Option<File>, String> {
    matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()
}

pub(crate) fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

pub(crate) fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
