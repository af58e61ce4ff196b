#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction};
use std::collections::HashMap;
use std::io::BufReader;
use tsp_cli::extensions::config::{Config, TelemetryConfig, create_solver_from_config, parse_parameter, read_config};
use tsp_cli::extensions::output::{RouteOutput, write_json_output, write_text_output};

const POINTS_ARG_NAME: &str = "POINTS";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const CONFIG_ARG_NAME: &str = "config";
const PARAMETER_ARG_NAME: &str = "parameter";
const FORMAT_ARG_NAME: &str = "format";
const LOG_ARG_NAME: &str = "log";
const LOG_BEST_ARG_NAME: &str = "log-best";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Traveling Salesman Problem for points from a file")
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Sets the points file: one 'x y [name]' entry per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies algorithm: nearest-neighbor, two-opt, genetic or brute-force")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to reproduce stochastic algorithms")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json config file, command line values take precedence")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARAMETER_ARG_NAME)
                .help("Specifies algorithm parameter as key=value, e.g. population_size=50")
                .short('p')
                .long(PARAMETER_ARG_NAME)
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format")
                .long(FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether algorithm progress is logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_BEST_ARG_NAME)
                .help("Specifies how often the best known distance is logged (in iterations)")
                .long(LOG_BEST_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let graph = load_graph(matches, POINTS_ARG_NAME)?;
    let config = get_config(matches)?;
    let logger = if matches.get_flag(LOG_ARG_NAME) { Some(create_logger()) } else { None };

    let solver = create_solver_from_config(&config, logger)?;
    let route = solver.solve(&graph).map_err(|err| format!("cannot solve: '{err}'"))?;
    let output = RouteOutput::new(solver.name(), &graph, &route)?;

    let out_buffer = out_writer_func(get_out_file(matches)?);
    match matches.get_one::<String>(FORMAT_ARG_NAME).map(|format| format.as_str()) {
        Some("json") => write_json_output(out_buffer, &output),
        _ => write_text_output(out_buffer, &output),
    }
}

/// Reads config file, if specified, and applies command line values on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            File::open(path)
                .map_err(|err| format!("cannot open config file '{path}': '{err}'"))
                .and_then(|file| read_config(BufReader::new(file)))
        })
        .transpose()?
        .unwrap_or_default();

    let parameters = matches
        .get_many::<String>(PARAMETER_ARG_NAME)
        .map(|definitions| {
            definitions.map(|definition| parse_parameter(definition)).collect::<Result<HashMap<_, _>, _>>()
        })
        .transpose()?;

    let telemetry =
        parse_int_value::<usize>(matches, LOG_BEST_ARG_NAME, "log best")?.map(|log_best| TelemetryConfig {
            log_best: Some(log_best),
        });

    let cli_config = Config {
        algorithm: matches.get_one::<String>(ALGORITHM_ARG_NAME).cloned(),
        seed: parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?,
        parameters,
        telemetry,
    };

    Ok(file_config.merge(cli_config))
}
