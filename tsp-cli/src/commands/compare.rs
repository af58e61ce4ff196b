#[cfg(test)]
#[path = "../../tests/unit/commands/compare_test.rs"]
mod compare_test;

use super::*;
use clap::Arg;
use tsp_cli::extensions::output::{ComparisonEntry, write_comparison};

const POINTS_ARG_NAME: &str = "POINTS";

pub fn get_compare_app() -> Command {
    Command::new("compare")
        .about("Runs all applicable algorithms on the same points and compares their results")
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Sets the points file: one 'x y [name]' entry per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to reproduce stochastic algorithms")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_compare<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let graph = load_graph(matches, POINTS_ARG_NAME)?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;

    let entries = get_applicable_kinds(&graph)
        .into_iter()
        .map(|kind| {
            let environment = Arc::new(seed.map(Environment::new_with_seed).unwrap_or_default());
            let solver = create_solver(kind, environment);

            let route = solver.solve(&graph).map_err(|err| format!("{} failed: '{err}'", solver.name()))?;
            let distance = route.total_distance(&graph).map_err(|err| err.to_string())?;

            Ok(ComparisonEntry {
                algorithm: solver.name().to_string(),
                distance,
                calculation_time_ms: route.calculation_time().map_or(0, |duration| duration.as_millis() as u64),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    write_comparison(out_writer_func(get_out_file(matches)?), entries.as_slice())
}

/// Returns algorithms which can handle the graph: brute force is skipped for large graphs.
fn get_applicable_kinds(graph: &Graph) -> Vec<SolverKind> {
    let brute_force_limit = BruteForce::default().max_size();

    SolverKind::all()
        .iter()
        .copied()
        .filter(|kind| *kind != SolverKind::BruteForce || graph.size() <= brute_force_limit)
        .collect()
}
