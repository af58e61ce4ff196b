#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::Arg;

const COUNT_ARG_NAME: &str = "count";
const MIN_ARG_NAME: &str = "min";
const MAX_ARG_NAME: &str = "max";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random unique points inside a square area")
        .arg(
            Arg::new(COUNT_ARG_NAME)
                .help("Amount of points to generate")
                .short('n')
                .long(COUNT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MIN_ARG_NAME)
                .help("Minimum coordinate value, default is 0")
                .long(MIN_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(MAX_ARG_NAME)
                .help("Maximum coordinate value, default is 100")
                .long(MAX_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to reproduce generated points")
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

pub fn run_generate<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let count = parse_int_value::<usize>(matches, COUNT_ARG_NAME, "points count")?
        .ok_or_else(|| "points count is required".to_string())?;

    let default_bounds = Bounds::default();
    let min = parse_float_value::<f64>(matches, MIN_ARG_NAME, "min coordinate")?.unwrap_or(default_bounds.min_x);
    let max = parse_float_value::<f64>(matches, MAX_ARG_NAME, "max coordinate")?.unwrap_or(default_bounds.max_x);

    let random: Box<dyn Random> = match parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")? {
        Some(seed) => Box::new(DefaultRandom::new_with_seed(seed)),
        None => Box::new(DefaultRandom::default()),
    };

    let points = generate_points(count, &Bounds::square(min, max), random.as_ref())
        .map_err(|err| format!("cannot generate points: '{err}'"))?;
    let graph = Graph::with_points(points).map_err(|err| err.to_string())?;

    graph
        .write_points(out_writer_func(get_out_file(matches)?))
        .map_err(|err| format!("cannot write points: '{err}'"))
}
