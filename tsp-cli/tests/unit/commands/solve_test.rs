use super::*;

const SQUARE_POINTS_PATH: &str = "tests/data/square.txt";
const CITIES_POINTS_PATH: &str = "tests/data/cities.txt";
const CONFIG_PATH: &str = "tests/data/config.json";

fn run_solve_to_string(args: &[&str]) -> Result<String, String> {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let out_path = tmpfile.path().to_str().unwrap();
    let args = [&["solve"][..], args, &["--out-result", out_path][..]].concat();
    let matches = get_solve_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_solve(&matches, create_write_buffer)?;

    Ok(std::fs::read_to_string(tmpfile.path()).unwrap())
}

#[test]
fn can_solve_square_with_default_algorithm() {
    let output = run_solve_to_string(&[SQUARE_POINTS_PATH]).unwrap();

    assert!(output.starts_with("Algorithm: 2-Opt\nPoints: 4\nDistance: 4.000\n"), "{output}");
    assert!(output.contains("Route: A -> B -> C -> D -> A"), "{output}");
}

#[test]
fn can_solve_with_every_algorithm() {
    let cases = [
        ("nearest-neighbor", "Nearest Neighbor"),
        ("two-opt", "2-Opt"),
        ("genetic", "Genetic Algorithm"),
        ("brute-force", "Brute Force"),
        ("nn", "Nearest Neighbor"),
    ];

    cases.into_iter().for_each(|(algorithm, name)| {
        let output = run_solve_to_string(&[SQUARE_POINTS_PATH, "-a", algorithm, "-s", "1"]).unwrap();

        assert!(output.starts_with(&format!("Algorithm: {name}\n")), "{output}");
        assert!(output.contains("Distance: 4.000"), "{output}");
    });
}

#[test]
fn can_write_json_output() {
    let output = run_solve_to_string(&[CITIES_POINTS_PATH, "--format", "json", "-a", "nearest-neighbor"]).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["algorithm"], "Nearest Neighbor");
    assert_eq!(json["route"].as_array().map(|route| route.len()), Some(12));
    assert!(json["distance"].as_f64().unwrap() > 0.);
    assert!(json["calculationTimeMs"].is_u64());
}

#[test]
fn can_use_config_with_command_line_override() {
    let from_config = run_solve_to_string(&[CITIES_POINTS_PATH, "-c", CONFIG_PATH]).unwrap();
    let overridden = run_solve_to_string(&[CITIES_POINTS_PATH, "-c", CONFIG_PATH, "-a", "two-opt"]).unwrap();

    assert!(from_config.starts_with("Algorithm: Genetic Algorithm"), "{from_config}");
    assert!(overridden.starts_with("Algorithm: 2-Opt"), "{overridden}");
}

#[test]
fn can_reproduce_genetic_result_with_seed() {
    let args = [CITIES_POINTS_PATH, "-a", "genetic", "-s", "7", "-p", "max_generations=20", "--format", "json"];

    let get_route = || {
        let json: serde_json::Value = serde_json::from_str(&run_solve_to_string(&args).unwrap()).unwrap();
        json["route"].clone()
    };

    assert_eq!(get_route(), get_route());
}

#[test]
fn can_accept_multiple_parameters() {
    let args = [CITIES_POINTS_PATH, "-a", "ga", "-p", "population_size=10", "-p", "max_generations=5", "--log"];

    let output = run_solve_to_string(&args).unwrap();

    assert!(output.contains("Points: 12"), "{output}");
}

#[test]
fn can_fail_on_invalid_input() {
    let cases: [&[&str]; 6] = [
        &["tests/data/missing.txt"],
        &[SQUARE_POINTS_PATH, "-a", "unknown"],
        &[SQUARE_POINTS_PATH, "-p", "mutation_rate"],
        &[SQUARE_POINTS_PATH, "-a", "genetic", "-p", "mutation_rate=2"],
        &[SQUARE_POINTS_PATH, "-s", "abc"],
        &[CITIES_POINTS_PATH, "-a", "brute-force"],
    ];

    cases.into_iter().for_each(|args| {
        assert!(run_solve_to_string(args).is_err(), "{args:?}");
    });
}

#[test]
fn can_require_points_path() {
    assert!(get_solve_app().try_get_matches_from(vec!["solve"]).is_err());
}

#[test]
fn can_restrict_output_format() {
    let args = vec!["solve", SQUARE_POINTS_PATH, "--format", "xml"];

    assert!(get_solve_app().try_get_matches_from(args).is_err());
}
