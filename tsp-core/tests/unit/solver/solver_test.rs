use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;
use crate::models::Point;
use crate::utils::ErrorKind;

parameterized_test! {can_parse_solver_kind, (name, expected), {
    assert_eq!(name.parse::<SolverKind>(), Ok(expected));
}}

can_parse_solver_kind! {
    case_01_full_nearest_neighbor: ("nearest-neighbor", SolverKind::NearestNeighbor),
    case_02_short_nearest_neighbor: ("nn", SolverKind::NearestNeighbor),
    case_03_full_two_opt: ("two-opt", SolverKind::TwoOpt),
    case_04_short_two_opt: ("2opt", SolverKind::TwoOpt),
    case_05_full_genetic: ("genetic", SolverKind::Genetic),
    case_06_short_genetic: ("ga", SolverKind::Genetic),
    case_07_full_brute_force: ("brute-force", SolverKind::BruteForce),
    case_08_short_brute_force: ("bf", SolverKind::BruteForce),
}

#[test]
fn can_display_and_parse_back_solver_kind() {
    SolverKind::all().iter().for_each(|kind| {
        assert_eq!(kind.to_string().parse::<SolverKind>(), Ok(*kind));
    });
}

#[test]
fn can_reject_unknown_solver_kind() {
    let error = "simulated-annealing".parse::<SolverKind>().expect_err("unknown kind should be rejected");

    assert_eq!(error.kind(), ErrorKind::InvalidInput);
    assert_eq!(error.message(), "unknown algorithm: 'simulated-annealing'");
}

#[test]
fn can_create_solvers_by_kind() {
    let environment = create_test_environment();

    let solvers = SolverKind::all()
        .iter()
        .map(|&kind| {
            let solver = create_solver(kind, environment.clone());
            (solver.name().to_string(), solver.is_exact())
        })
        .collect::<Vec<_>>();

    assert_eq!(
        solvers,
        vec![
            ("Nearest Neighbor".to_string(), false),
            ("2-Opt".to_string(), false),
            ("Genetic Algorithm".to_string(), false),
            ("Brute Force".to_string(), true),
        ]
    );
}

parameterized_test! {can_solve_small_graphs_with_every_solver, kind, {
    can_solve_small_graphs_with_every_solver_impl(kind);
}}

can_solve_small_graphs_with_every_solver! {
    case_01_nearest_neighbor: SolverKind::NearestNeighbor,
    case_02_two_opt: SolverKind::TwoOpt,
    case_03_genetic: SolverKind::Genetic,
    case_04_brute_force: SolverKind::BruteForce,
}

fn can_solve_small_graphs_with_every_solver_impl(kind: SolverKind) {
    let solver = create_solver(kind, create_test_environment());
    let empty = Graph::new();
    let single = Graph::with_points(vec![Point::new(1., 1., "A")]).unwrap();
    let pair = create_test_graph(&[(0., 0.), (3., 4.)]);
    let square = create_square_graph();

    assert_eq!(solver.solve(&empty).map_err(|err| err.kind()), Err(ErrorKind::EmptyGraph));
    assert_eq!(solver.solve(&single).map_err(|err| err.kind()), Err(ErrorKind::InvalidGraph));

    let route = solver.solve(&pair).unwrap();
    assert!(route.is_valid_tsp_route(&pair));
    assert_eq!(route.total_distance(&pair), Ok(10.));

    let route = solver.solve(&square).unwrap();
    assert!(route.is_valid_tsp_route(&square));
    assert_close!(route.total_distance(&square).unwrap(), 4.);
    assert!(route.calculation_time().is_some());
}

#[test]
fn can_log_solver_summary() {
    let (logger, messages) = create_collecting_logger();
    let environment = Environment::new_with_seed(0).with_logger(logger);
    let graph = create_square_graph();

    let route = run_timed("Test", &environment, &graph, || Ok(Route::from_sequence(vec![0, 1, 2, 3]))).unwrap();

    assert!(route.calculation_time().is_some());
    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("[Test] 4 points, distance: 4.000, took "), "{}", messages[0]);
}

#[test]
fn can_read_usize_parameter() {
    let parameters = SolverParameters::from([
        ("valid".to_string(), 10.),
        ("negative".to_string(), -1.),
        ("fraction".to_string(), 1.5),
        ("nan".to_string(), Float::NAN),
    ]);

    assert_eq!(get_usize_param(&parameters, "valid"), Ok(Some(10)));
    assert_eq!(get_usize_param(&parameters, "missing"), Ok(None));
    ["negative", "fraction", "nan"].iter().for_each(|name| {
        assert_eq!(get_usize_param(&parameters, name).map_err(|err| err.kind()), Err(ErrorKind::InvalidInput));
    });
}

#[test]
fn can_read_probability_parameter() {
    let parameters = SolverParameters::from([
        ("zero".to_string(), 0.),
        ("one".to_string(), 1.),
        ("above".to_string(), 1.1),
        ("below".to_string(), -0.1),
    ]);

    assert_eq!(get_probability_param(&parameters, "zero"), Ok(Some(0.)));
    assert_eq!(get_probability_param(&parameters, "one"), Ok(Some(1.)));
    assert_eq!(get_probability_param(&parameters, "missing"), Ok(None));
    ["above", "below"].iter().for_each(|name| {
        assert_eq!(get_probability_param(&parameters, name).map_err(|err| err.kind()), Err(ErrorKind::InvalidInput));
    });
}
