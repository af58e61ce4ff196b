use super::*;
use crate::helpers::models::*;
use crate::utils::ErrorKind;
use std::time::Duration;

#[test]
fn can_calculate_closed_tour_distance() {
    let graph = create_square_graph();
    let route = Route::from_sequence(vec![0, 1, 2, 3]);

    assert_eq!(route.cached_distance(), None);
    assert_eq!(route.total_distance(&graph), Ok(4.));
    assert_eq!(route.cached_distance(), Some(4.));
}

#[test]
fn can_calculate_distance_for_small_routes() {
    let graph = create_test_graph(&[(0., 0.), (3., 4.)]);

    assert_eq!(Route::new().total_distance(&graph), Ok(0.));
    assert_eq!(Route::from_sequence(vec![1]).total_distance(&graph), Ok(0.));
    assert_eq!(Route::from_sequence(vec![0, 1]).total_distance(&graph), Ok(10.));
}

#[test]
fn can_fail_distance_with_unknown_index() {
    let graph = create_square_graph();

    let result = Route::from_sequence(vec![0, 1, 7]).total_distance(&graph);

    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
}

#[test]
fn can_invalidate_distance_on_mutation() {
    let graph = create_square_graph();
    let mut route = Route::from_sequence(vec![0, 1, 2]);
    route.total_distance(&graph).unwrap();

    route.add_point(3);
    assert_eq!(route.cached_distance(), None);
    assert_eq!(route.total_distance(&graph), Ok(4.));

    route.insert_point(1, 2).unwrap();
    assert_eq!(route.cached_distance(), None);
    assert_eq!(route.sequence(), &[0, 2, 1, 2, 3]);

    assert_eq!(route.remove_point(3), Ok(2));
    assert_eq!(route.sequence(), &[0, 2, 1, 3]);
    assert_close!(route.total_distance(&graph).unwrap(), 2. + 2. * 2_f64.sqrt());
}

#[test]
fn can_recalculate_distance_after_graph_change() {
    let mut graph = create_square_graph();
    let route = Route::from_sequence(vec![0, 1, 2, 3]);
    assert_eq!(route.total_distance(&graph), Ok(4.));

    graph.update_point(2, 10., 10.).unwrap();

    let expected = 2. + 2. * 181_f64.sqrt();
    assert_close!(route.total_distance(&graph).unwrap(), expected);
    assert_close!(Route::from_sequence(vec![0, 1, 2, 3]).total_distance(&graph).unwrap(), expected);
}

#[test]
fn can_recalculate_distance_after_points_removal() {
    let mut graph = create_test_graph(&[(0., 0.), (3., 0.), (3., 4.), (10., 10.)]);
    let route = Route::from_sequence(vec![0, 1, 2]);
    assert_eq!(route.total_distance(&graph), Ok(12.));

    graph.remove_at(1).unwrap();
    assert_close!(route.total_distance(&graph).unwrap(), 5. + 85_f64.sqrt() + 200_f64.sqrt());

    graph.clear();
    assert_eq!(route.total_distance(&graph).map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
}

#[test]
fn can_recalculate_distance_for_another_graph() {
    let square = create_square_graph();
    let stretched = create_test_graph(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]);
    let route = Route::from_sequence(vec![0, 1, 2, 3]);

    assert_eq!(route.total_distance(&square), Ok(4.));
    assert_eq!(route.total_distance(&stretched), Ok(8.));
    assert_eq!(route.total_distance(&square), Ok(4.));
}

#[test]
fn can_keep_distance_after_rename() {
    let mut graph = create_square_graph();
    let route = Route::from_sequence(vec![0, 1, 2, 3]);
    let revision = graph.revision();
    route.total_distance(&graph).unwrap();

    graph.rename_point(0, "Start").unwrap();

    assert_eq!(graph.revision(), revision);
    assert_eq!(route.total_distance(&graph), Ok(4.));
}

#[test]
fn can_fail_positional_operations_out_of_bounds() {
    let mut route = Route::from_sequence(vec![0, 1]);

    assert_eq!(route.insert_point(3, 5).map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
    assert_eq!(route.remove_point(2).map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
    assert_eq!(route.get(2).map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
    assert_eq!(route.insert_point(2, 5), Ok(()));
    assert_eq!(route.get(2), Ok(5));
}

#[test]
fn can_apply_two_opt_swap() {
    let graph = create_square_graph();
    let mut route = Route::from_sequence(vec![0, 2, 1, 3]);
    assert_close!(route.total_distance(&graph).unwrap(), 2. + 2. * 2_f64.sqrt());

    route.two_opt_swap(1, 2).unwrap();

    assert_eq!(route.sequence(), &[0, 1, 2, 3]);
    assert_eq!(route.total_distance(&graph), Ok(4.));
}

parameterized_test! {can_reject_invalid_two_opt_swap, (i, k), {
    let mut route = Route::from_sequence(vec![0, 1, 2, 3]);

    assert_eq!(route.two_opt_swap(i, k).map_err(|err| err.kind()), Err(ErrorKind::InvalidIndex));
    assert_eq!(route.sequence(), &[0, 1, 2, 3]);
}}

can_reject_invalid_two_opt_swap! {
    case_01_same_position: (2, 2),
    case_02_reversed_positions: (3, 1),
    case_03_out_of_bounds: (1, 4),
}

#[test]
fn can_close_route_without_changing_distance() {
    let graph = create_square_graph();
    let mut route = Route::from_sequence(vec![0, 1, 2, 3]);

    route.close_tsp_route();
    route.close_tsp_route();

    assert!(route.is_closed());
    assert_eq!(route.sequence(), &[0, 1, 2, 3, 0]);
    assert_eq!(route.total_distance(&graph), Ok(4.));
    assert!(route.is_valid_tsp_route(&graph));
}

parameterized_test! {can_validate_tsp_route, (sequence, expected), {
    let graph = create_square_graph();

    assert_eq!(Route::from_sequence(sequence).is_valid_tsp_route(&graph), expected);
}}

can_validate_tsp_route! {
    case_01_insertion_order: (vec![0, 1, 2, 3], true),
    case_02_shuffled: (vec![3, 1, 0, 2], true),
    case_03_explicitly_closed: (vec![0, 1, 2, 3, 0], true),
    case_04_missing_point: (vec![0, 1, 2], false),
    case_05_repeated_point: (vec![0, 1, 2, 2], false),
    case_06_unknown_index: (vec![0, 1, 2, 4], false),
    case_07_wrong_closing_point: (vec![0, 1, 2, 3, 1], false),
}

#[test]
fn can_describe_route_with_names() {
    let graph = create_square_graph();

    let description = Route::from_sequence(vec![0, 1, 2, 3]).describe(&graph).unwrap();

    assert_eq!(description, "Route[4 points, distance=4]: A -> B -> C -> D -> A");
}

#[test]
fn can_display_route() {
    let graph = create_square_graph();
    let route = Route::from_sequence(vec![0, 1, 2, 3]);

    assert_eq!(route.to_string(), "Route[4 points, distance=?]: 0 -> 1 -> 2 -> 3 -> 0");
    route.total_distance(&graph).unwrap();
    assert_eq!(route.to_string(), "Route[4 points, distance=4]: 0 -> 1 -> 2 -> 3 -> 0");
}

#[test]
fn can_compare_routes_by_distance() {
    let graph = create_square_graph();
    let short = Route::from_sequence(vec![0, 1, 2, 3]);
    let long = Route::from_sequence(vec![0, 2, 1, 3]);

    assert_eq!(short.partial_cmp(&long), None);

    short.total_distance(&graph).unwrap();
    long.total_distance(&graph).unwrap();

    assert!(short < long);
    assert_ne!(short, long);
    assert_eq!(short, Route::from_sequence(vec![0, 1, 2, 3]));
}

#[test]
fn can_merge_routes() {
    let first = Route::from_sequence(vec![0, 1]);
    let second = Route::from_sequence(vec![1, 2, 3]);

    let mut merged = first + &second;
    assert_eq!(merged.sequence(), &[0, 1, 2, 3]);

    merged += &Route::from_sequence(vec![4, 0]);
    assert_eq!(merged.sequence(), &[0, 1, 2, 3, 4]);
}

#[test]
fn can_keep_calculation_time() {
    let mut route = Route::new();
    assert_eq!(route.calculation_time(), None);

    route.set_calculation_time(Duration::from_millis(15));

    assert_eq!(route.calculation_time(), Some(Duration::from_millis(15)));
}
