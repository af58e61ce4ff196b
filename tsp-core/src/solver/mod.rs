//! This module contains a family of interchangeable algorithms which solve TSP.
//!
//! All of them implement the [Solver] trait: they take a [Graph] and return a [Route] which
//! visits every graph point exactly once. Use [create_solver] to instantiate a solver by its
//! [SolverKind], e.g. when the algorithm is picked by a user.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::{Graph, Route};
use crate::utils::{Environment, Float, Timer, TspError, TspResult};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

mod brute_force;
pub use self::brute_force::BruteForce;

mod genetic;
pub use self::genetic::Genetic;

mod nearest_neighbor;
pub use self::nearest_neighbor::NearestNeighbor;

mod telemetry;
pub use self::telemetry::*;

mod two_opt;
pub use self::two_opt::TwoOpt;

/// Algorithm specific options: option name to numeric value.
pub type SolverParameters = HashMap<String, Float>;

/// A common contract of TSP algorithms.
pub trait Solver {
    /// Solves TSP on given graph. The graph must have at least two points.
    fn solve(&self, graph: &Graph) -> TspResult<Route>;

    /// Returns a human readable algorithm name.
    fn name(&self) -> &str;

    /// Returns a short algorithm description.
    fn description(&self) -> &str;

    /// Returns an estimated time complexity.
    fn time_complexity(&self) -> &str;

    /// Returns true if the algorithm guarantees an optimal tour.
    fn is_exact(&self) -> bool;

    /// Changes algorithm options. Unknown options are ignored, known ones are validated.
    fn set_parameters(&mut self, _parameters: &SolverParameters) -> TspResult<()> {
        Ok(())
    }
}

/// Specifies a closed set of available algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Greedy nearest neighbor construction.
    NearestNeighbor,
    /// 2-opt local search on top of nearest neighbor.
    TwoOpt,
    /// Genetic algorithm.
    Genetic,
    /// Exhaustive permutation search.
    BruteForce,
}

impl SolverKind {
    /// Returns all kinds in the order of increasing run time on small inputs.
    pub fn all() -> &'static [SolverKind] {
        &[SolverKind::NearestNeighbor, SolverKind::TwoOpt, SolverKind::Genetic, SolverKind::BruteForce]
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::NearestNeighbor => "nearest-neighbor",
            SolverKind::TwoOpt => "two-opt",
            SolverKind::Genetic => "genetic",
            SolverKind::BruteForce => "brute-force",
        };

        write!(f, "{name}")
    }
}

impl FromStr for SolverKind {
    type Err = TspError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "nearest-neighbor" | "nn" => Ok(SolverKind::NearestNeighbor),
            "two-opt" | "2opt" => Ok(SolverKind::TwoOpt),
            "genetic" | "ga" => Ok(SolverKind::Genetic),
            "brute-force" | "bf" => Ok(SolverKind::BruteForce),
            _ => Err(TspError::invalid_input(format!("unknown algorithm: '{value}'"))),
        }
    }
}

/// Creates a solver of given kind with default settings.
pub fn create_solver(kind: SolverKind, environment: Arc<Environment>) -> Box<dyn Solver> {
    match kind {
        SolverKind::NearestNeighbor => Box::new(NearestNeighbor::new(environment)),
        SolverKind::TwoOpt => Box::new(TwoOpt::new(environment)),
        SolverKind::Genetic => Box::new(Genetic::new(environment)),
        SolverKind::BruteForce => Box::new(BruteForce::new(environment)),
    }
}

/// Checks that a tour can be built on the graph.
pub(crate) fn validate_graph(graph: &Graph) -> TspResult<()> {
    match graph.size() {
        0 => Err(TspError::empty_graph("cannot solve TSP on empty graph")),
        1 => Err(TspError::invalid_graph("need at least 2 points for TSP")),
        _ => Ok(()),
    }
}

/// Runs a solver body measuring its duration: the route gets calculation time stamped
/// and a summary is sent to the environment logger.
pub(crate) fn run_timed<F>(name: &str, environment: &Environment, graph: &Graph, solve_fn: F) -> TspResult<Route>
where
    F: FnOnce() -> TspResult<Route>,
{
    validate_graph(graph)?;

    let (route, duration) = Timer::measure_duration(solve_fn);
    let mut route = route?;
    route.set_calculation_time(duration);

    let distance = route.total_distance(graph)?;
    (environment.logger)(&format!(
        "[{name}] {} points, distance: {distance:.3}, took {}ms",
        graph.size(),
        duration.as_millis()
    ));

    Ok(route)
}

/// Reads an option as a non-negative integer.
pub(crate) fn get_usize_param(parameters: &SolverParameters, name: &str) -> TspResult<Option<usize>> {
    parameters
        .get(name)
        .map(|&value| {
            if value.is_finite() && value >= 0. && value.fract() == 0. {
                Ok(value as usize)
            } else {
                Err(TspError::invalid_input(format!("'{name}' must be a non-negative integer, got '{value}'")))
            }
        })
        .transpose()
}

/// Reads an option as a probability.
pub(crate) fn get_probability_param(parameters: &SolverParameters, name: &str) -> TspResult<Option<Float>> {
    parameters
        .get(name)
        .map(|&value| {
            if (0. ..=1.).contains(&value) {
                Ok(value)
            } else {
                Err(TspError::invalid_input(format!("'{name}' must be in [0, 1] range, got '{value}'")))
            }
        })
        .transpose()
}
