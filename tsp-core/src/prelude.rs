//! This module reimports a common used types.

pub use crate::format::{PointsReader, PointsWriter, RouteReader, RouteWriter};

pub use crate::models::{Bounds, Graph, Point, Route, generate_points};

pub use crate::solver::{
    BruteForce, Genetic, NearestNeighbor, Solver, SolverKind, SolverParameters, TwoOpt, create_solver,
};
pub use crate::solver::{Telemetry, TelemetryMode};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Environment, InfoLogger, Random, RandomGen};
pub use crate::utils::{ErrorKind, TspError, TspResult};
pub use crate::utils::{Float, Timer};
