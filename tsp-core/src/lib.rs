//! Core crate contains a domain model and a family of algorithms to solve the
//! ***Traveling Salesman Problem***: find the shortest closed tour visiting every point exactly once.
//!
//! # Model
//!
//! - [Point](models::Point): a labelled 2-D coordinate
//! - [Graph](models::Graph): a set of unique points with a lazily filled distance cache
//! - [Route](models::Route): an ordered tour over graph points with a cached total length
//!
//! # Solvers
//!
//! All solvers implement the [Solver](solver::Solver) trait:
//!
//! - **nearest neighbor**: greedy construction, tries every start point by default
//! - **2-opt**: local search on top of an initial solver
//! - **genetic**: population based search with order crossover and swap mutation
//! - **brute force**: exhaustive search, exact but limited to small graphs
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let graph = Graph::with_points(vec![
//!     Point::new(0., 0., "A"),
//!     Point::new(1., 0., "B"),
//!     Point::new(1., 1., "C"),
//!     Point::new(0., 1., "D"),
//! ])?;
//!
//! let solver = TwoOpt::default();
//! let route = solver.solve(&graph)?;
//!
//! assert!(route.is_valid_tsp_route(&graph));
//! assert_eq!(route.total_distance(&graph)?, 4.);
//! # Ok::<(), TspError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod format;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
