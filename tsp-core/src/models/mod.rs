//! A collection of models to represent a Traveling Salesman Problem and its solution.

mod generator;
pub use self::generator::*;

mod graph;
pub use self::graph::Graph;

mod point;
pub use self::point::*;

mod route;
pub use self::route::Route;
