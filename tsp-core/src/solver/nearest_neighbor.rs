#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::*;

/// Implements a greedy nearest neighbor construction: always move to the closest unvisited point.
/// By default, every point is tried as a start and the shortest tour is kept.
pub struct NearestNeighbor {
    environment: Arc<Environment>,
    start: Option<usize>,
}

impl NearestNeighbor {
    /// Creates a new instance of `NearestNeighbor` which tries all start points.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, start: None }
    }

    /// Uses only given start point index. `None` means all points are tried.
    pub fn with_start(mut self, start: Option<usize>) -> Self {
        self.start = start;
        self
    }

    /// Returns configured start point index.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Builds a greedy tour from given start point index.
    pub fn solve_from_point(&self, graph: &Graph, start: usize) -> TspResult<Route> {
        graph.check_index(start)?;

        let size = graph.size();
        let mut visited = vec![false; size];
        let mut sequence = Vec::with_capacity(size);

        let mut current = start;
        visited[current] = true;
        sequence.push(current);

        while sequence.len() < size {
            // NOTE strict comparison over ascending indices: ties go to the lowest index
            let (next, _) = (0..size).filter(|&idx| !visited[idx]).map(|idx| (idx, graph.distance(current, idx))).fold(
                (usize::MAX, Float::MAX),
                |best, candidate| if candidate.1 < best.1 { candidate } else { best },
            );

            if next == usize::MAX {
                return Err(TspError::algorithm("cannot find next unvisited point"));
            }

            current = next;
            visited[current] = true;
            sequence.push(current);
        }

        Ok(Route::from_sequence(sequence))
    }
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl Solver for NearestNeighbor {
    fn solve(&self, graph: &Graph) -> TspResult<Route> {
        run_timed(self.name(), self.environment.as_ref(), graph, || match self.start {
            Some(start) => self.solve_from_point(graph, start),
            None => (0..graph.size()).try_fold(None::<Route>, |best, start| -> TspResult<Option<Route>> {
                let route = self.solve_from_point(graph, start)?;
                let distance = route.total_distance(graph)?;
                let best_distance = best.as_ref().map(|best| best.total_distance(graph)).transpose()?;

                Ok(match best_distance {
                    Some(best_distance) if best_distance <= distance => best,
                    _ => Some(route),
                })
            })?
            .ok_or_else(|| TspError::algorithm("no start point available")),
        })
    }

    fn name(&self) -> &str {
        "Nearest Neighbor"
    }

    fn description(&self) -> &str {
        "Greedy algorithm that always chooses the nearest unvisited city"
    }

    fn time_complexity(&self) -> &str {
        if self.start.is_some() { "O(n^2)" } else { "O(n^3)" }
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn set_parameters(&mut self, parameters: &SolverParameters) -> TspResult<()> {
        if let Some(&start) = parameters.get("start_point") {
            self.start = if start < 0. {
                None
            } else {
                get_usize_param(parameters, "start_point")?
            };
        }

        Ok(())
    }
}
