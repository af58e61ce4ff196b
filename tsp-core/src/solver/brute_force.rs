#[cfg(test)]
#[path = "../../tests/unit/solver/brute_force_test.rs"]
mod brute_force_test;

use super::*;

/// Finds an optimal tour by enumerating all permutations of points. Only feasible for tiny graphs.
pub struct BruteForce {
    environment: Arc<Environment>,
    max_size: usize,
}

impl BruteForce {
    /// Creates a new instance of `BruteForce` which accepts graphs up to 8 points.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, max_size: 8 }
    }

    /// Sets max amount of points accepted.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns max amount of points accepted.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn search(&self, graph: &Graph) -> TspResult<Route> {
        let size = graph.size();
        if size > self.max_size {
            return Err(TspError::algorithm(format!(
                "brute force is limited to {} points, graph has {size}",
                self.max_size
            )));
        }

        // permutations are enumerated in lexicographic order of point positions
        let points = graph.points();
        let mut canonical = (0..size).collect::<Vec<_>>();
        canonical.sort_by(|&a, &b| points[a].cmp_position(&points[b]));

        let mut best = (0..size).collect::<Vec<_>>();
        let mut best_distance = tour_distance(graph, best.as_slice());

        let mut ranks = (0..size).collect::<Vec<_>>();
        loop {
            let tour = ranks.iter().map(|&rank| canonical[rank]).collect::<Vec<_>>();
            let distance = tour_distance(graph, tour.as_slice());

            if distance < best_distance {
                best_distance = distance;
                best = tour;
            }

            if !next_permutation(ranks.as_mut_slice()) {
                break;
            }
        }

        Ok(Route::from_sequence(best))
    }
}

impl Default for BruteForce {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl Solver for BruteForce {
    fn solve(&self, graph: &Graph) -> TspResult<Route> {
        run_timed(self.name(), self.environment.as_ref(), graph, || self.search(graph))
    }

    fn name(&self) -> &str {
        "Brute Force"
    }

    fn description(&self) -> &str {
        "Exhaustive search through all permutations"
    }

    fn time_complexity(&self) -> &str {
        "O(n!)"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn set_parameters(&mut self, parameters: &SolverParameters) -> TspResult<()> {
        if let Some(max_size) = get_usize_param(parameters, "max_size")? {
            self.max_size = max_size;
        }

        Ok(())
    }
}

fn tour_distance(graph: &Graph, tour: &[usize]) -> Float {
    let path = tour.windows(2).map(|pair| graph.distance(pair[0], pair[1])).sum::<Float>();
    let closing = match (tour.first(), tour.last()) {
        (Some(&first), Some(&last)) if tour.len() > 1 => graph.distance(last, first),
        _ => 0.,
    };

    path + closing
}

/// Rearranges the slice into the next lexicographically greater permutation.
/// Returns false if the slice is already the last permutation.
fn next_permutation(values: &mut [usize]) -> bool {
    let Some(pivot) = values.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    let Some(successor) = values.iter().rposition(|&value| value > values[pivot]) else {
        return false;
    };

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();

    true
}
