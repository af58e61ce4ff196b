#[cfg(test)]
#[path = "../../tests/unit/solver/two_opt_test.rs"]
mod two_opt_test;

use super::*;

/// Minimal gain for a move to be applied, protects from looping on rounding noise.
const IMPROVEMENT_THRESHOLD: Float = 1e-10;

/// Implements a classical TSP's two opt local search on top of a tour built by an initial solver.
///
/// The search is first improvement: every improving swap is applied as soon as it is found and
/// the scan continues on the modified tour. Passes are repeated until a pass brings no improvement
/// or the pass limit is reached.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub struct TwoOpt {
    environment: Arc<Environment>,
    initial: Box<dyn Solver>,
    max_iterations: usize,
    telemetry_mode: TelemetryMode,
}

impl TwoOpt {
    /// Creates a new instance of `TwoOpt` with nearest neighbor as initial solver.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self {
            initial: Box::new(NearestNeighbor::new(environment.clone())),
            environment,
            max_iterations: 1000,
            telemetry_mode: TelemetryMode::None,
        }
    }

    /// Sets a solver which builds the initial tour.
    pub fn with_initial_solver(mut self, initial: Box<dyn Solver>) -> Self {
        self.initial = initial;
        self
    }

    /// Sets max amount of improvement passes.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Returns max amount of improvement passes.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Improves given tour until it is 2-opt locally optimal or pass limit is reached.
    /// An explicit closing entry, if present, is dropped.
    pub fn optimize(&self, route: Route, graph: &Graph) -> TspResult<Route> {
        let mut route = route;
        if route.is_closed() {
            route.remove_point(route.size() - 1)?;
        }

        let mut telemetry = Telemetry::new(self.name(), self.telemetry_mode.clone());
        telemetry.on_iteration(route.total_distance(graph)?);

        let size = route.size();
        let mut has_improvement = size >= 4;
        let mut passes = 0;

        while has_improvement && passes < self.max_iterations {
            has_improvement = false;
            passes += 1;

            for i in 0..(size - 2) {
                for j in (i + 2)..size {
                    // edges (i, i + 1) and (j, 0) share the first point
                    if i == 0 && j == size - 1 {
                        continue;
                    }

                    let sequence = route.sequence();
                    let (a, b) = (sequence[i], sequence[i + 1]);
                    let (c, d) = (sequence[j], sequence[(j + 1) % size]);

                    let delta = graph.distance(a, c) + graph.distance(b, d)
                        - graph.distance(a, b)
                        - graph.distance(c, d);

                    if delta < -IMPROVEMENT_THRESHOLD {
                        route.two_opt_swap(i + 1, j)?;
                        has_improvement = true;
                    }
                }
            }

            telemetry.on_iteration(route.total_distance(graph)?);
        }

        telemetry.finish();

        Ok(route)
    }
}

impl Default for TwoOpt {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl Solver for TwoOpt {
    fn solve(&self, graph: &Graph) -> TspResult<Route> {
        run_timed(self.name(), self.environment.as_ref(), graph, || {
            let initial = self.initial.solve(graph)?;

            self.optimize(initial, graph)
        })
    }

    fn name(&self) -> &str {
        "2-Opt"
    }

    fn description(&self) -> &str {
        "Local search algorithm that iteratively improves the route by swapping edges"
    }

    fn time_complexity(&self) -> &str {
        "O(n^2) per pass"
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn set_parameters(&mut self, parameters: &SolverParameters) -> TspResult<()> {
        if let Some(max_iterations) = get_usize_param(parameters, "max_iterations")? {
            self.max_iterations = max_iterations;
        }

        self.initial.set_parameters(parameters)
    }
}
