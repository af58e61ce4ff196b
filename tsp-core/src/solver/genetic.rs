#[cfg(test)]
#[path = "../../tests/unit/solver/genetic_test.rs"]
mod genetic_test;

use super::*;
use crate::utils::{Random, compare_floats};
use rand::seq::SliceRandom;

/// Implements a simple genetic algorithm for TSP: permutation encoding, tournament selection,
/// order crossover (OX) and swap mutation. Best individuals survive to the next generation as is.
pub struct Genetic {
    environment: Arc<Environment>,
    population_size: usize,
    max_generations: usize,
    mutation_rate: Float,
    crossover_rate: Float,
    tournament_size: usize,
    telemetry_mode: TelemetryMode,
}

/// A population member: a tour with its evaluated length.
#[derive(Clone)]
struct Individual {
    route: Route,
    distance: Float,
}

impl Individual {
    fn new(sequence: Vec<usize>, graph: &Graph) -> TspResult<Self> {
        let route = Route::from_sequence(sequence);
        let distance = route.total_distance(graph)?;

        Ok(Self { route, distance })
    }
}

impl Genetic {
    /// Creates a new instance of `Genetic` with default settings.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self {
            environment,
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.01,
            crossover_rate: 0.8,
            tournament_size: 3,
            telemetry_mode: TelemetryMode::None,
        }
    }

    /// Sets population size, must be positive.
    pub fn with_population_size(mut self, population_size: usize) -> TspResult<Self> {
        if population_size == 0 {
            return Err(TspError::invalid_input("population size must be positive"));
        }

        self.population_size = population_size;
        Ok(self)
    }

    /// Sets amount of generations.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets mutation probability, must be in [0, 1].
    pub fn with_mutation_rate(mut self, mutation_rate: Float) -> TspResult<Self> {
        self.mutation_rate = check_probability("mutation_rate", mutation_rate)?;
        Ok(self)
    }

    /// Sets crossover probability, must be in [0, 1].
    pub fn with_crossover_rate(mut self, crossover_rate: Float) -> TspResult<Self> {
        self.crossover_rate = check_probability("crossover_rate", crossover_rate)?;
        Ok(self)
    }

    /// Sets tournament size, must be positive.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> TspResult<Self> {
        if tournament_size == 0 {
            return Err(TspError::invalid_input("tournament size must be positive"));
        }

        self.tournament_size = tournament_size;
        Ok(self)
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Returns population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns amount of generations.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Returns mutation probability.
    pub fn mutation_rate(&self) -> Float {
        self.mutation_rate
    }

    /// Returns crossover probability. Every child is produced by crossover regardless of this value.
    pub fn crossover_rate(&self) -> Float {
        self.crossover_rate
    }

    /// Returns tournament size.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    fn evolve(&self, graph: &Graph) -> TspResult<Route> {
        let random = self.environment.random.as_ref();
        let mut telemetry = Telemetry::new(self.name(), self.telemetry_mode.clone());

        let mut population = self.create_population(graph)?;
        telemetry.on_iteration(population[0].distance);

        let elite_size = (self.population_size / 10).max(1);

        for _ in 0..self.max_generations {
            let mut offspring = population.iter().take(elite_size).cloned().collect::<Vec<_>>();

            while offspring.len() < self.population_size {
                let parent1 = &population[self.select_parent(population.len())];
                let parent2 = &population[self.select_parent(population.len())];

                let mut child = order_crossover(parent1.route.sequence(), parent2.route.sequence(), random);
                if random.is_hit(self.mutation_rate) {
                    swap_mutation(child.as_mut_slice(), random);
                }

                offspring.push(Individual::new(child, graph)?);
            }

            sort_population(&mut offspring);
            population = offspring;

            telemetry.on_iteration(population[0].distance);
        }

        telemetry.finish();

        population
            .into_iter()
            .next()
            .map(|individual| individual.route)
            .ok_or_else(|| TspError::algorithm("population is empty"))
    }

    /// Creates random permutations sorted by their length.
    fn create_population(&self, graph: &Graph) -> TspResult<Vec<Individual>> {
        let mut rng = self.environment.random.get_rng();

        let mut population = (0..self.population_size)
            .map(|_| {
                let mut sequence = (0..graph.size()).collect::<Vec<_>>();
                sequence.shuffle(&mut rng);

                Individual::new(sequence, graph)
            })
            .collect::<TspResult<Vec<_>>>()?;

        sort_population(&mut population);

        Ok(population)
    }

    /// Runs a tournament on a sorted population: the smallest drawn index wins.
    fn select_parent(&self, population_size: usize) -> usize {
        let random = self.environment.random.as_ref();
        let max_idx = population_size as i32 - 1;

        (0..self.tournament_size).map(|_| random.uniform_int(0, max_idx) as usize).min().unwrap_or(0)
    }
}

impl Default for Genetic {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl Solver for Genetic {
    fn solve(&self, graph: &Graph) -> TspResult<Route> {
        run_timed(self.name(), self.environment.as_ref(), graph, || self.evolve(graph))
    }

    fn name(&self) -> &str {
        "Genetic Algorithm"
    }

    fn description(&self) -> &str {
        "Evolutionary algorithm using selection, crossover and mutation"
    }

    fn time_complexity(&self) -> &str {
        "O(g * p * n)"
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn set_parameters(&mut self, parameters: &SolverParameters) -> TspResult<()> {
        let population_size = get_usize_param(parameters, "population_size")?;
        let tournament_size = get_usize_param(parameters, "tournament_size")?;

        if population_size == Some(0) {
            return Err(TspError::invalid_input("'population_size' must be positive"));
        }

        if tournament_size == Some(0) {
            return Err(TspError::invalid_input("'tournament_size' must be positive"));
        }

        let max_generations = get_usize_param(parameters, "max_generations")?;
        let mutation_rate = get_probability_param(parameters, "mutation_rate")?;
        let crossover_rate = get_probability_param(parameters, "crossover_rate")?;

        // NOTE apply only when all known options are valid
        self.population_size = population_size.unwrap_or(self.population_size);
        self.tournament_size = tournament_size.unwrap_or(self.tournament_size);
        self.max_generations = max_generations.unwrap_or(self.max_generations);
        self.mutation_rate = mutation_rate.unwrap_or(self.mutation_rate);
        self.crossover_rate = crossover_rate.unwrap_or(self.crossover_rate);

        Ok(())
    }
}

/// Produces a child using order crossover: a random segment of the first parent is copied at the
/// same positions, the remaining slots are filled after the segment, wrapping around, with genes of
/// the second parent in their order starting right after the segment.
fn order_crossover(parent1: &[usize], parent2: &[usize], random: &dyn Random) -> Vec<usize> {
    let size = parent1.len();
    if size < 2 {
        return parent1.to_vec();
    }

    let max_idx = size as i32 - 1;
    let (first, second) = (random.uniform_int(0, max_idx) as usize, random.uniform_int(0, max_idx) as usize);
    let (start, end) = if first <= second { (first, second) } else { (second, first) };

    let mut child = vec![0; size];
    let mut used = vec![false; size];

    child[start..=end].copy_from_slice(&parent1[start..=end]);
    parent1[start..=end].iter().for_each(|&gene| used[gene] = true);

    let mut position = (end + 1) % size;
    (0..size).map(|offset| parent2[(end + 1 + offset) % size]).for_each(|gene| {
        if !used[gene] {
            used[gene] = true;
            child[position] = gene;
            position = (position + 1) % size;
        }
    });

    child
}

/// Swaps two randomly chosen positions.
fn swap_mutation(sequence: &mut [usize], random: &dyn Random) {
    if sequence.len() < 2 {
        return;
    }

    let max_idx = sequence.len() as i32 - 1;
    let (first, second) = (random.uniform_int(0, max_idx) as usize, random.uniform_int(0, max_idx) as usize);

    sequence.swap(first, second);
}

fn sort_population(population: &mut [Individual]) {
    population.sort_by(|a, b| compare_floats(a.distance, b.distance));
}

fn check_probability(name: &str, value: Float) -> TspResult<Float> {
    if (0. ..=1.).contains(&value) {
        Ok(value)
    } else {
        Err(TspError::invalid_input(format!("'{name}' must be in [0, 1] range, got '{value}'")))
    }
}
