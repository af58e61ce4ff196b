#[cfg(test)]
#[path = "../../tests/unit/models/generator_test.rs"]
mod generator_test;

use super::{Graph, Point};
use crate::utils::{Float, Random, TspError, TspResult};

/// An axis aligned rectangle where random points are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum x coordinate.
    pub min_x: Float,
    /// Maximum x coordinate.
    pub max_x: Float,
    /// Minimum y coordinate.
    pub min_y: Float,
    /// Maximum y coordinate.
    pub max_y: Float,
}

impl Bounds {
    /// Creates a square area `[min, max] x [min, max]`.
    pub fn square(min: Float, max: Float) -> Self {
        Self { min_x: min, max_x: max, min_y: min, max_y: max }
    }

    /// Checks whether given point lies inside.
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x()) && (self.min_y..=self.max_y).contains(&point.y())
    }

    fn validate(&self) -> TspResult<()> {
        let values = [self.min_x, self.max_x, self.min_y, self.max_y];
        if values.iter().any(|value| !value.is_finite()) || self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(TspError::invalid_input(format!("invalid bounds: {self:?}")));
        }

        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::square(0., 100.)
    }
}

/// Generates `count` unique random points named `P1..Pn` inside given bounds.
/// A candidate equal to an already generated point is drawn again.
pub fn generate_points(count: usize, bounds: &Bounds, random: &dyn Random) -> TspResult<Vec<Point>> {
    const MAX_ATTEMPTS_PER_POINT: usize = 100;

    bounds.validate()?;

    let max_attempts = count.saturating_mul(MAX_ATTEMPTS_PER_POINT);

    if count > 1 && bounds.min_x == bounds.max_x && bounds.min_y == bounds.max_y {
        return Err(TspError::algorithm(format!("cannot place {count} distinct points inside {bounds:?}")));
    }

    let mut graph = Graph::new();
    let mut attempts = 0;

    while graph.size() < count {
        if attempts >= max_attempts {
            return Err(TspError::algorithm(format!(
                "cannot place {count} distinct points inside {bounds:?}, generated only {}",
                graph.size()
            )));
        }
        attempts += 1;

        let x = sample(random, bounds.min_x, bounds.max_x);
        let y = sample(random, bounds.min_y, bounds.max_y);
        let point = Point::new(x, y, &format!("P{}", graph.size() + 1));

        if !graph.has_point(&point) {
            graph.add_point(point)?;
        }
    }

    Ok(graph.points().to_vec())
}

fn sample(random: &dyn Random, min: Float, max: Float) -> Float {
    if min < max { random.uniform_real(min, max) } else { min }
}
