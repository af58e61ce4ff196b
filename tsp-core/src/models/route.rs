#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use super::Graph;
use crate::utils::{Float, TspError, TspResult, compare_floats, is_close};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::time::Duration;

/// Two routes with total distance closer than this value are considered equally long.
const DISTANCE_TOLERANCE: Float = 1e-9;

/// Represents a tour: an ordered sequence of graph point indices. The tour is implicitly
/// cyclic: the last point connects back to the first one.
///
/// Total distance is calculated lazily and cached until the next mutation of the route or
/// until it is requested for a graph in a different revision.
#[derive(Clone, Debug, Default)]
pub struct Route {
    sequence: Vec<usize>,
    distance: Cell<Option<(u64, Float)>>,
    calculation_time: Option<Duration>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route from an initial sequence of point indices.
    pub fn from_sequence(sequence: Vec<usize>) -> Self {
        Self { sequence, ..Self::default() }
    }

    /// Appends a point index to the end of the route.
    pub fn add_point(&mut self, index: usize) {
        self.sequence.push(index);
        self.invalidate_distance();
    }

    /// Inserts a point index at given position, `position == size` appends.
    pub fn insert_point(&mut self, position: usize, index: usize) -> TspResult<()> {
        if position > self.sequence.len() {
            return Err(out_of_bounds(position, self.sequence.len()));
        }

        self.sequence.insert(position, index);
        self.invalidate_distance();

        Ok(())
    }

    /// Removes a point index at given position and returns it.
    pub fn remove_point(&mut self, position: usize) -> TspResult<usize> {
        if position >= self.sequence.len() {
            return Err(out_of_bounds(position, self.sequence.len()));
        }

        let index = self.sequence.remove(position);
        self.invalidate_distance();

        Ok(index)
    }

    /// Returns a point index at given position.
    pub fn get(&self, position: usize) -> TspResult<usize> {
        self.sequence.get(position).copied().ok_or_else(|| out_of_bounds(position, self.sequence.len()))
    }

    /// Returns the visiting sequence.
    pub fn sequence(&self) -> &[usize] {
        self.sequence.as_slice()
    }

    /// Replaces the visiting sequence.
    pub fn set_sequence(&mut self, sequence: Vec<usize>) {
        self.sequence = sequence;
        self.invalidate_distance();
    }

    /// Returns amount of entries in the route.
    pub fn size(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the route has no entries.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Marks cached distance as stale.
    pub fn invalidate_distance(&mut self) {
        self.distance.set(None);
    }

    /// Returns the last calculated total distance, if the route was not changed since then.
    pub fn cached_distance(&self) -> Option<Float> {
        self.distance.get().map(|(_, distance)| distance)
    }

    /// Returns total cycle length: sum of consecutive edges and the closing edge back to the start.
    /// Routes with less than two points have zero length.
    pub fn total_distance(&self, graph: &Graph) -> TspResult<Float> {
        if let Some((revision, distance)) = self.distance.get() {
            if revision == graph.revision() {
                return Ok(distance);
            }
        }

        self.sequence.iter().try_for_each(|&index| graph.check_index(index))?;

        let distance = match self.sequence.as_slice() {
            [] | [_] => 0.,
            sequence => {
                let path = sequence.windows(2).map(|pair| graph.distance(pair[0], pair[1])).sum::<Float>();
                let closing = graph.distance(sequence[sequence.len() - 1], sequence[0]);

                path + closing
            }
        };

        self.distance.set(Some((graph.revision(), distance)));

        Ok(distance)
    }

    /// Reverses the segment between positions `i` and `k` inclusive: a classical 2-opt move.
    pub fn two_opt_swap(&mut self, i: usize, k: usize) -> TspResult<()> {
        if i >= k || k >= self.sequence.len() {
            return Err(TspError::invalid_index(format!(
                "2-opt swap requires i < k < size, got i={i}, k={k}, size={}",
                self.sequence.len()
            )));
        }

        self.sequence[i..=k].reverse();
        self.invalidate_distance();

        Ok(())
    }

    /// Appends the first point explicitly, producing the closed form of the tour.
    /// The total distance does not change: the implicit closing edge becomes zero length.
    pub fn close_tsp_route(&mut self) {
        if self.is_closed() {
            return;
        }

        if let Some(&first) = self.sequence.first() {
            self.sequence.push(first);
            self.invalidate_distance();
        }
    }

    /// Returns true if the route ends with its first point explicitly.
    pub fn is_closed(&self) -> bool {
        self.sequence.len() > 1 && self.sequence.first() == self.sequence.last()
    }

    /// Checks that the route visits each graph point exactly once. One explicit closing entry is allowed.
    pub fn is_valid_tsp_route(&self, graph: &Graph) -> bool {
        let tour = if self.is_closed() { &self.sequence[..self.sequence.len() - 1] } else { self.sequence() };

        if tour.len() != graph.size() {
            return false;
        }

        let mut visited = vec![false; graph.size()];
        tour.iter().all(|&index| match visited.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        })
    }

    /// Returns true if the route contains given point index.
    pub fn contains(&self, index: usize) -> bool {
        self.sequence.contains(&index)
    }

    /// Returns time spent by an algorithm to build the route, if known.
    pub fn calculation_time(&self) -> Option<Duration> {
        self.calculation_time
    }

    /// Sets time spent by an algorithm to build the route.
    pub fn set_calculation_time(&mut self, duration: Duration) {
        self.calculation_time = Some(duration);
    }

    /// Returns a human readable description which uses point names.
    pub fn describe(&self, graph: &Graph) -> TspResult<String> {
        let distance = self.total_distance(graph)?;
        let names = self
            .sequence
            .iter()
            .chain(self.sequence.first().filter(|_| self.sequence.len() > 1 && !self.is_closed()))
            .map(|&index| graph.get_point(index).map(|point| point.name().to_string()))
            .collect::<TspResult<Vec<_>>>()?;

        Ok(format!("Route[{} points, distance={distance}]: {}", self.sequence.len(), names.join(" -> ")))
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        let same_distance = match (self.cached_distance(), other.cached_distance()) {
            (Some(a), Some(b)) => is_close(a, b, DISTANCE_TOLERANCE),
            _ => true,
        };

        same_distance && self.sequence == other.sequence
    }
}

impl PartialOrd for Route {
    /// Compares routes by their cached total distance, shorter is less.
    /// Returns `None` when any of distances is stale.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.cached_distance(), other.cached_distance()) {
            (Some(a), Some(b)) => Some(compare_floats(a, b)),
            _ => None,
        }
    }
}

impl Add<&Route> for Route {
    type Output = Route;

    fn add(mut self, other: &Route) -> Self::Output {
        self += other;
        self
    }
}

impl AddAssign<&Route> for Route {
    /// Appends points of other route which are not yet visited.
    fn add_assign(&mut self, other: &Route) {
        other.sequence.iter().for_each(|&index| {
            if !self.sequence.contains(&index) {
                self.sequence.push(index);
            }
        });

        self.invalidate_distance();
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cached_distance() {
            Some(distance) => write!(f, "Route[{} points, distance={distance}]: ", self.sequence.len())?,
            None => write!(f, "Route[{} points, distance=?]: ", self.sequence.len())?,
        }

        let closing = self.sequence.first().filter(|_| self.sequence.len() > 1 && !self.is_closed());
        let entries = self.sequence.iter().chain(closing).map(|index| index.to_string()).collect::<Vec<_>>();

        write!(f, "{}", entries.join(" -> "))
    }
}

fn out_of_bounds(position: usize, size: usize) -> TspError {
    TspError::invalid_index(format!("position {position} is out of bounds, size is {size}"))
}
