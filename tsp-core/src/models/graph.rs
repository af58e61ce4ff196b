#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use super::Point;
use crate::utils::{Float, TspError, TspResult, compare_floats};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A complete graph over a set of unique points. Graph exclusively owns its points,
/// routes refer to them by index.
///
/// Distances are cached lazily per unordered index pair. The cache uses interior mutability,
/// so queries take `&self`; as a consequence, a graph cannot be shared between threads.
///
/// Every change of point set or coordinates assigns a new process wide unique revision, which
/// lets routes detect that their cached distance is stale.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    points: Vec<Point>,
    distances: RefCell<FxHashMap<(usize, usize), Float>>,
    revision: u64,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from given points, fails on the first duplicate.
    pub fn with_points<I>(points: I) -> TspResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().try_fold(Self::new(), |mut graph, point| {
            graph.add_point(point)?;
            Ok(graph)
        })
    }

    /// Adds a new point and returns its index.
    pub fn add_point(&mut self, point: Point) -> TspResult<usize> {
        if !point.is_finite() {
            return Err(TspError::invalid_input(format!("point has non finite coordinates: {point}")));
        }

        if self.has_point(&point) {
            return Err(TspError::duplicate_point(format!("point already exists: {point}")));
        }

        self.points.push(point);
        self.invalidate_distances();

        Ok(self.points.len() - 1)
    }

    /// Removes an equal point and returns the owned instance.
    pub fn remove_point(&mut self, point: &Point) -> TspResult<Point> {
        let index = self.index_of(point)?;

        self.remove_at(index)
    }

    /// Removes point at given index. Indices of subsequent points shift by one.
    pub fn remove_at(&mut self, index: usize) -> TspResult<Point> {
        self.check_index(index)?;

        let point = self.points.remove(index);
        self.invalidate_distances();

        Ok(point)
    }

    /// Returns point at given index.
    pub fn get_point(&self, index: usize) -> TspResult<&Point> {
        self.points.get(index).ok_or_else(|| out_of_bounds(index, self.points.len()))
    }

    /// Returns an index of the point with given identifier.
    pub fn find_by_id(&self, id: i64) -> TspResult<usize> {
        self.points
            .iter()
            .position(|point| point.id() == Some(id))
            .ok_or_else(|| TspError::point_not_found(format!("no point with id '{id}'")))
    }

    /// Returns an index of the first point with given name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.points.iter().position(|point| point.name() == name)
    }

    /// Returns an index of the point equal to given one.
    pub fn index_of(&self, point: &Point) -> TspResult<usize> {
        self.points
            .iter()
            .position(|other| other == point)
            .ok_or_else(|| TspError::point_not_found(format!("point not found: {point}")))
    }

    /// Checks whether an equal point is present.
    pub fn has_point(&self, point: &Point) -> bool {
        self.points.iter().any(|other| other == point)
    }

    /// Moves the point at given index to new coordinates.
    pub fn update_point(&mut self, index: usize, x: Float, y: Float) -> TspResult<()> {
        self.check_index(index)?;

        let mut moved = self.points[index].clone();
        moved.set_x(x)?;
        moved.set_y(y)?;

        if let Some(other) = self.points.iter().enumerate().find(|(idx, other)| *idx != index && **other == moved) {
            return Err(TspError::duplicate_point(format!("cannot move {} onto {}", self.points[index], other.1)));
        }

        self.points[index] = moved;
        self.invalidate_distances();

        Ok(())
    }

    /// Renames the point at given index. Distances are not affected.
    pub fn rename_point(&mut self, index: usize, name: &str) -> TspResult<()> {
        self.check_index(index)?;
        self.points[index].set_name(name);

        Ok(())
    }

    /// Returns all points in insertion order.
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Returns an iterator over points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Returns amount of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns true if graph has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate_distances();
    }

    /// Checks whether graph has enough points to form a tour.
    pub fn is_valid_for_tsp(&self) -> bool {
        self.points.len() >= 2
    }

    /// Returns distance between two points specified by their indices.
    pub fn get_distance(&self, from: usize, to: usize) -> TspResult<Float> {
        self.check_index(from)?;
        self.check_index(to)?;

        Ok(self.distance(from, to))
    }

    /// Returns distance between two points owned by the graph.
    pub fn distance_between(&self, from: &Point, to: &Point) -> TspResult<Float> {
        Ok(self.distance(self.index_of(from)?, self.index_of(to)?))
    }

    /// Fills distance cache for all point pairs.
    pub fn precompute_distances(&self) {
        let size = self.points.len();
        let mut distances = self.distances.borrow_mut();
        distances.reserve(size * size.saturating_sub(1) / 2);

        (0..size).flat_map(|i| ((i + 1)..size).map(move |j| (i, j))).for_each(|(i, j)| {
            distances.entry((i, j)).or_insert_with(|| self.points[i].distance_to(&self.points[j]));
        });
    }

    /// Returns up to `count` indices of points closest to the point at `index`, ascending by distance.
    /// Ties are resolved by insertion order.
    pub fn get_nearest_neighbors(&self, index: usize, count: usize) -> TspResult<Vec<usize>> {
        self.check_index(index)?;

        let count = count.min(self.points.len() - 1);
        let mut neighbours = (0..self.points.len())
            .filter(|&other| other != index)
            .map(|other| (other, self.distance(index, other)))
            .collect::<Vec<_>>();

        // NOTE sort_by is stable: equal distances keep insertion order
        neighbours.sort_by(|(_, a), (_, b)| compare_floats(*a, *b));

        Ok(neighbours.into_iter().take(count).map(|(other, _)| other).collect())
    }

    /// Returns an index of the point closest to the point at `index`.
    pub fn find_nearest_point(&self, index: usize) -> TspResult<usize> {
        if self.points.len() < 2 {
            return Err(TspError::empty_graph("cannot find nearest point without other points"));
        }

        self.get_nearest_neighbors(index, 1)?
            .first()
            .copied()
            .ok_or_else(|| TspError::empty_graph("cannot find nearest point without other points"))
    }

    /// Returns the revision of points layout: it changes whenever distances may change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a cached distance between two existing points.
    ///
    /// # Panics
    /// When index is out of range.
    pub(crate) fn distance(&self, from: usize, to: usize) -> Float {
        if from == to {
            return 0.;
        }

        let key = (from.min(to), from.max(to));

        if let Some(distance) = self.distances.borrow().get(&key) {
            return *distance;
        }

        let distance = self.points[key.0].distance_to(&self.points[key.1]);
        self.distances.borrow_mut().insert(key, distance);

        distance
    }

    pub(crate) fn check_index(&self, index: usize) -> TspResult<()> {
        if index < self.points.len() { Ok(()) } else { Err(out_of_bounds(index, self.points.len())) }
    }

    fn invalidate_distances(&mut self) {
        self.distances.get_mut().clear();
        self.revision = next_revision();
    }

    #[cfg(test)]
    pub(crate) fn cached_distances(&self) -> usize {
        self.distances.borrow().len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.points.iter().map(|point| point.name()).collect::<Vec<_>>().join(", ");

        write!(f, "Graph[{} points]: {}", self.points.len(), names)
    }
}

fn next_revision() -> u64 {
    // NOTE zero is reserved for a default (empty) graph
    static REVISION: AtomicU64 = AtomicU64::new(1);

    REVISION.fetch_add(1, Ordering::Relaxed)
}

fn out_of_bounds(index: usize, size: usize) -> TspError {
    TspError::invalid_index(format!("index {index} is out of bounds, size is {size}"))
}
