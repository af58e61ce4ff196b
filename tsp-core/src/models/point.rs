#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::utils::{Float, TspError, TspResult, compare_floats, is_close};
use std::cmp::Ordering;
use std::fmt;

/// Two coordinates closer than this value are considered the same.
pub const POINT_TOLERANCE: Float = 1e-9;

/// Represents a city: a labelled 2-D coordinate.
#[derive(Clone, Debug, Default)]
pub struct Point {
    x: Float,
    y: Float,
    name: String,
    id: Option<i64>,
}

impl Point {
    /// Creates a new point. Use [Point::try_new] for untrusted coordinates.
    pub fn new(x: Float, y: Float, name: &str) -> Self {
        Self { x, y, name: name.to_string(), id: None }
    }

    /// Creates a new point checking that coordinates are finite.
    pub fn try_new(x: Float, y: Float, name: &str) -> TspResult<Self> {
        validate_coordinate(x, "x")?;
        validate_coordinate(y, "y")?;

        Ok(Self::new(x, y, name))
    }

    /// Sets an optional user defined identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns x coordinate.
    pub fn x(&self) -> Float {
        self.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> Float {
        self.y
    }

    /// Returns a name, can be empty.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns an optional identifier.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Changes x coordinate.
    pub fn set_x(&mut self, x: Float) -> TspResult<()> {
        validate_coordinate(x, "x")?;
        self.x = x;

        Ok(())
    }

    /// Changes y coordinate.
    pub fn set_y(&mut self, y: Float) -> TspResult<()> {
        validate_coordinate(y, "y")?;
        self.y = y;

        Ok(())
    }

    /// Changes name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculates euclidean distance to other point.
    pub fn distance_to(&self, other: &Point) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    /// Compares positions lexicographically on (x, y) using [POINT_TOLERANCE] for x tie-break.
    /// Unlike [PartialOrd], this is a total order suitable for sorting.
    pub fn cmp_position(&self, other: &Point) -> Ordering {
        if is_close(self.x, other.x, POINT_TOLERANCE) {
            compare_floats(self.y, other.y)
        } else {
            compare_floats(self.x, other.x)
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        is_close(self.x, other.x, POINT_TOLERANCE) && is_close(self.y, other.y, POINT_TOLERANCE)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_finite() && other.is_finite() { Some(self.cmp_position(other)) } else { None }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Point({}, {})", self.x, self.y)
        } else {
            write!(f, "Point({}, {}, \"{}\")", self.x, self.y, self.name)
        }
    }
}

fn validate_coordinate(value: Float, axis: &str) -> TspResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TspError::invalid_input(format!("{axis} coordinate must be a finite number, got '{value}'")))
    }
}
