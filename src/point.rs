//! 2D euclidean points: a two-axis wrapper over [`Vector`] with named
//! accessors and axis flips.

use std::fmt;

use crate::error::{Result, VectorError};
use crate::operand::{Operand, ToVector};
use crate::vector::{fmt_vector, Vector, VectorOps};

/// A point in the plane: a [`Vector`] constrained to exactly two
/// coordinates, with `x`/`y` accessors layered on top.
///
/// `Point` composes the general vector rather than re-deriving its
/// arithmetic; every [`VectorOps`] operation is available and its results
/// stay `Point`-typed, so `p.add((1.0, 1.0))` is again a point with valid
/// `x`/`y` accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    vector: Vector,
}

impl Point {
    /// Builds a point from exactly two coordinates.
    pub fn new(x_y: impl Into<Operand>) -> Result<Point> {
        let vector = x_y.into().resolve_strict()?;
        if vector.d() != 2 {
            return Err(VectorError::Dimension {
                expected: 2,
                actual: vector.d(),
            });
        }
        Ok(Point { vector })
    }

    /// Builds a point straight from its two axis values; cannot fail.
    pub fn from_xy(x: f64, y: f64) -> Point {
        Point {
            vector: Vector::new([x, y]),
        }
    }

    /// Converts any 2-length vector into a point.
    pub fn from_vector(vector: &Vector) -> Result<Point> {
        Point::new(vector.coordinates())
    }

    /// Attaches a label; it only ever shows up in the `Display` output.
    pub fn with_name(mut self, name: impl Into<String>) -> Point {
        self.vector = self.vector.with_name(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.vector.name()
    }

    pub fn x(&self) -> f64 {
        self.vector[0]
    }

    pub fn y(&self) -> f64 {
        self.vector[1]
    }

    /// The coordinate pair, for consumers that want a plain tuple (e.g. a
    /// plotting sink).
    pub fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    pub fn coordinates(&self) -> &[f64] {
        self.vector.coordinates()
    }

    /// Reflects the point across the x axis by negating `y`.
    pub fn flip_x(&self) -> Point {
        Point::from_xy(self.x(), -self.y())
    }

    /// Reflects the point across the y axis by negating `x`.
    pub fn flip_y(&self) -> Point {
        Point::from_xy(-self.x(), self.y())
    }

    /// Compares magnitudes, as [`Vector::magnitude_cmp`].
    pub fn magnitude_cmp(&self, other: &Point) -> std::cmp::Ordering {
        self.vector.magnitude_cmp(&other.vector)
    }
}

impl ToVector for Point {
    /// Base-form view for generic vector code; drops the 2-axis wrapper but
    /// keeps the same coordinates.
    fn to_vector(&self) -> Vector {
        self.vector.clone()
    }
}

impl VectorOps for Point {
    const KIND_NAME: &'static str = "Point";

    fn as_vector(&self) -> &Vector {
        &self.vector
    }

    fn rewrap(&self, vector: Vector) -> Point {
        // elementwise results preserve dimensionality
        debug_assert_eq!(vector.d(), 2);
        Point { vector }
    }
}

impl From<&Point> for Operand {
    fn from(point: &Point) -> Operand {
        Operand::of(point)
    }
}

impl From<Point> for Operand {
    fn from(point: Point) -> Operand {
        Operand::Vector(point.vector)
    }
}

/// Magnitude ordering, identical to [`Vector`]'s: see the note there on how
/// this intentionally diverges from `==`.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<std::cmp::Ordering> {
        self.vector.partial_cmp(&other.vector)
    }
}

/// `Point<"name">(x, y)`; the name segment is omitted when absent.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, Point::KIND_NAME, self.name(), self.coordinates())
    }
}

impl std::ops::Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        VectorOps::neg(self)
    }
}
