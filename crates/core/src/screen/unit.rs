use anyhow::anyhow;
use derive_more::{Add, Display, Div, From, Into, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// A 2D point or vector in screen space. The hex cell `(0, 0, 0)` is centered
/// on the origin. These positions aren't really useful outside of rendering,
/// so stick to [Cube](crate::Cube) for stuff like distances and rotation
/// within the grid.
///
/// Supports `+`, `-`, unary `-`, and `*` and `/` by a scalar. The string form
/// is `x,y`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{},{}", x, y)]
pub struct ScreenCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ScreenCoordinate {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        self * factor
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The 2D cross product, i.e. the `z` component of the 3D cross product
    /// of the two vectors. Positive if `other` is counter-clockwise from
    /// `self`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scale this vector to a length of 1. Returns an error if the vector has
    /// no direction to preserve, i.e. its length is zero (or not finite).
    pub fn normalize(self) -> anyhow::Result<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            Err(anyhow!(
                "Cannot normalize vector ({}) with length {}",
                self,
                length
            ))
        } else {
            Ok(self / length)
        }
    }

    /// Rotate 90°: `(x, y)` becomes `(y, -x)`
    pub fn rotate_left(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotate 90°: `(x, y)` becomes `(-y, x)`. Inverse of
    /// [Self::rotate_left].
    pub fn rotate_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }
}

impl From<nalgebra::Vector2<f64>> for ScreenCoordinate {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<ScreenCoordinate> for nalgebra::Vector2<f64> {
    fn from(other: ScreenCoordinate) -> Self {
        Self::new(other.x, other.y)
    }
}

/// An axis-aligned bounding box in screen space. Adding two boxes adds each
/// bound component-wise, which is how [Grid::bounds](crate::Grid::bounds)
/// combines the extent of a single hexagon with the extent of all hex centers.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}] x [{}, {}]", min_x, max_x, min_y, max_y)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is in this box. Boxes are inclusive on all edges.
    pub fn contains(&self, point: ScreenCoordinate) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }
}
