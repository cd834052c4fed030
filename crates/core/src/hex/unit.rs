//! This sub-module contains the basic value types that make up the hex
//! coordinate system. See the parent module documentation for more info on the
//! coordinate system.

use anyhow::{anyhow, ensure, Context};
use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    ops,
    str::FromStr,
};

/// A numeric type that can be used for each component of a [Cube]. This is
/// implemented for `i32`, which is used for whole hex cells, and `f64`, which
/// is used for fractional positions (e.g. the result of interpolation or of
/// converting a screen position back into hex space).
///
/// Must be convertible to `f64` so it can be mathematically converted to
/// screen space.
pub trait CubeComponent:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Into<f64>
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
    + ops::Mul<Self, Output = Self>
    + ops::Neg<Output = Self>
{
    fn zero() -> Self;

    fn abs(self) -> Self;

    /// Do these components sum to zero? Floats are compared with a tolerance
    /// relative to the largest component, since fractional cube math
    /// accumulates rounding error proportional to the size of its operands.
    fn sums_to_zero(components: [Self; 3]) -> bool;
}

impl CubeComponent for i32 {
    fn zero() -> Self {
        0
    }

    fn abs(self) -> Self {
        i32::abs(self)
    }

    fn sums_to_zero(components: [Self; 3]) -> bool {
        // Widen so the sum can't overflow
        components.iter().copied().map(i64::from).sum::<i64>() == 0
    }
}

impl CubeComponent for f64 {
    fn zero() -> Self {
        0.0
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sums_to_zero(components: [Self; 3]) -> bool {
        let sum: f64 = components.iter().sum();
        let magnitude = components.iter().fold(1.0, |max, c| c.abs().max(max));
        sum.abs() <= 1e-9 * magnitude
    }
}

/// A position in the hex grid, in cube coordinates. See module-level
/// documentation for a description of the coordinate system.
///
/// For any value that refers to a hex cell, `x + y + z = 0`. That invariant
/// is **not** checked by [Cube::new], because fractional values produced
/// during interpolation or screen-space conversion may drift slightly off the
/// plane. Use [Cube::try_new] to construct a checked value, and [Cube::round]
/// to snap a fractional value back onto a valid cell.
///
/// The component type defaults to `i32`, which is what you want for whole
/// cells. `Cube<f64>` is used for fractional positions.
///
/// Cubes support `+`, `-` and unary `-` component-wise, and `*` by a scalar.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{},{},{}", x, y, z)]
pub struct Cube<T: CubeComponent = i32> {
    x: T,
    y: T,
    z: T,
}

impl<T: CubeComponent> Cube<T> {
    /// Construct a cube from its three components, without validation.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Construct a cube from its three components. Returns an error if the
    /// components don't fall on the plane `x + y + z = 0`.
    pub fn try_new(x: T, y: T, z: T) -> anyhow::Result<Self> {
        let cube = Self::new(x, y, z);
        if cube.is_valid() {
            Ok(cube)
        } else {
            Err(anyhow!(
                "Invalid cube coordinate ({}); must be on the plane x+y+z=0",
                cube
            ))
        }
    }

    /// Construct a cube from `x` and `z`. Since x+y+z=0 for all valid cubes,
    /// we can derive y from x & z.
    pub fn from_xz(x: T, z: T) -> Self {
        Self::new(x, -x - z, z)
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn z(&self) -> T {
        self.z
    }

    /// All three components, in `[x, y, z]` order
    pub fn components(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Does this cube satisfy `x + y + z = 0`? For fractional cubes, the sum
    /// only has to be zero within a tolerance relative to the largest
    /// component.
    pub fn is_valid(&self) -> bool {
        T::sums_to_zero(self.components())
    }

    /// Multiply each component by a scalar. Since this is linear, it preserves
    /// the zero-sum invariant.
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Rotate this position 60° around the origin. Six rotations in the same
    /// direction will return the original value. This is the inverse of
    /// [Self::rotate_right].
    pub fn rotate_left(self) -> Self {
        Self::new(-self.y, -self.z, -self.x)
    }

    /// Rotate this position 60° around the origin, in the opposite direction
    /// of [Self::rotate_left].
    pub fn rotate_right(self) -> Self {
        Self::new(-self.z, -self.x, -self.y)
    }

    /// The largest absolute component. For a valid cube, this is the number
    /// of steps between this cell and the origin.
    pub fn length(&self) -> T {
        self.components()
            .iter()
            .map(|component| component.abs())
            .fold(T::zero(), |max, value| if value > max { value } else { max })
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the cells are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: Self) -> T {
        (self - other).length()
    }

    /// Convert each component to a float
    pub fn into_f64(self) -> Cube<f64> {
        Cube::new(self.x.into(), self.y.into(), self.z.into())
    }

    /// Linearly interpolate between this position and another. `t = 0.0`
    /// gives this position, `t = 1.0` gives the other. The result is
    /// generally fractional, use [Cube::round] to find the containing cell.
    pub fn lerp(self, other: Self, t: f64) -> Cube<f64> {
        let start = self.into_f64();
        let end = other.into_f64();
        start + (end - start) * t
    }
}

// Scale a cube by a constant
impl<T: CubeComponent> ops::Mul<T> for Cube<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl Cube {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Offsets to each of the six neighboring cells. Each entry is the
    /// previous one rotated left, i.e.
    /// `DIRECTIONS[(i + 1) % 6] == DIRECTIONS[i].rotate_left()`.
    pub const DIRECTIONS: [Self; 6] = [
        Self::new(1, -1, 0),
        Self::new(1, 0, -1),
        Self::new(0, 1, -1),
        Self::new(-1, 1, 0),
        Self::new(-1, 0, 1),
        Self::new(0, -1, 1),
    ];

    /// Get the cell adjacent to this one in the given direction. Directions
    /// index into [Self::DIRECTIONS], and wrap around after 6.
    pub fn neighbor(self, direction: usize) -> Self {
        self + Self::DIRECTIONS[direction % Self::DIRECTIONS.len()]
    }

    /// Get an iterator of all the cells directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Self::DIRECTIONS
            .into_iter()
            .map(move |direction| self + direction)
    }

    /// Convert to axial coordinates. This is lossless, since `y` can always
    /// be derived from `x` and `z`.
    pub fn to_hex(self) -> Hex {
        Hex::new(self.x, self.z)
    }
}

impl Cube<f64> {
    /// Snap a fractional position to the nearest valid cell. Each component
    /// is rounded independently (half-way values round away from zero). If
    /// the rounded components don't sum to zero, the component that moved the
    /// furthest during rounding is recomputed from the other two, which
    /// restores `x + y + z = 0` exactly. Ties for "furthest" go to the first
    /// component in `x`, `y`, `z` order.
    ///
    /// Returns an error if any component is non-finite, or if the resulting
    /// cell can't be represented with `i32` components. `i32::MIN` is
    /// excluded, so that [Cube::length] can't overflow.
    pub fn round(self) -> anyhow::Result<Cube> {
        const LIMIT: i64 = i32::MAX as i64;

        let original = self.components();
        let rounded = original.map(f64::round);
        for component in rounded {
            ensure!(
                component.is_finite() && component.abs() <= LIMIT as f64,
                "Cannot round cube ({}) to a cell; components must be \
                finite and within ±{}",
                self,
                LIMIT
            );
        }

        // Correct in integer space, where the sum is exact
        let mut cells = rounded.map(|component| component as i64);
        let sum: i64 = cells.iter().sum();
        if sum != 0 {
            let mut worst = 0;
            for i in 1..rounded.len() {
                if (rounded[i] - original[i]).abs()
                    > (rounded[worst] - original[worst]).abs()
                {
                    worst = i;
                }
            }
            cells[worst] -= sum;
        }

        let [x, y, z] = cells;
        ensure!(
            cells.iter().all(|cell| cell.abs() <= LIMIT),
            "Rounded cube ({},{},{}) is outside the range of i32",
            x,
            y,
            z
        );
        Ok(Cube::new(x as i32, y as i32, z as i32))
    }
}

/// A position in the hex grid, in axial coordinates. This stores only two of
/// the three cube components, which makes it a compact map key. The string
/// form is `q:r`, and can be parsed back via [FromStr].
///
/// See module-level documentation for a description of the coordinate system.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}:{}", q, r)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Convert to cube coordinates. This is the exact inverse of
    /// [Cube::to_hex].
    pub fn to_cube(self) -> Cube {
        Cube::new(self.q, -self.r - self.q, self.r)
    }
}

impl From<Cube> for Hex {
    fn from(cube: Cube) -> Self {
        cube.to_hex()
    }
}

impl From<Hex> for Cube {
    fn from(hex: Hex) -> Self {
        hex.to_cube()
    }
}

impl FromStr for Hex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, r) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid hex key {:?}; expected q:r", s))?;
        let q = q
            .trim()
            .parse()
            .with_context(|| format!("Invalid q component in {:?}", s))?;
        let r = r
            .trim()
            .parse()
            .with_context(|| format!("Invalid r component in {:?}", s))?;
        Ok(Self::new(q, r))
    }
}
