use serde::{Deserialize, Serialize};
use std::f64::consts;
use strum::{EnumIter, EnumString};
use validator::Validate;

/// Configuration that defines how a [Grid](crate::Grid) maps hex space onto
/// screen space. Two grids with the same config will always lay out the same
/// hexes identically.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Size of each hexagon, in screen units. This is the distance between
    /// two opposite vertices of a single hexagon, i.e. twice the distance
    /// from its center to any vertex.
    #[validate(range(min = 0.000001))]
    pub scale: f64,

    /// Which way the hexagons point. See [Orientation].
    pub orientation: Orientation,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            orientation: Orientation::PointyTop,
        }
    }
}

/// The rotational layout of the hexagons in a grid. This determines both how
/// cube coordinates are projected into screen space, and the angles of each
/// hexagon's vertices.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// A vertex points straight up. Rows of hexes run horizontally, and the
    /// cube `x` axis lines up with screen `x`.
    PointyTop,
    /// A flat side faces straight up. Columns of hexes run vertically.
    FlatTop,
}

impl Orientation {
    /// Numeric form of the orientation: `1` for pointy-top, `0` for
    /// flat-top. This is the number of 30° steps that vertex 0 is rotated
    /// clockwise from the positive `x` axis.
    pub fn bit(self) -> u8 {
        match self {
            Self::PointyTop => 1,
            Self::FlatTop => 0,
        }
    }

    /// Angle (in radians) from a hexagon's center to its vertex with the
    /// given index. Vertices go counter-clockwise with increasing index.
    pub fn vertex_angle(self, index: usize) -> f64 {
        2.0 * consts::PI * (2.0 * index as f64 - f64::from(self.bit()))
            / 12.0
    }
}
