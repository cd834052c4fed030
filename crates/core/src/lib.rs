//! redhex is a coordinate-geometry library for hexagonal grids. It converts
//! between cube, axial, and screen coordinates, does exact algebra and
//! rotation on hex positions, and generates the hexes and polygon vertices
//! needed to lay out and draw a grid. Actually drawing anything is left to
//! the consumer.
//!
//! ```
//! use redhex::{Grid, GridConfig, Orientation};
//!
//! let config = GridConfig {
//!     scale: 10.0,
//!     orientation: Orientation::FlatTop,
//! };
//! let grid = Grid::hexagonal(config, 2).unwrap();
//! assert_eq!(grid.hexes().len(), 19);
//!
//! let bounds = grid.bounds();
//! for &cube in grid.hexes() {
//!     // From here you can draw each polygon however you like
//!     let polygon = grid.hex_polygon(cube);
//!     assert!(polygon.iter().all(|&vertex| bounds.contains(vertex)));
//! }
//! ```
//!
//! See [hex] for a description of the coordinate systems.

mod config;
mod grid;
pub mod hex;
pub mod screen;
mod util;

pub use crate::{
    config::{GridConfig, Orientation},
    grid::Grid,
    hex::{Cube, CubeComponent, Hex, HexMap},
    screen::{shape, Bounds, ScreenCoordinate},
    util::hexagonal_len,
};
