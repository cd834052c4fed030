//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! redhex uses three different coordinate systems:
//!
//! ### Cube Coordinates
//!
//! Cube coordinates define position within the hex grid itself. The system is
//! the cube coordinate system defined by Amit Patel:
//! <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any hex
//! cell, all three components will be integers and `x + y + z = 0`.** Even
//! though hexagons are laid out in two dimensions, three components make the
//! math around rotation and distance symmetric and simple. Fractional cube
//! coordinates (e.g. the result of interpolating between two cells) are also
//! allowed, and can be snapped back to the containing cell with
//! [Cube::round].
//!
//! ### Axial Coordinates
//!
//! Axial coordinates are a compressed form of cube coordinates. Since
//! `x + y + z = 0`, `y` can always be derived from the other two, so we only
//! store `q` (which is `x`) and `r` (which is `z`). These are convenient for
//! storage and for keying maps. See [Hex].
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are used strictly for rendering a grid into some sort
//! of visual output. They are plain 2D Cartesian coordinates, where the cell
//! `(0, 0, 0)` is centered on the origin. Converting from cube coordinates to
//! screen coordinates requires knowing the grid's scale and orientation, so
//! that conversion lives on [Grid](crate::Grid). See
//! [ScreenCoordinate](crate::ScreenCoordinate) for the screen-space type.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
