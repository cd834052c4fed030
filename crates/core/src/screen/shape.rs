//! Polygon generation for single hexagons, independent of any
//! [Grid](crate::Grid).

use crate::{screen::ScreenCoordinate, Orientation};

/// Get the six vertices of a hexagon centered on `(x, y)`. `scale` is the
/// distance between two opposite vertices. Vertices are in counter-clockwise
/// order; see [Orientation::vertex_angle] for where each one falls.
pub fn hexagon(
    scale: f64,
    x: f64,
    y: f64,
    orientation: Orientation,
) -> [ScreenCoordinate; 6] {
    hexagon_vertices(ScreenCoordinate::new(x, y), scale, orientation)
}

/// Same as [hexagon], but with the center given as a point. This is the one
/// place where hexagon vertices are computed; grids use it too.
pub fn hexagon_vertices(
    center: ScreenCoordinate,
    scale: f64,
    orientation: Orientation,
) -> [ScreenCoordinate; 6] {
    let radius = 0.5 * scale;
    std::array::from_fn(|i| {
        let angle = orientation.vertex_angle(i);
        center
            + ScreenCoordinate::new(radius * angle.cos(), radius * angle.sin())
    })
}
