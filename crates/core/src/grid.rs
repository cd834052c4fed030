use crate::{
    hex::{Cube, CubeComponent, HexMap},
    screen::{shape, Bounds, ScreenCoordinate},
    unwrap_or_bail,
    util::hexagonal_len,
    GridConfig, Orientation,
};
use anyhow::ensure;
use log::{debug, trace};
use nalgebra::{Matrix2, Vector2};
use validator::Validate;

/// A grid maps a collection of hexes into screen space. A grid is created
/// using a particular [GridConfig] and set of hexes, and from there can be
/// used to find the center, polygon, and overall bounds of those hexes for
/// rendering.
///
/// Config options cannot be changed after creating a grid, but grids are very
/// cheap to create so if you need to change the config, just create a new
/// grid.
#[derive(Clone, Debug)]
pub struct Grid {
    config: GridConfig,
    /// The footprint of this grid
    hexes: Vec<Cube>,
    /// Maps a cube's `(x, z)` onto screen `(x, y)`
    layout: Matrix2<f64>,
    /// Maps screen `(x, y)` back onto a cube's `(x, z)`
    inverse_layout: Matrix2<f64>,
}

impl Grid {
    /// `sqrt(3) / 2`, the ratio between the distance from a hexagon's center
    /// to the midpoint of a side and the distance to a vertex
    pub const SQRT_3_2: f64 = 0.866_025_403_784_438_6;

    /// Initialize a new grid with the given options and footprint. Returns an
    /// error if the config is invalid.
    pub fn new(
        config: GridConfig,
        hexes: impl IntoIterator<Item = Cube>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        // Range validation lets NaN through
        ensure!(
            config.scale.is_finite(),
            "Grid scale must be finite, but was {}",
            config.scale
        );

        let layout = Self::layout_matrix(config);
        let inverse_layout = unwrap_or_bail!(
            layout.try_inverse(),
            "Layout for {:?} is not invertible",
            config
        );
        let hexes: Vec<Cube> = hexes.into_iter().collect();
        debug!("Created grid of {} hexes with {:?}", hexes.len(), config);

        Ok(Self {
            config,
            hexes,
            layout,
            inverse_layout,
        })
    }

    /// Initialize a new grid whose footprint is a hexagonal region of the
    /// given radius. See [Self::hexagonal_shape].
    pub fn hexagonal(config: GridConfig, size: u16) -> anyhow::Result<Self> {
        Self::new(config, Self::hexagonal_shape(size))
    }

    /// Get every cell within `size` steps of the origin, i.e. every cube where
    /// `|x|`, `|y|` and `|z|` are all at most `size`. This always contains
    /// exactly `3·size·(size+1) + 1` cells, ordered by ascending `x` then
    /// ascending `y`.
    pub fn hexagonal_shape(size: u16) -> Vec<Cube> {
        let r = i32::from(size);
        // If we just took every (x, y) pair, we'd end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let hexes: Vec<Cube> = (-r..=r)
            .flat_map(|x| (-r..=r).map(move |y| Cube::new(x, y, -x - y)))
            .filter(|cube| cube.z().abs() <= r)
            .collect();
        debug_assert_eq!(hexes.len(), hexagonal_len(size));
        trace!("Generated hexagonal shape of size {}", size);
        hexes
    }

    /// Compute the axis-aligned bounding box of a set of points. The box is
    /// seeded at `(0, 0)`, so it **always contains the origin**, even if none
    /// of the points are near it. That makes [Self::bounds] looser than it
    /// needs to be for grids that don't cover the origin.
    pub fn bounds_of_points(
        points: impl IntoIterator<Item = ScreenCoordinate>,
    ) -> Bounds {
        points
            .into_iter()
            .fold(Bounds::default(), |bounds, point| Bounds {
                min_x: bounds.min_x.min(point.x),
                max_x: bounds.max_x.max(point.x),
                min_y: bounds.min_y.min(point.y),
                max_y: bounds.max_y.max(point.y),
            })
    }

    fn layout_matrix(config: GridConfig) -> Matrix2<f64> {
        let scale = config.scale;
        match config.orientation {
            // x = scale·(√3/2)·(x + z/2), y = scale·(3/4)·z
            Orientation::PointyTop => Matrix2::new(
                scale * Self::SQRT_3_2,
                scale * Self::SQRT_3_2 * 0.5,
                0.0,
                scale * 0.75,
            ),
            // x = scale·(3/4)·x, y = scale·(√3/2)·(z + x/2)
            Orientation::FlatTop => Matrix2::new(
                scale * 0.75,
                0.0,
                scale * Self::SQRT_3_2 * 0.5,
                scale * Self::SQRT_3_2,
            ),
        }
    }

    /// Get a reference to the config that this grid uses
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// All the hexes that make up this grid, in the order they were given
    pub fn hexes(&self) -> &[Cube] {
        &self.hexes
    }

    /// Convert a position from hex space to the center of that position in
    /// screen space. Fractional cubes are supported too.
    pub fn hex_to_center<T: CubeComponent>(
        &self,
        cube: Cube<T>,
    ) -> ScreenCoordinate {
        (self.layout * Vector2::new(cube.x().into(), cube.z().into())).into()
    }

    /// Convert a screen position back into hex space. This is the inverse of
    /// [Self::hex_to_center], so the result is generally fractional. Use
    /// [Self::cube_at] to get the cell containing the point.
    pub fn screen_to_cube(&self, point: ScreenCoordinate) -> Cube<f64> {
        let xz = self.inverse_layout * Vector2::from(point);
        Cube::from_xz(xz.x, xz.y)
    }

    /// Get the cell whose hexagon contains the given screen position. The
    /// cell may or may not be part of this grid's footprint. Returns an error
    /// if the point is non-finite, or so far away that the cell isn't
    /// representable.
    pub fn cube_at(&self, point: ScreenCoordinate) -> anyhow::Result<Cube> {
        self.screen_to_cube(point).round()
    }

    /// The six vertices of a single hexagon centered on the origin, at this
    /// grid's scale and orientation. Add these to a hex's center to get its
    /// polygon, or use [Self::hex_polygon].
    pub fn polygon_vertices(&self) -> [ScreenCoordinate; 6] {
        shape::hexagon_vertices(
            ScreenCoordinate::ORIGIN,
            self.config.scale,
            self.config.orientation,
        )
    }

    /// The six vertices of the hexagon for the given cell, in screen space
    pub fn hex_polygon(&self, cube: Cube) -> [ScreenCoordinate; 6] {
        shape::hexagon_vertices(
            self.hex_to_center(cube),
            self.config.scale,
            self.config.orientation,
        )
    }

    /// Get the screen-space center of every hex in this grid, keyed by its
    /// axial position. Iteration order matches [Self::hexes].
    pub fn hex_centers(&self) -> HexMap<ScreenCoordinate> {
        self.hexes
            .iter()
            .map(|&cube| (cube.to_hex(), self.hex_to_center(cube)))
            .collect()
    }

    /// Compute a bounding box that contains every hexagon in this grid. This
    /// is the box around a single hexagon at the origin, plus the box around
    /// all the hex centers.
    pub fn bounds(&self) -> Bounds {
        let centers = self.hexes.iter().map(|&cube| self.hex_to_center(cube));
        Self::bounds_of_points(self.polygon_vertices())
            + Self::bounds_of_points(centers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hex;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::HashSet;

    fn grid(scale: f64, orientation: Orientation, size: u16) -> Grid {
        Grid::hexagonal(GridConfig { scale, orientation }, size).unwrap()
    }

    #[test]
    fn test_hexagonal_shape() {
        for size in 0..=3 {
            let hexes = Grid::hexagonal_shape(size);
            let distinct: HashSet<Cube> = hexes.iter().copied().collect();
            assert_eq!(hexes.len(), hexagonal_len(size));
            assert_eq!(distinct.len(), hexes.len());
            assert!(distinct.contains(&Cube::ORIGIN));
            for cube in hexes {
                assert!(cube.is_valid());
                assert!(cube.length() <= i32::from(size));
            }
        }
        assert_eq!(Grid::hexagonal_shape(0), vec![Cube::ORIGIN]);
        assert_eq!(Grid::hexagonal_shape(1).len(), 7);
        assert_eq!(Grid::hexagonal_shape(2).len(), 19);
    }

    #[test]
    fn test_hexagonal_shape_order() {
        assert_eq!(
            Grid::hexagonal_shape(1),
            vec![
                Cube::new(-1, 0, 1),
                Cube::new(-1, 1, 0),
                Cube::new(0, -1, 1),
                Cube::new(0, 0, 0),
                Cube::new(0, 1, -1),
                Cube::new(1, -1, 0),
                Cube::new(1, 0, -1),
            ]
        );
    }

    #[test]
    fn test_hex_to_center_pointy_top() {
        let grid = grid(2.0, Orientation::PointyTop, 0);
        let center = grid.hex_to_center(Cube::new(1, -3, 2));
        // x = 2·(√3/2)·(1 + 1), y = 2·0.75·2
        assert_approx_eq!(center.x, 2.0 * Grid::SQRT_3_2 * 2.0);
        assert_approx_eq!(center.y, 3.0);
        assert_eq!(grid.hex_to_center(Cube::ORIGIN), ScreenCoordinate::ORIGIN);
    }

    #[test]
    fn test_hex_to_center_flat_top() {
        let grid = grid(2.0, Orientation::FlatTop, 0);
        let center = grid.hex_to_center(Cube::new(2, -1, -1));
        // x = 2·0.75·2, y = 2·(√3/2)·(-1 + 1)
        assert_approx_eq!(center.x, 3.0);
        assert_approx_eq!(center.y, 0.0);
        let center = grid.hex_to_center(Cube::new(0.0, -1.0, 1.0));
        assert_approx_eq!(center.x, 0.0);
        assert_approx_eq!(center.y, 2.0 * Grid::SQRT_3_2);
    }

    #[test]
    fn test_neighbor_centers_are_equidistant() {
        // Adjacent hexes share a side, so their centers are always two side
        // radii apart
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let grid = grid(4.0, orientation, 0);
            let origin = grid.hex_to_center(Cube::ORIGIN);
            for neighbor in Cube::ORIGIN.neighbors() {
                assert_approx_eq!(
                    grid.hex_to_center(neighbor).distance(origin),
                    4.0 * Grid::SQRT_3_2
                );
            }
        }
    }

    #[test]
    fn test_cube_at() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let grid = grid(3.0, orientation, 3);
            for &cube in grid.hexes() {
                let center = grid.hex_to_center(cube);
                let fractional = grid.screen_to_cube(center);
                assert_approx_eq!(fractional.x(), f64::from(cube.x()));
                assert_approx_eq!(fractional.y(), f64::from(cube.y()));
                assert_approx_eq!(fractional.z(), f64::from(cube.z()));
                assert_eq!(grid.cube_at(center).unwrap(), cube);

                // Points well inside the hexagon belong to the same cell
                for vertex in grid.polygon_vertices() {
                    assert_eq!(
                        grid.cube_at(center + vertex * 0.8).unwrap(),
                        cube
                    );
                }
            }
        }
    }

    #[test]
    fn test_polygon_vertices() {
        let grid = grid(2.0, Orientation::FlatTop, 0);
        let vertices = grid.polygon_vertices();
        for vertex in vertices {
            assert_approx_eq!(vertex.length(), 1.0);
        }
        assert_approx_eq!(vertices[0].x, 1.0);
        assert_approx_eq!(vertices[0].y, 0.0);
        // Counter-clockwise
        assert!(vertices[1].y > 0.0);
        assert_eq!(
            vertices,
            shape::hexagon(2.0, 0.0, 0.0, Orientation::FlatTop)
        );
    }

    #[test]
    fn test_hex_polygon() {
        let grid = grid(2.0, Orientation::PointyTop, 1);
        let cube = Cube::new(1, 0, -1);
        let center = grid.hex_to_center(cube);
        for (vertex, offset) in
            grid.hex_polygon(cube).iter().zip(grid.polygon_vertices())
        {
            assert_approx_eq!(vertex.x, center.x + offset.x);
            assert_approx_eq!(vertex.y, center.y + offset.y);
        }
    }

    #[test]
    fn test_hex_centers() {
        let grid = grid(1.0, Orientation::PointyTop, 2);
        let centers = grid.hex_centers();
        assert_eq!(centers.len(), 19);
        for ((hex, center), cube) in centers.iter().zip(grid.hexes()) {
            assert_eq!(hex.to_cube(), *cube);
            assert_eq!(*center, grid.hex_to_center(*cube));
        }
        assert_eq!(
            centers.get(&"0:0".parse::<Hex>().unwrap()),
            Some(&ScreenCoordinate::ORIGIN)
        );
    }

    #[test]
    fn test_bounds_of_points() {
        assert_eq!(Grid::bounds_of_points(Vec::new()), Bounds::default());
        // The origin is always included
        assert_eq!(
            Grid::bounds_of_points(vec![
                ScreenCoordinate::new(2.0, 3.0),
                ScreenCoordinate::new(5.0, 4.0),
            ]),
            Bounds {
                min_x: 0.0,
                max_x: 5.0,
                min_y: 0.0,
                max_y: 4.0,
            }
        );
        assert_eq!(
            Grid::bounds_of_points(vec![
                ScreenCoordinate::new(-2.0, 3.0),
                ScreenCoordinate::new(1.0, -4.0),
            ]),
            Bounds {
                min_x: -2.0,
                max_x: 1.0,
                min_y: -4.0,
                max_y: 3.0,
            }
        );
    }

    #[test]
    fn test_bounds_single_hex() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let grid = grid(2.0, orientation, 0);
            assert_eq!(
                grid.bounds(),
                Grid::bounds_of_points(grid.polygon_vertices())
            );
        }
    }

    #[test]
    fn test_bounds_contains_every_vertex() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let grid = grid(5.0, orientation, 3);
            let bounds = grid.bounds();
            for &cube in grid.hexes() {
                for vertex in grid.hex_polygon(cube) {
                    // Allow for a bit of float error on the edges
                    assert!(
                        vertex.x >= bounds.min_x - 1e-9
                            && vertex.x <= bounds.max_x + 1e-9
                            && vertex.y >= bounds.min_y - 1e-9
                            && vertex.y <= bounds.max_y + 1e-9,
                        "{} is outside {}",
                        vertex,
                        bounds
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = GridConfig {
            scale: 0.0,
            ..Default::default()
        };
        assert!(Grid::new(config, vec![Cube::ORIGIN]).is_err());
        let config = GridConfig {
            scale: -1.0,
            ..Default::default()
        };
        assert!(Grid::hexagonal(config, 1).is_err());
        let config = GridConfig {
            scale: f64::NAN,
            ..Default::default()
        };
        assert!(Grid::hexagonal(config, 1).is_err());
    }
}
