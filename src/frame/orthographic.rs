use super::{cell_hue, surface_angles, torus_point, CellSprite, FrameMapper, Rgba};
use crate::{utils::Config, TorusGrid};

/// Rotates the torus about the Y and then the X axis and projects it
/// orthographically onto a `width x height` surface.
///
/// Produces exactly `N x N` sprites, row-major, with positions at the sprite
/// centers. Depth is discarded and sprites are not sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthographicMapper {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub major_radius: f64,
    pub minor_radius: f64,
    /// Radians per millisecond about the Y and X axes.
    pub rotation_rates: [f64; 2],
}

impl Default for OrthographicMapper {
    fn default() -> Self {
        Self {
            width: Config::VIEWPORT_WIDTH,
            height: Config::VIEWPORT_HEIGHT,
            scale: Config::PROJECTION_SCALE,
            major_radius: Config::MAJOR_RADIUS,
            minor_radius: Config::MINOR_RADIUS,
            rotation_rates: [Config::ROTATION_Y_RATE, Config::ROTATION_X_RATE],
        }
    }
}

impl OrthographicMapper {
    /// Fits the default torus into a surface of the given size.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        let default = Self::default();
        let fit = (width / default.width).min(height / default.height);
        Self {
            width,
            height,
            scale: default.scale * fit,
            ..default
        }
    }

    /// Screen position of the surface point at angles `(u, v)`.
    pub fn project(&self, time: f64, u: f64, v: f64) -> [f64; 2] {
        let [x0, y0, z0] = torus_point(u, v, self.major_radius, self.minor_radius);
        let (sin_y, cos_y) = (time * self.rotation_rates[0]).sin_cos();
        let (sin_x, cos_x) = (time * self.rotation_rates[1]).sin_cos();

        let x1 = x0 * cos_y - z0 * sin_y;
        let y1 = y0;
        let z1 = x0 * sin_y + z0 * cos_y;

        let x2 = x1;
        let y2 = y1 * cos_x - z1 * sin_x;

        [
            self.width / 2. + x2 * self.scale,
            self.height / 2. + y2 * self.scale,
        ]
    }

    fn alive_size(&self) -> f64 {
        Config::CELL_BASE_SIZE * self.scale
    }
}

impl FrameMapper for OrthographicMapper {
    fn map(&self, grid: &TorusGrid, time: f64, out: &mut Vec<CellSprite>) {
        let n = grid.side_length();
        out.clear();
        out.reserve(self.sprite_count(n));

        let alive_size = self.alive_size();
        let dead = Rgba::gray(Config::DEAD_GRAY, Config::DEAD_OPACITY);
        for (i, &alive) in grid.cells().iter().enumerate() {
            let (row, col) = (i / n, i % n);
            let (u, v) = surface_angles(row, col, n);
            let [x, y] = self.project(time, u, v);
            let (color, size) = if alive {
                let color = Rgba::from_hsl(
                    cell_hue(time, u, v),
                    Config::ALIVE_SATURATION,
                    Config::ALIVE_LIGHTNESS,
                    Config::ALIVE_OPACITY,
                );
                (color, alive_size)
            } else {
                (dead, alive_size * Config::DEAD_SIZE_RATIO)
            };
            out.push(CellSprite {
                x,
                y,
                z: None,
                color,
                size,
                alive,
            });
        }
    }

    fn sprite_count(&self, side: usize) -> usize {
        side * side
    }
}
