use super::{cell_hue, surface_angles, torus_point, CellSprite, FrameMapper, Rgba};
use crate::{utils::Config, TorusGrid};

/// Places the cells on the torus in world space (major radius 1) for a
/// perspective renderer.
///
/// The lattice has `(N + 1) x (N + 1)` vertices: the last row and column
/// repeat the first ones, closing the seam.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloudMapper {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub alive_size: f64,
    pub dead_size: f64,
}

impl Default for PointCloudMapper {
    fn default() -> Self {
        let size = Config::CELL_BASE_SIZE * Config::PROJECTION_SCALE;
        Self {
            major_radius: 1.,
            minor_radius: Config::MINOR_RADIUS / Config::MAJOR_RADIUS,
            alive_size: size,
            dead_size: size * Config::DEAD_SIZE_RATIO,
        }
    }
}

impl FrameMapper for PointCloudMapper {
    fn map(&self, grid: &TorusGrid, time: f64, out: &mut Vec<CellSprite>) {
        let n = grid.side_length();
        out.clear();
        out.reserve(self.sprite_count(n));

        let dead = Rgba::gray(Config::DEAD_GRAY, Config::DEAD_OPACITY);
        for row in 0..=n {
            for col in 0..=n {
                let (u, v) = surface_angles(row, col, n);
                let [x, y, z] = torus_point(u, v, self.major_radius, self.minor_radius);
                let alive = grid.cell_at(row as i64, col as i64);
                let (color, size) = if alive {
                    let color = Rgba::from_hsl(
                        cell_hue(time, u, v),
                        Config::ALIVE_SATURATION,
                        Config::ALIVE_LIGHTNESS,
                        Config::POINT_CLOUD_ALIVE_OPACITY,
                    );
                    (color, self.alive_size)
                } else {
                    (dead, self.dead_size)
                };
                out.push(CellSprite {
                    x,
                    y,
                    z: Some(z),
                    color,
                    size,
                    alive,
                });
            }
        }
    }

    fn sprite_count(&self, side: usize) -> usize {
        (side + 1) * (side + 1)
    }
}
