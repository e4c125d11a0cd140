//! Mapping of the grid state onto per-cell render attributes.
//!
//! A mapper never touches the simulation; it reads the current generation and
//! produces one [`CellSprite`] per cell (or per lattice vertex).

mod color;
mod orthographic;
mod point_cloud;
#[cfg(test)]
mod tests;

pub use color::{hsl_to_rgb, Rgba};
pub use orthographic::OrthographicMapper;
pub use point_cloud::PointCloudMapper;

use crate::{utils::Config, TorusGrid};
use std::f64::consts::TAU;

/// Render attributes of a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSprite {
    pub x: f64,
    pub y: f64,
    /// Depth coordinate; `None` for sprites already projected onto the screen.
    pub z: Option<f64>,
    pub color: Rgba,
    pub size: f64,
    pub alive: bool,
}

pub trait FrameMapper {
    /// Fills `out` with the render attributes of the current generation at `time`
    /// (milliseconds). The previous contents of `out` are discarded.
    fn map(&self, grid: &TorusGrid, time: f64, out: &mut Vec<CellSprite>);

    /// Number of sprites produced for a grid with the given side length.
    fn sprite_count(&self, side: usize) -> usize;
}

/// Describes how the torus is handed to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// Flat orthographic projection, one sprite per cell.
    #[default]
    Orthographic,
    /// World-space point cloud on a closed lattice, projected by the renderer.
    PointCloud,
}

impl Variant {
    pub fn mapper(self) -> Box<dyn FrameMapper> {
        match self {
            Self::Orthographic => Box::new(OrthographicMapper::default()),
            Self::PointCloud => Box::new(PointCloudMapper::default()),
        }
    }
}

/// Parametric angles `(u, v)` of the lattice point `(row, col)`.
pub(crate) fn surface_angles(row: usize, col: usize, side: usize) -> (f64, f64) {
    let n = side as f64;
    (TAU * col as f64 / n, TAU * row as f64 / n)
}

/// Point of the torus with the given radii at angles `(u, v)`.
pub(crate) fn torus_point(u: f64, v: f64, major: f64, minor: f64) -> [f64; 3] {
    let ring = major + minor * v.cos();
    [ring * u.cos(), ring * u.sin(), minor * v.sin()]
}

/// Hue (degrees, `[0, 360)`) of a live cell at angles `(u, v)`.
pub fn cell_hue(time: f64, u: f64, v: f64) -> f64 {
    let base = (time * Config::HUE_RATE).rem_euclid(360.);
    let offset_u = u / TAU * Config::HUE_SPREAD;
    let offset_v = v / TAU * Config::HUE_SPREAD;
    let pulse = (time * Config::PULSE_RATE + u * 3. + v * 2.).sin() * Config::PULSE_AMPLITUDE;
    let hue = (base + offset_u + offset_v + pulse).rem_euclid(360.);
    // rem_euclid rounds tiny negative values up to the modulus itself
    if hue >= 360. {
        0.
    } else {
        hue
    }
}
