/// Simulation and mapping constants.
pub struct Config;

impl Config {
    pub const GRID_SIZE: usize = 100;
    pub const LIVE_PROBABILITY: f64 = 0.2;

    pub const MAJOR_RADIUS: f64 = 275.;
    pub const MINOR_RADIUS: f64 = 225.;

    // Orthographic projection onto a 600x600 surface
    pub const VIEWPORT_WIDTH: f64 = 600.;
    pub const VIEWPORT_HEIGHT: f64 = 600.;
    pub const PROJECTION_SCALE: f64 = 0.5;

    // Rotation angles in radians per millisecond
    pub const ROTATION_Y_RATE: f64 = 0.00005;
    pub const ROTATION_X_RATE: f64 = 0.0001;

    // Hue in degrees; the base hue shifts with time and a wave runs over the surface
    pub const HUE_RATE: f64 = 0.005;
    pub const HUE_SPREAD: f64 = 180.;
    pub const PULSE_RATE: f64 = 0.002;
    pub const PULSE_AMPLITUDE: f64 = 20.;

    pub const CELL_BASE_SIZE: f64 = 12.;
    pub const DEAD_SIZE_RATIO: f64 = 0.3;
    pub const ALIVE_SATURATION: f64 = 1.;
    pub const ALIVE_LIGHTNESS: f64 = 0.7;
    pub const ALIVE_OPACITY: f64 = 0.8;
    pub const POINT_CLOUD_ALIVE_OPACITY: f64 = 1.;
    pub const DEAD_GRAY: f64 = 0x88 as f64 / 255.;
    pub const DEAD_OPACITY: f64 = 0.3;

    pub const MAX_FPS: f64 = 60.;
    pub const MIN_FPS_CAP: f64 = 1.;
    pub const MAX_FPS_CAP: f64 = 1000.;
}

/// Startup settings of a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub side: usize,
    pub seed: i64,
    pub variant: crate::Variant,
    pub max_fps: f64,
}

/// Parses a frame rate cap within `[Config::MIN_FPS_CAP, Config::MAX_FPS_CAP]`.
pub fn parse_max_fps(s: &str) -> Result<f64, String> {
    let fps: f64 = s.trim().parse().map_err(|e| format!("{}", e))?;
    if (Config::MIN_FPS_CAP..=Config::MAX_FPS_CAP).contains(&fps) {
        Ok(fps)
    } else {
        Err(format!(
            "{} is not in {}..={}",
            s,
            Config::MIN_FPS_CAP,
            Config::MAX_FPS_CAP
        ))
    }
}
