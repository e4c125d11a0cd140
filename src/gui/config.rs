use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(17, 17, 17);
    pub const SEED_INPUT_FIELD_SIZE: [f32; 2] = [100., 20.];

    pub const GAP_ABOVE_STATS: f32 = 30.;

    // Perspective camera of the point cloud, in units of the torus major radius
    pub const CAMERA_DISTANCE: f64 = 4.5;
    pub const CAMERA_NEAR: f64 = 0.1;
    pub const CAMERA_TILT: f64 = 1.0;
    pub const CAMERA_YAW_RATE: f64 = 0.0002;
    pub const FOCAL_LENGTH_RATIO: f64 = 0.9;
}
