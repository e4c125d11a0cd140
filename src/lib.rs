mod engine;
mod frame;
mod gui;
mod headless;
mod simulation;
mod utils;

pub use engine::{GridError, GridResult, TorusGrid};
pub use frame::{
    cell_hue, hsl_to_rgb, CellSprite, FrameMapper, OrthographicMapper, PointCloudMapper, Rgba,
    Variant,
};
pub use gui::{App, PainterRenderer};
pub use headless::{run_headless, LogRenderer};
pub use simulation::{Renderer, Simulation};
pub use utils::{
    parse_max_fps, Config, FixedStepScheduler, FpsLimiter, Lcg, RealtimeScheduler, Scheduler, Settings,
};
