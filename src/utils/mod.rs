mod config;
mod fps_limit;
mod lcg;
mod scheduler;

pub use config::{parse_max_fps, Config, Settings};
pub use fps_limit::FpsLimiter;
pub use lcg::Lcg;
pub use scheduler::{FixedStepScheduler, RealtimeScheduler, Scheduler};
