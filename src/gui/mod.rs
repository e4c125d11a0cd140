mod app;
mod config;
mod draw;
mod painter;

pub use app::App;
use config::Config;
pub use painter::PainterRenderer;
