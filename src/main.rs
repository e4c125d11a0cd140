#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use clap::Parser;
use torus_life::{
    parse_max_fps, run_headless, App, Config, FixedStepScheduler, Lcg, LogRenderer,
    RealtimeScheduler, Scheduler, Settings, Simulation, Variant,
};

#[derive(Parser)]
#[command(
    name = "torus_life",
    about = "Conway's Game of Life on the surface of a torus"
)]
struct Args {
    /// Seed of the initial field (random if omitted).
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Side length of the field.
    #[arg(long, default_value_t = Config::GRID_SIZE)]
    size: usize,

    /// How the torus is handed to the renderer.
    #[arg(long, value_enum, default_value_t = Variant::default())]
    variant: Variant,

    /// Frame rate cap.
    #[arg(long, default_value_t = Config::MAX_FPS, value_parser = parse_max_fps)]
    max_fps: f64,

    /// Run without a window, logging every frame.
    #[arg(long)]
    headless: bool,

    /// Number of frames to run in headless mode (unlimited if omitted).
    #[arg(long, requires = "headless")]
    frames: Option<u64>,

    /// Pace headless frames by the wall clock instead of a fixed timestep.
    #[arg(long, requires = "headless")]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings {
        side: args.size,
        seed: args.seed.unwrap_or_else(|| {
            use rand::Rng;
            rand::thread_rng().gen_range(0..Lcg::MODULUS)
        }),
        variant: args.variant,
        max_fps: args.max_fps,
    };
    let mut simulation = Simulation::new(settings.side, settings.seed, settings.variant)?;

    if args.headless {
        let mut scheduler: Box<dyn Scheduler> = if args.realtime {
            Box::new(RealtimeScheduler::new(settings.max_fps))
        } else {
            Box::new(FixedStepScheduler::new(settings.max_fps))
        };
        let mut renderer = LogRenderer::new(settings.max_fps.round().max(1.) as u64);
        run_headless(
            &mut simulation,
            scheduler.as_mut(),
            &mut renderer,
            args.frames,
        );
        log::info!(
            "stopped after {} frames at generation {}, {} alive",
            renderer.frames(),
            simulation.generation(),
            simulation.grid().population()
        );
        return Ok(());
    }

    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1100., 720.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life on a torus",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, simulation, &settings)))),
    )
    .map_err(|e| anyhow!("failed to start the window: {}", e))
}
