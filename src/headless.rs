use crate::{CellSprite, Renderer, Scheduler, Simulation};
use std::ops::ControlFlow;

/// Renderer without a window: reports every frame through the log.
#[derive(Default)]
pub struct LogRenderer {
    frames: u64,
    last_alive: usize,
    /// Every `report_every`-th frame is logged at info level, others at debug.
    pub report_every: u64,
}

impl LogRenderer {
    pub fn new(report_every: u64) -> Self {
        Self {
            report_every,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Alive sprites in the last rendered frame.
    pub fn last_alive(&self) -> usize {
        self.last_alive
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, sprites: &[CellSprite]) {
        self.frames += 1;
        self.last_alive = sprites.iter().filter(|s| s.alive).count();
        if self.report_every != 0 && self.frames % self.report_every == 0 {
            log::info!(
                "frame {}: {} sprites, {} alive",
                self.frames,
                sprites.len(),
                self.last_alive
            );
        } else {
            log::debug!("frame {}: {} alive", self.frames, self.last_alive);
        }
    }
}

/// Runs `frames` ticks (or until the process is stopped if `None`).
pub fn run_headless(
    simulation: &mut Simulation,
    scheduler: &mut dyn Scheduler,
    renderer: &mut dyn Renderer,
    frames: Option<u64>,
) {
    let mut done = 0u64;
    scheduler.run(&mut |time| {
        if frames.is_some_and(|n| done >= n) {
            return ControlFlow::Break(());
        }
        simulation.on_frame(time, renderer);
        done += 1;
        ControlFlow::Continue(())
    });
}
