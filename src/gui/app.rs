use super::{Config, PainterRenderer};
use crate::{utils::FpsLimiter, OrthographicMapper, Settings, Simulation, Variant};
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin, Rect};

pub struct App {
    pub(super) simulation: Simulation, // Grid, mapper and the last mapped frame.
    pub(super) renderer: PainterRenderer,
    pub(super) is_paused: bool,   // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool, // Do one step and pause.
    pub(super) restart_requested: bool,
    pub(super) seed: i64,        // Seed used by the next restart.
    pub(super) variant: Variant, // Variant selected in the control panel.
    pub(super) time: f64,        // Timestamp of the current frame in milliseconds.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context, simulation: Simulation, settings: &Settings) -> Self {
        Self {
            variant: simulation.variant(),
            simulation,
            renderer: PainterRenderer::new(ctx),
            is_paused: false,
            do_one_step: false,
            restart_requested: false,
            seed: settings.seed,
            time: 0.,
            fps_limiter: FpsLimiter::default(),
            max_fps: settings.max_fps,
        }
    }

    /// Fits the mapper and the renderer to the field area.
    pub(super) fn resize_field(&mut self, rect: Rect) {
        if rect == self.renderer.rect() {
            return;
        }
        log::debug!("field area resized to {:?}", rect.size());
        self.renderer.set_rect(rect);
        if self.simulation.variant() == Variant::Orthographic {
            self.simulation.set_mapper(Box::new(OrthographicMapper::with_viewport(
                rect.width() as f64,
                rect.height() as f64,
            )));
        }
        if self.is_paused || self.renderer.shapes().is_empty() {
            self.simulation.redraw(self.time, &mut self.renderer);
        }
    }

    pub(super) fn set_variant(&mut self) {
        if self.variant == self.simulation.variant() {
            return;
        }
        self.simulation.set_variant(self.variant);
        // the orthographic mapper has to be fitted to the field again
        let rect = self.renderer.rect();
        self.renderer.set_rect(Rect::NOTHING);
        self.resize_field(rect);
    }

    pub(super) fn update_simulation(&mut self) {
        self.renderer.set_time(self.time);
        if self.restart_requested {
            self.restart_requested = false;
            self.simulation
                .restart(self.seed, self.time, &mut self.renderer);
            return;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.simulation.on_frame(self.time, &mut self.renderer);
        self.do_one_step = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::P) {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::R) && !input.modifiers.ctrl {
                self.restart_requested = true;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.time = ctx.input(|input| input.time) * 1e3;
        self.handle_keys(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                if !self.is_paused {
                    ctx.request_repaint();
                }
                self.draw(ui);
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
