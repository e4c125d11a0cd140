use super::{App, Config};
use crate::Variant;
use eframe::egui::{Button, DragValue, RichText, Sense, Slider, Stroke, Ui, Vec2};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Restart")).clicked() {
                self.restart_requested = true;
            }
            ui.label(Self::new_text("with seed: "));
            ui.add_sized(
                Config::SEED_INPUT_FIELD_SIZE,
                DragValue::new(&mut self.seed),
            );
        });

        if ui.add(Self::new_button("Random seed")).clicked() {
            self.seed = rand::random::<u32>() as i64;
            self.restart_requested = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Projection: "));
            ui.radio_value(
                &mut self.variant,
                Variant::Orthographic,
                Self::new_text("Flat"),
            );
            ui.radio_value(
                &mut self.variant,
                Variant::PointCloud,
                Self::new_text("Point cloud"),
            );
        });

        let grid = self.simulation.grid();
        ui.label(Self::new_text(&format!("Generation: {}", grid.generation())));
        ui.label(Self::new_text(&format!(
            "Population: {} / {}",
            grid.population(),
            grid.side_length() * grid.side_length()
        )));
        ui.label(Self::new_text(&format!("Seed: {}", grid.seed())));
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });

        ui.label(Self::new_text("\nSpace: next step\nP: pause\nR: restart"));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.add_space(Config::GAP_ABOVE_STATS);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_appearance_controls(ui);
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(Vec2::splat(size_px), Sense::hover());
        self.set_variant();
        self.resize_field(response.rect);
        self.update_simulation();
        painter.extend(self.renderer.shapes().iter().cloned());
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(1.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space((ui.available_width() - size_px).max(0.));

            self.draw_field(ui, size_px);
        });
    }
}
