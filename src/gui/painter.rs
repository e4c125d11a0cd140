use super::Config;
use crate::{CellSprite, Renderer, Rgba};
use eframe::egui::{pos2, Color32, Context, Pos2, Rect, Shape, Vec2};

/// Turns sprites into egui shapes for the field area.
///
/// Projected sprites (`z == None`) are drawn as squares at their surface
/// position. World-space sprites are seen through a perspective camera that
/// orbits the torus axis; they are drawn back to front.
pub struct PainterRenderer {
    ctx: Context,
    rect: Rect,
    yaw: f64,
    shapes: Vec<Shape>,
    depth_buf: Vec<(f64, Shape)>,
}

impl PainterRenderer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            rect: Rect::NOTHING,
            yaw: 0.,
            shapes: vec![],
            depth_buf: vec![],
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Orients the camera for the frame at `time` (milliseconds).
    pub fn set_time(&mut self, time: f64) {
        self.yaw = time * Config::CAMERA_YAW_RATE;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn color(c: Rgba) -> Color32 {
        let [r, g, b, a] = c.to_bytes();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    fn flat_shape(&self, s: &CellSprite) -> Shape {
        let center = self.rect.min + Vec2::new(s.x as f32, s.y as f32);
        let rect = Rect::from_center_size(center, Vec2::splat(s.size as f32));
        Shape::rect_filled(rect, 0., Self::color(s.color))
    }

    /// Returns depth and screen position, or `None` behind the near plane.
    fn project(&self, [x, y, z]: [f64; 3]) -> Option<(f64, Pos2)> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_tilt, cos_tilt) = Config::CAMERA_TILT.sin_cos();

        let x1 = x * cos_yaw - y * sin_yaw;
        let y1 = x * sin_yaw + y * cos_yaw;

        let y2 = y1 * cos_tilt - z * sin_tilt;
        let z2 = y1 * sin_tilt + z * cos_tilt;

        let depth = Config::CAMERA_DISTANCE - z2;
        if depth < Config::CAMERA_NEAR {
            return None;
        }
        let focal = self.rect.width().min(self.rect.height()) as f64 * Config::FOCAL_LENGTH_RATIO;
        let center = self.rect.center();
        Some((
            depth,
            pos2(
                center.x + (x1 * focal / depth) as f32,
                center.y - (y2 * focal / depth) as f32,
            ),
        ))
    }
}

impl Renderer for PainterRenderer {
    fn render(&mut self, sprites: &[CellSprite]) {
        self.shapes.clear();
        self.depth_buf.clear();
        for s in sprites {
            match s.z {
                None => self.shapes.push(self.flat_shape(s)),
                Some(z) => {
                    if let Some((depth, pos)) = self.project([s.x, s.y, z]) {
                        let radius = (s.size * Config::CAMERA_DISTANCE / depth / 2.) as f32;
                        let shape = Shape::circle_filled(pos, radius, Self::color(s.color));
                        self.depth_buf.push((depth, shape));
                    }
                }
            }
        }
        self.depth_buf.sort_by(|a, b| b.0.total_cmp(&a.0));
        self.shapes
            .extend(self.depth_buf.drain(..).map(|(_, shape)| shape));
        self.ctx.request_repaint();
    }
}
