use smokefield_core::{Color, ColorStop, Disc, Surface};
use std::f64::consts::TAU;
use web_sys as web;

// ===================== Canvas 2D surface =====================

/// [`Surface`] backed by a `CanvasRenderingContext2d`. Drawing failures are
/// ignored per call.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Moves the origin to the disc center when it is rotated or squashed and
    /// returns the center to draw at.
    fn place(&self, disc: &Disc) -> (f64, f64) {
        if disc.is_circle() {
            return (disc.center.x as f64, disc.center.y as f64);
        }
        self.ctx.save();
        _ = self
            .ctx
            .translate(disc.center.x as f64, disc.center.y as f64);
        _ = self.ctx.rotate(disc.rotation as f64);
        _ = self.ctx.scale(1.0, disc.scale_y as f64);
        (0.0, 0.0)
    }

    fn unplace(&self, disc: &Disc) {
        if !disc.is_circle() {
            self.ctx.restore();
        }
    }

    fn fill_arc(&self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn begin_pass(&mut self, blur_px: Option<f32>) {
        self.ctx.save();
        if let Some(px) = blur_px {
            self.ctx.set_filter(&format!("blur({px}px)"));
        }
    }

    fn end_pass(&mut self) {
        self.ctx.restore();
    }

    fn fill_radial(&mut self, disc: &Disc, stops: &[ColorStop; 3]) {
        let (x, y) = self.place(disc);
        let r = disc.radius as f64;
        match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(gradient) => {
                for stop in stops {
                    _ = gradient.add_color_stop(stop.offset, &stop.color.css(stop.alpha));
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.fill_arc(x, y, r);
            }
            Err(e) => log::trace!("[render] gradient error: {:?}", e),
        }
        self.unplace(disc);
    }

    fn fill_solid(&mut self, disc: &Disc, color: Color, alpha: f32) {
        let (x, y) = self.place(disc);
        self.ctx.set_fill_style_str(&color.css(alpha));
        self.fill_arc(x, y, disc.radius as f64);
        self.unplace(disc);
    }
}
