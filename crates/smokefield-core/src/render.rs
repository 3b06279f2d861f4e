//! Surface-agnostic renderer.
//!
//! The renderer only decides *what* to paint and in which order; a host
//! implements [`Surface`] on top of its immediate-mode 2D context.

use crate::color::Color;
use crate::constants::MIN_VISIBLE_ALPHA;
use crate::params::{Fill, VariantParams};
use crate::particle::Particle;
use crate::sim::Simulation;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Fraction of the radius, `0.0` at the center.
    pub offset: f32,
    pub color: Color,
    pub alpha: f32,
}

/// A circle, optionally rotated and squashed vertically into an ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub scale_y: f32,
}

impl Disc {
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.rotation == 0.0 && self.scale_y == 1.0
    }
}

/// The drawing capabilities the renderer needs from its host.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    /// Start a drawing pass, saving state; `blur_px` filters only this pass.
    fn begin_pass(&mut self, blur_px: Option<f32>);
    /// Restore the state saved by the matching `begin_pass`.
    fn end_pass(&mut self);
    fn fill_radial(&mut self, disc: &Disc, stops: &[ColorStop; 3]);
    fn fill_solid(&mut self, disc: &Disc, color: Color, alpha: f32);
}

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    /// Particles at or below this opacity are skipped.
    pub min_alpha: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            min_alpha: MIN_VISIBLE_ALPHA,
        }
    }
}

impl Renderer {
    /// Clear and redraw the whole surface: ambient smoke and the cursor trail
    /// in one (optionally blurred) pass, then the foreground sharp on top.
    /// Returns the number of particles painted.
    pub fn render<S: Surface + ?Sized>(&self, sim: &Simulation, surface: &mut S) -> usize {
        let size = sim.size();
        surface.clear(size.x, size.y);

        surface.begin_pass(sim.config().blur_px);
        let mut drawn = self.draw_pool(sim.ambient().params(), sim.ambient().particles(), surface);
        drawn += self.draw_pool(sim.trail().params(), sim.trail().particles(), surface);
        surface.end_pass();

        if let Some(fg) = sim.foreground() {
            surface.begin_pass(None);
            drawn += self.draw_pool(fg.params(), fg.particles(), surface);
            surface.end_pass();
        }
        drawn
    }

    pub fn draw_pool<S: Surface + ?Sized>(
        &self,
        params: &VariantParams,
        particles: &[Particle],
        surface: &mut S,
    ) -> usize {
        let mut drawn = 0;
        for p in particles {
            if p.alpha <= self.min_alpha || p.r <= 0.0 {
                continue;
            }
            let disc = Disc {
                center: p.pos,
                radius: p.r,
                rotation: p.rotation(params),
                scale_y: p.scale_y,
            };
            match params.fill {
                Fill::Radial {
                    mid_stop,
                    mid_alpha,
                } => {
                    let stops = [
                        ColorStop {
                            offset: 0.0,
                            color: p.color,
                            alpha: p.alpha,
                        },
                        ColorStop {
                            offset: mid_stop,
                            color: p.color,
                            alpha: p.alpha * mid_alpha,
                        },
                        ColorStop {
                            offset: 1.0,
                            color: p.color,
                            alpha: 0.0,
                        },
                    ];
                    surface.fill_radial(&disc, &stops);
                }
                Fill::Solid => surface.fill_solid(&disc, p.color, p.alpha),
            }
            drawn += 1;
        }
        drawn
    }
}
