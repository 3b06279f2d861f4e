use crate::color::Color;
use crate::field::Pointer;
use crate::params::{Growth, Origin, Span, VariantParams};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// What a birth may depend on besides the variant's parameter table.
#[derive(Clone, Copy, Debug)]
pub struct BirthContext {
    /// Surface size in pixels.
    pub size: Vec2,
    pub pointer: Pointer,
    /// Randomize life and position across the whole lifetime instead of
    /// starting fresh off-surface.
    pub spread: bool,
}

/// A single smoke puff, sparkle or trail puff. Which one it is lives in the
/// [`VariantParams`] of the pool that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub r0: f32,
    pub r: f32,
    pub max_r: f32,
    pub life: u32,
    pub max_life: u32,
    /// Turbulence phase; doubles as the orientation of elliptical puffs.
    pub phase: f32,
    pub spin: f32,
    pub scale_y: f32,
    pub base_alpha: f32,
    pub alpha: f32,
    pub color: Color,
}

impl Particle {
    pub fn born<R: Rng + ?Sized>(params: &VariantParams, ctx: &BirthContext, rng: &mut R) -> Self {
        let (pos, inherited, spread) = match params.origin {
            Origin::Surface { entry, overscan } => {
                let x = Span::new(0.0, ctx.size.x).sample(rng);
                let y = if ctx.spread {
                    Span::new(-overscan, ctx.size.y + overscan).sample(rng)
                } else {
                    ctx.size.y + entry.sample(rng)
                };
                (Vec2::new(x, y), Vec2::ZERO, ctx.spread)
            }
            Origin::Pointer { jitter, inherit } => {
                let j = Span::centered(jitter);
                let offset = Vec2::new(j.sample(rng), j.sample(rng));
                (ctx.pointer.pos + offset, ctx.pointer.vel * inherit, false)
            }
        };
        let vel = Vec2::new(params.vx.sample(rng), params.vy.sample(rng)) - inherited;

        let r0 = params.radius.start.sample(rng);
        let max_r = r0 + params.radius.extra.sample(rng).max(0.0);
        let max_life = (params.max_life.sample(rng).floor() as u32).max(1);
        let life = if spread {
            let upto = max_life as f32 * params.spread_life.clamp(0.0, 1.0);
            (Span::new(0.0, upto).sample(rng) as u32).min(max_life - 1)
        } else {
            0
        };

        let mut p = Particle {
            pos,
            vel,
            r0,
            r: r0,
            max_r,
            life,
            max_life,
            phase: rng.gen_range(0.0..TAU),
            spin: params.turbulence.spin.sample(rng),
            scale_y: params.scale_y.map_or(1.0, |s| s.sample(rng)),
            base_alpha: params.base_alpha.sample(rng),
            alpha: 0.0,
            color: params.color.sample(rng),
        };
        p.r = p.radius_at(params.radius.growth, life);
        p.alpha = params.envelope.alpha(p.t(), p.base_alpha);
        p
    }

    /// Elapsed life fraction in `[0, 1]`.
    #[inline]
    pub fn t(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }

    pub fn radius_at(&self, growth: Growth, life: u32) -> f32 {
        let t = (life as f32 / self.max_life as f32).clamp(0.0, 1.0);
        match growth {
            Growth::Ramp { rate } => self.r0 + (self.max_r - self.r0) * (t * rate).min(1.0),
            Growth::Step { per_tick } => (self.r0 + per_tick * life as f32).min(self.max_r),
            Growth::Fixed => self.max_r,
        }
    }

    /// Advance one tick. Returns `false` once the particle is dead: its life
    /// ran out or it drifted past the variant's ceiling.
    pub fn update(&mut self, params: &VariantParams, pointer: &Pointer) -> bool {
        self.life = (self.life + 1).min(self.max_life);

        let tb = &params.turbulence;
        self.phase += self.spin;
        self.vel.x += (self.life as f32 * tb.life_freq + self.phase).sin() * tb.amplitude;
        self.vel *= tb.damping;
        self.vel.y -= tb.lift;

        self.vel += params.interaction.force(self.pos, pointer);
        self.pos += self.vel;

        self.r = self.radius_at(params.radius.growth, self.life).max(self.r);
        self.alpha = params.envelope.alpha(self.t(), self.base_alpha);

        let escaped = params
            .ceiling
            .is_some_and(|c| c.crossed(self.pos.y, self.max_r));
        self.life < self.max_life && !escaped
    }

    /// Orientation used when drawing; only elliptical variants rotate.
    #[inline]
    pub fn rotation(&self, params: &VariantParams) -> f32 {
        if params.scale_y.is_some() {
            self.phase
        } else {
            0.0
        }
    }
}
