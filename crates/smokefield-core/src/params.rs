//! Per-variant parameter tables and scene presets.
//!
//! All three particle variants share one update routine in
//! [`crate::particle`]; everything that makes smoke look like smoke and a
//! sparkle look like a sparkle is decided by the ranges below. They are the
//! only numbers that govern visible behaviour, so they are kept together.

use crate::color::{Color, BRAND_PALETTE, GOLD};
use crate::constants::*;
use crate::field::Interaction;
use crate::pool::{Overflow, TrailSpawn};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform sampling range `[lo, hi)`. A range with `hi <= lo` always yields `lo`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f32,
    pub hi: f32,
}

impl Span {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub const fn fixed(value: f32) -> Self {
        Self { lo: value, hi: value }
    }

    /// `[-half, half)`
    pub const fn centered(half: f32) -> Self {
        Self { lo: -half, hi: half }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.hi > self.lo {
            rng.gen_range(self.lo..self.hi)
        } else {
            self.lo
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Smoke,
    Sparkle,
    CursorSmoke,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Smoke => "smoke",
            Variant::Sparkle => "sparkle",
            Variant::CursorSmoke => "cursor-smoke",
        }
    }
}

/// Where a particle is born.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Origin {
    /// Anywhere across the surface width. Regular births enter `entry` px
    /// below the bottom edge; spread births are placed vertically within
    /// `[-overscan, height + overscan)`.
    Surface { entry: Span, overscan: f32 },
    /// Around the pointer, `jitter` px on each axis, with `inherit` times the
    /// pointer velocity subtracted so the puff is left behind.
    Pointer { jitter: f32, inherit: f32 },
}

/// Radius growth toward `maxR` over one lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Growth {
    /// `r = r0 + (maxR - r0) * min(t * rate, 1)`
    Ramp { rate: f32 },
    /// `r = min(r0 + per_tick * life, maxR)`
    Step { per_tick: f32 },
    /// Radius stays at `maxR` (which equals the birth radius).
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusParams {
    /// Birth radius.
    pub start: Span,
    /// `maxR = start + extra`.
    pub extra: Span,
    pub growth: Growth,
}

/// Sinusoidal drift and damping applied every tick:
/// `phase += spin; vx += sin(life * life_freq + phase) * amplitude;
/// v *= damping; vy -= lift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turbulence {
    pub spin: Span,
    pub life_freq: f32,
    pub amplitude: f32,
    pub damping: Vec2,
    pub lift: f32,
}

impl Turbulence {
    pub const NONE: Turbulence = Turbulence {
        spin: Span::fixed(0.0),
        life_freq: 0.0,
        amplitude: 0.0,
        damping: Vec2::ONE,
        lift: 0.0,
    };
}

/// Trapezoidal opacity envelope over the life fraction `t`: ramps in until
/// `fade_in`, holds, then ramps out from `fade_out_from` to zero at `t = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub fade_in: f32,
    pub fade_out_from: f32,
}

impl Envelope {
    pub fn alpha(&self, t: f32, base: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let a = if t < self.fade_in {
            base * t / self.fade_in
        } else if t > self.fade_out_from {
            base * (1.0 - t) / (1.0 - self.fade_out_from)
        } else {
            base
        };
        a.clamp(0.0, base)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSource {
    Hsl { h: Span, s: Span, l: Span },
    Rgb([u8; 3]),
    Palette(&'static [[u8; 3]]),
}

impl ColorSource {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        match *self {
            ColorSource::Hsl { h, s, l } => Color::Hsl {
                h: h.sample(rng),
                s: s.sample(rng),
                l: l.sample(rng),
            },
            ColorSource::Rgb(rgb) => Color::Rgb(rgb),
            ColorSource::Palette(palette) => Color::Rgb(*palette.choose(rng).unwrap_or(&GOLD)),
        }
    }
}

/// How a particle is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Radial gradient: full alpha at the center, `mid_alpha * alpha` at
    /// `mid_stop` of the radius, transparent at the rim.
    Radial { mid_stop: f32, mid_alpha: f32 },
    /// Flat disc.
    Solid,
}

/// Off-surface termination boundary above the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ceiling {
    pub radius_factor: f32,
    pub pad: f32,
}

impl Ceiling {
    #[inline]
    pub fn crossed(&self, y: f32, max_r: f32) -> bool {
        y < -(max_r * self.radius_factor + self.pad)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantParams {
    pub variant: Variant,
    pub origin: Origin,
    pub vx: Span,
    pub vy: Span,
    pub radius: RadiusParams,
    /// Lifetime in ticks, floored at birth.
    pub max_life: Span,
    /// Spread births start somewhere in `[0, spread_life * maxLife)`.
    pub spread_life: f32,
    pub base_alpha: Span,
    pub envelope: Envelope,
    pub turbulence: Turbulence,
    pub interaction: Interaction,
    pub color: ColorSource,
    pub fill: Fill,
    /// Vertical flattening; `Some` also makes the puff rotate with its phase.
    pub scale_y: Option<Span>,
    pub ceiling: Option<Ceiling>,
}

pub const HERO_SMOKE: VariantParams = VariantParams {
    variant: Variant::Smoke,
    origin: Origin::Surface {
        entry: Span::fixed(40.0),
        overscan: 0.0,
    },
    vx: Span::centered(0.225),
    vy: Span::new(-0.50, -0.12),
    radius: RadiusParams {
        start: Span::fixed(10.0),
        extra: Span::new(35.0, 110.0),
        growth: Growth::Ramp { rate: 1.8 },
    },
    max_life: Span::new(130.0, 310.0),
    spread_life: 1.0,
    base_alpha: Span::fixed(0.42),
    envelope: Envelope {
        fade_in: SMOKE_FADE_IN,
        fade_out_from: FADE_OUT_FROM,
    },
    turbulence: Turbulence {
        spin: Span::centered(0.011),
        life_freq: 0.0,
        amplitude: 0.01,
        damping: Vec2::new(0.988, 1.0),
        lift: 0.0,
    },
    interaction: Interaction::Repel {
        radius: 160.0,
        strength: 0.22,
        drag: 0.05,
    },
    color: ColorSource::Hsl {
        h: Span::new(28.0, 58.0),
        s: Span::new(35.0, 65.0),
        l: Span::new(50.0, 68.0),
    },
    fill: Fill::Radial {
        mid_stop: 0.45,
        mid_alpha: 0.38,
    },
    scale_y: None,
    ceiling: Some(Ceiling {
        radius_factor: 1.0,
        pad: 10.0,
    }),
};

pub const HERO_SPARKLE: VariantParams = VariantParams {
    variant: Variant::Sparkle,
    origin: Origin::Surface {
        entry: Span::fixed(5.0),
        overscan: 0.0,
    },
    vx: Span::centered(0.11),
    vy: Span::new(-0.55, -0.10),
    radius: RadiusParams {
        start: Span::new(0.3, 1.6),
        extra: Span::fixed(0.0),
        growth: Growth::Fixed,
    },
    max_life: Span::new(80.0, 220.0),
    spread_life: 1.0,
    base_alpha: Span::new(0.15, 0.60),
    envelope: Envelope {
        fade_in: DEFAULT_FADE_IN,
        fade_out_from: FADE_OUT_FROM,
    },
    turbulence: Turbulence::NONE,
    interaction: Interaction::Attract {
        radius: 100.0,
        strength: 0.008,
    },
    color: ColorSource::Rgb(GOLD),
    fill: Fill::Solid,
    scale_y: None,
    ceiling: Some(Ceiling {
        radius_factor: 0.0,
        pad: 5.0,
    }),
};

pub const HERO_CURSOR_SMOKE: VariantParams = VariantParams {
    variant: Variant::CursorSmoke,
    origin: Origin::Pointer {
        jitter: TRAIL_JITTER,
        inherit: 0.04,
    },
    vx: Span::centered(0.3),
    vy: Span::new(-0.6, 0.0),
    radius: RadiusParams {
        start: Span::fixed(8.0),
        extra: Span::new(22.0, 67.0),
        growth: Growth::Ramp { rate: 2.0 },
    },
    max_life: Span::new(60.0, 140.0),
    spread_life: 0.0,
    base_alpha: Span::fixed(0.55),
    envelope: Envelope {
        fade_in: DEFAULT_FADE_IN,
        fade_out_from: FADE_OUT_FROM,
    },
    turbulence: Turbulence {
        damping: Vec2::new(0.97, 0.97),
        ..Turbulence::NONE
    },
    interaction: Interaction::None,
    color: ColorSource::Hsl {
        h: Span::new(35.0, 55.0),
        s: Span::fixed(60.0),
        l: Span::fixed(65.0),
    },
    fill: Fill::Radial {
        mid_stop: 0.5,
        mid_alpha: 0.3,
    },
    scale_y: None,
    ceiling: None,
};

const BACKDROP_TURBULENCE: Turbulence = Turbulence {
    spin: Span::centered(0.004),
    life_freq: 0.025,
    amplitude: 0.018,
    damping: Vec2::ONE,
    lift: 0.0008,
};

pub const BACKDROP_SMOKE: VariantParams = VariantParams {
    variant: Variant::Smoke,
    origin: Origin::Surface {
        entry: Span::new(20.0, 80.0),
        overscan: 100.0,
    },
    vx: Span::centered(0.35),
    vy: Span::new(-1.45, -0.35),
    radius: RadiusParams {
        start: Span::new(40.0, 130.0),
        extra: Span::new(60.0, 160.0),
        growth: Growth::Step { per_tick: 0.45 },
    },
    max_life: Span::new(180.0, 530.0),
    spread_life: 0.85,
    base_alpha: Span::new(0.012, 0.067),
    envelope: Envelope {
        fade_in: DEFAULT_FADE_IN,
        fade_out_from: FADE_OUT_FROM,
    },
    turbulence: BACKDROP_TURBULENCE,
    interaction: Interaction::None,
    color: ColorSource::Palette(&BRAND_PALETTE),
    fill: Fill::Radial {
        mid_stop: 0.45,
        mid_alpha: 0.45,
    },
    scale_y: Some(Span::new(0.6, 0.9)),
    ceiling: Some(Ceiling {
        radius_factor: 1.0,
        pad: 0.0,
    }),
};

pub const BACKDROP_TRAIL: VariantParams = VariantParams {
    variant: Variant::CursorSmoke,
    origin: Origin::Pointer {
        jitter: TRAIL_JITTER,
        inherit: 0.0,
    },
    radius: RadiusParams {
        start: Span::new(8.0, 33.0),
        extra: Span::new(25.0, 80.0),
        growth: Growth::Step { per_tick: 0.45 },
    },
    max_life: Span::new(50.0, 120.0),
    spread_life: 0.0,
    base_alpha: Span::new(0.04, 0.14),
    ..BACKDROP_SMOKE
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPoolConfig {
    pub params: VariantParams,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub params: VariantParams,
    pub cap: usize,
    pub overflow: Overflow,
    pub spawn: TrailSpawn,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerConfig {
    pub smoothing: f32,
    pub decay: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            smoothing: POINTER_SMOOTHING,
            decay: POINTER_DECAY,
        }
    }
}

/// Everything a [`crate::Simulation`] needs: pools in draw order (ambient
/// and trail share the optionally blurred pass, foreground is drawn sharp).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub name: &'static str,
    pub ambient: FixedPoolConfig,
    pub trail: TrailConfig,
    pub foreground: Option<FixedPoolConfig>,
    pub blur_px: Option<f32>,
    pub pointer: PointerConfig,
}

impl SceneConfig {
    /// Pointer-interactive smoke and sparkles behind a hero section.
    pub fn hero() -> Self {
        Self {
            name: "hero",
            ambient: FixedPoolConfig {
                params: HERO_SMOKE,
                count: HERO_SMOKE_COUNT,
            },
            trail: TrailConfig {
                params: HERO_CURSOR_SMOKE,
                cap: HERO_TRAIL_CAP,
                overflow: Overflow::Reject,
                spawn: TrailSpawn::Speed {
                    min_speed: TRAIL_MIN_SPEED,
                    per_speed: TRAIL_SPEED_PER_PUFF,
                    max_per_frame: TRAIL_MAX_PER_FRAME,
                },
            },
            foreground: Some(FixedPoolConfig {
                params: HERO_SPARKLE,
                count: HERO_SPARKLE_COUNT,
            }),
            blur_px: Some(HERO_BLUR_PX),
            pointer: PointerConfig::default(),
        }
    }

    /// Page-wide drifting palette smoke with a frame-gated mouse trail.
    pub fn backdrop() -> Self {
        Self {
            name: "backdrop",
            ambient: FixedPoolConfig {
                params: BACKDROP_SMOKE,
                count: BACKDROP_SMOKE_COUNT,
            },
            trail: TrailConfig {
                params: BACKDROP_TRAIL,
                cap: BACKDROP_TRAIL_CAP,
                overflow: Overflow::TrimOldest(BACKDROP_TRAIL_TRIM),
                spawn: TrailSpawn::Gate {
                    every: TRAIL_GATE_FRAMES,
                    batch: 1,
                },
            },
            foreground: None,
            blur_px: None,
            pointer: PointerConfig::default(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "hero" => Some(Self::hero()),
            "backdrop" => Some(Self::backdrop()),
            _ => None,
        }
    }
}
