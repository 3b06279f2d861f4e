//! Pointer state and the motion field it induces.
//!
//! The pointer is sampled asynchronously by the host (move/leave events) and
//! consumed once per frame. Particles read it through [`Interaction::force`],
//! which returns a velocity delta added on top of the particle's own motion.

use crate::constants::FIELD_EPSILON;
use glam::Vec2;

/// Surface-local pointer position plus a smoothed velocity estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Pointer {
    /// Record a new surface-local sample. Velocity is the delta since the
    /// previous sample scaled by `smoothing`; the first sample after the
    /// pointer (re-)enters carries no velocity.
    pub fn sample(&mut self, at: Vec2, smoothing: f32) {
        self.vel = if self.active {
            (at - self.pos) * smoothing
        } else {
            Vec2::ZERO
        };
        self.pos = at;
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
        self.vel = Vec2::ZERO;
    }

    #[inline]
    pub fn decay(&mut self, factor: f32) {
        self.vel *= factor;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the pointer lies on a surface of the given size.
    pub fn within(&self, size: Vec2) -> bool {
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && self.pos.x <= size.x && self.pos.y <= size.y
    }
}

/// Map client-space coordinates to surface pixels.
///
/// `rect_min`/`rect_size` describe the surface's bounding rectangle in client
/// space and `surface_size` its backing pixel size, which may differ when the
/// backing store is scaled. A degenerate rectangle falls back to a plain
/// offset.
pub fn surface_local(client: Vec2, rect_min: Vec2, rect_size: Vec2, surface_size: Vec2) -> Vec2 {
    let css = client - rect_min;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * surface_size
    } else {
        css
    }
}

/// How a particle variant reacts to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    None,
    /// Push away from the pointer and along its motion.
    Repel { radius: f32, strength: f32, drag: f32 },
    /// Gentle pull toward the pointer.
    Attract { radius: f32, strength: f32 },
}

impl Interaction {
    /// Velocity delta for a particle at `at`. Zero outside the radius, inside
    /// the epsilon core, or while the pointer is inactive.
    pub fn force(&self, at: Vec2, pointer: &Pointer) -> Vec2 {
        if !pointer.active {
            return Vec2::ZERO;
        }
        match *self {
            Interaction::None => Vec2::ZERO,
            Interaction::Repel {
                radius,
                strength,
                drag,
            } => {
                let d = at - pointer.pos;
                let dist = d.length();
                if dist >= radius || dist <= FIELD_EPSILON {
                    return Vec2::ZERO;
                }
                let f = 1.0 - dist / radius;
                d / dist * f * strength + pointer.vel * f * drag
            }
            Interaction::Attract { radius, strength } => {
                let d = pointer.pos - at;
                let dist = d.length();
                if dist >= radius || dist <= FIELD_EPSILON {
                    return Vec2::ZERO;
                }
                d / dist * (1.0 - dist / radius) * strength
            }
        }
    }
}
