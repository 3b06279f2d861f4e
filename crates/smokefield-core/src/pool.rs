//! Particle pools: fixed-size steady-state pools that rebirth dead particles
//! in place, and a bounded growable pool fed by the cursor trail spawner.

use crate::field::Pointer;
use crate::params::{TrailConfig, VariantParams};
use crate::particle::{BirthContext, Particle};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Constant-population pool. A particle that dies is replaced in the same
/// slot by a fresh off-surface birth, so `len()` never changes between
/// reseeds.
#[derive(Clone, Debug)]
pub struct FixedPool {
    params: VariantParams,
    count: usize,
    particles: Vec<Particle>,
}

impl FixedPool {
    /// Create the pool with spread births so it starts in steady state.
    pub fn new<R: Rng + ?Sized>(params: VariantParams, count: usize, size: Vec2, rng: &mut R) -> Self {
        let mut pool = Self {
            params,
            count,
            particles: Vec::with_capacity(count),
        };
        pool.reseed(size, rng);
        pool
    }

    /// Replace every particle with a spread birth on a surface of `size`.
    pub fn reseed<R: Rng + ?Sized>(&mut self, size: Vec2, rng: &mut R) {
        let ctx = BirthContext {
            size,
            pointer: Pointer::default(),
            spread: true,
        };
        self.particles.clear();
        for _ in 0..self.count {
            self.particles.push(Particle::born(&self.params, &ctx, rng));
        }
    }

    /// Update every particle; returns how many were reborn this tick.
    pub fn step<R: Rng + ?Sized>(&mut self, size: Vec2, pointer: &Pointer, rng: &mut R) -> usize {
        let ctx = BirthContext {
            size,
            pointer: *pointer,
            spread: false,
        };
        let mut reborn = 0;
        for p in &mut self.particles {
            if !p.update(&self.params, pointer) {
                *p = Particle::born(&self.params, &ctx, rng);
                reborn += 1;
            }
        }
        reborn
    }

    pub fn params(&self) -> &VariantParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// What the trail pool does with a spawn that would exceed its cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Only admit as many new particles as there is room for.
    Reject,
    /// Admit everything, then drop at least this many of the oldest.
    TrimOldest(usize),
}

/// When the trail spawner emits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrailSpawn {
    /// `min(floor(speed / per_speed), max_per_frame)` puffs once the pointer
    /// moves at least `min_speed` px per tick.
    Speed {
        min_speed: f32,
        per_speed: f32,
        max_per_frame: usize,
    },
    /// `batch` puffs on every `every`-th frame the pointer is present.
    Gate { every: u64, batch: usize },
}

impl TrailSpawn {
    /// Puffs wanted this frame. `gate_tick` counts frames with the pointer on
    /// the surface, starting at 1.
    pub fn count(&self, pointer: &Pointer, gate_tick: u64) -> usize {
        match *self {
            TrailSpawn::Speed {
                min_speed,
                per_speed,
                max_per_frame,
            } => {
                let speed = pointer.speed();
                if speed < min_speed || per_speed <= 0.0 {
                    return 0;
                }
                ((speed / per_speed).floor() as usize).min(max_per_frame)
            }
            TrailSpawn::Gate { every, batch } => {
                if every > 0 && gate_tick % every == 0 {
                    batch
                } else {
                    0
                }
            }
        }
    }
}

/// Bounded growable pool for cursor trail puffs. Grows on spawn, shrinks by
/// evicting dead particles, and never holds more than `cap` after a spawn.
#[derive(Clone, Debug)]
pub struct TrailPool {
    params: VariantParams,
    cap: usize,
    overflow: Overflow,
    spawn: TrailSpawn,
    gate_tick: u64,
    particles: Vec<Particle>,
}

impl TrailPool {
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            params: config.params,
            cap: config.cap,
            overflow: config.overflow,
            spawn: config.spawn,
            gate_tick: 0,
            particles: Vec::with_capacity(config.cap + 1),
        }
    }

    /// Emit trail puffs for this frame. Nothing is spawned while the pointer
    /// is inactive or off the surface. Returns the number admitted.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, size: Vec2, pointer: &Pointer, rng: &mut R) -> usize {
        if !pointer.active || !pointer.within(size) {
            return 0;
        }
        self.gate_tick += 1;
        let wanted = self.spawn.count(pointer, self.gate_tick);
        if wanted == 0 {
            return 0;
        }
        let ctx = BirthContext {
            size,
            pointer: *pointer,
            spread: false,
        };
        let burst: SmallVec<[Particle; 4]> = (0..wanted)
            .map(|_| Particle::born(&self.params, &ctx, rng))
            .collect();
        self.admit(burst)
    }

    fn admit(&mut self, burst: SmallVec<[Particle; 4]>) -> usize {
        match self.overflow {
            Overflow::Reject => {
                let room = self.cap.saturating_sub(self.particles.len());
                let admitted = burst.len().min(room);
                self.particles.extend(burst.into_iter().take(admitted));
                admitted
            }
            Overflow::TrimOldest(batch) => {
                let admitted = burst.len();
                self.particles.extend(burst);
                let len = self.particles.len();
                if len > self.cap {
                    let drop = batch.max(len - self.cap).min(len);
                    self.particles.drain(..drop);
                    log::trace!("[trail] trimmed {} oldest, {} left", drop, self.particles.len());
                }
                admitted
            }
        }
    }

    /// Update every puff and evict the dead ones; returns how many left.
    pub fn step(&mut self, pointer: &Pointer) -> usize {
        let before = self.particles.len();
        let params = &self.params;
        self.particles.retain_mut(|p| p.update(params, pointer));
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn params(&self) -> &VariantParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
