use crate::field::Pointer;
use crate::params::SceneConfig;
use crate::pool::{FixedPool, TrailPool};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// All mutable state of one scene: pools, pointer, RNG and frame counter.
///
/// The host owns one of these per surface and calls [`Simulation::step`]
/// once per display refresh, followed by a render of the same frame. Pointer
/// events may arrive in between and are observed on the next step.
pub struct Simulation {
    config: SceneConfig,
    size: Vec2,
    pointer: Pointer,
    ambient: FixedPool,
    trail: TrailPool,
    foreground: Option<FixedPool>,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    pub fn new(config: SceneConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = Vec2::new(width.max(0.0), height.max(0.0));
        let ambient = FixedPool::new(config.ambient.params, config.ambient.count, size, &mut rng);
        let foreground = config
            .foreground
            .map(|fg| FixedPool::new(fg.params, fg.count, size, &mut rng));
        let trail = TrailPool::new(&config.trail);
        log::debug!(
            "[scene] {} seeded at {}x{}: ambient={} foreground={}",
            config.name,
            size.x,
            size.y,
            ambient.len(),
            foreground.as_ref().map_or(0, |fg| fg.len())
        );
        Self {
            config,
            size,
            pointer: Pointer::default(),
            ambient,
            trail,
            foreground,
            rng,
            frame: 0,
        }
    }

    /// Adopt a new surface size and redistribute the fixed pools across it
    /// with spread births. Trail puffs are left to expire on their own.
    pub fn reseed(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self.ambient.reseed(self.size, &mut self.rng);
        if let Some(fg) = &mut self.foreground {
            fg.reseed(self.size, &mut self.rng);
        }
        log::debug!(
            "[scene] {} reseeded at {}x{}",
            self.config.name,
            self.size.x,
            self.size.y
        );
    }

    /// Surface-local pointer sample.
    pub fn pointer_moved(&mut self, at: Vec2) {
        self.pointer.sample(at, self.config.pointer.smoothing);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Advance every pool by one tick. Nothing is drawn here; all updates of
    /// a frame finish before the renderer sees the state.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        self.ambient.step(self.size, &pointer, &mut self.rng);
        self.trail.maybe_spawn(self.size, &pointer, &mut self.rng);
        self.trail.step(&pointer);

        // The pointer kick is consumed by the smoke layers, then fades.
        self.pointer.decay(self.config.pointer.decay);

        let pointer = self.pointer;
        if let Some(fg) = &mut self.foreground {
            fg.step(self.size, &pointer, &mut self.rng);
        }
        self.frame += 1;
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn ambient(&self) -> &FixedPool {
        &self.ambient
    }

    pub fn trail(&self) -> &TrailPool {
        &self.trail
    }

    pub fn foreground(&self) -> Option<&FixedPool> {
        self.foreground.as_ref()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle_count(&self) -> usize {
        self.ambient.len() + self.trail.len() + self.foreground.as_ref().map_or(0, |fg| fg.len())
    }
}
