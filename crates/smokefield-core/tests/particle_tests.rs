use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smokefield_core::field::Pointer;
use smokefield_core::params::{
    Envelope, BACKDROP_SMOKE, HERO_CURSOR_SMOKE, HERO_SMOKE, HERO_SPARKLE,
};
use smokefield_core::particle::{BirthContext, Particle};

const SIZE: Vec2 = Vec2::new(800.0, 600.0);

fn ctx(spread: bool) -> BirthContext {
    BirthContext {
        size: SIZE,
        pointer: Pointer::default(),
        spread,
    }
}

#[test]
fn fresh_surface_births_enter_below_the_bottom_edge() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let p = Particle::born(&HERO_SMOKE, &ctx(false), &mut rng);
        assert_eq!(p.life, 0);
        assert!((p.pos.y - (SIZE.y + 40.0)).abs() < 1e-3);
        assert!(p.pos.x >= 0.0 && p.pos.x < SIZE.x);
        assert_eq!(p.alpha, 0.0, "envelope starts transparent");
    }
}

#[test]
fn spread_births_cover_the_lifetime_without_exceeding_it() {
    let mut rng = StdRng::seed_from_u64(2);
    let lives: Vec<(u32, u32)> = (0..300)
        .map(|_| {
            let p = Particle::born(&BACKDROP_SMOKE, &ctx(true), &mut rng);
            assert!(p.pos.y >= -100.0 && p.pos.y < SIZE.y + 100.0);
            (p.life, p.max_life)
        })
        .collect();
    assert!(lives.iter().all(|&(life, max)| life < max));
    assert!(lives.iter().any(|&(life, _)| life > 0));
}

#[test]
fn pointer_births_stay_within_jitter_of_the_pointer() {
    let mut rng = StdRng::seed_from_u64(3);
    let c = BirthContext {
        size: SIZE,
        pointer: Pointer {
            pos: Vec2::new(300.0, 200.0),
            vel: Vec2::ZERO,
            active: true,
        },
        // Ignored for pointer origins.
        spread: true,
    };
    for _ in 0..200 {
        let p = Particle::born(&HERO_CURSOR_SMOKE, &c, &mut rng);
        assert_eq!(p.life, 0);
        assert!((p.pos.x - 300.0).abs() <= 15.0);
        assert!((p.pos.y - 200.0).abs() <= 15.0);
    }
}

#[test]
fn radius_never_shrinks_and_stays_bounded() {
    let mut rng = StdRng::seed_from_u64(4);
    let pointer = Pointer::default();
    for params in [&HERO_SMOKE, &HERO_CURSOR_SMOKE, &BACKDROP_SMOKE] {
        for _ in 0..20 {
            let mut p = Particle::born(params, &ctx(false), &mut rng);
            let mut prev = p.r;
            assert!(p.r >= p.r0 - 1e-4);
            while p.update(params, &pointer) {
                assert!(p.r + 1e-4 >= prev, "{:?} radius shrank", params.variant);
                assert!(p.r <= p.max_r + 1e-4);
                assert!(p.life <= p.max_life);
                prev = p.r;
            }
            assert!(p.life <= p.max_life);
        }
    }
}

#[test]
fn sparkles_keep_their_birth_radius() {
    let mut rng = StdRng::seed_from_u64(5);
    let pointer = Pointer::default();
    let mut p = Particle::born(&HERO_SPARKLE, &ctx(false), &mut rng);
    let r = p.r;
    assert_eq!(p.max_r, p.r0);
    for _ in 0..10 {
        p.update(&HERO_SPARKLE, &pointer);
        assert_eq!(p.r, r);
    }
}

#[test]
fn particle_dies_when_life_runs_out() {
    let mut rng = StdRng::seed_from_u64(6);
    let pointer = Pointer::default();
    let mut p = Particle::born(&HERO_CURSOR_SMOKE, &ctx(false), &mut rng);
    let mut ticks = 0;
    while p.update(&HERO_CURSOR_SMOKE, &pointer) {
        ticks += 1;
    }
    assert_eq!(ticks + 1, p.max_life);
    assert_eq!(p.life, p.max_life);
    assert_eq!(p.alpha, 0.0);
}

#[test]
fn particle_dies_past_the_ceiling() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut p = Particle::born(&HERO_SMOKE, &ctx(false), &mut rng);
    p.pos.y = -1000.0;
    assert!(!p.update(&HERO_SMOKE, &Pointer::default()));
}

#[test]
fn envelope_is_a_trapezoid() {
    let env = Envelope {
        fade_in: 0.15,
        fade_out_from: 0.6,
    };
    let base = 0.5;
    assert_eq!(env.alpha(0.0, base), 0.0);
    assert!((env.alpha(0.075, base) - 0.25).abs() < 1e-6);
    for t in [0.15, 0.3, 0.45, 0.6] {
        assert!((env.alpha(t, base) - base).abs() < 1e-6, "plateau at t={t}");
    }
    assert!((env.alpha(0.8, base) - 0.25).abs() < 1e-6);
    assert_eq!(env.alpha(1.0, base), 0.0);

    let mut t = 0.0;
    while t <= 1.0 {
        let a = env.alpha(t, base);
        assert!((0.0..=base).contains(&a));
        t += 0.01;
    }
}

#[test]
fn only_elliptical_variants_rotate() {
    let mut rng = StdRng::seed_from_u64(8);
    let smoke = Particle::born(&HERO_SMOKE, &ctx(false), &mut rng);
    assert_eq!(smoke.rotation(&HERO_SMOKE), 0.0);
    assert_eq!(smoke.scale_y, 1.0);

    let puff = Particle::born(&BACKDROP_SMOKE, &ctx(false), &mut rng);
    assert_eq!(puff.rotation(&BACKDROP_SMOKE), puff.phase);
    assert!(puff.scale_y >= 0.6 && puff.scale_y < 0.9);
}
