use glam::Vec2;
use smokefield_core::{surface_local, Interaction, Pointer};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn still_pointer_at(x: f32, y: f32) -> Pointer {
    Pointer {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        active: true,
    }
}

#[test]
fn first_sample_after_entering_has_no_velocity() {
    let mut p = Pointer::default();
    assert!(!p.active);
    p.sample(Vec2::new(100.0, 100.0), 0.6);
    assert!(p.active);
    assert_eq!(p.vel, Vec2::ZERO);

    p.sample(Vec2::new(110.0, 95.0), 0.6);
    assert!(approx(p.vel, Vec2::new(6.0, -3.0)));

    p.leave();
    assert!(!p.active);
    assert_eq!(p.vel, Vec2::ZERO);

    // Re-entry far away must not produce a velocity spike.
    p.sample(Vec2::new(700.0, 10.0), 0.6);
    assert_eq!(p.vel, Vec2::ZERO);
}

#[test]
fn velocity_decays_geometrically() {
    let mut p = still_pointer_at(0.0, 0.0);
    p.vel = Vec2::new(10.0, 0.0);
    p.decay(0.5);
    p.decay(0.5);
    assert!(approx(p.vel, Vec2::new(2.5, 0.0)));
    assert!((p.speed() - 2.5).abs() < 1e-6);
}

#[test]
fn within_checks_surface_bounds() {
    let size = Vec2::new(800.0, 600.0);
    assert!(still_pointer_at(0.0, 0.0).within(size));
    assert!(still_pointer_at(800.0, 600.0).within(size));
    assert!(!still_pointer_at(-1.0, 10.0).within(size));
    assert!(!still_pointer_at(10.0, 601.0).within(size));
}

#[test]
fn repulsion_pushes_away_and_falls_off_linearly() {
    let field = Interaction::Repel {
        radius: 160.0,
        strength: 0.22,
        drag: 0.05,
    };
    let pointer = still_pointer_at(0.0, 0.0);
    let f = field.force(Vec2::new(80.0, 0.0), &pointer);
    assert!(approx(f, Vec2::new(0.11, 0.0)));

    let near = field.force(Vec2::new(0.0, 16.0), &pointer).length();
    let far = field.force(Vec2::new(0.0, 144.0), &pointer).length();
    assert!(near > far && far > 0.0);
}

#[test]
fn repulsion_carries_pointer_motion() {
    let field = Interaction::Repel {
        radius: 160.0,
        strength: 0.0,
        drag: 0.05,
    };
    let mut pointer = still_pointer_at(0.0, 0.0);
    pointer.vel = Vec2::new(0.0, 10.0);
    let f = field.force(Vec2::new(80.0, 0.0), &pointer);
    assert!(approx(f, Vec2::new(0.0, 0.25)));
}

#[test]
fn no_force_outside_radius_inside_core_or_when_inactive() {
    let field = Interaction::Repel {
        radius: 160.0,
        strength: 0.22,
        drag: 0.05,
    };
    let pointer = still_pointer_at(0.0, 0.0);
    assert_eq!(field.force(Vec2::new(160.0, 0.0), &pointer), Vec2::ZERO);
    assert_eq!(field.force(Vec2::new(500.0, 0.0), &pointer), Vec2::ZERO);
    assert_eq!(field.force(Vec2::new(0.1, 0.1), &pointer), Vec2::ZERO);
    assert_eq!(field.force(Vec2::ZERO, &pointer), Vec2::ZERO);

    let gone = Pointer {
        active: false,
        ..pointer
    };
    assert_eq!(field.force(Vec2::new(20.0, 0.0), &gone), Vec2::ZERO);
    assert_eq!(
        Interaction::None.force(Vec2::new(20.0, 0.0), &pointer),
        Vec2::ZERO
    );
}

#[test]
fn attraction_pulls_toward_the_pointer() {
    let field = Interaction::Attract {
        radius: 100.0,
        strength: 0.008,
    };
    let pointer = still_pointer_at(0.0, 0.0);
    let f = field.force(Vec2::new(50.0, 0.0), &pointer);
    assert!(approx(f, Vec2::new(-0.004, 0.0)));
    assert_eq!(field.force(Vec2::new(100.0, 0.0), &pointer), Vec2::ZERO);
}

#[test]
fn surface_local_scales_client_coordinates() {
    let at = surface_local(
        Vec2::new(150.0, 100.0),
        Vec2::new(50.0, 50.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert!(approx(at, Vec2::new(200.0, 100.0)));

    let offset_only = surface_local(
        Vec2::new(150.0, 100.0),
        Vec2::new(50.0, 50.0),
        Vec2::ZERO,
        Vec2::new(400.0, 200.0),
    );
    assert!(approx(offset_only, Vec2::new(100.0, 50.0)));
}
