use smokefield_core::{Color, ColorStop, Disc, Renderer, SceneConfig, Simulation, Surface};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Begin(Option<f32>),
    End,
    Radial([ColorStop; 3]),
    Solid(f32),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }

    fn begin_pass(&mut self, blur_px: Option<f32>) {
        self.ops.push(Op::Begin(blur_px));
    }

    fn end_pass(&mut self) {
        self.ops.push(Op::End);
    }

    fn fill_radial(&mut self, _disc: &Disc, stops: &[ColorStop; 3]) {
        self.ops.push(Op::Radial(*stops));
    }

    fn fill_solid(&mut self, _disc: &Disc, _color: Color, alpha: f32) {
        self.ops.push(Op::Solid(alpha));
    }
}

fn warmed(config: SceneConfig) -> Simulation {
    let mut sim = Simulation::new(config, 800.0, 600.0, 7);
    for _ in 0..30 {
        sim.step();
    }
    sim
}

#[test]
fn hero_draws_blurred_smoke_then_sharp_sparkles() {
    let sim = warmed(SceneConfig::hero());
    let mut rec = Recorder::default();
    let drawn = Renderer::default().render(&sim, &mut rec);

    assert_eq!(rec.ops[0], Op::Clear);
    assert_eq!(rec.ops[1], Op::Begin(Some(7.0)));
    let ends: Vec<usize> = rec
        .ops
        .iter()
        .enumerate()
        .filter(|(_, op)| **op == Op::End)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(ends.len(), 2);
    assert_eq!(rec.ops[ends[0] + 1], Op::Begin(None));

    let (smoke, sparkles) = rec.ops.split_at(ends[0]);
    assert!(smoke.iter().all(|op| !matches!(op, Op::Solid(_))));
    assert!(sparkles.iter().all(|op| !matches!(op, Op::Radial(_))));
    assert!(sparkles.iter().any(|op| matches!(op, Op::Solid(_))));

    let fills = rec
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Radial(_) | Op::Solid(_)))
        .count();
    assert_eq!(fills, drawn);
    assert!(drawn > 0 && drawn <= sim.particle_count());
}

#[test]
fn backdrop_is_a_single_unblurred_pass() {
    let sim = warmed(SceneConfig::backdrop());
    let mut rec = Recorder::default();
    Renderer::default().render(&sim, &mut rec);
    assert_eq!(rec.ops[0], Op::Clear);
    assert_eq!(rec.ops[1], Op::Begin(None));
    assert_eq!(rec.ops.last(), Some(&Op::End));
    assert_eq!(rec.ops.iter().filter(|op| **op == Op::End).count(), 1);
}

#[test]
fn radial_fill_fades_to_transparent_at_the_rim() {
    let sim = warmed(SceneConfig::hero());
    let mut rec = Recorder::default();
    Renderer::default().render(&sim, &mut rec);
    for op in &rec.ops {
        if let Op::Radial(stops) = op {
            assert_eq!(stops[0].offset, 0.0);
            assert_eq!(stops[2].offset, 1.0);
            assert!(stops[1].offset > 0.0 && stops[1].offset < 1.0);
            assert!(stops[0].alpha > stops[1].alpha);
            assert_eq!(stops[2].alpha, 0.0);
        }
    }
}

#[test]
fn invisible_particles_are_skipped() {
    let sim = warmed(SceneConfig::hero());
    let mut rec = Recorder::default();
    let renderer = Renderer { min_alpha: 2.0 };
    assert_eq!(renderer.render(&sim, &mut rec), 0);
    assert!(rec
        .ops
        .iter()
        .all(|op| matches!(op, Op::Clear | Op::Begin(_) | Op::End)));
}

#[test]
fn css_colors_carry_the_current_alpha() {
    assert_eq!(
        Color::Hsl {
            h: 42.0,
            s: 50.0,
            l: 60.0
        }
        .css(0.42),
        "hsla(42.0,50.0%,60.0%,0.4200)"
    );
    assert_eq!(Color::Rgb([212, 175, 55]).css(1.5), "rgba(212,175,55,1.0000)");
    assert_eq!(Color::Rgb([0, 0, 0]).css(-1.0), "rgba(0,0,0,0.0000)");
}
