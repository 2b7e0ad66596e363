use glam::Vec2;
use idealgas::{Particle, ParticleEngine, Result};

#[test]
fn clear_empties_the_box() -> Result<()> {
    let mut engine = ParticleEngine::with_seed(750.0, 3);
    for _ in 0..3 {
        engine.add_particle(Particle::try_new(
            Vec2::new(10.0, 5.0),
            Vec2::new(-2.0, -1.0),
            5.0,
            1.0,
            1,
        )?);
    }
    engine.generate_random_particle(5.0, 1.0, 2);
    assert_eq!(engine.particles().len(), 4);
    engine.clear();
    assert!(engine.particles().is_empty());
    Ok(())
}

#[test]
fn random_particles_spawn_inside_with_bounded_velocity() {
    let mut engine = ParticleEngine::with_seed(750.0, 2024);
    for _ in 0..200 {
        engine.generate_random_particle(5.0, 1.0, 1);
    }
    for p in engine.particles() {
        let pos = p.position();
        assert!(pos.x >= 1.0 && pos.x < 749.0, "{pos:?}");
        assert!(pos.y >= 1.0 && pos.y < 749.0, "{pos:?}");
        let vel = p.velocity();
        assert!(vel.x.abs() < 5.0 && vel.y.abs() < 5.0, "{vel:?}");
        assert_eq!(p.radius(), 5.0);
        assert_eq!(p.kind(), 1);
    }
}

#[test]
fn random_velocities_take_both_signs() {
    let mut engine = ParticleEngine::with_seed(750.0, 8);
    for _ in 0..100 {
        engine.generate_random_particle(5.0, 1.0, 1);
    }
    let xs: Vec<f32> = engine.particles().iter().map(|p| p.velocity().x).collect();
    assert!(xs.iter().any(|&v| v > 0.0));
    assert!(xs.iter().any(|&v| v < 0.0));
}

#[test]
fn seeded_runs_replay_exactly() {
    let run = |seed| {
        let mut engine = ParticleEngine::with_seed(300.0, seed);
        for _ in 0..30 {
            engine.generate_random_particle(5.0, 1.0, 1);
        }
        for _ in 0..50 {
            engine.update();
        }
        engine.particles().to_vec()
    };
    assert_eq!(run(17), run(17));
    assert_ne!(run(17), run(18));
}

#[test]
fn speed_commands_compound() {
    let mut engine = ParticleEngine::with_seed(750.0, 1);
    engine.add_particle(Particle::new(
        Vec2::new(100.0, 100.0),
        Vec2::new(3.0, -4.0),
        5.0,
        1.0,
        1,
    ));
    let before = engine.particles()[0].velocity();
    engine.accelerate();
    engine.decelerate();
    let after = engine.particles()[0].velocity();
    assert_ne!(after, before);
    assert!((after - before * 0.99).abs().max_element() < 1e-5);
}
