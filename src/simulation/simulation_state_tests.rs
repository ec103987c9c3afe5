use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boundaries::{BoundaryPolicy, DomainModulation};
use crate::forces::ForceLawConfig;
use crate::particles::{Color, Particle, ParticleSet};
use crate::simulation::{RenderPoint, SimulationConfig, SimulationState};
use crate::utils::SimulationError;

fn pair(left: (f64, f64), right: (f64, f64), mass: f64) -> ParticleSet {
    ParticleSet::from_particles(vec![
        Particle::at_rest(left, mass).unwrap(),
        Particle::at_rest(right, mass).unwrap(),
    ])
}

fn separation(sim: &SimulationState) -> f64 {
    let p = sim.particles();
    ((p.positions_x[1] - p.positions_x[0]).powi(2) + (p.positions_y[1] - p.positions_y[0]).powi(2)).sqrt()
}

#[test]
fn test_new_rejects_invalid_particles() {
    let mut particles = pair((1.0, 1.0), (2.0, 2.0), 1.0);
    particles.masses[0] = -1.0;
    let result = SimulationState::new(SimulationConfig::default(), particles);
    assert_eq!(result.err(), Some(SimulationError::InvalidMass));
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = SimulationConfig::default().with_frame_rate(0.0);
    let result = SimulationState::new(config, pair((1.0, 1.0), (2.0, 2.0), 1.0));
    assert_eq!(result.err(), Some(SimulationError::InvalidTimeStep));
}

#[test]
fn test_empty_population_is_a_no_op() {
    let mut sim = SimulationState::new(SimulationConfig::default(), ParticleSet::new()).unwrap();
    assert!(sim.advance().is_empty());
    assert_eq!(sim.step_count(), 1);
    assert!(sim.render_frame().is_empty());
    assert_eq!(sim.kinetic_energy(), 0.0);
}

#[test]
fn test_lone_particle_feels_no_force() {
    let particles = ParticleSet::from_particles(vec![Particle::at_rest((450.0, 450.0), 1e9).unwrap()]);
    let mut sim = SimulationState::new(SimulationConfig::default(), particles).unwrap();
    sim.simulate(100);
    let p = sim.particles().get(0).unwrap();
    assert_eq!(p.position, (450.0, 450.0));
    assert_eq!(p.velocity, (0.0, 0.0));
}

#[test]
fn test_lone_moving_particle_drifts_with_constant_velocity() {
    let particles = ParticleSet::from_particles(vec![
        Particle::new((450.0, 450.0), (14.4, -28.8), 1e9, Color::WHITE).unwrap(),
    ]);
    let mut sim = SimulationState::new(SimulationConfig::default(), particles).unwrap();
    sim.advance();
    let p = sim.particles().get(0).unwrap();
    assert_eq!(p.velocity, (14.4, -28.8));
    assert_relative_eq!(p.position.0, 450.1, epsilon = 1e-9);
    assert_relative_eq!(p.position.1, 449.8, epsilon = 1e-9);
}

#[test]
fn test_coincident_particles_stay_finite() {
    let config = SimulationConfig::default().with_force_law(ForceLawConfig::Gravity { g: 1.0 });
    let mut sim = SimulationState::new(config, pair((450.0, 450.0), (450.0, 450.0), 1e9)).unwrap();
    sim.simulate(10);
    assert!(sim.particles().is_finite());
    assert_eq!(sim.particles().get(0).unwrap().velocity, (0.0, 0.0));
}

#[test]
fn test_symmetric_pair_falls_together() {
    let config = SimulationConfig::default().with_force_law(ForceLawConfig::Gravity { g: 1.0 });
    let mut sim = SimulationState::new(config, pair((400.0, 450.0), (500.0, 450.0), 1e3)).unwrap();

    let mut previous = separation(&sim);
    for _ in 0..50 {
        sim.advance();
        let current = separation(&sim);
        assert!(current < previous, "separation grew from {} to {}", previous, current);
        previous = current;

        let p = sim.particles();
        assert!(p.is_finite());
        assert_relative_eq!(p.positions_x[0] - 450.0, 450.0 - p.positions_x[1], epsilon = 1e-9);
        assert_eq!(p.positions_y, vec![450.0, 450.0]);
    }
}

#[test]
fn test_two_heavy_bodies_over_a_thousand_steps() {
    let config = SimulationConfig::gravity_preset().with_particle_count(2);
    let mut sim = SimulationState::new(config, pair((100.0, 450.0), (800.0, 450.0), 1e9)).unwrap();
    let initial = separation(&sim);

    let mut previous = initial;
    for _ in 0..1000 {
        sim.advance();
        let current = separation(&sim);
        assert!(current <= previous);
        previous = current;

        let p = sim.particles();
        assert!(p.is_finite());
        for i in 0..p.len() {
            assert!(sim.bounds().contains(p.positions_x[i], p.positions_y[i]));
        }
    }
    assert!(previous < initial);
    assert_eq!(sim.step_count(), 1000);
}

#[test]
fn test_close_encounter_stays_finite_and_contained() {
    let config = SimulationConfig::default()
        .with_force_law(ForceLawConfig::Gravity { g: 1.0 })
        .with_boundary(BoundaryPolicy::Clamp { tolerance: 10.0 });
    let mut sim = SimulationState::new(config, pair((400.0, 450.0), (500.0, 450.0), 1e6)).unwrap();

    let mut closest = separation(&sim);
    for _ in 0..1000 {
        sim.advance();
        closest = closest.min(separation(&sim));

        let p = sim.particles();
        assert!(p.is_finite());
        for i in 0..p.len() {
            assert!((-10.0..=910.0).contains(&p.positions_x[i]));
            assert!((-10.0..=910.0).contains(&p.positions_y[i]));
        }
    }
    assert!(closest < 100.0);
}

#[test]
fn test_pair_slingshots_apart_after_closest_approach() {
    let config = SimulationConfig::default().with_force_law(ForceLawConfig::Gravity { g: 1.0 });
    let mut sim = SimulationState::new(config, pair((400.0, 450.0), (500.0, 450.0), 1e6)).unwrap();

    let mut separations = vec![separation(&sim)];
    for _ in 0..1000 {
        sim.advance();
        assert!(sim.particles().is_finite());
        separations.push(separation(&sim));
    }

    let (closest_step, closest) = separations
        .iter()
        .copied()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert!(closest < 100.0);
    assert!(closest_step > 0 && closest_step + 3 < separations.len());

    let after = &separations[closest_step..=closest_step + 3];
    for window in after.windows(2) {
        assert!(window[1] > window[0], "separation shrank after closest approach: {:?}", after);
    }
}

#[test]
fn test_lennard_jones_pair_repels_at_short_range() {
    let config = SimulationConfig::lennard_jones_preset()
        .with_force_law(ForceLawConfig::LennardJones { sigma: 10.0, epsilon: 1.0 })
        .with_boundary(BoundaryPolicy::GatedReflect);
    let mut sim = SimulationState::new(config, pair((795.0, 450.0), (805.0, 450.0), 1.0)).unwrap();
    let before = separation(&sim);
    sim.advance();
    assert!(separation(&sim) > before);
}

#[test]
fn test_lennard_jones_pair_attracts_at_mid_range() {
    let config = SimulationConfig::lennard_jones_preset()
        .with_force_law(ForceLawConfig::LennardJones { sigma: 10.0, epsilon: 1.0 })
        .with_boundary(BoundaryPolicy::GatedReflect);
    let mut sim = SimulationState::new(config, pair((785.0, 450.0), (815.0, 450.0), 1.0)).unwrap();
    let before = separation(&sim);
    sim.advance();
    assert!(separation(&sim) < before);
}

#[test]
fn test_breathing_domain_follows_step_count() {
    let modulation = DomainModulation { amplitude: 0.1, period_steps: 40.0 };
    let config = SimulationConfig::breathing_gravity_preset().with_modulation(modulation);
    let particles = ParticleSet::from_particles(vec![Particle::at_rest((450.0, 450.0), 1e9).unwrap()]);
    let mut sim = SimulationState::new(config, particles).unwrap();

    assert_eq!(sim.bounds(), config.domain);
    sim.simulate(10);
    assert_eq!(sim.bounds(), modulation.bounds_at(config.domain, 10));
    assert_relative_eq!(sim.bounds().width, 990.0, epsilon = 1e-9);
}

#[test]
fn test_clamp_snaps_to_current_bound() {
    let modulation = DomainModulation { amplitude: 0.1, period_steps: 40.0 };
    let config = SimulationConfig::breathing_gravity_preset().with_modulation(modulation);
    let particles = ParticleSet::from_particles(vec![
        Particle::at_rest((2000.0, 450.0), 1e9).unwrap(),
        Particle::at_rest((450.0, -500.0), 1e9).unwrap(),
    ]);
    let mut sim = SimulationState::new(config, particles).unwrap();
    sim.advance();

    let p = sim.particles();
    assert_eq!(p.positions_x[0], sim.bounds().width);
    assert_eq!(p.positions_y[1], 0.0);
}

#[test]
fn test_render_frame_truncates_toward_zero() {
    let particles = ParticleSet::from_particles(vec![
        Particle::new((-0.7, 10.9), (0.0, 0.0), 1.0, Color::new(150, 200, 250)).unwrap(),
    ]);
    let sim = SimulationState::new(SimulationConfig::default(), particles).unwrap();
    assert_eq!(
        sim.render_frame(),
        vec![RenderPoint { x: 0, y: 10, color: Color::new(150, 200, 250) }]
    );
}

#[test]
fn test_kinetic_energy() {
    let particles = ParticleSet::from_particles(vec![
        Particle::new((10.0, 10.0), (3.0, 4.0), 2.0, Color::WHITE).unwrap(),
    ]);
    let sim = SimulationState::new(SimulationConfig::default(), particles).unwrap();
    assert_eq!(sim.kinetic_energy(), 25.0);
}

#[test]
fn test_random_gravity_run_stays_finite() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = SimulationState::random(SimulationConfig::gravity_preset(), &mut rng).unwrap();
    assert_eq!(sim.force_law_name(), "newtonian-gravity");
    sim.simulate(500);
    assert!(sim.particles().is_finite());
    assert_eq!(sim.render_frame().len(), 9);
}

#[test]
fn test_random_lennard_jones_run_stays_finite() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = SimulationState::random(SimulationConfig::lennard_jones_preset(), &mut rng).unwrap();
    assert_eq!(sim.force_law_name(), "lennard-jones");
    sim.simulate(5);
    assert!(sim.particles().is_finite());
    assert_eq!(sim.particles().len(), 300);
}
