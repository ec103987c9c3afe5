// Runs a preset without a window and logs what a renderer would draw.
//
//   RUST_LOG=info cargo run --features cli -- --preset lennard-jones --steps 1000

use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use particle_dynamics::simulation::{SimulationConfig, SimulationState};
use particle_dynamics::utils::SimulationError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Gravity,
    LennardJones,
    Breathing,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, value_enum, default_value = "gravity")]
    preset: Preset,
    #[arg(short, long, default_value_t = 1440)]
    steps: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Overrides the preset's particle count.
    #[arg(short = 'n', long)]
    particles: Option<usize>,
    /// Log a frame summary every this many steps.
    #[arg(long, default_value_t = 144)]
    report_every: usize,
}

fn main() -> Result<(), SimulationError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.preset {
        Preset::Gravity => SimulationConfig::gravity_preset(),
        Preset::LennardJones => SimulationConfig::lennard_jones_preset(),
        Preset::Breathing => SimulationConfig::breathing_gravity_preset(),
    };
    if let Some(n) = args.particles {
        config = config.with_particle_count(n);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut sim = SimulationState::random(config, &mut rng)?;
    info!("Starting {:?}", sim);

    let report_every = args.report_every.max(1);
    for step in 1..=args.steps {
        sim.advance();
        if step % report_every == 0 {
            let frame = sim.render_frame();
            let bounds = sim.bounds();
            let inside = frame
                .iter()
                .filter(|p| bounds.contains(p.x as f64, p.y as f64))
                .count();
            info!(
                "step {}: {}/{} on screen, kinetic energy {:.3e}, domain {:.1}x{:.1}",
                step,
                inside,
                frame.len(),
                sim.kinetic_energy(),
                bounds.width,
                bounds.height
            );
        }
    }

    info!("Finished after {} steps", sim.step_count());
    Ok(())
}
