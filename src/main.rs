use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tegenome::config::ConfigManager;
use tegenome::genome::ops;

fn main() -> anyhow::Result<()> {
    // Configure logging (RUST_LOG=debug shows every mutation)
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let manager = ConfigManager::new();
    manager.load_layered(config_path.as_deref())?;
    let config = manager.get();

    let mut genome = config.genome.backend.build(config.genome.initial_size)?;
    let mut rng = match config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "{:?} genome of {} positions, {} steps",
        config.genome.backend, config.genome.initial_size, config.simulation.steps
    );
    println!("{}", genome.render());

    let script = ops::random_script(&mut rng, config.genome.initial_size, &config.simulation)?;
    for op in script {
        let outcome = ops::apply(genome.as_mut(), op)?;
        info!("{:?} -> {:?}", op, outcome);
        println!("{}", genome.render());
    }

    println!("active TEs: {:?}", genome.active_tes());
    Ok(())
}
