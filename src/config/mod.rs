pub mod traits;
pub mod genome;
pub mod simulation;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use genome::{GenomeConfig, GenomeBackend};
pub use simulation::SimulationConfig;
