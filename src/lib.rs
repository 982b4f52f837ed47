pub mod config;
pub mod error;
pub mod genome;
pub mod types;

pub use error::{GenomeError, Result};
pub use genome::{ArrayGenome, Genome, LinkedGenome};
pub use types::{Occupancy, Site, TeId};
