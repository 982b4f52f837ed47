use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("Invalid TE length: {0} (must be at least 1 and fit in the genome)")]
    InvalidLength(usize),

    #[error("Genome must contain at least one position")]
    EmptyGenome,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenomeError>;
