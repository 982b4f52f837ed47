use super::traits::ConfigSection;
use crate::error::GenomeError;
use serde::{Deserialize, Serialize};

/// Parameters for random operation scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    pub steps: usize,
    pub max_te_length: usize,
    pub max_offset: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            steps: 10,
            max_te_length: 10,
            max_offset: 20,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), GenomeError> {
        if self.max_te_length == 0 {
            return Err(GenomeError::Configuration(
                "Maximum TE length must be at least 1".to_string()
            ));
        }
        if self.max_offset < 0 {
            return Err(GenomeError::Configuration(
                "Maximum copy offset must not be negative".to_string()
            ));
        }
        Ok(())
    }
}
