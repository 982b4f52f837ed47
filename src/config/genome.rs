use super::traits::ConfigSection;
use crate::error::{GenomeError, Result};
use crate::genome::{ArrayGenome, Genome, LinkedGenome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenomeConfig {
    pub initial_size: usize,
    pub backend: GenomeBackend,
}

/// Storage strategy behind the `Genome` trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomeBackend {
    Array,
    Linked,
}

impl GenomeBackend {
    /// Build an empty genome of `size` positions on this backend
    pub fn build(self, size: usize) -> Result<Box<dyn Genome>> {
        Ok(match self {
            GenomeBackend::Array => Box::new(ArrayGenome::new(size)?),
            GenomeBackend::Linked => Box::new(LinkedGenome::new(size)?),
        })
    }
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            initial_size: 20,
            backend: GenomeBackend::Linked,
        }
    }
}

impl ConfigSection for GenomeConfig {
    fn section_name() -> &'static str {
        "genome"
    }

    fn validate(&self) -> Result<()> {
        if self.initial_size == 0 {
            return Err(GenomeError::Configuration(
                "Initial genome size must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
