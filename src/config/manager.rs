use super::{
    genome::GenomeConfig,
    simulation::SimulationConfig,
    traits::ConfigSection,
};
use crate::error::GenomeError;
use ::config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `TEGENOME_GENOME__INITIAL_SIZE=50`
pub const ENV_PREFIX: &str = "TEGENOME";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub genome: GenomeConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GenomeError> {
        self.genome.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenomeError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| GenomeError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Load defaults, then the optional TOML file, then `TEGENOME_*` environment
    /// overrides (sections separated by `__`). Later layers win.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), GenomeError> {
        let defaults = toml::to_string(&AppConfig::default()).map_err(|e| {
            GenomeError::Configuration(format!("Failed to serialize defaults: {}", e))
        })?;

        let mut builder = Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));
        if let Some(path) = path {
            debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.to_path_buf()).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenomeError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| GenomeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to a copy of the configuration; the change is kept only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), GenomeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        self.replace(candidate)
    }

    fn replace(&self, config: AppConfig) -> Result<(), GenomeError> {
        config.validate()?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }
}
