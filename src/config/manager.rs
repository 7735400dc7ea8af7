use super::{expression::ExpressionConfig, mutation::MutationConfig, traits::ConfigSection};
use crate::error::DcgpError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix of environment overrides, e.g. `DCGP__EXPRESSION__ROWS=4`
pub const ENV_PREFIX: &str = "DCGP";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub expression: ExpressionConfig,
    pub mutation: MutationConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DcgpError> {
        check_section(&self.expression)?;
        check_section(&self.mutation)?;
        Ok(())
    }
}

fn check_section<S: ConfigSection>(section: &S) -> Result<(), DcgpError> {
    section.validate().map_err(|e| match e {
        DcgpError::Configuration(msg) => {
            DcgpError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, letting `DCGP__<SECTION>__<FIELD>` variables override it.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DcgpError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DcgpError::Configuration(format!(
                "Failed to read config: {} not found",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DcgpError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| DcgpError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DcgpError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| DcgpError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to a copy of the configuration and keep it only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), DcgpError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
