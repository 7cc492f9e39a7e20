//! Configuration loading
//!
//! Coordinates loading configuration from dotenv files, the environment
//! and the command line into one validated `AppConfig`.

use crate::primitives::ConfigError;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Dotenv files read before the environment, first one wins per variable
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load dotenv files into the process environment; missing files are skipped
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Err(e) if !e.not_found() => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

impl AppConfig {
    /// Resolve config: defaults -> .env -> env vars -> CLI
    ///
    /// `cli` is the parsed command line, which already carries the
    /// HANDLEGRAPH_* variables through clap's `env` fallbacks.
    pub fn resolve(cli: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        config = config.merge_with(cli);
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
