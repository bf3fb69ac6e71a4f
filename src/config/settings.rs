// src/config/settings.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Configuration for the demo binary. Library functions take no
/// configuration; this only controls presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathkitConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Which demo walks to run
    pub demo: DemoConfig,
}

/// Toggles for the demo sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Fibonacci and Pascal walk
    pub sequences: bool,

    /// Primes, perfect numbers, gcd/lcm, Armstrong walk
    pub number_theory: bool,

    /// Plane and solid geometry walk
    pub geometry: bool,
}

impl Default for MathkitConfig {
    fn default() -> Self {
        MathkitConfig {
            log_level: "info".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            sequences: true,
            number_theory: true,
            geometry: true,
        }
    }
}

impl MathkitConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("log_level", "info")?
            .set_default("demo.sequences", true)?
            .set_default("demo.number_theory", true)?
            .set_default("demo.geometry", true)?;

        if Path::new("mathkit.toml").exists() {
            builder = builder.add_source(File::with_name("mathkit.toml"));
        }

        // Override with environment variables (prefix: MATHKIT_)
        builder = builder.add_source(
            Environment::with_prefix("MATHKIT")
                .separator("__")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("demo.sequences", true)?
            .set_default("demo.number_theory", true)?
            .set_default("demo.geometry", true)?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        let config = builder.build()?;
        config.try_deserialize()
    }
}
