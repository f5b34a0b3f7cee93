//! Demo display configuration.

use importo_core::{CurrencyCode, Locale};
use serde::Deserialize;

/// Display settings for the demo renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Currency applied to rendered amounts.
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Locale driving the separators.
    #[serde(default)]
    pub locale: Locale,
    /// Point size for the integer piece of styled text.
    #[serde(default = "default_integer_size")]
    pub integer_size: u32,
    /// Point size for the fraction piece of styled text.
    #[serde(default = "default_fraction_size")]
    pub fraction_size: u32,
}

fn default_integer_size() -> u32 {
    32
}

fn default_fraction_size() -> u32 {
    14
}

impl DisplaySettings {
    /// Loads settings from config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("IMPORTO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
