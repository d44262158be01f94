//! Layered application configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from genie.toml)
//! - `~/.config/genie/genie.toml`
//! - `./genie.toml`
//! - `GENIE_*` environment variables, `__` separating nested keys

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use genie_error::{ConfigError, ConfigErrorKind, GenieError, GenieResult};
use genie_models::ServicesSettings;
use genie_wizard::WizardOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../genie.toml");

/// `[wizard]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WizardSection {
    /// Progress tick in milliseconds
    tick_ms: u64,
}

/// `[player]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlayerSection {
    /// Program that opens media
    command: String,
    /// Arguments placed before the media location
    #[serde(default)]
    args: Vec<String>,
}

/// `[share]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ShareSection {
    /// Origin prefixed to share links
    origin: String,
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use genie::GenieConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GenieConfig::load()?;
/// println!("Analysis model: {:?}", config.services().gemini().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenieConfig {
    /// Wizard pacing
    wizard: WizardSection,
    /// Media playback
    player: PlayerSection,
    /// Share links
    share: ShareSection,
    /// Collaborator endpoints and key variable names
    services: ServicesSettings,
}

impl GenieConfig {
    /// Load with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> GenieResult<Self> {
        debug!("Loading configuration");

        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/genie/genie.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("genie").required(false))
            .add_source(Environment::with_prefix("GENIE").separator("__").try_parsing(true));

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GenieResult<Self> {
        debug!("Loading configuration from file");
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML string.
    pub fn from_toml_str(overrides: &str) -> GenieResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Bundled defaults only.
    pub fn bundled() -> GenieResult<Self> {
        Self::from_toml_str("")
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> GenieResult<Self> {
        builder
            .build()
            .map_err(|e| GenieError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string()))))?
            .try_deserialize()
            .map_err(|e| GenieError::from(ConfigError::new(ConfigErrorKind::Shape(e.to_string()))))
    }

    /// Wizard options derived from the `[wizard]` and `[share]` sections.
    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions::default()
            .with_tick_ms(self.wizard.tick_ms)
            .with_share_origin(self.share.origin.clone())
    }

    /// File the TUI writes its log to.
    pub fn log_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("genie")
            .join("genie.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = GenieConfig::bundled().unwrap();
        assert_eq!(*config.wizard().tick_ms(), 100);
        assert_eq!(config.player().command(), "xdg-open");
        assert_eq!(config.services(), &ServicesSettings::default());
    }

    #[test]
    fn overrides_merge_key_by_key() {
        let config = GenieConfig::from_toml_str(
            r#"
            [wizard]
            tick_ms = 0

            [services.gemini]
            model = "gemini-1.5-pro"
            "#,
        )
        .unwrap();
        assert_eq!(*config.wizard().tick_ms(), 0);
        assert_eq!(config.services().gemini().model().as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.services().gemini().key_env(), "GEMINI_API_KEY");
    }

    #[test]
    fn wizard_options_carry_share_origin() {
        let config = GenieConfig::from_toml_str("[share]\norigin = \"https://genie.example/\"").unwrap();
        let options = config.wizard_options();
        assert_eq!(options.share_origin(), "https://genie.example/");
        assert_eq!(*options.tick_ms(), 100);
    }

    #[test]
    fn malformed_override_is_a_config_error() {
        let err = GenieConfig::from_toml_str("[wizard]\ntick_ms = \"fast\"").unwrap_err();
        match err.kind() {
            genie_error::GenieErrorKind::Config(e) => {
                assert!(matches!(e.kind, ConfigErrorKind::Shape(_)), "unexpected kind {:?}", e.kind)
            }
            other => panic!("expected a config error, got {:?}", other),
        }
    }
}
