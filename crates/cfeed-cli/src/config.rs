//! Configuration loading and management.

use std::path::{Path, PathBuf};

use cfeed_core::FeedConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Feed settings sit at the top level of `config.toml`:
///
/// ```toml
/// freeze_duration_seconds = 3600
/// regions = ["North", "South"]
///
/// [team_regions]
/// team_5 = "South"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub feed: FeedConfig,
}

impl Config {
    /// Loads configuration from the default location, then `config_path` if
    /// given, then `CFEED_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CFEED_*)
        figment = figment.merge(Env::prefixed("CFEED_"));

        figment.extract()
    }

    /// Feed settings for one run. `unofficial` admits virtual and
    /// out-of-competition participants regardless of the file settings.
    pub fn feed_config(&self, unofficial: bool) -> FeedConfig {
        let mut feed = self.feed.clone();
        if unofficial {
            feed.include_virtual = true;
            feed.include_out_of_comp = true;
        }
        feed
    }
}

/// Returns the platform-specific config directory for cfeed.
///
/// On Linux: `~/.config/cfeed`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cfeed"))
}
