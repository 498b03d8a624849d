//! Configuration loading.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Negotiation configuration.
///
/// Consumed once at construction; not re-validated at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Ordered list of fallback nicknames to try on collision.
    ///
    /// At least one entry must survive the nickname grammar filter.
    pub nicks: Vec<String>,

    /// Reclaim the originally desired nickname once its holder quits.
    #[serde(default)]
    pub recovery: bool,

    /// Emit [`SyncCurrentNick`](crate::OutboundCommand::SyncCurrentNick)
    /// alongside each nickname request so the connection owner can refresh
    /// its cached current nickname.
    #[serde(default)]
    pub sync_current_nick: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: Config = toml::from_str(r#"nicks = ["Foo", "Foo_"]"#).unwrap();
        assert_eq!(config.nicks, vec!["Foo", "Foo_"]);
        assert!(!config.recovery);
        assert!(!config.sync_current_nick);
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
nicks = ["Foo"]
recovery = true
sync_current_nick = true
"#,
        )
        .unwrap();
        assert!(config.recovery);
        assert!(config.sync_current_nick);
    }

    #[test]
    fn missing_nicks_key_fails() {
        let result: Result<Config, _> = toml::from_str("recovery = true");
        assert!(result.is_err());
    }

    #[test]
    fn wrong_shape_for_nicks_fails() {
        let result: Result<Config, _> = toml::from_str("nicks = 5");
        assert!(result.is_err());

        let result: Result<Config, _> = toml::from_str(r#"nicks = "Foo""#);
        assert!(result.is_err());
    }
}
