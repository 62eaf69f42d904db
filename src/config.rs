//! Runtime settings for the `cidr-set` binary, read from the environment (and `.env`).

use std::env;

/// Variable naming the log4rs YAML file.
pub const LOG_CONFIG_VAR: &str = "CIDR_SET_LOG_CONFIG";
/// Variable switching coloured output on or off.
pub const COLOR_VAR: &str = "CIDR_SET_COLOR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Forced colour setting; `None` leaves terminal and `NO_COLOR` detection to `colored`.
    pub color: Option<bool>,
}

impl Config {
    /// Load `.env` if present, then read the `CIDR_SET_*` variables.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_vars(env::var(LOG_CONFIG_VAR).ok(), env::var(COLOR_VAR).ok())
    }

    fn from_vars(log_config: Option<String>, color: Option<String>) -> Config {
        let color = color
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"));
        Config {
            log_config: log_config
                .filter(|path| !path.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
            color,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_vars(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.color, None);
    }

    #[test]
    fn test_from_vars() {
        let config = Config::from_vars(Some("conf/log.yml".to_string()), Some("false".to_string()));
        assert_eq!(config.log_config, "conf/log.yml");
        assert_eq!(config.color, Some(false));

        let config = Config::from_vars(Some("  ".to_string()), Some("1".to_string()));
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.color, Some(true));

        assert_eq!(Config::from_vars(None, Some(" OFF ".to_string())).color, Some(false));
    }

    #[test]
    fn test_color_unset_is_not_forced() {
        assert_eq!(Config::from_vars(None, None).color, None);
        assert_eq!(Config::from_vars(None, Some(" ".to_string())).color, None);
    }
}
