//! Runtime configuration read from the environment (and `.env` via dotenv).

use crate::TutorError;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_OUTPUT: &str = "SUBNET_TUTOR_OUTPUT";
pub const ENV_COLOR: &str = "SUBNET_TUTOR_COLOR";
pub const ENV_LOG_CONFIG: &str = "SUBNET_TUTOR_LOG_CONFIG";

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(other.to_string()),
        }
    }
}

/// Terminal colour handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::default(),
            color: ColorMode::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, TutorError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, TutorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = parse_value(ENV_OUTPUT, &value)?;
        }
        if let Some(value) = lookup(ENV_COLOR) {
            config.color = parse_value(ENV_COLOR, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(value);
        }
        Ok(config)
    }

    /// Force colours on or off for the `colored` crate.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, TutorError> {
    value.parse().map_err(|_| TutorError::Config {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_OUTPUT, "JSON"),
            (ENV_COLOR, "never"),
            (ENV_LOG_CONFIG, "/etc/subnet-tutor/log.yml"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.log_config, PathBuf::from("/etc/subnet-tutor/log.yml"));
    }

    #[test]
    fn test_invalid_value() {
        let err = Config::from_lookup(lookup_from(&[(ENV_OUTPUT, "xml")])).unwrap_err();
        assert_eq!(
            err,
            TutorError::Config {
                key: ENV_OUTPUT.to_string(),
                value: "xml".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid value 'xml' for SUBNET_TUTOR_OUTPUT");
    }
}
