//! Runtime configuration read from the environment.
//!
//! `main` loads `.env` with dotenv first, so these can live there too.

use crate::models::Validation;
use crate::output::OutputFormat;

pub const ENV_STRICT: &str = "IPV4CALC_STRICT";
pub const ENV_FORMAT: &str = "IPV4CALC_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub validation: Validation,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(strict) = lookup(ENV_STRICT) {
            match parse_bool(&strict) {
                Some(true) => config.validation = Validation::Strict,
                Some(false) => config.validation = Validation::Loose,
                None => log::warn!("Ignoring {ENV_STRICT}={strict:?}, expected true/false"),
            }
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => log::warn!("Ignoring {ENV_FORMAT}: {e}"),
            }
        }

        log::debug!("Config {config:?}");
        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
