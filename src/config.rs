use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_N: i64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse {var}={value:?}")]
    Parse { var: &'static str, value: String },
}

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// N used when stdin is empty (`SUM_DEFAULT`).
    pub default_n: i64,
    /// Emit a JSON stats line on stderr (`SUM_STATS`).
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_n: DEFAULT_N,
            stats: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            default_n: env_or(&lookup, "SUM_DEFAULT", DEFAULT_N)?,
            stats: env_or(&lookup, "SUM_STATS", false)?,
        })
    }
}

fn env_or<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    var: &'static str,
    def: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Parse { var, value }),
        None => Ok(def),
    }
}
