//! Simulator configuration.
//!
//! Resolved from the command line and the environment; the resolution itself
//! is a pure function over both so it can be tested without touching the
//! process environment.

use std::path::PathBuf;

use thiserror::Error;

pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";
pub const FIXTURE_ENV: &str = "GILDED_ROSE_FIXTURE";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid day count {value:?} (from {source_name}): expected a non-negative integer")]
    InvalidDays { value: String, source_name: &'static str },

    #[error("unexpected extra argument {0:?}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of day blocks to print, starting at day 0.
    pub days: u32,
    /// JSON fixture to load instead of the built-in inventory.
    pub fixture: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            fixture: None,
        }
    }
}

impl SimulatorConfig {
    /// Resolve from process arguments (without the program name) and the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// The first positional argument wins over `GILDED_ROSE_DAYS`.
    pub fn resolve<I, E>(args: I, env: E) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let mut config = Self::default();

        if let Some(raw) = args.next() {
            config.days = parse_days(&raw, "argument")?;
        } else if let Some(raw) = env(DAYS_ENV) {
            config.days = parse_days(&raw, DAYS_ENV)?;
        }

        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        config.fixture = env(FIXTURE_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_days(raw: &str, source_name: &'static str) -> Result<u32, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidDays {
        value: raw.to_string(),
        source_name,
    })
}
