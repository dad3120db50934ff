use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest page GitHub's search API will return.
pub const MAX_LIMIT: i64 = 100;

/// Errors raised while building or checking a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("limit must be greater than 0")]
    LimitTooSmall(i64),

    #[error("limit cannot exceed 100")]
    LimitTooLarge(i64),

    #[error("invalid duration: {0} (must be day, week, month, or year)")]
    InvalidWindow(String),
}

/// How far back to look for newly created repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Window {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl Window {
    /// Length of the window in calendar days.
    pub fn days(&self) -> i64 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Window {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(ConfigError::InvalidWindow(other.to_string())),
        }
    }
}

/// Settings for a single trending lookup.
///
/// Built once per run and never mutated. [`Config::new`] does not check the
/// limit so that callers (and [`crate::GitHubSearcher`]) can decide when to
/// call [`Config::validate`]; [`Config::parse`] does both steps at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    window: Window,
    limit: i64,
}

impl Config {
    pub fn new(window: Window, limit: i64) -> Self {
        Self { window, limit }
    }

    /// Parse a window name and check the limit.
    pub fn parse(window: &str, limit: i64) -> Result<Self, ConfigError> {
        let config = Self::new(window.parse()?, limit);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit <= 0 {
            return Err(ConfigError::LimitTooSmall(self.limit));
        }
        if self.limit > MAX_LIMIT {
            return Err(ConfigError::LimitTooLarge(self.limit));
        }
        Ok(())
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn window_in_days(&self) -> i64 {
        self.window.days()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Window::default(), 10)
    }
}
