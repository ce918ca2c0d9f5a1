use std::{env, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_LOCATION: &str = "jyväskylä";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_REDIRECTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Used when the command names no location.
    pub default_location: String,
    /// Bound for each individual fetch, there is no overall deadline.
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(location) = lookup("LOUNAS_DEFAULT_LOCATION").filter(|l| !l.trim().is_empty()) {
            config.default_location = location.trim().to_string();
        }
        if let Some(secs) = lookup("LOUNAS_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_number("LOUNAS_TIMEOUT_SECS", &secs)?);
        }
        if let Some(max) = lookup("LOUNAS_MAX_REDIRECTS") {
            config.max_redirects = parse_number("LOUNAS_MAX_REDIRECTS", &max)?;
        }
        if let Some(agent) = lookup("LOUNAS_USER_AGENT") {
            config.user_agent = agent;
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{key}={value:?} is not a valid number: {e}")))
}
