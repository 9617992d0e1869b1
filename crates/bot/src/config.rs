//! Bot configuration
//!
//! Loads configuration from environment variables

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::env;
use std::ops::Deref;
use tvguide_core::config::CoreConfig;
use tvguide_core::{default_timezone, parse_timezone};

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Core configuration (database, bot token)
    pub core: CoreConfig,

    /// Zone that decides which date is "today"
    pub timezone: Tz,

    /// Seed for the filler schedule; random when unset
    pub guide_seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;
        Self::with_core(core, |key| env::var(key).ok())
    }

    fn with_core<F>(core: CoreConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match lookup("GUIDE_TIMEZONE") {
            Some(name) => parse_timezone(&name)?,
            None => default_timezone(),
        };

        let guide_seed = lookup("GUIDE_SEED")
            .map(|seed| seed.parse())
            .transpose()
            .context("GUIDE_SEED must be a valid unsigned integer")?;

        Ok(Self {
            core,
            timezone,
            guide_seed,
        })
    }
}

impl Deref for Config {
    type Target = CoreConfig;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}
