//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TERMTRIS_SEED` | randomizer seed | wall clock |
//! | `TERMTRIS_TICK_MS` | fixed tick interval in ms | `DEFAULT_TICK_MS` |
//! | `TERMTRIS_LOG` | log file path; logging is off without it | unset |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::DEFAULT_TICK_MS;

pub const SEED_VAR: &str = "TERMTRIS_SEED";
pub const TICK_MS_VAR: &str = "TERMTRIS_TICK_MS";
pub const LOG_VAR: &str = "TERMTRIS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub tick: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{SEED_VAR} must be a u32, got {raw:?}"))?,
            None => clock_seed(),
        };

        let tick_ms = match lookup(TICK_MS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{TICK_MS_VAR} must be a number of milliseconds, got {raw:?}"))?,
            None => DEFAULT_TICK_MS,
        };
        if tick_ms == 0 {
            bail!("{TICK_MS_VAR} must be at least 1");
        }

        let log_file = lookup(LOG_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            seed,
            tick: Duration::from_millis(tick_ms),
            log_file,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (SEED_VAR, "42"),
            (TICK_MS_VAR, " 16 "),
            (LOG_VAR, "/tmp/termtris.log"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/termtris.log")));
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));

        assert!(Config::from_lookup(lookup(&[(TICK_MS_VAR, "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[(TICK_MS_VAR, "-5")])).is_err());
    }
}
