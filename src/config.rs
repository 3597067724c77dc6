//! Startup configuration read from environment variables.
//!
//! Every setting has a default; a bad value is logged and replaced by its default.

use crate::models::Direction;
use std::time::Duration;

pub const DATA_SOURCE_VAR: &str = "VOCAB_DATA_SOURCE";
pub const LEARN_DIRECTION_VAR: &str = "VOCAB_LEARN_DIRECTION";
pub const QUIZ_DIRECTION_VAR: &str = "VOCAB_QUIZ_DIRECTION";
pub const AUTO_ADVANCE_VAR: &str = "VOCAB_AUTO_ADVANCE_MS";

const DEFAULT_DATA_SOURCE: &str = "data.json";
const DEFAULT_AUTO_ADVANCE_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// File path or http(s) URL of the external vocabulary document.
    pub data_source: String,
    pub learn_direction: Direction,
    pub quiz_direction: Direction,
    /// Pause between scoring a card and moving to the next one.
    pub auto_advance_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            learn_direction: Direction::SourceToTarget,
            quiz_direction: Direction::TargetToSource,
            auto_advance_delay: Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_source = lookup(DATA_SOURCE_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.data_source);

        let learn_direction = parse_or(&lookup, LEARN_DIRECTION_VAR, defaults.learn_direction);
        let quiz_direction = parse_or(&lookup, QUIZ_DIRECTION_VAR, defaults.quiz_direction);

        let auto_advance_delay = match lookup(AUTO_ADVANCE_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    log::warn!("Invalid {}='{}' ({}), using default", AUTO_ADVANCE_VAR, raw, e);
                    defaults.auto_advance_delay
                }
            },
            None => defaults.auto_advance_delay,
        };

        Self {
            data_source,
            learn_direction,
            quiz_direction,
            auto_advance_delay,
        }
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: Direction) -> Direction
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Invalid {} ({}), using default", key, e);
            default
        }),
        None => default,
    }
}
