use crate::logging::LogLevel;

pub const PARTICLE_COUNT_KEY: &str = "portfolio.particle-count";
pub const FRAME_INTERVAL_MS_KEY: &str = "portfolio.frame-interval-ms";
pub const LOG_LEVEL_KEY: &str = "portfolio.log-level";

const DEFAULT_PARTICLE_COUNT: usize = 80;
const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 400);
const FRAME_INTERVAL_MS_BOUNDS: (u32, u32) = (8, 100);

/// Decoration tuning resolved once when the page mounts.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub particle_count: usize,
    pub frame_interval_ms: u32,
    pub reduced_motion: bool,
    pub log_level: LogLevel,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            reduced_motion: false,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl RuntimeConfig {
    /// `lookup` returns the raw override stored under a key, if any.
    pub fn from_overrides(lookup: impl Fn(&str) -> Option<String>, reduced_motion: bool) -> Self {
        let particle_count = parse_usize_with_bounds(
            lookup(PARTICLE_COUNT_KEY).as_deref(),
            DEFAULT_PARTICLE_COUNT,
            PARTICLE_COUNT_BOUNDS,
        );
        let frame_interval_ms = parse_u32_with_bounds(
            lookup(FRAME_INTERVAL_MS_KEY).as_deref(),
            DEFAULT_FRAME_INTERVAL_MS,
            FRAME_INTERVAL_MS_BOUNDS,
        );
        let log_level = lookup(LOG_LEVEL_KEY)
            .as_deref()
            .and_then(LogLevel::from_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            particle_count,
            frame_interval_ms,
            reduced_motion,
            log_level,
        }
    }
}

fn parse_usize_with_bounds(raw: Option<&str>, default: usize, bounds: (usize, usize)) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)], reduced_motion: bool) -> RuntimeConfig {
        let overrides: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        RuntimeConfig::from_overrides(|key| overrides.get(key).cloned(), reduced_motion)
    }

    #[test]
    fn missing_overrides_fall_back_to_defaults() {
        let config = config_from(&[], false);

        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = config_from(
            &[
                (PARTICLE_COUNT_KEY, " 120 "),
                (FRAME_INTERVAL_MS_KEY, "33"),
                (LOG_LEVEL_KEY, "debug"),
            ],
            true,
        );

        assert_eq!(config.particle_count, 120);
        assert_eq!(config.frame_interval_ms, 33);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.reduced_motion);
    }

    #[test]
    fn out_of_bounds_or_garbage_overrides_are_ignored() {
        let config = config_from(
            &[
                (PARTICLE_COUNT_KEY, "100000"),
                (FRAME_INTERVAL_MS_KEY, "2"),
                (LOG_LEVEL_KEY, "loud"),
            ],
            false,
        );

        assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
