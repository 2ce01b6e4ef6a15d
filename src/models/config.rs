use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// How long the splash screen stays up before moving on
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// Input poll timeout for the event loop
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub splash_delay: Duration,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay: Duration::from_millis(DEFAULT_SPLASH_DELAY_MS),
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let splash_delay = millis_or_default(&lookup, "QUIZ_SPLASH_DELAY_MS", DEFAULT_SPLASH_DELAY_MS);

        // A zero tick would turn the input poll into a busy loop
        let tick_rate = match millis_or_default(&lookup, "QUIZ_TICK_RATE_MS", DEFAULT_TICK_RATE_MS) {
            d if d.is_zero() => {
                tracing::warn!(
                    "QUIZ_TICK_RATE_MS must be positive, using default of {}ms",
                    DEFAULT_TICK_RATE_MS
                );
                Duration::from_millis(DEFAULT_TICK_RATE_MS)
            }
            d => d,
        };

        let log_file = log_file_from_lookup(&lookup);

        Ok(Self {
            splash_delay,
            tick_rate,
            log_file,
        })
    }
}

/// `QUIZ_LOG_FILE`, read on its own so logging can be up before the rest is parsed
pub fn log_file_from_env() -> Option<PathBuf> {
    log_file_from_lookup(&|key: &str| std::env::var(key).ok())
}

fn log_file_from_lookup<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("QUIZ_LOG_FILE")
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

fn millis_or_default<F>(lookup: &F, key: &str, default_ms: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let millis = match lookup(key) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => ms,
            Err(_) => {
                tracing::warn!(
                    "{} is set to {:?}, which is not a number of milliseconds. Using default of {}ms.",
                    key,
                    raw,
                    default_ms
                );
                default_ms
            }
        },
        None => default_ms,
    };
    Duration::from_millis(millis)
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
    fn test_defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.splash_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("QUIZ_SPLASH_DELAY_MS", "500"),
            ("QUIZ_TICK_RATE_MS", "50"),
            ("QUIZ_LOG_FILE", "/tmp/quiz.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.splash_delay, Duration::from_millis(500));
        assert_eq!(cfg.tick_rate, Duration::from_millis(50));
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/quiz.log")));
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("QUIZ_SPLASH_DELAY_MS", "soon")])).unwrap();
        assert_eq!(cfg.splash_delay, Duration::from_millis(DEFAULT_SPLASH_DELAY_MS));
    }

    #[test]
    fn test_fallback_is_logged() {
        let (subscriber, logs) = crate::logging::capture::subscriber();
        let cfg = tracing::subscriber::with_default(subscriber, || {
            AppConfig::from_lookup(lookup_from(&[("QUIZ_SPLASH_DELAY_MS", "soon")]))
        })
        .unwrap();

        assert_eq!(cfg.splash_delay, Duration::from_millis(DEFAULT_SPLASH_DELAY_MS));
        let output = logs.contents();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("QUIZ_SPLASH_DELAY_MS"), "{}", output);
        assert!(output.contains("soon"), "{}", output);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("QUIZ_TICK_RATE_MS", "0")])).unwrap();
        assert_eq!(cfg.tick_rate, Duration::from_millis(DEFAULT_TICK_RATE_MS));
    }

    #[test]
    fn test_blank_log_file_ignored() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("QUIZ_LOG_FILE", "  ")])).unwrap();
        assert_eq!(cfg.log_file, None);
    }
}
