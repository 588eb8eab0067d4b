use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::feed::locale::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};
use crate::feed::{parse_offset, Locale};

pub const DEFAULT_FEED_URL: &str = "https://openjobseu-anobnjle6q-lz.a.run.app/jobs/feed";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    /// Where the rendered page is written; stdout when unset
    pub output: Option<PathBuf>,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let offset = match var("FEED_UTC_OFFSET") {
            Some(raw) => parse_offset(&raw)?,
            None => Locale::local().offset(),
        };
        let date_format = var("FEED_DATE_FORMAT").unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        let datetime_format =
            var("FEED_DATETIME_FORMAT").unwrap_or_else(|| DEFAULT_DATETIME_FORMAT.to_string());

        Ok(Self {
            feed_url: var("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            output: var("FEED_OUTPUT").map(PathBuf::from),
            locale: Locale::new(offset, &date_format, &datetime_format)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert!(config.output.is_none());
        assert_eq!(config.locale.offset(), Locale::local().offset());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FEED_URL", "http://localhost:8000/jobs/feed"),
            ("FEED_OUTPUT", "site/index.html"),
            ("FEED_UTC_OFFSET", "Z"),
            ("FEED_DATE_FORMAT", "%d.%m.%Y"),
        ])
        .unwrap();

        assert_eq!(config.feed_url, "http://localhost:8000/jobs/feed");
        assert_eq!(config.output, Some(PathBuf::from("site/index.html")));
        assert_eq!(config.locale.format_date("2024-01-02T00:00:00Z"), "02.01.2024");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = config_from(&[("FEED_URL", ""), ("FEED_OUTPUT", "  ")]).unwrap();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_bad_offset_is_rejected() {
        assert!(matches!(
            config_from(&[("FEED_UTC_OFFSET", "CET")]),
            Err(ConfigError::InvalidOffset(_))
        ));
    }

    #[test]
    fn test_bad_datetime_format_is_rejected() {
        assert!(matches!(
            config_from(&[("FEED_DATETIME_FORMAT", "%Y-%")]),
            Err(ConfigError::InvalidFormat {
                var: "FEED_DATETIME_FORMAT",
                ..
            })
        ));
    }
}
