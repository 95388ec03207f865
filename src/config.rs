//! Build-time Configuration
//!
//! Values are baked in at compile time through environment variables,
//! since a static WASM bundle has no process environment to read.

use std::str::FromStr;

use log::LevelFilter;

/// Backend used when `CLINIC_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://se-backend-5mmf.onrender.com";

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `CLINIC_API_BASE` as captured at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CLINIC_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Log level from `CLINIC_LOG_LEVEL`, `info` when absent or unparsable.
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("CLINIC_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }
}
