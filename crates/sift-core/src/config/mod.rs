//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SIFT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIFT_*` overrides on top of defaults,
/// then [`Config::validate`] before building anything from it.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Max entries in the score cache. Default: `10_000`.
    pub cache_capacity: usize,

    /// Default decision threshold when a request carries none. Default: `0.7`.
    pub threshold: f32,

    /// Toxicity scorer endpoint URL. Default: `http://127.0.0.1:8501/score`.
    pub scorer_url: String,

    /// Per-request scorer timeout in seconds. Default: `30`.
    pub scorer_timeout_secs: u64,

    /// YouTube Data API key. Comment endpoints are disabled when unset.
    pub youtube_api_key: Option<String>,

    /// YouTube Data API base URL. Default: the public Google endpoint.
    pub youtube_api_url: String,

    /// Max comments fetched per video. Default: `100`.
    pub youtube_max_comments: usize,
}

/// Default scorer URL used when `SIFT_SCORER_URL` is not set.
pub const DEFAULT_SCORER_URL: &str = "http://127.0.0.1:8501/score";

/// Default decision threshold used when `SIFT_THRESHOLD` is not set.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            cache_capacity: 10_000,
            threshold: DEFAULT_THRESHOLD,
            scorer_url: DEFAULT_SCORER_URL.to_string(),
            scorer_timeout_secs: 30,
            youtube_api_key: None,
            youtube_api_url: crate::comments::DEFAULT_YOUTUBE_API_URL.to_string(),
            youtube_max_comments: 100,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SIFT_PORT";
    const ENV_BIND_ADDR: &'static str = "SIFT_BIND_ADDR";
    const ENV_CACHE_CAPACITY: &'static str = "SIFT_CACHE_CAPACITY";
    const ENV_THRESHOLD: &'static str = "SIFT_THRESHOLD";
    const ENV_SCORER_URL: &'static str = "SIFT_SCORER_URL";
    const ENV_SCORER_TIMEOUT_SECS: &'static str = "SIFT_SCORER_TIMEOUT_SECS";
    const ENV_YOUTUBE_API_KEY: &'static str = "SIFT_YOUTUBE_API_KEY";
    const ENV_YOUTUBE_API_URL: &'static str = "SIFT_YOUTUBE_API_URL";
    const ENV_YOUTUBE_MAX_COMMENTS: &'static str = "SIFT_YOUTUBE_MAX_COMMENTS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let cache_capacity = Self::parse_capacity_from_env(defaults.cache_capacity)?;
        let threshold = Self::parse_threshold_from_env(defaults.threshold)?;
        let scorer_url = Self::parse_string_from_env(Self::ENV_SCORER_URL, defaults.scorer_url);
        let scorer_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_SCORER_TIMEOUT_SECS, defaults.scorer_timeout_secs);
        let youtube_api_key = Self::parse_optional_string_from_env(Self::ENV_YOUTUBE_API_KEY);
        let youtube_api_url =
            Self::parse_string_from_env(Self::ENV_YOUTUBE_API_URL, defaults.youtube_api_url);
        let youtube_max_comments = Self::parse_u64_from_env(
            Self::ENV_YOUTUBE_MAX_COMMENTS,
            defaults.youtube_max_comments as u64,
        ) as usize;

        Ok(Self {
            port,
            bind_addr,
            cache_capacity,
            threshold,
            scorer_url,
            scorer_timeout_secs,
            youtube_api_key,
            youtube_api_url,
            youtube_max_comments,
        })
    }

    /// Validates cross-field invariants. Call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::InvalidCapacity {
                value: self.cache_capacity,
            });
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }

        if self.scorer_url.trim().is_empty() {
            return Err(ConfigError::EmptyScorerUrl);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_capacity_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_CACHE_CAPACITY) {
            Ok(value) => value.parse().map_err(|e| ConfigError::CapacityParseError {
                value: value.clone(),
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_threshold_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_THRESHOLD) {
            Ok(value) => value.parse().map_err(|e| ConfigError::ThresholdParseError {
                value: value.clone(),
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
