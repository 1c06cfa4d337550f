use anyhow::{Context, Result, ensure};
use reqwest::Url;
use std::{env, sync::OnceLock, time::Duration};

const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Device API configuration
    pub device: DeviceConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Base URL of the device API, without trailing slash
    pub url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// On first call, it loads and validates the configuration from environment
    /// variables. Subsequent calls return the cached instance.
    pub fn get() -> Result<&'static Self> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        Ok(APP_CONFIG.get_or_init(|| config))
    }

    /// Load the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let device = DeviceConfig::load(&lookup)?;

        Ok(Self { device })
    }
}

impl DeviceConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("CONSOLE_DEVICE_URL").unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string());
        let parsed = Url::parse(&url).context("failed to parse CONSOLE_DEVICE_URL: invalid URL")?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "failed to parse CONSOLE_DEVICE_URL: unsupported scheme {}",
            parsed.scheme()
        );

        let timeout_secs = lookup("CONSOLE_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .context("failed to parse CONSOLE_REQUEST_TIMEOUT_SECS: invalid format")?;
        ensure!(
            timeout_secs > 0,
            "failed to parse CONSOLE_REQUEST_TIMEOUT_SECS: must be greater than 0"
        );

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
