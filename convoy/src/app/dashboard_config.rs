use std::time::Duration;

use config::{Config, Environment, FileFormat};
use convoy_map::MapViewModelConfig;
use convoy_sync::HttpDashboardApiConfig;
use serde::{Deserialize, Serialize};

use super::ConvoyAppError;

/// dashboard settings, read from an optional TOML file and then from
/// `CONVOY_`-prefixed environment variables. durations are human-readable
/// (`10s`, `2m`, `1h 30m`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// scheme, host and optional path prefix of the dashboard server
    pub base_url: String,
    pub request_timeout: String,
    pub health_probe_interval: String,
    /// how long sync completion messages stay visible
    pub status_message_ttl: String,
    /// cache snapshot kept between runs, so cached data can be served when
    /// the server is unreachable at start-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_file: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            request_timeout: String::from("10s"),
            health_probe_interval: String::from("15s"),
            status_message_ttl: String::from("3s"),
            snapshot_file: None,
        }
    }
}

impl DashboardConfig {
    /// reads the configuration.
    ///
    /// # Arguments
    ///
    /// * `filepath` - optional TOML file; environment variables override it
    ///
    /// # Returns
    ///
    /// * the configuration with defaults for anything not set
    pub fn load(filepath: Option<&str>) -> Result<Self, ConvoyAppError> {
        let mut builder = Config::builder();
        if let Some(filepath) = filepath {
            builder = builder.add_source(config::File::new(filepath, FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::with_prefix("CONVOY"))
            .build()
            .map_err(|e| ConvoyAppError::ConfigReadError {
                msg: format!("failed reading '{}'", filepath.unwrap_or("<environment>")),
                source: e,
            })?;
        let dashboard_config = config.try_deserialize::<DashboardConfig>().map_err(|e| {
            ConvoyAppError::ConfigReadError {
                msg: String::from("failed deserializing dashboard configuration"),
                source: e,
            }
        })?;
        dashboard_config.validate()?;
        Ok(dashboard_config)
    }

    pub fn request_timeout(&self) -> Result<Duration, ConvoyAppError> {
        parse_duration_field("request_timeout", &self.request_timeout)
    }

    pub fn health_probe_interval(&self) -> Result<Duration, ConvoyAppError> {
        parse_duration_field("health_probe_interval", &self.health_probe_interval)
    }

    pub fn status_message_ttl(&self) -> Result<Duration, ConvoyAppError> {
        parse_duration_field("status_message_ttl", &self.status_message_ttl)
    }

    pub fn api_config(&self) -> Result<HttpDashboardApiConfig, ConvoyAppError> {
        Ok(HttpDashboardApiConfig::new(
            &self.base_url,
            self.request_timeout()?,
        ))
    }

    pub fn view_model_config(&self) -> Result<MapViewModelConfig, ConvoyAppError> {
        Ok(MapViewModelConfig {
            status_message_ttl: self.status_message_ttl()?,
        })
    }

    fn validate(&self) -> Result<(), ConvoyAppError> {
        if self.request_timeout()?.is_zero() {
            return Err(ConvoyAppError::InvalidConfig(String::from(
                "request_timeout must be greater than zero",
            )));
        }
        if self.health_probe_interval()?.is_zero() {
            return Err(ConvoyAppError::InvalidConfig(String::from(
                "health_probe_interval must be greater than zero",
            )));
        }
        self.status_message_ttl()?;
        Ok(())
    }
}

fn parse_duration_field(field: &str, value: &str) -> Result<Duration, ConvoyAppError> {
    humantime::parse_duration(value)
        .map_err(|e| ConvoyAppError::InvalidConfig(format!("{field} '{value}': {e}")))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::DashboardConfig;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.request_timeout().expect("test failed"),
            Duration::from_secs(10)
        );
        assert_eq!(
            config.health_probe_interval().expect("test failed"),
            Duration::from_secs(15)
        );
        assert_eq!(
            config.status_message_ttl().expect("test failed"),
            Duration::from_secs(3)
        );
        assert_eq!(
            config.api_config().expect("test failed").base_url,
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            base_url = "http://10.0.0.5:8000"
            request_timeout = "2m"
            "#,
        )
        .expect("test failed");
        assert_eq!(
            config.request_timeout().expect("test failed"),
            Duration::from_secs(120)
        );
        assert_eq!(config.health_probe_interval, "15s");
        assert!(config.snapshot_file.is_none());
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let config = DashboardConfig {
            request_timeout: String::from("1500ms"),
            ..Default::default()
        };
        let api_config = config.api_config().expect("test failed");
        assert_eq!(api_config.request_timeout_ms, 1500);
        assert_eq!(api_config.request_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = DashboardConfig {
            request_timeout: String::from("0s"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let config = DashboardConfig {
            health_probe_interval: String::from("often"),
            ..Default::default()
        };
        assert!(config.health_probe_interval().is_err());
    }

    #[test]
    fn test_load_file() {
        let filepath = std::env::temp_dir().join(format!(
            "convoy-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &filepath,
            "base_url = \"http://ops.local\"\nstatus_message_ttl = \"5s\"\n",
        )
        .expect("test failed");

        let config =
            DashboardConfig::load(filepath.to_str()).expect("test failed");
        let _ = std::fs::remove_file(&filepath);

        assert_eq!(config.base_url, "http://ops.local");
        assert_eq!(
            config.status_message_ttl().expect("test failed"),
            Duration::from_secs(5)
        );
    }
}
