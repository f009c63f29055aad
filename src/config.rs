use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fmt;

use crate::upstream::Endpoint;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolves a named setting to its string value.
///
/// A missing key is an error, never a silent default. Callers that can live
/// without a key use [`ConfigProvider::resolve_optional`].
pub trait ConfigProvider {
    fn resolve(&self, key: &str) -> Result<String, ConfigError>;

    fn resolve_optional(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.resolve(key) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl ConfigProvider for Config {
    fn resolve(&self, key: &str) -> Result<String, ConfigError> {
        self.get_string(key)
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn resolve(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Everything needed to talk to the news aggregator.
#[derive(Clone)]
pub struct UpstreamSettings {
    pub headlines_url: String,
    pub apikey_prefix: String,
    pub apikey_token: String,
    pub sources_url: Option<String>,
    pub default_sources: Option<String>,
    pub timeout_secs: u64,
}

impl UpstreamSettings {
    pub fn resolve(provider: &impl ConfigProvider) -> Result<Self, ConfigError> {
        let timeout_secs = match provider.resolve_optional("upstream_timeout_secs")? {
            Some(raw) => raw.trim().parse().map_err(|e| {
                ConfigError::Message(format!("upstream_timeout_secs: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            return Err(ConfigError::Message(
                "upstream_timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(Self {
            headlines_url: provider.resolve("headlines_url")?,
            apikey_prefix: provider.resolve("apikey_prefix")?,
            apikey_token: provider.resolve("apikey_token")?,
            sources_url: provider.resolve_optional("sources_url")?,
            default_sources: provider
                .resolve_optional("default_sources")?
                .filter(|s| !s.is_empty()),
            timeout_secs,
        })
    }

    pub fn headlines_endpoint(&self) -> Endpoint {
        Endpoint::new(&self.headlines_url, &self.apikey_prefix, &self.apikey_token)
    }

    pub fn sources_endpoint(&self) -> Option<Endpoint> {
        self.sources_url
            .as_deref()
            .map(|url| Endpoint::new(url, &self.apikey_prefix, &self.apikey_token))
    }
}

impl fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("headlines_url", &self.headlines_url)
            .field("apikey_prefix", &self.apikey_prefix)
            .field("apikey_token", &"<redacted>")
            .field("sources_url", &self.sources_url)
            .field("default_sources", &self.default_sources)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_config(&s)
    }

    pub fn from_config(s: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            server: s.get("server")?,
            logging: s.get("logging")?,
            upstream: UpstreamSettings::resolve(s)?,
        })
    }
}
