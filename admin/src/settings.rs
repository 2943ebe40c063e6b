use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use product_core::PriceFormat;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "PRODUCT_ADMIN_ENV";
const ENV_PREFIX: &str = "PRODUCT_ADMIN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("api.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
    #[error("unsupported display.locale '{0}'; expected pt-BR or en-US")]
    UnknownLocale(String),
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub log: LogSettings,
    /// Name of the layered environment file, from `PRODUCT_ADMIN_ENV`.
    #[serde(skip)]
    pub environment: String,
    #[serde(skip)]
    pub config_dir: PathBuf,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment file and
    /// `PRODUCT_ADMIN_*` variables (nested keys separated by `__`, as in
    /// `PRODUCT_ADMIN_API__BASE_URL`).
    pub fn load(config_dir: Option<&Path>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .unwrap_or_else(|_| PathBuf::from("config")),
        };

        let cfg = config::Config::builder()
            .add_source(config::File::from(config_dir.join("base.toml")).required(false))
            .add_source(config::File::from(config_dir.join(format!("{environment}.toml"))).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;
        settings.environment = environment;
        settings.config_dir = config_dir;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidBaseUrl(url.clone()));
        }
        self.price_format()?;
        Ok(())
    }

    pub fn price_format(&self) -> Result<PriceFormat, SettingsError> {
        PriceFormat::for_locale(&self.display.locale)
            .ok_or_else(|| SettingsError::UnknownLocale(self.display.locale.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Collection URL of the products resource.
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
    /// Unset leaves ureq's own defaults in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    /// Hosted workshop URL. Only useful once that server speaks the English
    /// `title`/`price` payload; `config/local.toml` targets the mock server.
    fn default_base_url() -> String {
        "https://api-workshop-production.up.railway.app/produtos".to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
}

impl ServerSettings {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8501
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "DisplaySettings::default_locale")]
    pub locale: String,
}

impl DisplaySettings {
    fn default_locale() -> String {
        "pt-BR".to_string()
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "LogSettings::default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl LogSettings {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
