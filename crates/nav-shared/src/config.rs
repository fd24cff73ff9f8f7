//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::constants::{
    DEFAULT_FORBIDDEN_ROUTE, DEFAULT_MENU_ENDPOINT, DEFAULT_NOT_FOUND_ROUTE,
};

#[derive(Debug, Deserialize, Clone)]
pub struct NavConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub menu: MenuSettings,
    pub routes: RouteSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Where the menu tree comes from for a session.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuSourceKind {
    /// Declarative catalog compiled into the binary
    Static,
    /// Payload fetched from the backend at login time
    Backend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    pub source: MenuSourceKind,
    pub endpoint: String,
}

/// Route names used as navigation fallbacks.
#[derive(Debug, Deserialize, Clone)]
pub struct RouteSettings {
    pub not_found: String,
    pub forbidden: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub dir: Option<String>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            source: MenuSourceKind::Static,
            endpoint: DEFAULT_MENU_ENDPOINT.to_string(),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            not_found: DEFAULT_NOT_FOUND_ROUTE.to_string(),
            forbidden: DEFAULT_FORBIDDEN_ROUTE.to_string(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            dir: None,
        }
    }
}

impl NavConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// `NAV__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NAV").separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Configuration made of the built-in defaults only.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "nav-console")?
            .set_default("api.base_url", "http://127.0.0.1:8080")?
            .set_default("api.timeout_seconds", 10)?
            .set_default("menu.source", "static")?
            .set_default("menu.endpoint", DEFAULT_MENU_ENDPOINT)?
            .set_default("routes.not_found", DEFAULT_NOT_FOUND_ROUTE)?
            .set_default("routes.forbidden", DEFAULT_FORBIDDEN_ROUTE)?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")
    }
}
