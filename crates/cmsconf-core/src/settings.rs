//! Runtime settings for the admin configuration server.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    document::{Backend, I18nSettings},
    error::{CoreError, Result},
};

/// Prefix for environment overrides, e.g. `CMSCONF_MODE=development` or
/// `CMSCONF_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "CMSCONF";

/// Main settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Runtime mode; development enables the local backend proxy.
    #[serde(default)]
    pub mode: RunMode,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Values copied into the served document.
    #[serde(default)]
    pub site: SiteSettings,

    /// Git backend settings.
    #[serde(default)]
    pub backend: Backend,
}

/// Runtime mode.
///
/// Only `development` (or `dev`, any case) selects development; every other
/// value, including `test` or `staging`, runs as production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    #[default]
    Production,
}

impl RunMode {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl From<&str> for RunMode {
    fn from(mode: &str) -> Self {
        let mode = mode.trim();
        if mode.eq_ignore_ascii_case("development") || mode.eq_ignore_ascii_case("dev") {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl<'de> Deserialize<'de> for RunMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        Ok(Self::from(mode.as_str()))
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Site-wide values for the admin document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Admin UI locale.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Repository folder uploads are committed to.
    #[serde(default = "default_media_folder")]
    pub media_folder: String,

    /// Public URL prefix for uploaded media.
    #[serde(default = "default_public_folder")]
    pub public_folder: String,

    /// Optional multi-locale content settings.
    #[serde(default)]
    pub i18n: Option<I18nSettings>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_locale() -> String {
    "pt".to_string()
}

fn default_media_folder() -> String {
    "/public/uploads".to_string()
}

fn default_public_folder() -> String {
    "/uploads".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            media_folder: default_media_folder(),
            public_folder: default_public_folder(),
            i18n: None,
        }
    }
}

impl ServerSettings {
    /// `host:port` socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Load settings from an optional TOML file layered under `CMSCONF_*`
    /// environment variables.
    ///
    /// A missing file is not an error; every setting has a default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    /// Load settings with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if path.exists() {
                tracing::debug!(?path, "Reading settings file");
            }
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let source = builder.add_source(env).build().map_err(|e| {
            CoreError::config_with_source(
                match path {
                    Some(path) => format!("Failed to read settings from {}", path.display()),
                    None => "Failed to read settings".to_string(),
                },
                e,
            )
        })?;

        let settings: Settings = source.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<()> {
        if self.site.locale.is_empty() {
            return Err(CoreError::config("site.locale cannot be empty"));
        }

        if self.backend.name.is_empty() {
            return Err(CoreError::config("backend.name cannot be empty"));
        }

        if self.backend.branch.is_empty() {
            return Err(CoreError::config("backend.branch cannot be empty"));
        }

        if self
            .site
            .i18n
            .as_ref()
            .is_some_and(|i18n| i18n.locales.is_empty())
        {
            return Err(CoreError::config("site.i18n.locales cannot be empty"));
        }

        if self.site.public_folder.len() > 1 && self.site.public_folder.ends_with('/') {
            tracing::warn!("site.public_folder should not have a trailing slash");
        }

        Ok(())
    }
}

/// `CMSCONF_`-prefixed environment source; `__` separates nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
