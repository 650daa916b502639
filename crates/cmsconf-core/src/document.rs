//! Root admin configuration document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{collection::Collection, error::Result, settings::Settings};

/// Git backend the CMS commits through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Backend kind, e.g. `git-gateway` or `github`.
    #[serde(default = "default_backend_name")]
    pub name: String,

    /// Branch edits are committed to.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// `owner/name` repository, required by some backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

fn default_backend_name() -> String {
    "git-gateway".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            name: default_backend_name(),
            branch: default_branch(),
            repo: None,
        }
    }
}

/// How translated content is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum I18nStructure {
    MultipleFolders,
    MultipleFiles,
    SingleFile,
}

/// Global translation settings, required for field-level `i18n` to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nSettings {
    pub structure: I18nStructure,
    pub locales: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

/// The document served to the CMS admin panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CmsConfig {
    pub locale: String,
    pub backend: Backend,
    pub media_folder: String,
    pub public_folder: String,
    /// Whether the admin talks to a local proxy server instead of the backend.
    pub local_backend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nSettings>,
    pub collections: Vec<Collection>,
}

impl CmsConfig {
    /// Assemble the document from settings and the site's collections.
    ///
    /// `local_backend` is enabled only in development mode.
    pub fn from_settings(settings: &Settings, collections: Vec<Collection>) -> Self {
        Self {
            locale: settings.site.locale.clone(),
            backend: settings.backend.clone(),
            media_folder: settings.site.media_folder.clone(),
            public_folder: settings.site.public_folder.clone(),
            local_backend: settings.mode.is_development(),
            i18n: settings.site.i18n.clone(),
            collections,
        }
    }

    /// Serialize the document as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the YAML document to `path`.
    pub fn write_yaml(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;
        tracing::debug!(?path, "Wrote admin configuration");
        Ok(())
    }
}
