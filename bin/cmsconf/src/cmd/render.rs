//! Render command - prints or writes the admin configuration

use std::path::Path;

use cmsconf_core::Settings;
use color_eyre::eyre::{Result, WrapErr};

use crate::schema;

/// Run the render command.
///
/// Writes the YAML document to `output`, or to stdout when no path is given.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    tracing::info!(?config_path, ?output, "Rendering admin configuration");

    let settings = Settings::load(Some(config_path)).wrap_err("Failed to load settings")?;
    render(&settings, output)
}

/// Render the document for already-loaded settings.
pub fn render(settings: &Settings, output: Option<&Path>) -> Result<()> {
    let document = schema::document(settings);

    match output {
        Some(path) => {
            document
                .write_yaml(path)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            println!(
                "  ✓ Wrote {} collections to {}",
                document.collections.len(),
                path.display()
            );
        }
        None => {
            let yaml = document
                .to_yaml()
                .wrap_err("Failed to serialize configuration")?;
            print!("{yaml}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("config.yml");

        render(&Settings::default(), Some(output.as_path())).expect("render");

        let yaml = std::fs::read_to_string(&output).expect("read");
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(parsed["locale"].as_str(), Some("pt"));
        assert_eq!(parsed["local_backend"].as_bool(), Some(false));
        assert_eq!(parsed["collections"][0]["name"].as_str(), Some("conteudo"));
    }

    #[test]
    fn test_render_uses_given_settings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("config.yml");

        let mut settings = Settings::default();
        settings.site.locale = "en".to_string();
        render(&settings, Some(output.as_path())).expect("render");

        let yaml = std::fs::read_to_string(&output).expect("read");
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(parsed["locale"].as_str(), Some("en"));
    }
}
