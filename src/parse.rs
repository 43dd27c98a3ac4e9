//! Pure parse/serialize/load for the build configuration (`build.toml`).

use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::error::ConfigError;
use crate::validate::{ValidationReport, Violation};

/// Conventional file name for the build configuration at the project root.
pub const CONFIG_FILE: &str = "build.toml";

const TOP_LEVEL_KEYS: [&str; 2] = ["output", "images"];
const IMAGES_KEYS: [&str; 1] = ["domains"];

/// Parse the build configuration from TOML content.
///
/// Returns the typed record together with the full validation report.
/// Unrecognized keys are reported as warnings, never silently ignored.
pub fn parse_config_content(
    content: &str,
) -> Result<(BuildConfig, ValidationReport), ConfigError> {
    let mut value: toml::Value = toml::from_str(content)?;
    let mut report = split_unrecognized_keys(&mut value);

    let config: BuildConfig = value.try_into()?;
    report.merge(config.validate());
    Ok((config, report))
}

/// Load the build configuration from `<root>/build.toml`.
///
/// Warnings do not block loading; error-severity violations do.
pub fn load_config(root: &Path) -> Result<BuildConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Err(ConfigError::ConfigMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(&path)?;
    let (config, report) = parse_config_content(&content)?;
    if report.has_errors() {
        return Err(ConfigError::Invalid(report));
    }
    Ok(config)
}

/// Serialize the record as line-diff-friendly TOML, preserving domain order.
pub fn to_toml_string(config: &BuildConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

/// Serialize the record as JSON for machine consumption by pipeline tooling.
pub fn to_json_string(config: &BuildConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Move keys outside the recognized schema out of `value`, reporting each as
/// an `UnrecognizedKey` warning. The typed record is built from what remains,
/// so a stray key warns instead of failing the whole parse.
fn split_unrecognized_keys(value: &mut toml::Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(table) = value.as_table_mut() {
        let unknown: Vec<String> = table
            .keys()
            .filter(|key| !TOP_LEVEL_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();
        for key in unknown {
            table.remove(&key);
            report.push(Violation::UnrecognizedKey(key));
        }

        if let Some(images) = table.get_mut("images").and_then(|v| v.as_table_mut()) {
            let unknown: Vec<String> = images
                .keys()
                .filter(|key| !IMAGES_KEYS.contains(&key.as_str()))
                .cloned()
                .collect();
            for key in unknown {
                images.remove(&key);
                report.push(Violation::UnrecognizedKey(format!("images.{key}")));
            }
        }
    }

    report
}
