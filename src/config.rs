//! Build configuration domain model.

use serde::{Deserialize, Serialize};

use crate::hostname;
use crate::output::OutputMode;
use crate::validate::{ValidationReport, Violation};

/// Static build configuration consumed by the build pipeline at startup.
///
/// Constructed once per build invocation and never mutated afterwards. The
/// pipeline entry point receives it by value; there is no ambient singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Packaging strategy selector. Absent means pipeline default packaging.
    ///
    /// Kept as authored text so an unknown mode is a reported violation rather
    /// than a deserialization failure that masks the rest of the pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Remote image optimization settings.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Settings for the pipeline's remote image optimization feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    /// Hostnames permitted as remote image sources, in authored order.
    #[serde(default)]
    pub domains: Vec<String>,
}

impl BuildConfig {
    /// Run every check and report all violations in one pass.
    ///
    /// Checks run in order (output mode, domain syntax, domain uniqueness) and
    /// never short-circuit, so one pass surfaces every authoring mistake.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if let Some(output) = self.output.as_deref() {
            if OutputMode::parse(output).is_none() {
                report.push(Violation::UnknownOutputMode(output.to_string()));
            }
        }

        for domain in &self.images.domains {
            if !hostname::is_valid_hostname(domain) {
                report.push(Violation::MalformedDomain(domain.clone()));
            }
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.images.domains.len());
        for domain in &self.images.domains {
            let key = hostname::normalized(domain);
            if seen.contains(&key) {
                report.push(Violation::DuplicateDomain(domain.clone()));
            } else {
                seen.push(key);
            }
        }

        report
    }

    /// Resolve the packaging strategy; `None` means pipeline default packaging.
    pub fn effective_output(&self) -> Option<OutputMode> {
        self.output.as_deref().and_then(OutputMode::parse)
    }

    /// Whether `host` is allowlisted as a remote image source.
    ///
    /// Matching is case-insensitive and exact; no wildcard expansion.
    pub fn allows_image_domain(&self, host: &str) -> bool {
        let key = hostname::normalized(host);
        self.images.domains.iter().any(|domain| hostname::normalized(domain) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_domains(domains: &[&str]) -> BuildConfig {
        BuildConfig {
            output: None,
            images: ImagesConfig { domains: domains.iter().map(|d| d.to_string()).collect() },
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = BuildConfig::default();
        let report = config.validate();
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
        assert_eq!(config.effective_output(), None);
    }

    #[test]
    fn standalone_with_one_domain_is_valid() {
        let config = BuildConfig {
            output: Some("standalone".to_string()),
            images: ImagesConfig { domains: vec!["avatars.githubusercontent.com".to_string()] },
        };
        let report = config.validate();
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
        assert_eq!(config.effective_output(), Some(OutputMode::Standalone));
    }

    #[test]
    fn bogus_output_reports_exactly_one_violation() {
        let config = BuildConfig { output: Some("bogus".to_string()), ..Default::default() };
        let report = config.validate();
        assert_eq!(report.violations(), &[Violation::UnknownOutputMode("bogus".to_string())]);
        assert_eq!(config.effective_output(), None);
    }

    #[test]
    fn case_insensitive_duplicate_reports_later_entry() {
        let config = config_with_domains(&[
            "avatars.githubusercontent.com",
            "AVATARS.GITHUBUSERCONTENT.COM",
        ]);
        let report = config.validate();
        assert_eq!(
            report.violations(),
            &[Violation::DuplicateDomain("AVATARS.GITHUBUSERCONTENT.COM".to_string())]
        );
    }

    #[test]
    fn scheme_and_path_entry_is_malformed() {
        let config = config_with_domains(&["https://bad.example.com/path"]);
        let report = config.validate();
        assert_eq!(
            report.violations(),
            &[Violation::MalformedDomain("https://bad.example.com/path".to_string())]
        );
    }

    #[test]
    fn all_checks_run_in_one_pass() {
        let config = BuildConfig {
            output: Some("bogus".to_string()),
            images: ImagesConfig {
                domains: vec![
                    "https://bad.example.com/path".to_string(),
                    "cdn.example.com".to_string(),
                    "CDN.example.com".to_string(),
                ],
            },
        };
        let report = config.validate();
        assert_eq!(report.error_count(), 3);
        assert!(matches!(report.violations()[0], Violation::UnknownOutputMode(_)));
        assert!(matches!(report.violations()[1], Violation::MalformedDomain(_)));
        assert!(matches!(report.violations()[2], Violation::DuplicateDomain(_)));
    }

    #[test]
    fn empty_domains_with_valid_output_is_valid() {
        let config = BuildConfig { output: Some("export".to_string()), ..Default::default() };
        assert!(config.validate().is_valid());
        assert_eq!(config.effective_output(), Some(OutputMode::Export));
    }

    #[test]
    fn allowlist_matching_is_case_insensitive_and_exact() {
        let config = config_with_domains(&["avatars.githubusercontent.com"]);
        assert!(config.allows_image_domain("avatars.githubusercontent.com"));
        assert!(config.allows_image_domain("AVATARS.GITHUBUSERCONTENT.COM"));
        assert!(!config.allows_image_domain("githubusercontent.com"));
        assert!(!config.allows_image_domain("evil.avatars.githubusercontent.com"));
    }
}
