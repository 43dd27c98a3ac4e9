//! buildconf: Static build configuration record for the client build pipeline.
//!
//! Declares the build `output` mode and the allowlist of remote image
//! hostnames, together with the validation and serialization contract for the
//! record. The consuming pipeline loads one record per build invocation from
//! `build.toml` at the project root and receives it by value; enforcement of
//! the image allowlist at request time lives in the image optimization
//! service, not here.

pub mod config;
pub mod error;
pub mod hostname;
pub mod output;
pub mod parse;
pub mod validate;

pub use config::{BuildConfig, ImagesConfig};
pub use error::ConfigError;
pub use output::OutputMode;
pub use parse::{CONFIG_FILE, load_config, parse_config_content, to_json_string, to_toml_string};
pub use validate::{Severity, ValidationReport, Violation};
