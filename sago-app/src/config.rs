//! `sago.toml` configuration.
//!
//! Every key is optional; CLI flags override whatever the file provides.
//!
//! ```toml
//! [app]
//! snapshot = "reflection.json"
//!
//! [rbi]
//! outdir = "sorbet/rbi/dsl"
//! file_header = true
//! error_exit_code = 1
//! ```

use std::path::{Path, PathBuf};

use miette::SourceSpan;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the reflection snapshot.
    pub snapshot: PathBuf,
    /// Output directory for generated RBI files.
    pub outdir: PathBuf,
    /// Whether generated files carry the autogenerated header block.
    pub file_header: bool,
    /// Process exit code when a run completes with errors.
    pub error_exit_code: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("reflection.json"),
            outdir: PathBuf::from("sorbet/rbi/dsl"),
            file_header: true,
            error_exit_code: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    app: RawApp,
    #[serde(default)]
    rbi: RawRbi,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawApp {
    snapshot: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRbi {
    outdir: Option<PathBuf>,
    file_header: Option<bool>,
    error_exit_code: Option<i32>,
}

impl Config {
    /// Open and parse a sago.toml file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::from_str(&content, &path.display().to_string())
    }

    /// Parse configuration content, applying defaults for absent keys.
    pub fn from_str(content: &str, filename: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            let message = e.message().to_string();
            Error::parse(filename, content, span, message)
        })?;

        if raw.rbi.error_exit_code == Some(0) {
            return Err(Error::validation(
                filename,
                content,
                "rbi.error_exit_code must be nonzero",
            ));
        }

        let defaults = Config::default();
        Ok(Config {
            snapshot: raw.app.snapshot.unwrap_or(defaults.snapshot),
            outdir: raw.rbi.outdir.unwrap_or(defaults.outdir),
            file_header: raw.rbi.file_header.unwrap_or(defaults.file_header),
            error_exit_code: raw.rbi.error_exit_code.unwrap_or(defaults.error_exit_code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("", "sago.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_str(
            r#"
            [rbi]
            outdir = "rbi/generated"
            file_header = false
            "#,
            "sago.toml",
        )
        .unwrap();

        assert_eq!(config.outdir, PathBuf::from("rbi/generated"));
        assert!(!config.file_header);
        assert_eq!(config.snapshot, PathBuf::from("reflection.json"));
        assert_eq!(config.error_exit_code, 1);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_str("[rbi]\noutput = \"x\"\n", "sago.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_zero_error_exit_code_is_rejected() {
        let err =
            Config::from_str("[rbi]\nerror_exit_code = 0\n", "sago.toml").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
