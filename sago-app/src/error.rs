use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for sago-app operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(sago::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unsupported snapshot version {found} (expected {expected})")]
    #[diagnostic(
        code(sago::snapshot_version),
        help("regenerate the snapshot with a reflection dumper matching this sago release")
    )]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("{message}")]
    #[diagnostic(code(sago::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn parse(
        filename: &str,
        content: &str,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
            message: message.into(),
        })
    }

    pub(crate) fn validation(
        filename: &str,
        content: &str,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, content.to_string()),
            span: None,
            message: message.into(),
        })
    }
}
