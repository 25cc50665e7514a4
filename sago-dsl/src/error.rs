//! Pipeline error taxonomy.

use thiserror::Error;

/// Errors reported on the console during a run.
///
/// `UnresolvedConstant` and `GeneratorFault` are recoverable: they are
/// accumulated and the run continues past them. `UnknownGenerator` and
/// `ConflictingFilters` abort the run before any generation happens.
///
/// The `Display` forms are part of the console contract and are printed
/// verbatim behind an `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DslError {
    #[error("Cannot find constant '{0}'")]
    UnresolvedConstant(String),

    #[error("Cannot find generator '{0}'")]
    UnknownGenerator(String),

    #[error("--generators and --exclude-generators cannot be combined")]
    ConflictingFilters,

    #[error("Generator '{generator}' failed for constant '{constant}': {reason}")]
    GeneratorFault {
        generator: String,
        constant: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_console_contract() {
        assert_eq!(
            DslError::UnresolvedConstant("NonExistent::Foo".into()).to_string(),
            "Cannot find constant 'NonExistent::Foo'"
        );
        assert_eq!(
            DslError::UnknownGenerator("NonexistentGenerator".into()).to_string(),
            "Cannot find generator 'NonexistentGenerator'"
        );
    }
}
