/// Top-level run errors.
use thiserror::Error;

use crate::manifest::ManifestError;
use crate::sfdx::SfdxError;

/// Everything that can abort the cleanup pipeline.
///
/// Usage errors never appear here: clap reports those itself and exits
/// with code 2 before any of this code runs.
#[derive(Debug, Error)]
pub enum RunError {
    /// An sfdx invocation failed or produced an undecodable response.
    #[error("{0}")]
    Sfdx(#[from] SfdxError),

    /// A descriptor file or the output directory could not be written.
    #[error("{0}")]
    Manifest(#[from] ManifestError),
}

/// Exit code mapping for `RunError` variants.
impl RunError {
    /// Return the CLI exit code for this error.
    ///
    /// A failed sfdx subprocess propagates its own exit status; every other
    /// failure exits 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Sfdx(SfdxError::CommandFailed { status, .. }) => *status,
            Self::Sfdx(_) | Self::Manifest(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failure_propagates_status() {
        let err = RunError::from(SfdxError::CommandFailed {
            program: "sfdx".to_owned(),
            subcommand: "force:mdapi:deploy".to_owned(),
            status: 69,
            stderr: "ERROR: something broke".to_owned(),
        });
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_malformed_response_exits_one() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RunError::from(SfdxError::MalformedResponse {
            subcommand: "force:data:soql:query".to_owned(),
            source,
        });
        assert_eq!(err.exit_code(), 1);
    }
}
