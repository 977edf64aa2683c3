/// Errors from the sfdx adapter layer.
use std::io;

use thiserror::Error;

/// Typed errors from sfdx invocations.
#[derive(Debug, Error)]
pub enum SfdxError {
    /// The sfdx executable could not be started at all.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// Executable path that was spawned.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// sfdx ran but exited non-zero.
    #[error("`{program} {subcommand}` exited with status {status}: {stderr}")]
    CommandFailed {
        /// Executable path that was spawned.
        program: String,
        /// First argument (e.g., "force:mdapi:deploy").
        subcommand: String,
        /// The subprocess's exit status.
        status: i32,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// sfdx exited zero but its stdout was not the expected JSON shape.
    #[error("unparseable response from `{subcommand}`: {source}")]
    MalformedResponse {
        /// Subcommand whose output failed to decode.
        subcommand: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
