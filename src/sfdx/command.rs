/// Subprocess invocation with explicit argument vectors.
use std::process::Command;

use tracing::debug;

use super::errors::SfdxError;

/// Path to the sfdx executable: a fixed absolute path on Linux, PATH
/// resolution everywhere else.
pub const SFDX_EXECUTABLE: &str = if cfg!(target_os = "linux") {
    "/usr/local/bin/sfdx"
} else {
    "sfdx"
};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCapture {
    /// Exit status (1 when the process was killed by a signal).
    pub status: i32,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

/// Run `program` with an explicit argument vector and capture its output.
///
/// Arguments go straight to the OS, never through a shell, so values like
/// org aliases need no quoting.
///
/// # Errors
///
/// Returns `SfdxError::Launch` if the process cannot be spawned.
pub fn run_captured(program: &str, args: &[String]) -> Result<CommandCapture, SfdxError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| SfdxError::Launch {
            program: program.to_owned(),
            source,
        })?;
    Ok(CommandCapture {
        status: output.status.code().unwrap_or(1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run `program` with `args`, treating a non-zero exit as an error.
///
/// # Errors
///
/// - `SfdxError::Launch` if the process cannot be spawned.
/// - `SfdxError::CommandFailed` on non-zero exit; stderr is captured into
///   the error.
pub fn run_checked(program: &str, args: &[String]) -> Result<CommandCapture, SfdxError> {
    let capture = run_captured(program, args)?;
    if capture.status != 0 {
        return Err(SfdxError::CommandFailed {
            program: program.to_owned(),
            subcommand: args.first().cloned().unwrap_or_default(),
            status: capture.status,
            stderr: capture.stderr.trim().to_owned(),
        });
    }
    Ok(capture)
}

/// Run the sfdx executable with `args`.
///
/// # Errors
///
/// Same as [`run_checked`].
pub fn run_sfdx(args: &[String]) -> Result<CommandCapture, SfdxError> {
    debug!(executable = SFDX_EXECUTABLE, ?args, "invoking sfdx");
    run_checked(SFDX_EXECUTABLE, args)
}
