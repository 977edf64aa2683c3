/// Shared types: the flow-version record flowing through the pipeline and the
/// serializable shapes written to stdout/stderr.
///
/// The report types are what gets printed — either as JSON or rendered as a
/// table. They are decoupled from the wire types in `sfdx::query`.
use serde::{Deserialize, Serialize};

/// One obsolete flow version returned by the Tooling API query.
///
/// Records arrive ordered by developer name, then version number ascending,
/// and keep that order all the way into `destructiveChanges.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowVersion {
    /// Tooling API record id (e.g., "301xx0000000001AAA").
    pub id: String,
    /// Developer name of the flow definition (e.g., "Account_Update").
    pub developer_name: String,
    /// Version number within the definition, 1-based.
    pub version_number: u32,
    /// Version status as reported by the org. Always "Obsolete" for records
    /// matched by the fixed query.
    pub status: String,
}

impl FlowVersion {
    /// The metadata member name the deploy manifest uses for this version:
    /// `<developer_name>-<version_number>`.
    #[must_use]
    pub fn member_name(&self) -> String {
        format!("{}-{}", self.developer_name, self.version_number)
    }
}

/// A flow version in report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowVersionOutput {
    /// Developer name of the flow definition.
    pub developer_name: String,
    /// Version number.
    pub version: u32,
    /// Version status in the org.
    pub status: String,
    /// Member name as it appears in `destructiveChanges.xml`.
    pub member: String,
    /// Tooling API record id.
    pub id: String,
}

impl From<&FlowVersion> for FlowVersionOutput {
    fn from(flow: &FlowVersion) -> Self {
        Self {
            developer_name: flow.developer_name.clone(),
            version: flow.version_number,
            status: flow.status.clone(),
            member: flow.member_name(),
            id: flow.id.clone(),
        }
    }
}

/// End-of-run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Always `true` (errors go through `ErrorOutput` instead).
    pub ok: bool,
    /// Whether the deploy was submitted as validation-only.
    pub check_only: bool,
    /// Directory the descriptors were written into.
    pub output_directory: String,
    /// Obsolete flow versions found by the query, in manifest order.
    pub obsolete_versions: Vec<FlowVersionOutput>,
    /// Whether a deploy was actually submitted. `false` when the query
    /// returned no records and the deploy step was skipped.
    pub deployed: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `RunError`.
    #[must_use]
    pub fn from_run_error(err: &crate::errors::RunError) -> Self {
        use crate::errors::RunError;
        use crate::sfdx::SfdxError;

        let code = match err {
            RunError::Sfdx(SfdxError::Launch { .. }) => "sfdx_launch_failed",
            RunError::Sfdx(SfdxError::CommandFailed { .. }) => "sfdx_command_failed",
            RunError::Sfdx(SfdxError::MalformedResponse { .. }) => "malformed_response",
            RunError::Manifest(_) => "manifest_io",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
