/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// flowprune — delete obsolete Salesforce flow versions via sfdx.
#[derive(Debug, Parser)]
#[command(
    name = "flowprune",
    about = "Delete obsolete Salesforce flow versions from the CLI",
    version
)]
pub struct Cli {
    /// Run the sfdx deploy as a validation-only deployment (nothing is
    /// deleted in the org).
    #[arg(short = 'c', long = "checkonly")]
    pub check_only: bool,

    /// Subdirectory to use for the generated package and destructive-change
    /// descriptors.
    #[arg(
        short = 'o',
        long = "outputdirectory",
        value_name = "DIR",
        default_value = "flow-destructive-changes/"
    )]
    pub output_directory: String,

    /// sfdx alias of the username for the desired org.
    /// Your default username is used if not specified.
    #[arg(short = 't', long = "targetusername", value_name = "ALIAS")]
    pub target_username: Option<String>,

    /// Output format for the report. Auto-detects: table when TTY, json when piped.
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated field names to include in the report table (projection).
    #[arg(long, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
}

/// Immutable run configuration, resolved once from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Submit the deploy as validation-only.
    pub check_only: bool,
    /// Directory for the generated descriptors. Always ends with a path
    /// separator.
    pub output_directory: String,
    /// sfdx org alias, or `None` for the caller's default org.
    pub target_username: Option<String>,
}

impl Cli {
    /// Resolve the parsed arguments into a `Config`.
    #[must_use]
    pub fn into_config(self) -> Config {
        Config {
            check_only: self.check_only,
            output_directory: ensure_trailing_separator(self.output_directory),
            target_username: self.target_username,
        }
    }
}

/// Append a `/` to `dir` unless it already ends with a path separator.
fn ensure_trailing_separator(mut dir: String) -> String {
    if !dir.ends_with(std::path::is_separator) {
        dir.push('/');
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_separator_appended() {
        assert_eq!(ensure_trailing_separator("out".to_owned()), "out/");
        assert_eq!(ensure_trailing_separator("a/b".to_owned()), "a/b/");
    }

    #[test]
    fn test_trailing_separator_kept() {
        assert_eq!(ensure_trailing_separator("out/".to_owned()), "out/");
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["flowprune"]).unwrap();
        let config = cli.into_config();
        assert!(!config.check_only);
        assert_eq!(config.output_directory, "flow-destructive-changes/");
        assert_eq!(config.target_username, None);
    }

    #[test]
    fn test_short_flags() {
        let cli =
            Cli::try_parse_from(["flowprune", "-c", "-o", "cleanup", "-t", "my-sandbox"]).unwrap();
        let config = cli.into_config();
        assert!(config.check_only);
        assert_eq!(config.output_directory, "cleanup/");
        assert_eq!(config.target_username.as_deref(), Some("my-sandbox"));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "flowprune",
            "--checkonly",
            "--outputdirectory",
            "cleanup/",
            "--targetusername",
            "prod",
        ])
        .unwrap();
        let config = cli.into_config();
        assert!(config.check_only);
        assert_eq!(config.output_directory, "cleanup/");
        assert_eq!(config.target_username.as_deref(), Some("prod"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Cli::try_parse_from(["flowprune", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }
}
