/// Destructive change deployment via `force:mdapi:deploy`.
use tracing::{debug, info};

use super::command::run_sfdx;
use super::errors::SfdxError;
use crate::cli::Config;

const DEPLOY_SUBCOMMAND: &str = "force:mdapi:deploy";

/// Compose the sfdx argument vector for the destructive deploy.
#[must_use]
pub fn deploy_args(
    output_directory: &str,
    target_username: Option<&str>,
    check_only: bool,
) -> Vec<String> {
    let mut args = vec![
        DEPLOY_SUBCOMMAND.to_owned(),
        "--deploydir".to_owned(),
        output_directory.to_owned(),
    ];
    if let Some(alias) = target_username {
        args.push("--targetusername".to_owned());
        args.push(alias.to_owned());
    }
    if check_only {
        args.push("--checkonly".to_owned());
    }
    args
}

/// Submit the destructive change deployment for `config.output_directory`.
///
/// With `check_only` the org validates the manifest without deleting
/// anything.
///
/// # Errors
///
/// `SfdxError::Launch` / `SfdxError::CommandFailed` on subprocess failure.
/// There is no rollback; the deploy tool is the transactional boundary.
pub fn deploy_destructive_changes(config: &Config) -> Result<(), SfdxError> {
    if config.check_only {
        info!("validating destructive changes (checkonly)");
    } else {
        info!("deploying destructive changes");
    }
    let capture = run_sfdx(&deploy_args(
        &config.output_directory,
        config.target_username.as_deref(),
        config.check_only,
    ))?;
    debug!(stdout = %capture.stdout.trim(), "deploy output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_args_minimal() {
        let args = deploy_args("flow-destructive-changes/", None, false);
        assert_eq!(
            args,
            vec![
                "force:mdapi:deploy",
                "--deploydir",
                "flow-destructive-changes/"
            ]
        );
    }

    #[test]
    fn test_deploy_args_with_target() {
        let args = deploy_args("out/", Some("prod"), false);
        let pos = args.iter().position(|a| a == "--targetusername").unwrap();
        assert_eq!(args[pos + 1], "prod");
        assert!(!args.iter().any(|a| a == "--checkonly"));
    }

    #[test]
    fn test_deploy_args_check_only() {
        let args = deploy_args("out/", None, true);
        assert!(args.iter().any(|a| a == "--checkonly"));
    }

    #[test]
    fn test_deploy_args_check_only_absent_when_false() {
        let args = deploy_args("out/", Some("prod"), false);
        assert!(!args.iter().any(|a| a == "--checkonly"));
    }
}
