/// The linear cleanup pipeline: query, build descriptors, deploy.
use std::path::Path;

use tracing::{debug, info};

use crate::cli::{Config, OutputCtx, write_report};
use crate::errors::RunError;
use crate::manifest;
use crate::sfdx;
use crate::types::{FlowVersionOutput, RunReport};

/// Run the whole cleanup: query the org, write both descriptors, deploy.
///
/// Terminal on the first error from any stage; descriptor files already
/// written stay in place. When the query returns no records the deploy step
/// is skipped and the run still succeeds.
///
/// # Errors
///
/// `RunError` from the sfdx or manifest layer.
pub fn run(config: &Config, ctx: &OutputCtx) -> Result<(), RunError> {
    info!("starting flow cleanup");
    debug!(?config, "resolved configuration");

    let versions = sfdx::fetch_obsolete_flow_versions(config.target_username.as_deref())?;

    let output_dir = Path::new(&config.output_directory);
    manifest::ensure_output_dir(output_dir)?;
    manifest::write_package_manifest(output_dir)?;
    manifest::write_destructive_changes(output_dir, &versions)?;

    let deployed = if versions.is_empty() {
        info!("no obsolete flow versions; skipping deploy");
        false
    } else {
        sfdx::deploy_destructive_changes(config)?;
        true
    };

    write_report(
        &RunReport {
            ok: true,
            check_only: config.check_only,
            output_directory: config.output_directory.clone(),
            obsolete_versions: versions.iter().map(FlowVersionOutput::from).collect(),
            deployed,
        },
        ctx,
    );

    info!("finished flow cleanup");
    Ok(())
}
