/// sfdx adapter layer: structured invocation of the Salesforce CLI.
pub mod command;
pub mod deploy;
pub mod errors;
pub mod query;

pub use command::{CommandCapture, SFDX_EXECUTABLE, run_sfdx};
pub use deploy::{deploy_args, deploy_destructive_changes};
pub use errors::SfdxError;
pub use query::{fetch_obsolete_flow_versions, query_args};
