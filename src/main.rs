#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! flowprune — delete obsolete Salesforce flow versions via sfdx.

mod cli;
mod errors;
mod manifest;
mod pipeline;
mod sfdx;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.fields.as_deref(), cli.no_header);
    let format = cli.output;
    let json_flag = cli.json;
    let config = cli.into_config();

    match pipeline::run(&config, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_run_error(&err);
            write_error(&error_output, format, json_flag);
            std::process::exit(err.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
