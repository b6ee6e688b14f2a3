//! Vellum CLI binary.
//!
//! Generates outlines, drafts and publish packs and appends them to
//! project documents.

use clap::Parser;
use std::process::ExitCode;
use vellum::cli::{Cli, report_error, run};
use vellum::observability::init_observability;

#[tokio::main]
async fn main() -> ExitCode {
    // Local .env first, so the credential check sees it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_observability(cli.verbose, cli.json_logs) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
