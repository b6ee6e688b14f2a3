//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vellum binary.

mod commands;
mod report;
mod run;

pub use commands::{Cli, Commands};
pub use report::{print_report, print_screened, render_error, report_error};
pub use run::run;
