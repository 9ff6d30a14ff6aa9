use std::process::ExitCode;

use anyhow::{Context, Result};
use human_panic::setup_panic;

use project_template::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    match run_application() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_application() -> Result<()> {
    let options = project_template::get_options();
    run(&options).context("Failed to run the application")?;
    Ok(())
}
