use anyhow::Result;
use clap::Parser;
use diff_checker_config::AppConfig;
use diff_engine::DiffEngine;
use std::process::ExitCode;

mod cli;
mod input;
mod logger;
mod output;

use cli::{Cli, Settings};

fn main() -> ExitCode {
    logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        // Same convention as diff(1): 1 means the inputs differ
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Compare the two inputs and print the result. Returns whether they differ.
fn run(cli: &Cli) -> Result<bool> {
    let config = AppConfig::load();
    let settings = Settings::resolve(cli, &config);

    let (left, right) = input::read_inputs(&cli.left, &cli.right)?;
    if left.is_empty() && right.is_empty() {
        log::warn!("Both inputs are empty");
        eprintln!("Nothing to compare: enter text in at least one input.");
        return Ok(false);
    }

    let engine = DiffEngine::new(settings.diff_options.clone());
    let result = engine.compute_diff(&left, &right)?;
    log::info!(
        "Compared {} and {} lines: {} differences",
        result.left().len(),
        result.right().len(),
        result.summary().differences()
    );

    let text = output::render(&result, &settings)?;
    output::write(&text, settings.output.as_deref())?;
    Ok(!result.is_identical())
}
