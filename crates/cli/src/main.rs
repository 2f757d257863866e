use std::collections::HashMap;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use recall_cli::app::Outcome;
use recall_cli::cli_args::Args;
use recall_cli::tui;
use recall_core::config;
use recall_core::error::Result;

fn execute() -> Result<Outcome> {
    let args = Args::parse();
    let env: HashMap<String, String> = std::env::vars().collect();

    let options = config::resolve_app_options(
        args.memories_file.as_ref(),
        args.command_print_length,
        args.edit_placeholders,
        &env,
    )?;
    debug!("Resolved options: {options:?}");

    tui::run(options)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(Outcome::Output(command)) => {
            println!("{command}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoOutput) => ExitCode::SUCCESS,
        Ok(Outcome::Failure(reason)) => {
            eprintln!("{reason}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
