#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! langflow-runner — run a hosted Langflow flow from the command line.

mod cli;
mod config;
mod errors;
mod flow;
mod logging;
mod runner;
mod upload;

use clap::Parser;

use cli::{Cli, write_error};

fn main() {
    let cli = Cli::parse();

    let env_files = std::env::current_dir()
        .map(|cwd| config::load_env_files(&cwd))
        .ok();
    logging::init(cli.verbose);
    for status in env_files.iter().flatten() {
        status.log();
    }

    let uploader = upload::default_uploader();
    if let Err(err) = runner::run(&cli, |key| std::env::var(key).ok(), uploader.as_ref()) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
