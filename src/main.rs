mod classify;
mod cli;
mod error;
mod init;
mod logging;
mod serve;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            verbose,
        } => serve::execute(config, host, port, verbose),
        Commands::Classify { input, compact } => classify::execute(input, compact),
        Commands::Init { config, force } => init::execute(config, force),
    };

    if let Err(err) = result {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
