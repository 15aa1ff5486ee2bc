pub mod handlers;

use clap::Parser;
use partck_core::error::Result;

use crate::presentation::cli::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Decode {
            input,
            body,
            hex,
            json,
        } => handlers::handle_decode(input, body, hex, json),
        Commands::Version { input, hex } => handlers::handle_version(input, hex),
    }
}
