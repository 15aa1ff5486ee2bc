use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "partckdev CLI: inspect part checksums headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a part checksums header and print its fields
    Decode {
        /// Header file, or "-" to read stdin
        input: PathBuf,

        /// Input is the header body only, with no leading version line
        #[arg(long)]
        body: bool,

        /// Input is hex text rather than raw bytes
        #[arg(long)]
        hex: bool,

        /// Print the decoded header as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a header's format version and body length without decoding it
    Version {
        /// Header file, or "-" to read stdin
        input: PathBuf,

        /// Input is hex text rather than raw bytes
        #[arg(long)]
        hex: bool,
    },
}
