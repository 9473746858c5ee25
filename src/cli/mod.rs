pub mod categories;
pub mod convert;
pub mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mint-convert",
    version,
    about = "Convert Mint CSV exports into the formats other finance apps import."
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Mint CSV file, or a directory of them.
    Convert {
        /// Input file or directory
        #[arg(short, long)]
        input: String,
        /// Output file or directory
        #[arg(short, long)]
        output: String,
        /// Application profile to export to: Banktivity
        #[arg(short, long)]
        profile: Option<String>,
        /// Comma-separated actions: StripHeaders, ModifyDebitAmounts, RemoveTransType
        #[arg(short, long)]
        actions: Option<String>,
        /// CSV file mapping Mint categories to new categories
        #[arg(short, long)]
        categories: Option<String>,
        /// Omit the header row (also applies to profiles)
        #[arg(long = "strip-headers")]
        strip_headers: bool,
        /// Force conversion when input and output are the same
        #[arg(short, long)]
        force: bool,
        /// Only write anything if every file validates
        #[arg(long)]
        atomic: bool,
    },
    /// Check that a file or directory contains well-formed Mint CSV exports.
    Validate {
        /// Input file or directory
        #[arg(short, long)]
        input: String,
    },
    /// List the distinct categories used in a file or directory.
    Categories {
        /// Input file or directory
        #[arg(short, long)]
        input: String,
    },
}
