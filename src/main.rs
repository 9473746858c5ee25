mod cli;
mod converter;
mod error;
mod logging;
mod models;
mod reader;
mod remap;
mod settings;
mod transform;
mod validator;
mod writer;

use clap::Parser;

use cli::convert::ConvertArgs;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            profile,
            actions,
            categories,
            strip_headers,
            force,
            atomic,
        } => cli::convert::run(ConvertArgs {
            input,
            output,
            profile,
            actions,
            categories,
            strip_headers,
            force,
            atomic,
        }),
        Commands::Validate { input } => cli::validate::run(&input),
        Commands::Categories { input } => cli::categories::run(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
