use clap::Parser;
use stickersync_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging before anything touches the network or disk.
    let verbosity = cli.verbosity();
    if logging::init_logging(verbosity).is_err() {
        logging::init_logging_stderr(verbosity);
    }

    if let Err(err) = cli.run().await {
        eprintln!("stickersync error: {:#}", err);
        std::process::exit(1);
    }
}
