//! Baseimage-defs CLI - Docker baseimage build matrix helper
//!
//! Entry point for the baseimage-defs command-line application.

use clap::Parser;

use baseimage_defs::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    // Run the command and handle errors. The one-line user-facing errors
    // go to standard output; that is the contract of the build scripts
    // consuming this tool.
    if let Err(e) = cli.run() {
        println!("{e}");
        std::process::exit(1);
    }
}
