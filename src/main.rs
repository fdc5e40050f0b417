//! Slackdown - Convert markdown into Slack Block Kit blocks.
//!
//! This binary wraps the slackdown library for shell use: markdown in,
//! the JSON `blocks` array out.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{Read, Write};

use slackdown::{markdown_to_blocks, ParseOptions, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Slackdown v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let options = cli.parse_options()?;
    debug!("Conversion options: {:?}", options);

    if cli.should_read_stdin() {
        let mut markdown = String::new();
        std::io::stdin().read_to_string(&mut markdown)?;
        convert(&markdown, &options, cli.compact)?;
    } else {
        for path in &cli.files {
            debug!("Converting {}", path.display());
            let markdown = std::fs::read_to_string(path)?;
            convert(&markdown, &options, cli.compact)?;
        }
    }
    Ok(())
}

/// Convert one document and print its blocks as JSON.
fn convert(markdown: &str, options: &ParseOptions, compact: bool) -> Result<()> {
    let blocks = markdown_to_blocks(markdown, options)?;
    debug!("Produced {} blocks", blocks.len());

    let json = if compact {
        serde_json::to_string(&blocks)?
    } else {
        serde_json::to_string_pretty(&blocks)?
    };
    println!("{json}");
    Ok(())
}
