// SPDX-License-Identifier: Apache-2.0 OR MIT
use anyhow::{Context, Result};
use clap::Parser;
use clerk::logging::DEFAULT_SEPARATOR;
use clerk::{Flags, Logger, LoggingConfig, Registry, Severity, Sink};
use std::path::PathBuf;

/// Write one log line through a named logger
#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON5 file describing the loggers to register
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the level of every registered logger
    #[arg(long)]
    level_all: Option<String>,

    /// Title of the logger to write through
    title: String,

    /// Severity of the line (debug, info, warning, error, fatal)
    severity: Severity,

    /// Message text; words are joined with single spaces
    message: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args, Registry::global()) {
        let reporter = Logger::new(
            Sink::stderr(),
            "clerk",
            Flags::empty(),
            Severity::Error,
            DEFAULT_SEPARATOR,
        );
        reporter.fatal(&format!("{:#}", err));
    }
}

fn run(args: &Args, registry: &Registry) -> Result<()> {
    if let Some(path) = &args.config {
        let config = LoggingConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        registry
            .register_all(&config)
            .context("registering configured loggers")?;
    }

    let logger = match registry.lookup(&args.title) {
        Ok(logger) => logger,
        Err(_) => registry.register(Logger::new_default(args.title.as_str(), None))?,
    };

    if let Some(level) = &args.level_all {
        registry.set_level_for_all_str(level)?;
    }

    let message = args.message.join(" ");
    match args.severity {
        Severity::Fatal => logger.fatal(&message),
        severity => logger.log(severity, &message),
    }

    Ok(())
}
