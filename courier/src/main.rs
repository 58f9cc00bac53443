#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;
mod config;
mod telemetry;

use args::{Args, Command};
use clap::Parser;
use config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // Initialize logging
    telemetry::init(&config.logging, args.log_filter.as_deref())?;

    tracing::debug!(
        config_path = ?args.config,
        namespace = %config.errors.namespace,
        "starting courier"
    );

    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Codes => commands::codes(&mut stdout),
        Command::Encode {
            code,
            name,
            instance_id,
            params,
        } => commands::encode(
            &config,
            &commands::EncodeRequest {
                code: &code,
                name: name.as_deref(),
                instance_id,
                params: &params,
            },
            &mut stdout,
        ),
        Command::Decode { status, file } => commands::decode(status, file.as_deref(), &mut stdout),
    }
}
