use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Courier error envelope tool
#[derive(Debug, Parser)]
#[command(name = "courier", about = "Inspect, encode and decode structured RPC error envelopes")]
pub struct Args {
    /// Path to configuration file; `courier.toml` is used when present
    #[arg(short, long, env = "COURIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the log filter directive
    #[arg(long, env = "COURIER_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every error code with its HTTP status and default name
    Codes,

    /// Print the HTTP response for a structured error
    Encode {
        /// Error code wire token, e.g. `NOT_FOUND`
        #[arg(long)]
        code: String,

        /// Error name; a bare name is qualified with the configured namespace
        #[arg(long)]
        name: Option<String>,

        /// Use this instance id instead of generating one
        #[arg(long)]
        instance_id: Option<Uuid>,

        /// Parameter as `key=value`; values that parse as JSON are kept as JSON
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Decode an error envelope body read from a file or stdin
    Decode {
        /// HTTP status the body was received with
        #[arg(long, default_value_t = 500)]
        status: u16,

        /// File containing the body; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },
}
